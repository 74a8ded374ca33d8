// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use parking_lot::Mutex;

use crate::{
    config::PeerConnectionConfig, local_video_track::LocalVideoTrack,
    native::peer_connection::PeerConnectionInterface, video_track::RtcVideoTrack, InteropHandle,
    RtcError, RtcErrorType,
};

/// Collection a [`LocalVideoTrack`] belongs to.
///
/// On success, `remove_local_video_track` must have called
/// [`LocalVideoTrack::remove_from_peer_connection`], which clears the track's
/// reference back to its owner. A track being closed while still attached
/// relies on this and panics otherwise.
pub trait LocalVideoTrackOwner: Send + Sync {
    fn remove_local_video_track(&self, track: &LocalVideoTrack) -> Result<(), RtcError>;
}

struct PeerConnectionInner {
    peer: Arc<dyn PeerConnectionInterface>,
    config: PeerConnectionConfig,
    local_video_tracks: Mutex<Vec<Arc<LocalVideoTrack>>>,
    closed: AtomicBool,
}

/// Peer connection owning the local video tracks published on it.
#[derive(Clone)]
pub struct PeerConnection {
    inner: Arc<PeerConnectionInner>,
}

impl PeerConnection {
    pub fn new(peer: Arc<dyn PeerConnectionInterface>, config: PeerConnectionConfig) -> Self {
        Self {
            inner: Arc::new(PeerConnectionInner {
                peer,
                config,
                local_video_tracks: Default::default(),
                closed: AtomicBool::new(false),
            }),
        }
    }

    pub fn config(&self) -> &PeerConnectionConfig {
        &self.inner.config
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Adds `track` to the engine peer connection and wraps the resulting
    /// sender into a [`LocalVideoTrack`] owned by this peer connection.
    pub fn add_local_video_track(
        &self,
        track: RtcVideoTrack,
        interop_handle: InteropHandle,
    ) -> Result<Arc<LocalVideoTrack>, RtcError> {
        if self.is_closed() {
            return Err(RtcError::new(
                RtcErrorType::InvalidState,
                "the peer connection is closed",
            ));
        }

        let config = &self.inner.config;
        let sender =
            self.inner.peer.add_track(track.clone(), std::slice::from_ref(&config.stream_id))?;

        let owner: Arc<dyn LocalVideoTrackOwner> = self.inner.clone();
        let local_track = Arc::new(LocalVideoTrack::new(
            Arc::downgrade(&owner),
            track,
            sender,
            interop_handle,
            config.sink_wants(),
        ));

        self.inner.local_video_tracks.lock().push(local_track.clone());
        log::info!("added local video track {} to stream {}", local_track.id(), config.stream_id);
        Ok(local_track)
    }

    pub fn remove_local_video_track(&self, track: &LocalVideoTrack) -> Result<(), RtcError> {
        self.inner.remove_local_video_track(track)
    }

    /// Removes every local track fed by the source `source_id`, returning how
    /// many were removed.
    pub fn remove_local_video_tracks_from_source(&self, source_id: &str) -> usize {
        let removed: Vec<Arc<LocalVideoTrack>> = {
            let mut tracks = self.inner.local_video_tracks.lock();
            let (removed, kept): (Vec<_>, Vec<_>) =
                tracks.drain(..).partition(|t| t.rtc_track().source_id() == source_id);
            *tracks = kept;
            for track in &removed {
                track.remove_from_peer_connection(&*self.inner.peer);
            }
            removed
        };

        log::debug!("removed {} local video tracks from source {}", removed.len(), source_id);
        removed.len()
    }

    pub fn local_video_tracks(&self) -> Vec<Arc<LocalVideoTrack>> {
        self.inner.local_video_tracks.lock().clone()
    }

    pub fn local_video_track_count(&self) -> usize {
        self.inner.local_video_tracks.lock().len()
    }

    /// Closes the engine peer connection and removes all local tracks.
    pub fn close(&self) {
        self.inner.close();
    }
}

impl PeerConnectionInner {
    fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        self.peer.close();

        let tracks = std::mem::take(&mut *self.local_video_tracks.lock());
        for track in tracks.iter().rev() {
            track.remove_from_peer_connection(&*self.peer);
        }

        log::info!("peer connection closed, released {} local video tracks", tracks.len());
    }
}

impl LocalVideoTrackOwner for PeerConnectionInner {
    fn remove_local_video_track(&self, track: &LocalVideoTrack) -> Result<(), RtcError> {
        let removed = {
            let mut tracks = self.local_video_tracks.lock();
            let Some(index) = tracks.iter().position(|t| std::ptr::eq(Arc::as_ptr(t), track))
            else {
                return Err(RtcError::new(
                    RtcErrorType::InvalidParameter,
                    "the video track is not associated with the peer connection",
                ));
            };

            track.remove_from_peer_connection(&*self.peer);
            tracks.remove(index)
        };

        // The last reference may be ours, drop it outside of the lock.
        drop(removed);
        Ok(())
    }
}

impl Drop for PeerConnectionInner {
    fn drop(&mut self) {
        self.close();
    }
}

impl Debug for PeerConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeerConnection")
            .field("stream_id", &self.inner.config.stream_id)
            .field("local_video_tracks", &self.local_video_track_count())
            .field("closed", &self.is_closed())
            .finish()
    }
}
