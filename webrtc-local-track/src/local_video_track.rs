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
        Arc, Weak,
    },
};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::{
    native::{
        peer_connection::PeerConnectionInterface,
        video_track::{VideoSink, VideoSinkWants},
    },
    peer_connection::LocalVideoTrackOwner,
    rtp_sender::RtpSender,
    video_frame::VideoFrame,
    video_frame_observer::{OnVideoFrame, VideoFrameObserver},
    video_track::RtcVideoTrack,
    InteropHandle,
};

struct TrackInner {
    owner: Option<Weak<dyn LocalVideoTrackOwner>>,
    sender: Option<RtpSender>,
}

/// A locally sourced video track attached to a peer connection.
///
/// The adapter registers itself as a frame sink on the engine track for its
/// whole lifetime and keeps the sender binding the track to the engine peer
/// connection until it is removed. The owning peer connection is only
/// observed, never kept alive, by the adapter.
///
/// [`close`](Self::close) (or dropping the adapter) unregisters the sink
/// first, then asks the owner, if still attached, to remove the track.
pub struct LocalVideoTrack {
    // Field order is drop order: the sender is released before the track.
    inner: Mutex<TrackInner>,
    closed: AtomicBool,
    observer: Arc<VideoFrameObserver>,
    sink: Arc<dyn VideoSink>,
    track: RtcVideoTrack,
    interop_handle: InteropHandle,
}

impl LocalVideoTrack {
    /// Creates the adapter and registers its sink on `track`.
    ///
    /// # Panics
    ///
    /// When `owner` does not point to a live peer connection.
    pub fn new(
        owner: Weak<dyn LocalVideoTrackOwner>,
        track: RtcVideoTrack,
        sender: RtpSender,
        interop_handle: InteropHandle,
        mut wants: VideoSinkWants,
    ) -> Self {
        assert!(
            owner.strong_count() > 0,
            "a local video track must be created by a live peer connection"
        );

        wants.rotation_applied = true;

        let observer = Arc::new(VideoFrameObserver::new());
        let sink: Arc<dyn VideoSink> = observer.clone();
        track.add_or_update_sink(&sink, wants);

        log::debug!("local video track {} attached with sender {}", track.id(), sender.id());

        let inner = TrackInner { owner: Some(owner), sender: Some(sender) };
        Self {
            inner: Mutex::new(inner),
            closed: AtomicBool::new(false),
            observer,
            sink,
            track,
            interop_handle,
        }
    }

    pub fn with_defaults(
        owner: Weak<dyn LocalVideoTrackOwner>,
        track: RtcVideoTrack,
        sender: RtpSender,
        interop_handle: InteropHandle,
    ) -> Self {
        Self::new(owner, track, sender, interop_handle, VideoSinkWants::default())
    }

    pub fn id(&self) -> String {
        self.track.id()
    }

    pub fn enabled(&self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.track.enabled()
    }

    pub fn set_enabled(&self, enabled: bool) -> bool {
        if self.is_closed() {
            log::warn!("set_enabled called on closed local video track {}", self.track.id());
            return false;
        }
        self.track.set_enabled(enabled)
    }

    pub fn rtc_track(&self) -> RtcVideoTrack {
        self.track.clone()
    }

    pub fn sender(&self) -> Option<RtpSender> {
        self.inner.lock().sender.clone()
    }

    pub fn interop_handle(&self) -> InteropHandle {
        self.interop_handle
    }

    /// Whether the track is still bound to the engine peer connection.
    pub fn is_attached(&self) -> bool {
        self.inner.lock().sender.is_some()
    }

    /// Whether the track still belongs to its owning peer connection.
    pub fn has_owner(&self) -> bool {
        self.inner.lock().owner.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub fn observer(&self) -> &VideoFrameObserver {
        &self.observer
    }

    pub fn on_frame(&self, callback: Option<OnVideoFrame>) {
        self.observer.on_frame(callback);
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<VideoFrame> {
        self.observer.subscribe()
    }

    /// Removes the sender from `peer` and detaches from the owner.
    /// Does nothing if the sender was already removed.
    pub fn remove_from_peer_connection(&self, peer: &dyn PeerConnectionInterface) {
        let mut inner = self.inner.lock();
        let Some(sender) = inner.sender.clone() else {
            return;
        };

        if let Err(err) = peer.remove_track(sender) {
            log::warn!("failed to remove sender of local video track {}: {}", self.track.id(), err);
        }

        inner.sender = None;
        inner.owner = None;
        log::debug!("local video track {} removed from peer connection", self.track.id());
    }

    /// Unregisters the frame sink and, if still attached, removes the track
    /// from its owner. Calling it again does nothing.
    ///
    /// # Panics
    ///
    /// When the owner does not release the track as part of its removal.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let owner = self.inner.lock().owner.clone();

        self.track.remove_sink(&self.sink);
        self.observer.clear();

        if let Some(owner) = owner {
            match owner.upgrade() {
                Some(owner) => {
                    if let Err(err) = owner.remove_local_video_track(self) {
                        log::error!(
                            "owner failed to remove local video track {}: {}",
                            self.track.id(),
                            err
                        );
                    }
                }
                None => {
                    log::debug!(
                        "owner of local video track {} already dropped",
                        self.track.id()
                    );
                    self.inner.lock().owner = None;
                }
            }
        }

        assert!(
            self.inner.lock().owner.is_none(),
            "peer connection did not release local video track {}",
            self.track.id()
        );
    }
}

impl Drop for LocalVideoTrack {
    fn drop(&mut self) {
        self.close();
    }
}

impl Debug for LocalVideoTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalVideoTrack")
            .field("track", &self.track)
            .field("attached", &self.is_attached())
            .field("closed", &self.is_closed())
            .field("interop_handle", &self.interop_handle)
            .finish()
    }
}
