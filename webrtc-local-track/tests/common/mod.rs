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

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Weak,
};

use parking_lot::Mutex;
use webrtc_local_track::prelude::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Engine track recording every sink call.
pub struct MockVideoTrack {
    id: String,
    source_id: String,
    enabled: AtomicBool,
    sinks: Mutex<Vec<Arc<dyn VideoSink>>>,
    pub attach_count: AtomicUsize,
    pub detach_count: AtomicUsize,
    pub last_wants: Mutex<Option<VideoSinkWants>>,
}

impl MockVideoTrack {
    pub fn new(id: &str, source_id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_owned(),
            source_id: source_id.to_owned(),
            enabled: AtomicBool::new(true),
            sinks: Default::default(),
            attach_count: AtomicUsize::new(0),
            detach_count: AtomicUsize::new(0),
            last_wants: Default::default(),
        })
    }

    pub fn attach_count(&self) -> usize {
        self.attach_count.load(Ordering::SeqCst)
    }

    pub fn detach_count(&self) -> usize {
        self.detach_count.load(Ordering::SeqCst)
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Delivers `frame` to every registered sink, as the engine worker would.
    pub fn deliver(&self, frame: &VideoFrame) -> usize {
        let sinks = self.sinks.lock();
        for sink in sinks.iter() {
            sink.on_frame(frame);
        }
        sinks.len()
    }
}

impl VideoTrackInterface for MockVideoTrack {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn source_id(&self) -> String {
        self.source_id.clone()
    }

    fn enabled(&self) -> bool {
        self.is_enabled()
    }

    fn set_enabled(&self, enabled: bool) -> bool {
        self.enabled.store(enabled, Ordering::SeqCst);
        true
    }

    fn state(&self) -> RtcTrackState {
        RtcTrackState::Live
    }

    fn add_or_update_sink(&self, sink: &Arc<dyn VideoSink>, wants: VideoSinkWants) {
        self.attach_count.fetch_add(1, Ordering::SeqCst);
        *self.last_wants.lock() = Some(wants);

        let mut sinks = self.sinks.lock();
        if !sinks.iter().any(|s| Arc::ptr_eq(s, sink)) {
            sinks.push(sink.clone());
        }
    }

    fn remove_sink(&self, sink: &Arc<dyn VideoSink>) {
        self.detach_count.fetch_add(1, Ordering::SeqCst);
        self.sinks.lock().retain(|s| !Arc::ptr_eq(s, sink));
    }
}

pub struct MockSender {
    id: String,
    track_id: String,
}

impl MockSender {
    pub fn new(id: &str, track_id: &str) -> RtpSender {
        RtpSender::new(Arc::new(Self { id: id.to_owned(), track_id: track_id.to_owned() }))
    }
}

impl RtpSenderInterface for MockSender {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn track_id(&self) -> Option<String> {
        Some(self.track_id.clone())
    }
}

/// Engine peer connection recording added and removed senders.
#[derive(Default)]
pub struct MockPeer {
    pub added: Mutex<Vec<(String, Vec<String>)>>,
    pub removed: Mutex<Vec<RtpSender>>,
    pub fail_add: AtomicBool,
    pub closed: AtomicBool,
    next_sender: AtomicUsize,
}

impl MockPeer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn removed_count(&self) -> usize {
        self.removed.lock().len()
    }

    pub fn was_removed(&self, sender: &RtpSender) -> bool {
        self.removed.lock().iter().any(|s| s.ptr_eq(sender))
    }
}

impl PeerConnectionInterface for MockPeer {
    fn add_track(
        &self,
        track: RtcVideoTrack,
        stream_ids: &[String],
    ) -> Result<RtpSender, RtcError> {
        if self.fail_add.load(Ordering::SeqCst) {
            return Err(RtcError {
                error_type: RtcErrorType::Internal,
                message: "add_track rejected".to_owned(),
            });
        }

        self.added.lock().push((track.id(), stream_ids.to_vec()));
        let n = self.next_sender.fetch_add(1, Ordering::SeqCst);
        Ok(MockSender::new(&format!("sender_{}", n), &track.id()))
    }

    fn remove_track(&self, sender: RtpSender) -> Result<(), RtcError> {
        self.removed.lock().push(sender);
        Ok(())
    }

    fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Owner standing in for a peer connection. Honours the removal contract
/// unless `release` is cleared.
pub struct MockOwner {
    pub peer: Arc<MockPeer>,
    pub remove_count: AtomicUsize,
    pub release: AtomicBool,
}

impl MockOwner {
    pub fn new(peer: Arc<MockPeer>) -> Arc<Self> {
        Arc::new(Self { peer, remove_count: AtomicUsize::new(0), release: AtomicBool::new(true) })
    }

    pub fn remove_count(&self) -> usize {
        self.remove_count.load(Ordering::SeqCst)
    }

    pub fn weak(self: &Arc<Self>) -> Weak<dyn LocalVideoTrackOwner> {
        let owner: Arc<dyn LocalVideoTrackOwner> = self.clone();
        Arc::downgrade(&owner)
    }
}

impl LocalVideoTrackOwner for MockOwner {
    fn remove_local_video_track(&self, track: &LocalVideoTrack) -> Result<(), RtcError> {
        self.remove_count.fetch_add(1, Ordering::SeqCst);
        if self.release.load(Ordering::SeqCst) {
            track.remove_from_peer_connection(&*self.peer);
        }
        Ok(())
    }
}

pub fn test_frame(timestamp_us: i64) -> VideoFrame {
    VideoFrame::new(I420Buffer::new(16, 16), VideoRotation::VideoRotation0, timestamp_us)
}
