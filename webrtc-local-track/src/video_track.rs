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

use std::{fmt::Debug, sync::Arc};

use crate::{
    media_stream_track::{media_stream_track, RtcTrackState},
    native::video_track::{VideoSink, VideoSinkWants, VideoTrackInterface},
};

/// Shared handle to an engine video track. Cloning shares the engine object.
#[derive(Clone)]
pub struct RtcVideoTrack {
    pub(crate) handle: Arc<dyn VideoTrackInterface>,
}

impl RtcVideoTrack {
    media_stream_track!();

    pub fn new(handle: Arc<dyn VideoTrackInterface>) -> Self {
        Self { handle }
    }

    /// Identifier of the source feeding this track. Tracks created from the
    /// same source report the same id.
    pub fn source_id(&self) -> String {
        self.handle.source_id()
    }

    pub fn ptr_eq(&self, other: &RtcVideoTrack) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }

    pub(crate) fn add_or_update_sink(&self, sink: &Arc<dyn VideoSink>, wants: VideoSinkWants) {
        self.handle.add_or_update_sink(sink, wants);
    }

    pub(crate) fn remove_sink(&self, sink: &Arc<dyn VideoSink>) {
        self.handle.remove_sink(sink);
    }
}

impl Debug for RtcVideoTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtcVideoTrack")
            .field("id", &self.id())
            .field("enabled", &self.enabled())
            .field("state", &self.state())
            .finish()
    }
}
