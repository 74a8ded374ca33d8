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

use std::sync::Arc;

use crate::{media_stream_track::RtcTrackState, video_frame::VideoFrame};

/// Sink configuration passed along with a sink registration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VideoSinkWants {
    /// Rotation metadata has already been applied by the sink owner, the
    /// engine must deliver frames as they are.
    pub rotation_applied: bool,
    pub black_frames: bool,
    pub max_pixel_count: Option<u32>,
    pub max_framerate_fps: Option<u32>,
}

/// Receives frames from a [`VideoTrackInterface`].
///
/// Called from engine worker threads, implementations must be thread-safe.
pub trait VideoSink: Send + Sync {
    fn on_frame(&self, frame: &VideoFrame);

    fn on_discarded_frame(&self) {}
}

pub trait VideoTrackInterface: Send + Sync {
    fn id(&self) -> String;

    fn source_id(&self) -> String;

    fn enabled(&self) -> bool;

    fn set_enabled(&self, enabled: bool) -> bool;

    fn state(&self) -> RtcTrackState;

    /// Registers `sink`, or updates its wants if it is already registered.
    /// Sinks are identified by their `Arc` pointer.
    fn add_or_update_sink(&self, sink: &Arc<dyn VideoSink>, wants: VideoSinkWants);

    /// Unregisters `sink`. Must not return while a frame is still being
    /// dispatched to it.
    fn remove_sink(&self, sink: &Arc<dyn VideoSink>);
}
