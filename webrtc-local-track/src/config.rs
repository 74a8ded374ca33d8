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

use serde::{Deserialize, Serialize};

use crate::native::video_track::VideoSinkWants;

pub const DEFAULT_STREAM_ID: &str = "local_av_stream";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeerConnectionConfig {
    /// Media stream every local track is added under.
    pub stream_id: String,
    pub max_pixel_count: Option<u32>,
    pub max_framerate_fps: Option<u32>,
}

impl Default for PeerConnectionConfig {
    fn default() -> Self {
        Self {
            stream_id: DEFAULT_STREAM_ID.to_owned(),
            max_pixel_count: None,
            max_framerate_fps: None,
        }
    }
}

impl PeerConnectionConfig {
    /// Wants used when a local track registers its frame sink. Rotation is
    /// always applied before frames reach the sink.
    pub fn sink_wants(&self) -> VideoSinkWants {
        VideoSinkWants {
            rotation_applied: true,
            black_frames: false,
            max_pixel_count: self.max_pixel_count,
            max_framerate_fps: self.max_framerate_fps,
        }
    }
}
