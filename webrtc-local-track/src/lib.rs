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

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RtcErrorType {
    Internal,
    InvalidParameter,
    InvalidState,
}

#[derive(Error, Debug, Clone)]
#[error("an RtcError occured: {error_type:?} - {message}")]
pub struct RtcError {
    pub error_type: RtcErrorType,
    pub message: String,
}

impl RtcError {
    pub(crate) fn new(error_type: RtcErrorType, message: impl Into<String>) -> Self {
        Self { error_type, message: message.into() }
    }
}

/// Opaque value an external consumer attaches to a track so it can correlate
/// callbacks with its own bookkeeping. Never dereferenced by this crate.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct InteropHandle(usize);

impl InteropHandle {
    pub const NULL: InteropHandle = InteropHandle(0);

    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

pub mod config;
pub mod local_video_track;
pub mod media_stream_track;
pub mod native;
pub mod peer_connection;
pub mod prelude;
pub mod rtp_sender;
pub mod video_frame;
pub mod video_frame_observer;
pub mod video_track;
