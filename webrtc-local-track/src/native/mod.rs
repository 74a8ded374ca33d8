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

//! Interfaces implemented by the media engine.
//!
//! Every object handed across this boundary is shared with the engine, which
//! may call back into sinks from its own worker threads.

pub mod peer_connection;
pub mod rtp_sender;
pub mod video_track;

pub use peer_connection::PeerConnectionInterface;
pub use rtp_sender::RtpSenderInterface;
pub use video_track::{VideoSink, VideoSinkWants, VideoTrackInterface};
