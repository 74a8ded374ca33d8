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

pub use crate::config::PeerConnectionConfig;
pub use crate::local_video_track::LocalVideoTrack;
pub use crate::media_stream_track::RtcTrackState;
pub use crate::native::{
    PeerConnectionInterface, RtpSenderInterface, VideoSink, VideoSinkWants, VideoTrackInterface,
};
pub use crate::peer_connection::{LocalVideoTrackOwner, PeerConnection};
pub use crate::rtp_sender::RtpSender;
pub use crate::video_frame::{FrameError, I420Buffer, VideoFrame, VideoRotation};
pub use crate::video_frame_observer::{OnVideoFrame, VideoFrameObserver};
pub use crate::video_track::RtcVideoTrack;
pub use crate::{InteropHandle, RtcError, RtcErrorType};
