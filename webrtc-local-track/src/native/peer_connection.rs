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

use crate::{rtp_sender::RtpSender, video_track::RtcVideoTrack, RtcError};

/// Engine-level peer connection owning the senders of local tracks.
pub trait PeerConnectionInterface: Send + Sync {
    fn add_track(&self, track: RtcVideoTrack, stream_ids: &[String])
        -> Result<RtpSender, RtcError>;

    fn remove_track(&self, sender: RtpSender) -> Result<(), RtcError>;

    fn close(&self);
}
