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

use crate::native::rtp_sender::RtpSenderInterface;

/// Outbound binding of a track onto an engine peer connection.
#[derive(Clone)]
pub struct RtpSender {
    pub(crate) handle: Arc<dyn RtpSenderInterface>,
}

impl RtpSender {
    pub fn new(handle: Arc<dyn RtpSenderInterface>) -> Self {
        Self { handle }
    }

    pub fn id(&self) -> String {
        self.handle.id()
    }

    pub fn track_id(&self) -> Option<String> {
        self.handle.track_id()
    }

    pub fn ptr_eq(&self, other: &RtpSender) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

impl Debug for RtpSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RtpSender")
            .field("id", &self.id())
            .field("track_id", &self.track_id())
            .finish()
    }
}
