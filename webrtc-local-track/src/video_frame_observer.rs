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

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::{native::video_track::VideoSink, video_frame::VideoFrame};

pub type OnVideoFrame = Box<dyn FnMut(&VideoFrame) + Send + Sync>;

#[derive(Default)]
struct CallbackSlot {
    callback: Option<OnVideoFrame>,
    // Bumped on every registration change.
    generation: u64,
}

impl CallbackSlot {
    fn replace(&mut self, callback: Option<OnVideoFrame>) -> Option<OnVideoFrame> {
        self.generation = self.generation.wrapping_add(1);
        std::mem::replace(&mut self.callback, callback)
    }
}

/// Sink registered on a track by its local adapter. Fans frames out to an
/// optional callback and to any number of channel subscribers.
///
/// The callback runs without any lock held, so it may register or
/// unregister callbacks on the observer itself.
#[derive(Default)]
pub struct VideoFrameObserver {
    callback: Mutex<CallbackSlot>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<VideoFrame>>>,
    delivered: AtomicU64,
    discarded: AtomicU64,
}

impl VideoFrameObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the frame callback. `None` unregisters it.
    pub fn on_frame(&self, callback: Option<OnVideoFrame>) {
        let previous = self.callback.lock().replace(callback);
        drop(previous);
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<VideoFrame> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }

    pub fn delivered_frames(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn discarded_frames(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    /// Drops the callback and closes every subscriber channel.
    pub(crate) fn clear(&self) {
        let previous = self.callback.lock().replace(None);
        drop(previous);
        self.subscribers.lock().clear();
    }
}

impl VideoSink for VideoFrameObserver {
    fn on_frame(&self, frame: &VideoFrame) {
        self.delivered.fetch_add(1, Ordering::Relaxed);

        // A frame dispatched concurrently from another thread while the
        // callback is out of its slot skips the callback.
        let (callback, generation) = {
            let mut slot = self.callback.lock();
            (slot.callback.take(), slot.generation)
        };

        if let Some(mut callback) = callback {
            callback(frame);

            let mut slot = self.callback.lock();
            if slot.generation == generation {
                slot.callback = Some(callback);
            }
        }

        self.subscribers.lock().retain(|tx| tx.send(frame.clone()).is_ok());
    }

    fn on_discarded_frame(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }
}
