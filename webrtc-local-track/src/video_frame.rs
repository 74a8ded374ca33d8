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

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("plane {plane} too small: expected at least {expected} bytes, got {actual}")]
    PlaneTooSmall { plane: &'static str, expected: usize, actual: usize },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VideoRotation {
    #[default]
    VideoRotation0 = 0,
    VideoRotation90 = 90,
    VideoRotation180 = 180,
    VideoRotation270 = 270,
}

/// A frame as delivered to sinks. The buffer is shared between every sink
/// receiving the frame.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub rotation: VideoRotation,
    pub timestamp_us: i64,
    pub buffer: Arc<I420Buffer>,
}

impl VideoFrame {
    pub fn new(buffer: I420Buffer, rotation: VideoRotation, timestamp_us: i64) -> Self {
        Self { rotation, timestamp_us, buffer: Arc::new(buffer) }
    }
}

pub struct I420Buffer {
    width: u32,
    height: u32,
    stride_y: u32,
    stride_u: u32,
    stride_v: u32,
    data_y: Vec<u8>,
    data_u: Vec<u8>,
    data_v: Vec<u8>,
}

fn plane_len(stride: u32, rows: u32) -> Option<usize> {
    (stride as usize).checked_mul(rows as usize)
}

impl I420Buffer {
    /// # Panics
    ///
    /// When a plane size does not fit in `usize`.
    pub fn with_strides(
        width: u32,
        height: u32,
        stride_y: u32,
        stride_u: u32,
        stride_v: u32,
    ) -> I420Buffer {
        let chroma_height = height.div_ceil(2);
        let alloc = |stride, rows| match plane_len(stride, rows) {
            Some(len) => vec![0; len],
            None => panic!("I420 plane {}x{} overflows usize", stride, rows),
        };

        I420Buffer {
            width,
            height,
            stride_y,
            stride_u,
            stride_v,
            data_y: alloc(stride_y, height),
            data_u: alloc(stride_u, chroma_height),
            data_v: alloc(stride_v, chroma_height),
        }
    }

    pub fn new(width: u32, height: u32) -> I420Buffer {
        Self::with_strides(width, height, width, width.div_ceil(2), width.div_ceil(2))
    }

    /// Copies planes produced elsewhere (e.g. by an external capture source)
    /// into a new buffer, checking that each plane covers the frame.
    #[allow(clippy::too_many_arguments)]
    pub fn from_planes(
        width: u32,
        height: u32,
        data_y: &[u8],
        stride_y: u32,
        data_u: &[u8],
        stride_u: u32,
        data_v: &[u8],
        stride_v: u32,
    ) -> Result<I420Buffer, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }

        let chroma_width = width.div_ceil(2);
        let chroma_height = height.div_ceil(2);
        if stride_y < width || stride_u < chroma_width || stride_v < chroma_width {
            return Err(FrameError::InvalidDimensions { width, height });
        }

        let check = |plane, data: &[u8], stride: u32, rows: u32| -> Result<Vec<u8>, FrameError> {
            let expected = plane_len(stride, rows)
                .ok_or(FrameError::InvalidDimensions { width, height })?;
            if data.len() < expected {
                return Err(FrameError::PlaneTooSmall { plane, expected, actual: data.len() });
            }
            Ok(data[..expected].to_vec())
        };

        Ok(I420Buffer {
            width,
            height,
            stride_y,
            stride_u,
            stride_v,
            data_y: check("y", data_y, stride_y, height)?,
            data_u: check("u", data_u, stride_u, chroma_height)?,
            data_v: check("v", data_v, stride_v, chroma_height)?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn chroma_width(&self) -> u32 {
        self.width.div_ceil(2)
    }

    pub fn chroma_height(&self) -> u32 {
        self.height.div_ceil(2)
    }

    pub fn stride_y(&self) -> u32 {
        self.stride_y
    }

    pub fn stride_u(&self) -> u32 {
        self.stride_u
    }

    pub fn stride_v(&self) -> u32 {
        self.stride_v
    }

    pub fn strides(&self) -> (u32, u32, u32) {
        (self.stride_y, self.stride_u, self.stride_v)
    }

    pub fn data(&self) -> (&[u8], &[u8], &[u8]) {
        (&self.data_y, &self.data_u, &self.data_v)
    }

    pub fn data_mut(&mut self) -> (&mut [u8], &mut [u8], &mut [u8]) {
        (&mut self.data_y, &mut self.data_u, &mut self.data_v)
    }
}

impl Debug for I420Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I420Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("strides", &self.strides())
            .finish()
    }
}
