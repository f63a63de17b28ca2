// THEORY:
// The `PixelSampler` is the bridge between a raw RGBA byte buffer and the
// profilers. It owns nothing: a `PixelBuffer` is a borrowed, read-only view of
// the caller's frame with its logical dimensions attached.
//
// Key architectural principles:
// 1.  **Fail Fast on Shape**: The profilers index the buffer arithmetically, so the
//     view is only constructible for the canonical 300x300 RGBA shape. Anything
//     else is rejected before any analysis starts.
// 2.  **Zero Copy**: Pixels are decoded on the fly from the borrowed slice; no
//     intermediate `Vec<Pixel>` is ever built.
// 3.  **Access Patterns**: It offers the three walks the profilers need: every
//     pixel, every Nth pixel of the flat buffer, and random access by (x, y).

use crate::config::defaults::CANVAS_SIZE;
use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use crate::error::{AnalysisError, Result};

/// Borrowed view of a canonical-size RGBA8 frame, row-major.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wraps `data` after checking it is exactly `CANVAS_SIZE x CANVAS_SIZE` RGBA.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let expected_len = Self::expected_len(CANVAS_SIZE, CANVAS_SIZE);
        if width != CANVAS_SIZE || height != CANVAS_SIZE || data.len() != expected_len {
            tracing::warn!(
                width,
                height,
                actual_len = data.len(),
                "Rejecting pixel buffer with non-canonical shape"
            );
            return Err(AnalysisError::InvalidBufferShape {
                expected_width: CANVAS_SIZE,
                expected_height: CANVAS_SIZE,
                width,
                height,
                expected_len,
                actual_len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Byte length of an RGBA frame with the given dimensions.
    pub fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * CHANNELS
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Pixel at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn pixel_at(&self, x: u32, y: u32) -> Pixel {
        let byte_index = ((y as usize * self.width as usize) + x as usize) * CHANNELS;
        Pixel::from(&self.data[byte_index..byte_index + CHANNELS])
    }

    /// Every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + 'a {
        self.data.chunks_exact(CHANNELS).map(Pixel::from)
    }

    /// Every `stride`-th pixel of the flat buffer, starting at index 0.
    pub fn strided(&self, stride: usize) -> impl Iterator<Item = Pixel> + 'a {
        self.data
            .chunks_exact(CHANNELS)
            .step_by(stride.max(1))
            .map(Pixel::from)
    }

    /// Channel-mean luminance of every pixel, row-major, alpha ignored.
    pub fn luminance_plane(&self) -> Vec<f64> {
        self.pixels().map(|pixel| pixel.luminance()).collect()
    }
}
