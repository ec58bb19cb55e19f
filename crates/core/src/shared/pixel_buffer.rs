use ndarray::{ArrayView3, ArrayViewMut3};

use crate::shared::error::BufferError;

/// Samples per pixel: red, green, blue, alpha.
pub const RGBA_CHANNELS: usize = 4;

/// A captured frame: contiguous RGBA bytes in row-major order, 8 bits per
/// channel.
///
/// Format conversion happens at I/O boundaries only; processing stages take
/// a buffer by reference and return a new one, so pixel data is never
/// aliased mid-pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(samples: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            samples.len(),
            (width as usize) * (height as usize) * RGBA_CHANNELS,
            "sample length must equal width * height * 4"
        );
        Self {
            samples,
            width,
            height,
        }
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Checks the shape invariant at a stage boundary.
    ///
    /// Stages call this on entry so malformed input fails fast instead of
    /// producing silently corrupted output.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        let expected = (self.width as usize) * (self.height as usize) * RGBA_CHANNELS;
        if self.samples.len() != expected {
            return Err(BufferError::ShapeMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: self.samples.len(),
            });
        }
        Ok(())
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.samples)
            .expect("sample length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.samples)
            .expect("sample length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, RGBA_CHANNELS)
    }
}
