use crate::filter::convolution;
use crate::filter::kernel::Kernel;
use crate::shared::constants::{
    CONTRAST_BOOST, CONTRAST_PIVOT, DENOISE_KERNEL_SIZE, DENOISE_SIGMA,
};
use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};

/// Cleanup pass every captured photo goes through before styling.
///
/// Runs a light Gaussian denoise, a 3x3 sharpen, then a mild contrast
/// stretch around mid-gray, in that order.
pub struct EnhancementStage {
    denoise: Kernel,
    sharpen: Kernel,
}

impl EnhancementStage {
    pub fn new() -> Self {
        Self {
            denoise: Kernel::gaussian(DENOISE_KERNEL_SIZE, DENOISE_SIGMA),
            sharpen: Kernel::sharpen(),
        }
    }

    pub fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        let denoised = convolution::apply_kernel(input, &self.denoise)?;
        let sharpened = convolution::apply_kernel(&denoised, &self.sharpen)?;
        Ok(boost_contrast(&sharpened))
    }
}

impl Default for EnhancementStage {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear contrast stretch around the mid-gray pivot, alpha untouched.
pub(crate) fn boost_contrast(input: &PixelBuffer) -> PixelBuffer {
    let mut output = input.clone();
    for px in output.samples_mut().chunks_exact_mut(RGBA_CHANNELS) {
        for channel in px.iter_mut().take(3) {
            let stretched = (*channel as f32 - CONTRAST_PIVOT) * CONTRAST_BOOST + CONTRAST_PIVOT;
            *channel = stretched.round().clamp(0.0, 255.0) as u8;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn uniform_buffer(w: u32, h: u32, rgba: [u8; 4]) -> PixelBuffer {
        let mut samples = Vec::with_capacity((w * h) as usize * 4);
        for _ in 0..(w * h) {
            samples.extend_from_slice(&rgba);
        }
        PixelBuffer::new(samples, w, h)
    }

    // ── full stage ──────────────────────────────────────────────────

    #[test]
    fn test_mid_gray_is_a_fixed_point() {
        let buffer = uniform_buffer(6, 6, [128, 128, 128, 255]);
        let out = EnhancementStage::new().apply(&buffer).unwrap();
        assert_eq!(out.samples(), buffer.samples());
    }

    #[rstest]
    #[case(200, 207)]
    #[case(50, 42)]
    fn test_uniform_gray_shifts_by_contrast(#[case] input: u8, #[case] expected: u8) {
        let buffer = uniform_buffer(6, 6, [input, input, input, 255]);
        let out = EnhancementStage::new().apply(&buffer).unwrap();
        for px in out.samples().chunks_exact(4) {
            assert_eq!(px[0], expected);
            assert_eq!(px[1], expected);
            assert_eq!(px[2], expected);
        }
    }

    #[test]
    fn test_alpha_preserved_throughout() {
        let buffer = uniform_buffer(6, 6, [70, 140, 210, 99]);
        let out = EnhancementStage::new().apply(&buffer).unwrap();
        for px in out.samples().chunks_exact(4) {
            assert_eq!(px[3], 99);
        }
    }

    #[test]
    fn test_empty_buffer_is_rejected() {
        let buffer = PixelBuffer::new(Vec::new(), 0, 0);
        assert_eq!(
            EnhancementStage::new().apply(&buffer),
            Err(BufferError::EmptyBuffer)
        );
    }

    #[test]
    fn test_dimensions_unchanged() {
        let buffer = uniform_buffer(9, 4, [33, 66, 99, 255]);
        let out = EnhancementStage::new().apply(&buffer).unwrap();
        assert_eq!(out.width(), 9);
        assert_eq!(out.height(), 4);
    }

    // ── boost_contrast ──────────────────────────────────────────────

    #[rstest]
    #[case(127, 127)]
    #[case(128, 128)]
    #[case(255, 255)]
    #[case(0, 0)]
    #[case(200, 207)]
    fn test_contrast_stretch_values(#[case] input: u8, #[case] expected: u8) {
        let buffer = uniform_buffer(2, 2, [input, input, input, 255]);
        let out = boost_contrast(&buffer);
        assert_eq!(out.samples()[0], expected);
    }

    #[test]
    fn test_contrast_widens_spread() {
        let mut buffer = uniform_buffer(2, 1, [100, 100, 100, 255]);
        buffer.samples_mut()[4] = 160;
        let out = boost_contrast(&buffer);
        let low = out.samples()[0];
        let high = out.samples()[4];
        assert!(low < 100);
        assert!(high > 160);
    }
}
