use crate::filter::color;
use crate::filter::convolution;
use crate::shared::constants::{
    ANIME_EDGE_THRESHOLD, ANIME_SATURATION_BOOST, GLOW_KERNEL_SIZE, GLOW_OPACITY, GLOW_SIGMA,
    POSTERIZE_STEP,
};
use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};
use crate::stylize::domain::style_transform::StyleTransform;

/// Cel-shaded look: dark outlines, boosted saturation, flattened color
/// steps, and a soft glow around edges.
pub struct AnimeTransform;

impl AnimeTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnimeTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTransform for AnimeTransform {
    fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        let outlined = zero_edge_channels(input)?;
        let saturated = color::adjust_saturation_value(&outlined, ANIME_SATURATION_BOOST, 1.0);
        let posterized = posterize(&saturated);
        apply_glow(&posterized)
    }
}

/// Blacks out each channel independently where its Sobel gradient exceeds
/// the outline threshold. Border pixels are copied unchanged.
fn zero_edge_channels(input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
    let magnitudes = convolution::sobel_channel_magnitudes(input)?;
    let width = input.width() as usize;
    let height = input.height() as usize;

    let mut output = input.clone();
    if width < 3 || height < 3 {
        return Ok(output);
    }
    let dst = output.samples_mut();
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let gradient = magnitudes[y * width + x];
            for c in 0..3 {
                if gradient[c] > ANIME_EDGE_THRESHOLD {
                    dst[(y * width + x) * RGBA_CHANNELS + c] = 0;
                }
            }
        }
    }
    Ok(output)
}

/// Snaps each RGB channel to the nearest multiple of the quantization step.
fn posterize(input: &PixelBuffer) -> PixelBuffer {
    let mut output = input.clone();
    for px in output.samples_mut().chunks_exact_mut(RGBA_CHANNELS) {
        for channel in px.iter_mut().take(3) {
            let stepped = (*channel as f32 / POSTERIZE_STEP).round() * POSTERIZE_STEP;
            *channel = stepped.min(255.0) as u8;
        }
    }
    output
}

/// Lifts pixels toward white in proportion to nearby edge strength.
///
/// The Sobel map of the styled buffer is spread with a small Gaussian so
/// the highlight halos outward from the outlines instead of sitting only
/// on them.
fn apply_glow(input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
    let edges = convolution::sobel_magnitude(input)?;
    let width = input.width() as usize;
    let height = input.height() as usize;
    let spread = convolution::blur_plane(&edges, width, height, GLOW_KERNEL_SIZE, GLOW_SIGMA);

    let mut output = input.clone();
    let dst = output.samples_mut();
    for (i, &strength) in spread.iter().enumerate() {
        if strength == 0 {
            continue;
        }
        let lift = GLOW_OPACITY * strength as f32 / 255.0;
        for c in 0..3 {
            let value = dst[i * RGBA_CHANNELS + c] as f32;
            dst[i * RGBA_CHANNELS + c] = (value + (255.0 - value) * lift).round().min(255.0) as u8;
        }
    }
    Ok(output)
}
