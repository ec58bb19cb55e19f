use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};

/// Normalized weighted average over a square window, per RGB channel.
///
/// `weight` is called with the window offset and the center and neighbor
/// values of the channel being filtered, so each channel normalizes
/// independently. Border pixels and alpha are copied from the input.
pub fn weighted_neighborhood_filter<F>(
    input: &PixelBuffer,
    radius: usize,
    weight: F,
) -> Result<PixelBuffer, BufferError>
where
    F: Fn(isize, isize, f32, f32) -> f32,
{
    input.validate()?;
    let width = input.width() as usize;
    let height = input.height() as usize;

    let mut output = input.clone();
    if width <= 2 * radius || height <= 2 * radius {
        return Ok(output);
    }

    let src = input.samples();
    let dst = output.samples_mut();
    for y in radius..height - radius {
        for x in radius..width - radius {
            for c in 0..3 {
                let center = src[(y * width + x) * RGBA_CHANNELS + c] as f32;
                let mut sum = 0.0f32;
                let mut weight_sum = 0.0f32;
                for dy in -(radius as isize)..=radius as isize {
                    for dx in -(radius as isize)..=radius as isize {
                        let sy = (y as isize + dy) as usize;
                        let sx = (x as isize + dx) as usize;
                        let neighbor = src[(sy * width + sx) * RGBA_CHANNELS + c] as f32;
                        let w = weight(dy, dx, center, neighbor);
                        sum += neighbor * w;
                        weight_sum += w;
                    }
                }
                dst[(y * width + x) * RGBA_CHANNELS + c] =
                    (sum / weight_sum).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

/// Weight that falls off with the channel difference from the center.
///
/// Similar neighbors count fully, dissimilar ones barely at all, which
/// smears flat regions while leaving edges crisp.
pub fn intensity_weight(falloff: f32) -> impl Fn(isize, isize, f32, f32) -> f32 {
    move |_dy, _dx, center, neighbor| 1.0 / (1.0 + (neighbor - center).abs() / falloff)
}

/// Bilateral weight: spatial Gaussian times a channel-difference Gaussian.
pub fn bilateral_weight(
    sigma_space: f32,
    sigma_color: f32,
) -> impl Fn(isize, isize, f32, f32) -> f32 {
    move |dy, dx, center, neighbor| {
        let dist = (dy * dy + dx * dx) as f32;
        let space = (-dist / (2.0 * sigma_space * sigma_space)).exp();
        let diff = neighbor - center;
        let color = (-(diff * diff) / (2.0 * sigma_color * sigma_color)).exp();
        space * color
    }
}
