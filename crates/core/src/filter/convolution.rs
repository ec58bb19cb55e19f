use crate::filter::kernel::{gaussian_profile_1d, Kernel};
use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};

/// Convolves `kernel` over every interior pixel, per RGB channel.
///
/// Border pixels (within the kernel radius of an edge) are copied from the
/// input untouched, and alpha passes through everywhere. Accumulation runs
/// in f32; each result is rounded and clamped to the byte range.
pub fn apply_kernel(input: &PixelBuffer, kernel: &Kernel) -> Result<PixelBuffer, BufferError> {
    input.validate()?;
    let width = input.width() as usize;
    let height = input.height() as usize;
    let radius = kernel.radius();
    let size = kernel.size();

    let mut output = input.clone();
    if width <= 2 * radius || height <= 2 * radius {
        return Ok(output);
    }

    let src = input.samples();
    let dst = output.samples_mut();
    for y in radius..height - radius {
        for x in radius..width - radius {
            for c in 0..3 {
                let mut sum = 0.0f32;
                for ky in 0..size {
                    for kx in 0..size {
                        let sy = y + ky - radius;
                        let sx = x + kx - radius;
                        let sample = src[(sy * width + sx) * RGBA_CHANNELS + c] as f32;
                        sum += sample * kernel.get(ky, kx);
                    }
                }
                dst[(y * width + x) * RGBA_CHANNELS + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(output)
}

/// Grayscale Sobel gradient magnitude, one byte per pixel.
///
/// Gray is the channel mean; border pixels stay zero.
pub fn sobel_magnitude(input: &PixelBuffer) -> Result<Vec<u8>, BufferError> {
    input.validate()?;
    let width = input.width() as usize;
    let height = input.height() as usize;
    let sobel_x = Kernel::sobel_x();
    let sobel_y = Kernel::sobel_y();
    let src = input.samples();

    let mut map = vec![0u8; width * height];
    if width < 3 || height < 3 {
        return Ok(map);
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for ky in 0..3 {
                for kx in 0..3 {
                    let idx = ((y + ky - 1) * width + (x + kx - 1)) * RGBA_CHANNELS;
                    let gray =
                        (src[idx] as f32 + src[idx + 1] as f32 + src[idx + 2] as f32) / 3.0;
                    gx += gray * sobel_x.get(ky, kx);
                    gy += gray * sobel_y.get(ky, kx);
                }
            }
            let magnitude = (gx * gx + gy * gy).sqrt();
            map[y * width + x] = magnitude.round().min(255.0) as u8;
        }
    }
    Ok(map)
}

/// Per-channel Sobel gradient magnitudes; border entries stay zero.
///
/// Used where edges must be found independently in each color channel
/// rather than on a gray plane.
pub fn sobel_channel_magnitudes(input: &PixelBuffer) -> Result<Vec<[f32; 3]>, BufferError> {
    input.validate()?;
    let width = input.width() as usize;
    let height = input.height() as usize;
    let sobel_x = Kernel::sobel_x();
    let sobel_y = Kernel::sobel_y();
    let src = input.samples();

    let mut map = vec![[0.0f32; 3]; width * height];
    if width < 3 || height < 3 {
        return Ok(map);
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for c in 0..3 {
                let mut gx = 0.0f32;
                let mut gy = 0.0f32;
                for ky in 0..3 {
                    for kx in 0..3 {
                        let idx = ((y + ky - 1) * width + (x + kx - 1)) * RGBA_CHANNELS + c;
                        gx += src[idx] as f32 * sobel_x.get(ky, kx);
                        gy += src[idx] as f32 * sobel_y.get(ky, kx);
                    }
                }
                map[y * width + x][c] = (gx * gx + gy * gy).sqrt();
            }
        }
    }
    Ok(map)
}

/// Separable Gaussian blur over a single-channel plane.
///
/// Samples past the plane edge clamp to the nearest valid index, so energy
/// is preserved instead of fading toward the borders.
pub fn blur_plane(plane: &[u8], width: usize, height: usize, size: usize, sigma: f32) -> Vec<u8> {
    debug_assert_eq!(plane.len(), width * height);
    if width == 0 || height == 0 || size <= 1 {
        return plane.to_vec();
    }
    let profile = gaussian_profile_1d(size, sigma);
    let half = size / 2;

    // Horizontal pass: plane -> temp
    let mut temp = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (k, &w) in profile.iter().enumerate() {
                let sx = (x as isize + k as isize - half as isize)
                    .max(0)
                    .min((width - 1) as isize) as usize;
                sum += plane[y * width + sx] as f32 * w;
            }
            temp[y * width + x] = sum;
        }
    }

    // Vertical pass: temp -> out
    let mut out = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0.0f32;
            for (k, &w) in profile.iter().enumerate() {
                let sy = (y as isize + k as isize - half as isize)
                    .max(0)
                    .min((height - 1) as isize) as usize;
                sum += temp[sy * width + x] * w;
            }
            out[y * width + x] = sum.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
