use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};

/// Hue in degrees [0, 360), saturation and value in [0, 1].
///
/// Working representation only; pixels are always stored as RGBA bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Converts an RGB pixel to HSV.
///
/// Hue is left fractional rather than snapped to whole degrees so a
/// conversion round trip stays within one step per channel.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let v = max as f32 / 255.0;
    let s = if max == 0 { 0.0 } else { delta / max as f32 };

    let h = if max == min {
        0.0
    } else {
        let (rf, gf, bf) = (r as f32, g as f32, b as f32);
        let sector = if max == r {
            ((gf - bf) / delta) % 6.0
        } else if max == g {
            (bf - rf) / delta + 2.0
        } else {
            (rf - gf) / delta + 4.0
        };
        let degrees = sector * 60.0;
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    };

    Hsv { h, s, v }
}

/// Converts HSV back to an RGB pixel via sector decomposition.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let c = hsv.v * hsv.s;
    let x = c * (1.0 - ((hsv.h / 60.0) % 2.0 - 1.0).abs());
    let m = hsv.v - c;

    let (r1, g1, b1) = match hsv.h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (channel(r1 + m), channel(g1 + m), channel(b1 + m))
}

fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Remaps every pixel through HSV, scaling saturation and value.
///
/// Both products are clamped to 1.0; alpha passes through untouched.
pub fn adjust_saturation_value(buffer: &PixelBuffer, s_mul: f32, v_mul: f32) -> PixelBuffer {
    let mut out = buffer.clone();
    for px in out.samples_mut().chunks_exact_mut(RGBA_CHANNELS) {
        let mut hsv = rgb_to_hsv(px[0], px[1], px[2]);
        hsv.s = (hsv.s * s_mul).min(1.0);
        hsv.v = (hsv.v * v_mul).min(1.0);
        let (r, g, b) = hsv_to_rgb(hsv);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
    out
}
