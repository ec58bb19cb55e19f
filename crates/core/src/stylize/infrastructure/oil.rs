use std::cell::RefCell;

use crate::filter::color;
use crate::filter::neighborhood;
use crate::shared::constants::{
    GRAIN_AMPLITUDE, GRAIN_OPACITY, OIL_INTENSITY_SCALE, OIL_RADIUS, OIL_SATURATION_BOOST,
    OIL_VALUE_BOOST,
};
use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};
use crate::stylize::domain::style_transform::StyleTransform;

use super::grain::GrainSource;

/// Painted look: edge-preserving smear, warmed-up colors, and a faint
/// canvas grain.
pub struct OilTransform {
    grain: RefCell<Box<dyn GrainSource>>,
}

impl OilTransform {
    pub fn new(grain: Box<dyn GrainSource>) -> Self {
        Self {
            grain: RefCell::new(grain),
        }
    }
}

impl StyleTransform for OilTransform {
    fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        let smeared = neighborhood::weighted_neighborhood_filter(
            input,
            OIL_RADIUS,
            neighborhood::intensity_weight(OIL_INTENSITY_SCALE),
        )?;
        let toned = color::adjust_saturation_value(&smeared, OIL_SATURATION_BOOST, OIL_VALUE_BOOST);
        let mut grain = self.grain.borrow_mut();
        Ok(add_grain(&toned, grain.as_mut()))
    }
}

/// Overlays a neutral-gray noise layer at low opacity.
///
/// One offset is drawn per pixel and shared by its RGB channels, so the
/// grain reads as brightness speckle rather than color noise.
fn add_grain(input: &PixelBuffer, grain: &mut dyn GrainSource) -> PixelBuffer {
    let mut output = input.clone();
    for px in output.samples_mut().chunks_exact_mut(RGBA_CHANNELS) {
        let layer = (128.0 + grain.next_offset(GRAIN_AMPLITUDE)) / 255.0;
        for channel in px.iter_mut().take(3) {
            let base = *channel as f32 / 255.0;
            let blended = overlay_blend(base, layer);
            let mixed = base * (1.0 - GRAIN_OPACITY) + blended * GRAIN_OPACITY;
            *channel = (mixed * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }
    output
}

/// Photoshop-style overlay: darks multiply, brights screen.
fn overlay_blend(base: f32, layer: f32) -> f32 {
    if base < 0.5 {
        2.0 * base * layer
    } else {
        1.0 - 2.0 * (1.0 - base) * (1.0 - layer)
    }
}
