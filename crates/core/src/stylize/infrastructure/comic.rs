use crate::filter::color;
use crate::filter::convolution;
use crate::filter::neighborhood;
use crate::shared::constants::{
    COMIC_EDGE_CUTOFF, COMIC_EDGE_DARKEN, COMIC_RADIUS, COMIC_SATURATION_BOOST,
    COMIC_SIGMA_COLOR, COMIC_SIGMA_SPACE, COMIC_VALUE_BOOST,
};
use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::{PixelBuffer, RGBA_CHANNELS};
use crate::stylize::domain::style_transform::StyleTransform;

/// Comic-panel look: bilateral flattening, inked outlines, punchy colors.
///
/// Edges are measured on the incoming buffer before flattening so thin
/// lines survive the bilateral pass.
pub struct ComicTransform;

impl ComicTransform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComicTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTransform for ComicTransform {
    fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        let edges = convolution::sobel_magnitude(input)?;
        let flattened = neighborhood::weighted_neighborhood_filter(
            input,
            COMIC_RADIUS,
            neighborhood::bilateral_weight(COMIC_SIGMA_SPACE, COMIC_SIGMA_COLOR),
        )?;
        let inked = darken_edges(&flattened, &edges);
        Ok(color::adjust_saturation_value(
            &inked,
            COMIC_SATURATION_BOOST,
            COMIC_VALUE_BOOST,
        ))
    }
}

/// Darkens every pixel whose edge-map entry exceeds the ink cutoff.
fn darken_edges(input: &PixelBuffer, edges: &[u8]) -> PixelBuffer {
    debug_assert_eq!(edges.len() * RGBA_CHANNELS, input.samples().len());
    let mut output = input.clone();
    for (px, &edge) in output
        .samples_mut()
        .chunks_exact_mut(RGBA_CHANNELS)
        .zip(edges)
    {
        if edge > COMIC_EDGE_CUTOFF {
            for channel in px.iter_mut().take(3) {
                *channel = (*channel as f32 * COMIC_EDGE_DARKEN).round() as u8;
            }
        }
    }
    output
}
