use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::PixelBuffer;
use crate::stylize::domain::style_transform::{StyleKind, StyleTransform};

use super::anime::AnimeTransform;
use super::comic::ComicTransform;
use super::grain::RandomGrain;
use super::oil::OilTransform;

/// Pass-through style: the photo keeps only the enhancement pass.
pub struct OriginalTransform;

impl StyleTransform for OriginalTransform {
    fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer, BufferError> {
        input.validate()?;
        Ok(input.clone())
    }
}

/// Creates the transform for the requested style.
///
/// `grain_seed` pins the oil-paint grain for reproducible renders; `None`
/// draws fresh grain on every run. Logs which style is selected.
pub fn create_transform(kind: StyleKind, grain_seed: Option<u64>) -> Box<dyn StyleTransform> {
    match kind {
        StyleKind::Original => {
            log::info!("Using original style (enhancement only)");
            Box::new(OriginalTransform)
        }
        StyleKind::Anime => {
            log::info!("Using anime style");
            Box::new(AnimeTransform::new())
        }
        StyleKind::Oil => {
            log::info!("Using oil painting style (grain_seed={:?})", grain_seed);
            let grain = match grain_seed {
                Some(seed) => RandomGrain::with_seed(seed),
                None => RandomGrain::new(),
            };
            Box::new(OilTransform::new(Box::new(grain)))
        }
        StyleKind::Comic => {
            log::info!("Using comic style");
            Box::new(ComicTransform::new())
        }
    }
}
