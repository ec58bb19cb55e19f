use std::path::PathBuf;

use crate::capture::domain::frame_source::FrameSource;
use crate::shared::pixel_buffer::PixelBuffer;

/// Adapts a still image file to the [`FrameSource`] interface.
///
/// Decoding happens on every `capture` call, so the same source can be
/// polled again after the file changes on disk.
pub struct ImageFileSource {
    path: PathBuf,
}

impl ImageFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSource for ImageFileSource {
    fn capture(&mut self) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
        let img = image::open(&self.path)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(PixelBuffer::new(img.into_raw(), width, height))
    }
}
