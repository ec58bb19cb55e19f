use std::path::PathBuf;

use crate::capture::domain::frame_sink::FrameSink;
use crate::shared::pixel_buffer::PixelBuffer;

/// Writes styled buffers to an image file using the `image` crate.
pub struct ImageFileSink {
    path: PathBuf,
}

impl ImageFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FrameSink for ImageFileSink {
    fn present(&self, buffer: &PixelBuffer) -> Result<(), Box<dyn std::error::Error>> {
        // Ensure parent directory exists (infrastructure concern)
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = image::RgbaImage::from_raw(
            buffer.width(),
            buffer.height(),
            buffer.samples().to_vec(),
        )
        .ok_or("Buffer dimensions do not match sample data")?;
        img.save(&self.path)?;
        Ok(())
    }
}
