use crate::shared::pixel_buffer::PixelBuffer;

/// Receives a finished styled buffer for display or export.
pub trait FrameSink: Send {
    fn present(&self, buffer: &PixelBuffer) -> Result<(), Box<dyn std::error::Error>>;
}
