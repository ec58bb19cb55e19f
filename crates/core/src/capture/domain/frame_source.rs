use crate::shared::pixel_buffer::PixelBuffer;

/// Produces one full-resolution RGBA frame per call.
pub trait FrameSource: Send {
    fn capture(&mut self) -> Result<PixelBuffer, Box<dyn std::error::Error>>;
}
