use crate::shared::pixel_buffer::PixelBuffer;

use super::detection::RawDetection;

/// Domain interface for face detection.
///
/// Implementations are free to keep per-session state across calls,
/// hence `&mut self`.
pub trait FaceDetector: Send {
    fn detect(
        &mut self,
        buffer: &PixelBuffer,
    ) -> Result<Vec<RawDetection>, Box<dyn std::error::Error>>;
}
