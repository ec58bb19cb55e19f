use thiserror::Error;

/// Shape violations caught when a pixel buffer enters a processing stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("pixel buffer has zero width or height")]
    EmptyBuffer,
    #[error("sample length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
