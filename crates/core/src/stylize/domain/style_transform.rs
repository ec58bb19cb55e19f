use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Domain interface for rendering a styled copy of an enhanced photo.
///
/// Implementations return a new buffer of the same dimensions; the input
/// is never modified.
pub trait StyleTransform: Send {
    fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer, BufferError>;
}

/// Selectable rendering styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKind {
    Original,
    Anime,
    Oil,
    Comic,
}

impl StyleKind {
    /// Maps a user-facing style name. Unrecognized names fall back to the
    /// plain enhanced photo.
    pub fn from_name(name: &str) -> Self {
        match name {
            "anime" => StyleKind::Anime,
            "oil" => StyleKind::Oil,
            "comic" => StyleKind::Comic,
            _ => StyleKind::Original,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Original => "original",
            StyleKind::Anime => "anime",
            StyleKind::Oil => "oil",
            StyleKind::Comic => "comic",
        }
    }
}
