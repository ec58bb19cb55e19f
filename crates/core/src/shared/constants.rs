// Enhancement stage.

/// Light pre-sharpen denoise, roughly a 0.8px blur radius.
pub const DENOISE_KERNEL_SIZE: usize = 3;
pub const DENOISE_SIGMA: f32 = 0.4;
/// Contrast boost of 10% around the mid-gray pivot.
pub const CONTRAST_BOOST: f32 = 1.1;
pub const CONTRAST_PIVOT: f32 = 127.5;

// Anime style.

/// Per-channel Sobel magnitude above this becomes a dark outline.
pub const ANIME_EDGE_THRESHOLD: f32 = 20.0;
pub const ANIME_SATURATION_BOOST: f32 = 1.5;
/// Quantization step for the flat cel-shaded look.
pub const POSTERIZE_STEP: f32 = 32.0;
pub const GLOW_KERNEL_SIZE: usize = 5;
pub const GLOW_SIGMA: f32 = 1.0;
pub const GLOW_OPACITY: f32 = 0.6;

// Oil painting style.

pub const OIL_RADIUS: usize = 2;
/// Intensity-difference falloff for the edge-preserving smoothing weight.
pub const OIL_INTENSITY_SCALE: f32 = 10.0;
pub const OIL_SATURATION_BOOST: f32 = 1.2;
pub const OIL_VALUE_BOOST: f32 = 1.1;
/// Grain offsets are drawn from [-5, +5] around neutral gray.
pub const GRAIN_AMPLITUDE: f32 = 5.0;
pub const GRAIN_OPACITY: f32 = 0.1;

// Comic style.

pub const COMIC_RADIUS: usize = 2;
pub const COMIC_SIGMA_SPACE: f32 = 5.0;
pub const COMIC_SIGMA_COLOR: f32 = 30.0;
/// Edge-map level above which a pixel is inked.
pub const COMIC_EDGE_CUTOFF: u8 = 100;
pub const COMIC_EDGE_DARKEN: f32 = 0.7;
pub const COMIC_SATURATION_BOOST: f32 = 1.5;
pub const COMIC_VALUE_BOOST: f32 = 1.2;

// Face tracking.

/// Detections at or below this confidence are discarded.
pub const CONFIDENCE_THRESHOLD: f64 = 0.95;
/// Base face-box dimension; gating requires `MIN_BOX_SIZE * MIN_SIZE_FACTOR`.
pub const MIN_BOX_SIZE: f64 = 100.0;
pub const MIN_SIZE_FACTOR: f64 = 1.2;
/// Accepted detections required in a row before a box is published.
pub const MIN_CONSECUTIVE_DETECTIONS: u32 = 3;
/// Smoothing window: older accepted boxes beyond this are evicted.
pub const MAX_HISTORY_LENGTH: usize = 5;
/// Run the detector on every Nth frame of a live session.
pub const DETECTION_FRAME_INTERVAL: usize = 7;
