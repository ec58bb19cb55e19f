/// Axis-aligned face bounding box in source-frame pixel coordinates.
///
/// Coordinates stay fractional through smoothing; rendering rounds at the
/// last moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
