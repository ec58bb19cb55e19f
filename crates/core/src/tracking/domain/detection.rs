use crate::shared::face_box::FaceBox;
use crate::shared::landmarks::LandmarkSet;

/// One face candidate reported by a detector, before any gating.
#[derive(Clone, Debug)]
pub struct RawDetection {
    pub face_box: FaceBox,
    pub confidence: f64,
    pub landmarks: Option<LandmarkSet>,
}

/// Display-ready tracking output: the smoothed box plus the key facial
/// points, in source-frame pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingOverlay {
    pub face_box: FaceBox,
    pub landmarks: Vec<(f64, f64)>,
}
