//! 68-point face landmarks with key-point filtering for display.
//!
//! Only the eye, nose and mouth points are ever rendered; the jawline and
//! eyebrow points add visual noise at overlay scale.

/// Points in the standard 68-point landmark model.
pub const LANDMARK_COUNT: usize = 68;

/// Display subset: left eye, right eye, nose, mouth, in that order.
const KEY_INDICES: [usize; 33] = [
    // left eye
    36, 37, 38, 39, 40, 41, //
    // right eye
    42, 43, 44, 45, 46, 47, //
    // nose
    27, 28, 29, 30, 31, 32, 33, 34, 35, //
    // mouth
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59,
];

/// A full set of 68 landmark positions for one detected face.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [(f64, f64); LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [(f64, f64); LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[(f64, f64); LANDMARK_COUNT] {
        &self.points
    }

    /// Eye, nose and mouth points in display order.
    pub fn key_points(&self) -> Vec<(f64, f64)> {
        KEY_INDICES.iter().map(|&i| self.points[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed_landmarks() -> LandmarkSet {
        // Encode the index into the coordinate so mapping is checkable.
        let mut points = [(0.0, 0.0); LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            *p = (i as f64, i as f64 * 10.0);
        }
        LandmarkSet::new(points)
    }

    #[test]
    fn test_key_points_count() {
        assert_eq!(indexed_landmarks().key_points().len(), 33);
    }

    #[test]
    fn test_key_points_start_with_left_eye() {
        let key = indexed_landmarks().key_points();
        assert_eq!(key[0], (36.0, 360.0));
        assert_eq!(key[5], (41.0, 410.0));
    }

    #[test]
    fn test_key_points_order_is_eyes_nose_mouth() {
        let key = indexed_landmarks().key_points();
        assert_eq!(key[6], (42.0, 420.0)); // right eye starts after left
        assert_eq!(key[12], (27.0, 270.0)); // nose follows the eyes
        assert_eq!(key[21], (48.0, 480.0)); // mouth is last
        assert_eq!(key[32], (59.0, 590.0));
    }

    #[test]
    fn test_key_points_exclude_jawline_and_brows() {
        let key = indexed_landmarks().key_points();
        for &(x, _) in &key {
            let index = x as usize;
            assert!(!(0..27).contains(&index), "jaw/brow point {index} leaked");
        }
    }

    #[test]
    fn test_points_returns_full_set() {
        let lm = indexed_landmarks();
        assert_eq!(lm.points().len(), LANDMARK_COUNT);
        assert_eq!(lm.points()[67], (67.0, 670.0));
    }
}
