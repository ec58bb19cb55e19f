use std::collections::VecDeque;

use crate::shared::constants::{
    CONFIDENCE_THRESHOLD, MAX_HISTORY_LENGTH, MIN_BOX_SIZE, MIN_CONSECUTIVE_DETECTIONS,
    MIN_SIZE_FACTOR,
};
use crate::shared::face_box::FaceBox;

use super::detection::{RawDetection, TrackingOverlay};

/// Bounded FIFO of recently accepted boxes used for smoothing.
type DetectionHistory = VecDeque<FaceBox>;

enum TrackerState {
    Idle,
    Accumulating {
        history: DetectionHistory,
        accepted: u32,
    },
    Tracking {
        history: DetectionHistory,
        overlay: TrackingOverlay,
    },
}

/// Debounces and smooths raw detections into a stable display box.
///
/// A detection frame with no accepted candidate drops the tracker back to
/// idle; a box is published only after three consecutive frames each
/// contribute an accepted detection. Published positions are a
/// recency-weighted average over the accepted history, so the overlay
/// trails a moving face instead of jittering with it.
pub struct FaceBoxStabilizer {
    state: TrackerState,
}

impl FaceBoxStabilizer {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
        }
    }

    /// Feeds one detection frame. Returns the freshly published overlay,
    /// or `None` while idle or still accumulating confidence.
    pub fn observe(&mut self, detections: &[RawDetection]) -> Option<TrackingOverlay> {
        match select_candidate(detections) {
            None => {
                self.state = TrackerState::Idle;
                None
            }
            Some(candidate) => self.accept(&candidate),
        }
    }

    fn accept(&mut self, candidate: &RawDetection) -> Option<TrackingOverlay> {
        let state = std::mem::replace(&mut self.state, TrackerState::Idle);
        let (mut history, accepted) = match state {
            TrackerState::Idle => (DetectionHistory::new(), 0),
            TrackerState::Accumulating { history, accepted } => (history, accepted),
            TrackerState::Tracking { history, .. } => (history, MIN_CONSECUTIVE_DETECTIONS),
        };

        history.push_back(candidate.face_box);
        if history.len() > MAX_HISTORY_LENGTH {
            history.pop_front();
        }

        let accepted = (accepted + 1).min(MIN_CONSECUTIVE_DETECTIONS);
        if accepted < MIN_CONSECUTIVE_DETECTIONS {
            self.state = TrackerState::Accumulating { history, accepted };
            return None;
        }

        let overlay = TrackingOverlay {
            face_box: smooth_history(&history),
            landmarks: candidate
                .landmarks
                .as_ref()
                .map(|set| set.key_points())
                .unwrap_or_default(),
        };
        self.state = TrackerState::Tracking {
            history,
            overlay: overlay.clone(),
        };
        Some(overlay)
    }

    /// Currently published overlay, if the tracker has locked on.
    pub fn overlay(&self) -> Option<&TrackingOverlay> {
        match &self.state {
            TrackerState::Tracking { overlay, .. } => Some(overlay),
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking { .. })
    }

    /// Drops all tracking state, as when a capture session ends.
    pub fn reset(&mut self) {
        self.state = TrackerState::Idle;
    }
}

impl Default for FaceBoxStabilizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Highest-confidence detection that passes the gate; the earliest entry
/// wins ties.
fn select_candidate(detections: &[RawDetection]) -> Option<RawDetection> {
    detections
        .iter()
        .filter(|d| passes_gate(d))
        .fold(None, |best: Option<&RawDetection>, d| match best {
            Some(b) if b.confidence >= d.confidence => Some(b),
            _ => Some(d),
        })
        .cloned()
}

fn passes_gate(detection: &RawDetection) -> bool {
    let min_dim = MIN_BOX_SIZE * MIN_SIZE_FACTOR;
    detection.confidence > CONFIDENCE_THRESHOLD
        && detection.face_box.width > min_dim
        && detection.face_box.height > min_dim
}

/// Weighted average over the history; the entry at position `i` (oldest
/// first) weighs `i + 1`, so the newest box pulls hardest.
fn smooth_history(history: &DetectionHistory) -> FaceBox {
    let mut sum = FaceBox {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };
    let mut weight_sum = 0.0;
    for (i, b) in history.iter().enumerate() {
        let weight = (i + 1) as f64;
        sum.x += b.x * weight;
        sum.y += b.y * weight;
        sum.width += b.width * weight;
        sum.height += b.height * weight;
        weight_sum += weight;
    }
    FaceBox {
        x: sum.x / weight_sum,
        y: sum.y / weight_sum,
        width: sum.width / weight_sum,
        height: sum.height / weight_sum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::landmarks::LandmarkSet;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn sized_detection(confidence: f64, width: f64, height: f64) -> RawDetection {
        RawDetection {
            face_box: FaceBox {
                x: 50.0,
                y: 60.0,
                width,
                height,
            },
            confidence,
            landmarks: None,
        }
    }

    fn strong_detection_at(x: f64) -> RawDetection {
        RawDetection {
            face_box: FaceBox {
                x,
                y: 5.0,
                width: 200.0,
                height: 200.0,
            },
            confidence: 0.99,
            landmarks: None,
        }
    }

    fn lock_on(stabilizer: &mut FaceBoxStabilizer, xs: &[f64]) -> Option<TrackingOverlay> {
        let mut last = None;
        for &x in xs {
            last = stabilizer.observe(&[strong_detection_at(x)]);
        }
        last
    }

    // ── gating ──────────────────────────────────────────────────────

    #[rstest]
    #[case(0.96, 130.0, 130.0, true)]
    #[case(0.95, 130.0, 130.0, false)] // confidence must be strictly above
    #[case(0.94, 130.0, 130.0, false)]
    #[case(0.96, 120.0, 130.0, false)] // width must be strictly above 120
    #[case(0.96, 130.0, 120.0, false)]
    #[case(0.96, 120.1, 120.1, true)]
    #[case(1.0, 119.0, 300.0, false)]
    fn test_gate_thresholds_are_strict(
        #[case] confidence: f64,
        #[case] width: f64,
        #[case] height: f64,
        #[case] expected: bool,
    ) {
        let detection = sized_detection(confidence, width, height);
        assert_eq!(passes_gate(&detection), expected);
    }

    #[test]
    fn test_rejected_detections_never_publish() {
        let mut stabilizer = FaceBoxStabilizer::new();
        for _ in 0..10 {
            let result = stabilizer.observe(&[sized_detection(0.95, 130.0, 130.0)]);
            assert!(result.is_none());
        }
        assert!(!stabilizer.is_tracking());
    }

    // ── candidate selection ─────────────────────────────────────────

    #[test]
    fn test_highest_confidence_candidate_wins() {
        let weaker = RawDetection {
            confidence: 0.97,
            ..strong_detection_at(10.0)
        };
        let stronger = strong_detection_at(50.0);
        let picked = select_candidate(&[weaker, stronger]).unwrap();
        assert_relative_eq!(picked.face_box.x, 50.0);
    }

    #[test]
    fn test_ties_keep_the_earlier_candidate() {
        let first = strong_detection_at(10.0);
        let second = strong_detection_at(90.0);
        let picked = select_candidate(&[first, second]).unwrap();
        assert_relative_eq!(picked.face_box.x, 10.0);
    }

    #[test]
    fn test_gated_out_candidates_are_not_considered() {
        let invalid = RawDetection {
            confidence: 0.5,
            ..strong_detection_at(10.0)
        };
        let valid = strong_detection_at(20.0);
        let picked = select_candidate(&[invalid, valid]).unwrap();
        assert_relative_eq!(picked.face_box.x, 20.0);
    }

    // ── debounce and publication ────────────────────────────────────

    #[test]
    fn test_no_overlay_before_third_acceptance() {
        let mut stabilizer = FaceBoxStabilizer::new();
        assert!(stabilizer.observe(&[strong_detection_at(10.0)]).is_none());
        assert!(stabilizer.observe(&[strong_detection_at(11.0)]).is_none());
        assert!(!stabilizer.is_tracking());
        assert!(stabilizer.overlay().is_none());
    }

    #[test]
    fn test_overlay_published_on_third_acceptance() {
        let mut stabilizer = FaceBoxStabilizer::new();
        let result = lock_on(&mut stabilizer, &[10.0, 10.0, 10.0]);
        assert!(result.is_some());
        assert!(stabilizer.is_tracking());
        assert!(stabilizer.overlay().is_some());
    }

    #[test]
    fn test_smoothing_weights_recent_boxes_more() {
        let mut stabilizer = FaceBoxStabilizer::new();
        let overlay = lock_on(&mut stabilizer, &[10.0, 13.0, 16.0]).unwrap();
        // (10*1 + 13*2 + 16*3) / 6
        assert_relative_eq!(overlay.face_box.x, 14.0);
        assert_relative_eq!(overlay.face_box.y, 5.0);
        assert_relative_eq!(overlay.face_box.width, 200.0);
    }

    #[test]
    fn test_tracking_keeps_updating_with_new_boxes() {
        let mut stabilizer = FaceBoxStabilizer::new();
        lock_on(&mut stabilizer, &[10.0, 13.0, 16.0]);
        let overlay = stabilizer.observe(&[strong_detection_at(19.0)]).unwrap();
        // (10*1 + 13*2 + 16*3 + 19*4) / 10
        assert_relative_eq!(overlay.face_box.x, 16.0);
    }

    #[test]
    fn test_history_keeps_only_five_most_recent() {
        let mut stabilizer = FaceBoxStabilizer::new();
        let xs: Vec<f64> = (0..8).map(|i| (i * 10) as f64).collect();
        let overlay = lock_on(&mut stabilizer, &xs).unwrap();
        // History is [30, 40, 50, 60, 70] with weights 1..=5.
        assert_relative_eq!(overlay.face_box.x, 850.0 / 15.0);
    }

    // ── reset behavior ──────────────────────────────────────────────

    #[test]
    fn test_empty_frame_resets_accumulation() {
        let mut stabilizer = FaceBoxStabilizer::new();
        lock_on(&mut stabilizer, &[10.0, 11.0]);
        stabilizer.observe(&[]);
        // Two more acceptances are not enough for a fresh lock.
        assert!(lock_on(&mut stabilizer, &[12.0, 13.0]).is_none());
        let overlay = stabilizer.observe(&[strong_detection_at(14.0)]).unwrap();
        // History restarted at 12: (12*1 + 13*2 + 14*3) / 6
        assert_relative_eq!(overlay.face_box.x, 80.0 / 6.0);
    }

    #[test]
    fn test_empty_frame_drops_established_track() {
        let mut stabilizer = FaceBoxStabilizer::new();
        lock_on(&mut stabilizer, &[10.0, 10.0, 10.0]);
        assert!(stabilizer.is_tracking());
        assert!(stabilizer.observe(&[]).is_none());
        assert!(!stabilizer.is_tracking());
        assert!(stabilizer.overlay().is_none());
    }

    #[test]
    fn test_all_rejected_counts_as_empty_frame() {
        let mut stabilizer = FaceBoxStabilizer::new();
        lock_on(&mut stabilizer, &[10.0, 10.0, 10.0]);
        stabilizer.observe(&[sized_detection(0.5, 130.0, 130.0)]);
        assert!(!stabilizer.is_tracking());
    }

    #[test]
    fn test_reset_requires_fresh_run() {
        let mut stabilizer = FaceBoxStabilizer::new();
        lock_on(&mut stabilizer, &[10.0, 10.0, 10.0]);
        stabilizer.reset();
        assert!(!stabilizer.is_tracking());
        assert!(stabilizer.overlay().is_none());
        assert!(lock_on(&mut stabilizer, &[20.0, 20.0]).is_none());
        assert!(stabilizer.observe(&[strong_detection_at(20.0)]).is_some());
    }

    // ── landmark filtering ──────────────────────────────────────────

    #[test]
    fn test_landmarks_reduced_to_key_subset() {
        let mut points = [(0.0, 0.0); 68];
        for (i, p) in points.iter_mut().enumerate() {
            *p = (i as f64, 0.0);
        }
        let mut candidate = strong_detection_at(10.0);
        candidate.landmarks = Some(LandmarkSet::new(points));

        let mut stabilizer = FaceBoxStabilizer::new();
        stabilizer.observe(std::slice::from_ref(&candidate));
        stabilizer.observe(std::slice::from_ref(&candidate));
        let overlay = stabilizer.observe(&[candidate]).unwrap();

        assert_eq!(overlay.landmarks.len(), 33);
        assert_relative_eq!(overlay.landmarks[0].0, 36.0); // left eye corner
        assert_relative_eq!(overlay.landmarks[32].0, 59.0); // mouth outline end
    }

    #[test]
    fn test_missing_landmarks_publish_empty_list() {
        let mut stabilizer = FaceBoxStabilizer::new();
        let overlay = lock_on(&mut stabilizer, &[10.0, 10.0, 10.0]).unwrap();
        assert!(overlay.landmarks.is_empty());
    }
}
