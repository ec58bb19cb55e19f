use crate::shared::constants::DETECTION_FRAME_INTERVAL;
use crate::shared::error::BufferError;
use crate::shared::pixel_buffer::PixelBuffer;
use crate::tracking::domain::detection::TrackingOverlay;
use crate::tracking::domain::face_detector::FaceDetector;
use crate::tracking::domain::stabilizer::FaceBoxStabilizer;

/// Live tracking loop state: runs the detector every N frames and keeps
/// the stabilized overlay alive in between.
///
/// A detector failure on one frame is logged and treated as a frame with
/// no detections; the session itself keeps running.
pub struct TrackingSession {
    detector: Box<dyn FaceDetector>,
    stabilizer: FaceBoxStabilizer,
    detection_interval: usize,
    frame_count: usize,
}

impl TrackingSession {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        detection_interval: usize,
    ) -> Result<Self, &'static str> {
        if detection_interval < 1 {
            return Err("detection_interval must be >= 1");
        }
        Ok(Self {
            detector,
            stabilizer: FaceBoxStabilizer::new(),
            detection_interval,
            frame_count: 0,
        })
    }

    pub fn with_default_interval(detector: Box<dyn FaceDetector>) -> Self {
        Self {
            detector,
            stabilizer: FaceBoxStabilizer::new(),
            detection_interval: DETECTION_FRAME_INTERVAL,
            frame_count: 0,
        }
    }

    /// Feeds the next camera frame and returns the overlay to draw on it,
    /// if the tracker currently has a lock.
    pub fn advance(&mut self, frame: &PixelBuffer) -> Result<Option<TrackingOverlay>, BufferError> {
        frame.validate()?;

        if self.frame_count % self.detection_interval == 0 {
            let detections = match self.detector.detect(frame) {
                Ok(detections) => detections,
                Err(e) => {
                    log::warn!("Face detection failed, treating frame as empty: {e}");
                    Vec::new()
                }
            };
            self.stabilizer.observe(&detections);
        }
        self.frame_count += 1;

        Ok(self.stabilizer.overlay().cloned())
    }

    /// Ends the session: the next `advance` starts from a clean slate.
    pub fn stop(&mut self) {
        self.stabilizer.reset();
        self.frame_count = 0;
    }
}
