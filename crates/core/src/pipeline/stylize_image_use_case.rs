use std::time::Instant;

use crate::capture::domain::frame_sink::FrameSink;
use crate::capture::domain::frame_source::FrameSource;
use crate::stylize::domain::style_transform::StyleTransform;
use crate::stylize::infrastructure::enhancement::EnhancementStage;

/// Single-photo stylization pipeline: capture → enhance → style → present.
pub struct StylizeImageUseCase {
    source: Box<dyn FrameSource>,
    sink: Box<dyn FrameSink>,
    enhancement: EnhancementStage,
    transform: Box<dyn StyleTransform>,
}

impl StylizeImageUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        sink: Box<dyn FrameSink>,
        transform: Box<dyn StyleTransform>,
    ) -> Self {
        Self {
            source,
            sink,
            enhancement: EnhancementStage::new(),
            transform,
        }
    }

    /// Captures one frame, styles it, and hands it to the sink.
    ///
    /// An empty capture means there is nothing to render: it is logged
    /// and the sink is never called.
    pub fn execute(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let frame = self.source.capture()?;
        if frame.is_empty() {
            log::warn!("Capture produced an empty frame, skipping stylization");
            return Ok(());
        }

        let started = Instant::now();
        let enhanced = self.enhancement.apply(&frame)?;
        log::debug!("Enhancement pass took {:?}", started.elapsed());

        let started = Instant::now();
        let styled = self.transform.apply(&enhanced)?;
        log::debug!("Style transform took {:?}", started.elapsed());

        self.sink.present(&styled)?;
        Ok(())
    }
}
