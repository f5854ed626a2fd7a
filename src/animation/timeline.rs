use crate::foundation::core::{Fps, FrameIndex, FrameRange};
use crate::foundation::error::{GlintError, GlintResult};

/// Fixed scalars defining the frame count and the progress-to-time mapping of
/// one animation. Set once at startup, read-only thereafter.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Total output length in seconds.
    pub total_secs: f64,
    /// When the effect window opens, in seconds from the start.
    pub effect_start_secs: f64,
    /// Effect window length in seconds.
    pub effect_secs: f64,
    pub fps: Fps,
}

impl Timeline {
    pub fn new(
        total_secs: f64,
        effect_start_secs: f64,
        effect_secs: f64,
        fps: Fps,
    ) -> GlintResult<Self> {
        let tl = Self {
            total_secs,
            effect_start_secs,
            effect_secs,
            fps,
        };
        tl.validate()?;
        Ok(tl)
    }

    /// A timeline whose effect window spans the whole duration.
    pub fn full(total_secs: f64, fps: Fps) -> GlintResult<Self> {
        Self::new(total_secs, 0.0, total_secs, fps)
    }

    pub fn validate(&self) -> GlintResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(GlintError::timeline("fps num and den must be > 0"));
        }
        if !self.total_secs.is_finite() || self.total_secs <= 0.0 {
            return Err(GlintError::timeline("total duration must be > 0 seconds"));
        }
        if !self.effect_start_secs.is_finite() || self.effect_start_secs < 0.0 {
            return Err(GlintError::timeline("effect start must be >= 0 seconds"));
        }
        if !self.effect_secs.is_finite() || self.effect_secs <= 0.0 {
            return Err(GlintError::timeline("effect duration must be > 0 seconds"));
        }
        if self.effect_start_secs + self.effect_secs > self.total_secs {
            return Err(GlintError::timeline(
                "effect window must end within the total duration",
            ));
        }
        if self.total_frames() == 0 {
            return Err(GlintError::timeline(
                "timeline is shorter than one frame at the configured fps",
            ));
        }
        if self.effect_range().is_empty() {
            return Err(GlintError::timeline(
                "effect window is shorter than one frame at the configured fps",
            ));
        }
        Ok(())
    }

    /// Total frame count, `round(total_secs * fps)`. Deterministic from the
    /// timeline configuration.
    pub fn total_frames(&self) -> u64 {
        self.fps.secs_to_frames_round(self.total_secs)
    }

    /// The effect window as a frame range. Start and length truncate toward
    /// zero, matching the second-to-frame mapping the effects were tuned with.
    pub fn effect_range(&self) -> FrameRange {
        let start = self.fps.secs_to_frames_floor(self.effect_start_secs);
        let len = self.fps.secs_to_frames_floor(self.effect_secs);
        FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(start + len),
        }
    }

    /// Progress of `idx` inside the effect window, or `None` when the frame
    /// lies before or after it.
    pub fn effect_progress(&self, idx: FrameIndex) -> Option<f64> {
        let range = self.effect_range();
        if !range.contains(idx) {
            return None;
        }
        Some((idx.0 - range.start.0) as f64 / range.len_frames() as f64)
    }

    /// Linear progress over the whole timeline: `idx / (n - 1)`, so the last
    /// frame lands exactly on 1.0. A single-frame timeline yields 0.
    pub fn linear_progress(&self, idx: FrameIndex) -> f64 {
        let n = self.total_frames();
        if n <= 1 {
            return 0.0;
        }
        (idx.0.min(n - 1)) as f64 / (n - 1) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
