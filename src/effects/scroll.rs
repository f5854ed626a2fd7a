use crate::animation::ease::Ease;
use crate::animation::timeline::Timeline;
use crate::assets::text::TextBlock;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{GlintError, GlintResult};
use crate::foundation::math::lerp;
use crate::mask::feather::feathered_strip;
use crate::render::composite::{composite_over, multiply_planes};
use crate::render::layer::{FrameRgb, LayerRgbaF32};
use crate::render::pipeline::FrameSource;

/// Configuration for the vertically scrolling, feather-masked text sequence.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScrollConfig {
    /// Output frame dimensions (independent of the text block's size).
    pub canvas: Canvas,
    pub total_secs: f64,
    pub fps: Fps,
    /// Solid background color, straight RGB in [0,1].
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    /// Reveal strip height as a fraction of the frame height.
    #[serde(default = "default_visible_height_factor")]
    pub visible_height_factor: f64,
    /// Feather blur radius in pixels; kernel size is `2 * feather_px + 1`.
    #[serde(default = "default_feather_px")]
    pub feather_px: u32,
    #[serde(default = "default_scroll_ease")]
    pub ease: Ease,
}

fn default_background() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn default_visible_height_factor() -> f64 {
    0.20
}

fn default_feather_px() -> u32 {
    50
}

fn default_scroll_ease() -> Ease {
    Ease::InOutCubic
}

impl ScrollConfig {
    pub fn new(canvas: Canvas, total_secs: f64, fps: Fps) -> Self {
        Self {
            canvas,
            total_secs,
            fps,
            background: default_background(),
            visible_height_factor: default_visible_height_factor(),
            feather_px: default_feather_px(),
            ease: default_scroll_ease(),
        }
    }

    pub fn validate(&self) -> GlintResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GlintError::validation("scroll canvas must be non-empty"));
        }
        // visible_height_factor is checked by feathered_strip.
        self.timeline().map(|_| ())
    }

    /// The whole timeline is the animation window for the scroll.
    pub fn timeline(&self) -> GlintResult<Timeline> {
        Timeline::full(self.total_secs, self.fps)
    }
}

/// The year scroll: a pre-rendered text block slides vertically behind a
/// static feathered reveal strip, easing from its first line centered to its
/// last line centered.
pub struct ScrollEffect {
    cfg: ScrollConfig,
    timeline: Timeline,
    block: TextBlock,
    background: LayerRgbaF32,
    /// Static reveal mask; only the content behind it moves.
    feather: Vec<f32>,
    start_offset: f64,
    end_offset: f64,
    block_x: i64,
}

impl ScrollEffect {
    pub fn new(block: TextBlock, cfg: ScrollConfig) -> GlintResult<Self> {
        cfg.validate()?;
        let timeline = cfg.timeline()?;
        let feather = feathered_strip(cfg.canvas, cfg.visible_height_factor, cfg.feather_px)?;
        let background = LayerRgbaF32::solid(
            cfg.canvas,
            [cfg.background[0], cfg.background[1], cfg.background[2], 1.0],
        );
        let start_offset = block.start_offset(cfg.canvas);
        let end_offset = block.end_offset(cfg.canvas);
        // Text is centered horizontally; blitting clips if it overhangs.
        let block_x = (i64::from(cfg.canvas.width) - i64::from(block.layer.width)) / 2;

        Ok(Self {
            cfg,
            timeline,
            block,
            background,
            feather,
            start_offset,
            end_offset,
            block_x,
        })
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.cfg
    }

    /// The block's vertical offset (top edge, canvas coordinates) at `idx`,
    /// rounded to whole pixels.
    pub fn offset_at(&self, idx: FrameIndex) -> i64 {
        let progress = self.timeline.linear_progress(idx);
        let eased = self.cfg.ease.apply(progress);
        lerp(self.start_offset, self.end_offset, eased).round() as i64
    }
}

impl FrameSource for ScrollEffect {
    fn canvas(&self) -> Canvas {
        self.cfg.canvas
    }

    fn fps(&self) -> Fps {
        self.cfg.fps
    }

    fn frame_count(&self) -> u64 {
        self.timeline.total_frames()
    }

    #[tracing::instrument(skip(self), level = "debug")]
    fn render_frame(&self, idx: FrameIndex) -> GlintResult<FrameRgb> {
        let offset_y = self.offset_at(idx);

        let mut scrolled = LayerRgbaF32::transparent(self.cfg.canvas);
        scrolled.blit(&self.block.layer, self.block_x, offset_y);

        let mut mask = Vec::new();
        multiply_planes(&scrolled.alpha_plane(), &self.feather, &mut mask)?;

        composite_over(&self.background, &scrolled, &mask)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scroll.rs"]
mod tests;
