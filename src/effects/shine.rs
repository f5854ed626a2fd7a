use crate::animation::ease::Ease;
use crate::animation::timeline::Timeline;
use crate::assets::color::with_lightness;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::GlintResult;
use crate::mask::field::{GAUSS_BAND_DIVISOR, SweepField};
use crate::render::composite::{composite_over, multiply_planes};
use crate::render::layer::{FrameRgb, LayerRgbaF32};
use crate::render::pipeline::FrameSource;

/// Configuration for the diagonal shine sweep over an icon.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShineConfig {
    pub timeline: Timeline,
    /// Visual angle of the shine bar in degrees.
    #[serde(default = "default_angle_deg")]
    pub angle_deg: f64,
    /// Bar width as a fraction of the icon's width.
    #[serde(default = "default_width_factor")]
    pub width_factor: f64,
    /// Gaussian band shape divisor. Overridable, but the default is the
    /// tuned value every shine render was calibrated against.
    #[serde(default = "default_band_divisor")]
    pub band_divisor: f64,
    #[serde(default = "default_shine_ease")]
    pub ease: Ease,
}

fn default_angle_deg() -> f64 {
    -60.0
}

fn default_width_factor() -> f64 {
    0.25
}

fn default_band_divisor() -> f64 {
    GAUSS_BAND_DIVISOR
}

fn default_shine_ease() -> Ease {
    Ease::OutQuad
}

impl ShineConfig {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            angle_deg: default_angle_deg(),
            width_factor: default_width_factor(),
            band_divisor: default_band_divisor(),
            ease: default_shine_ease(),
        }
    }

    pub fn validate(&self) -> GlintResult<()> {
        self.timeline.validate()?;
        if !self.band_divisor.is_finite() || self.band_divisor <= 0.0 {
            return Err(crate::foundation::error::GlintError::validation(
                "shine band divisor must be > 0",
            ));
        }
        // width_factor is checked by SweepField::build.
        Ok(())
    }
}

/// The shine sweep: a soft gaussian band of the icon's maximum-lightness
/// variant travels across the icon once, confined to its silhouette.
///
/// Everything the per-frame loop needs is precomputed here: the base layer
/// (icon flattened over black), the lightness-maxed foreground, the icon's
/// alpha plane and the sweep projection field.
pub struct ShineEffect {
    cfg: ShineConfig,
    base: LayerRgbaF32,
    shine: LayerRgbaF32,
    icon_alpha: Vec<f32>,
    field: SweepField,
    effect_range: FrameRange,
    total_frames: u64,
}

impl ShineEffect {
    pub fn new(icon: LayerRgbaF32, cfg: ShineConfig) -> GlintResult<Self> {
        cfg.validate()?;
        let field = SweepField::build(icon.canvas(), cfg.angle_deg, cfg.width_factor)?;
        let base = icon.flattened_over_black();
        let shine = with_lightness(&icon, 1.0);
        let icon_alpha = icon.alpha_plane();

        Ok(Self {
            base,
            shine,
            icon_alpha,
            field,
            effect_range: cfg.timeline.effect_range(),
            total_frames: cfg.timeline.total_frames(),
            cfg,
        })
    }

    pub fn config(&self) -> &ShineConfig {
        &self.cfg
    }

    /// The frame emitted before and after the effect window.
    pub fn static_frame(&self) -> FrameRgb {
        self.base.to_frame_rgb()
    }
}

impl FrameSource for ShineEffect {
    fn canvas(&self) -> Canvas {
        self.base.canvas()
    }

    fn fps(&self) -> Fps {
        self.cfg.timeline.fps
    }

    fn frame_count(&self) -> u64 {
        self.total_frames
    }

    #[tracing::instrument(skip(self), level = "debug")]
    fn render_frame(&self, idx: FrameIndex) -> GlintResult<FrameRgb> {
        let Some(progress) = self.cfg.timeline.effect_progress(idx) else {
            // Outside the window the mask contributes nothing; emit the static
            // base unchanged so such frames are bit-identical.
            return Ok(self.static_frame());
        };
        debug_assert!(self.effect_range.contains(idx));

        let eased = self.cfg.ease.apply(progress);
        let center = self.field.position_at(eased);

        let mut band = Vec::new();
        self.field
            .gaussian_band(center, self.cfg.band_divisor, &mut band);
        let mut mask = Vec::new();
        multiply_planes(&band, &self.icon_alpha, &mut mask)?;

        composite_over(&self.base, &self.shine, &mask)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shine.rs"]
mod tests;
