use crate::foundation::core::Canvas;
use crate::foundation::error::{GlintError, GlintResult};
use crate::foundation::math::lerp;

/// Shape parameter of the gaussian sweep band: the band's half-width divides
/// by this before entering the exponential. Empirically tuned; changing it
/// changes the visual calibration of every shine render.
pub const GAUSS_BAND_DIVISOR: f64 = 2.5;

/// Per-pixel projection of pixel coordinates onto the sweep axis, the
/// direction perpendicular to the shine bar's visual angle.
///
/// Computed once per animation, immutable afterwards and shared by every
/// frame. `sweep_start`/`sweep_end` pad the projected extent by one band
/// width on each side so the bar is fully off-frame at both ends of the
/// traversal.
#[derive(Clone, Debug)]
pub struct SweepField {
    width: u32,
    height: u32,
    values: Vec<f32>,
    min: f32,
    max: f32,
    band_width: f64,
}

impl SweepField {
    pub fn build(canvas: Canvas, angle_deg: f64, width_factor: f64) -> GlintResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(GlintError::validation("sweep field canvas must be non-empty"));
        }
        if !width_factor.is_finite() || width_factor <= 0.0 {
            return Err(GlintError::validation("sweep width factor must be > 0"));
        }

        // The sweep travels perpendicular to the bar's visual angle.
        let theta = (angle_deg + 90.0).to_radians();
        let (sin, cos) = theta.sin_cos();

        let mut values = Vec::with_capacity(canvas.pixel_count());
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let v = (f64::from(x) * cos + f64::from(y) * sin) as f32;
                min = min.min(v);
                max = max.max(v);
                values.push(v);
            }
        }

        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            values,
            min,
            max,
            band_width: f64::from(canvas.width) * width_factor,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Band width in projected units (pixels along the sweep axis).
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// First band center of the traversal, one band width before the field's
    /// minimum projection.
    pub fn sweep_start(&self) -> f64 {
        f64::from(self.min) - self.band_width
    }

    /// Last band center, one band width past the maximum projection.
    pub fn sweep_end(&self) -> f64 {
        f64::from(self.max) + self.band_width
    }

    /// Band center for an eased progress value in [0,1].
    pub fn position_at(&self, eased: f64) -> f64 {
        lerp(self.sweep_start(), self.sweep_end(), eased)
    }

    /// Fill `out` with the gaussian band mask centered at `center`:
    /// `exp(-((v - center) / (band_width / divisor))^2)` per pixel.
    ///
    /// Values are never explicitly clamped; the exponential decays to ~0 away
    /// from the band on its own.
    pub fn gaussian_band(&self, center: f64, divisor: f64, out: &mut Vec<f32>) {
        let sigma = (self.band_width / divisor) as f32;
        let center = center as f32;
        out.clear();
        out.extend(self.values.iter().map(|&v| {
            let d = (v - center) / sigma;
            (-(d * d)).exp()
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/field.rs"]
mod tests;
