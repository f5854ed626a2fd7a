use crate::foundation::core::Canvas;
use crate::foundation::error::{GlintError, GlintResult};

/// Build the static reveal mask for the scroll effect: a binary horizontal
/// strip of height `height * visible_height_factor` centered vertically, then
/// softened with a separable gaussian blur of kernel size `2 * feather_px + 1`.
///
/// Computed once per animation; the scroll only moves the content behind it,
/// never the mask itself. Returned plane has one value per pixel in [0,1].
pub fn feathered_strip(
    canvas: Canvas,
    visible_height_factor: f64,
    feather_px: u32,
) -> GlintResult<Vec<f32>> {
    if canvas.width == 0 || canvas.height == 0 {
        return Err(GlintError::validation("feather mask canvas must be non-empty"));
    }
    if !visible_height_factor.is_finite()
        || visible_height_factor <= 0.0
        || visible_height_factor > 1.0
    {
        return Err(GlintError::validation(
            "visible height factor must be in (0, 1]",
        ));
    }

    let w = canvas.width as usize;
    let h = canvas.height as usize;
    let visible = (f64::from(canvas.height) * visible_height_factor) as i64;
    let center_y = (h / 2) as i64;
    // Strip rows are inclusive of both edges, clamped to the canvas.
    let top = (center_y - visible / 2).clamp(0, h as i64 - 1) as usize;
    let bottom = (center_y + visible / 2).clamp(0, h as i64 - 1) as usize;

    let mut mask = vec![0.0f32; w * h];
    for row in mask.chunks_exact_mut(w).take(bottom + 1).skip(top) {
        row.fill(1.0);
    }

    if feather_px == 0 {
        return Ok(mask);
    }

    let kernel = gaussian_kernel(feather_px)?;
    let mut blurred = separable_blur(&mask, w, h, &kernel);
    // The f64-normalized weights sum one ULP above 1 after the f32 cast, so
    // fully covered rows overshoot 1.0; clamp to keep the documented range.
    for v in &mut blurred {
        *v = v.clamp(0.0, 1.0);
    }
    Ok(blurred)
}

/// Normalized gaussian weights for kernel size `2 * radius + 1`, sigma derived
/// from the kernel size: `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
fn gaussian_kernel(radius: u32) -> GlintResult<Vec<f32>> {
    let ksize = 2 * u64::from(radius) + 1;
    let sigma = 0.3 * ((ksize - 1) as f64 * 0.5 - 1.0) + 0.8;
    if sigma <= 0.0 {
        return Err(GlintError::validation("gaussian kernel sigma must be > 0"));
    }

    let r = radius as i64;
    let denom = 2.0 * sigma * sigma;
    let mut weights = Vec::with_capacity(ksize as usize);
    let mut sum = 0.0f64;
    for i in -r..=r {
        let x = i as f64;
        let wt = (-x * x / denom).exp();
        weights.push(wt);
        sum += wt;
    }

    Ok(weights.iter().map(|&wt| (wt / sum) as f32).collect())
}

/// Two-pass separable convolution over a single-channel plane, clamping
/// samples to the nearest edge pixel.
fn separable_blur(src: &[f32], w: usize, h: usize, kernel: &[f32]) -> Vec<f32> {
    let radius = (kernel.len() / 2) as i64;
    let mut tmp = vec![0.0f32; src.len()];
    let mut out = vec![0.0f32; src.len()];

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (ki, &kw) in kernel.iter().enumerate() {
                let sx = (x as i64 + ki as i64 - radius).clamp(0, w as i64 - 1) as usize;
                acc += kw * src[y * w + sx];
            }
            tmp[y * w + x] = acc;
        }
    }

    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (ki, &kw) in kernel.iter().enumerate() {
                let sy = (y as i64 + ki as i64 - radius).clamp(0, h as i64 - 1) as usize;
                acc += kw * tmp[sy * w + x];
            }
            out[y * w + x] = acc;
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/mask/feather.rs"]
mod tests;
