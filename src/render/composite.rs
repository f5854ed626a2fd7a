use crate::foundation::error::{GlintError, GlintResult};
use crate::foundation::math::unit_to_u8;
use crate::render::layer::{FrameRgb, LayerRgbaF32};

/// Alpha-over blend of `fg` onto `base` through a per-pixel mask, producing an
/// opaque 8-bit frame.
///
/// Per channel, per pixel: `out = fg * m + base * (1 - m)`, with the mask
/// broadcast across channels. All math runs in f32 normalized to [0,1]; the
/// final conversion clamps then truncates (see
/// [`unit_to_u8`](crate::foundation::math::unit_to_u8)).
///
/// Both layers' own alpha channels are ignored here: callers fold layer alpha
/// into the mask beforehand (the shine effect multiplies the gaussian band by
/// the icon's silhouette, the scroll effect multiplies the text alpha by the
/// feather strip).
pub fn composite_over(
    base: &LayerRgbaF32,
    fg: &LayerRgbaF32,
    mask: &[f32],
) -> GlintResult<FrameRgb> {
    base.ensure_same_size(fg)?;
    if mask.len() != base.pixel_count() {
        return Err(GlintError::dimension(format!(
            "mask has {} values, expected {} for {}x{}",
            mask.len(),
            base.pixel_count(),
            base.width,
            base.height
        )));
    }

    let mut data = Vec::with_capacity(base.pixel_count() * 3);
    for ((b, f), &m) in base
        .data
        .chunks_exact(4)
        .zip(fg.data.chunks_exact(4))
        .zip(mask)
    {
        let inv = 1.0 - m;
        data.push(unit_to_u8(f[0] * m + b[0] * inv));
        data.push(unit_to_u8(f[1] * m + b[1] * inv));
        data.push(unit_to_u8(f[2] * m + b[2] * inv));
    }

    Ok(FrameRgb {
        width: base.width,
        height: base.height,
        data,
    })
}

/// Multiply two per-pixel planes into `out`. Used to fold a layer's alpha
/// channel into a mask.
pub fn multiply_planes(a: &[f32], b: &[f32], out: &mut Vec<f32>) -> GlintResult<()> {
    if a.len() != b.len() {
        return Err(GlintError::dimension(format!(
            "planes have {} and {} values",
            a.len(),
            b.len()
        )));
    }
    out.clear();
    out.extend(a.iter().zip(b).map(|(&x, &y)| x * y));
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
