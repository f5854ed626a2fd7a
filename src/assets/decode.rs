use std::path::Path;

use crate::foundation::error::{GlintError, GlintResult};
use crate::render::layer::LayerRgbaF32;

/// Decode encoded image bytes into a normalized RGBA layer.
///
/// Sources without an alpha channel come back fully opaque; the compositor
/// relies on every layer carrying an alpha plane.
pub fn decode_image(bytes: &[u8]) -> GlintResult<LayerRgbaF32> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| GlintError::asset(format!("decode image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    LayerRgbaF32::from_rgba8(width, height, rgba.as_raw())
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> GlintResult<LayerRgbaF32> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| GlintError::asset(format!("read '{}': {e}", path.display())))?;
    decode_image(&bytes).map_err(|e| match e {
        GlintError::Asset(msg) => GlintError::asset(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
