use crate::foundation::core::Canvas;
use crate::foundation::error::{GlintError, GlintResult};
use crate::render::layer::LayerRgbaF32;

/// A pre-rendered multi-line text raster plus the vertical metrics needed to
/// center any of its lines in the reveal window.
///
/// Font rasterization and line layout happen upstream; the engine only needs
/// the finished RGBA block, the internal padding it was rendered with, and
/// the pixel height of a single line.
#[derive(Clone, Debug)]
pub struct TextBlock {
    pub layer: LayerRgbaF32,
    /// Padding between the raster's edges and the first/last line, in pixels.
    pub padding_px: u32,
    /// Height of one rendered line, excluding inter-line spacing.
    pub line_height_px: f64,
}

impl TextBlock {
    pub fn new(layer: LayerRgbaF32, padding_px: u32, line_height_px: f64) -> GlintResult<Self> {
        if 2 * padding_px >= layer.height {
            return Err(GlintError::validation(format!(
                "text block padding {padding_px}px leaves no content in a {}px-tall raster",
                layer.height
            )));
        }
        let block = Self {
            layer,
            padding_px,
            line_height_px,
        };
        if !line_height_px.is_finite()
            || line_height_px <= 0.0
            || line_height_px > f64::from(block.content_height())
        {
            return Err(GlintError::validation(
                "text block line height must be > 0 and fit inside the content area",
            ));
        }
        Ok(block)
    }

    /// Height of the text content between the paddings.
    pub fn content_height(&self) -> u32 {
        self.layer.height - 2 * self.padding_px
    }

    /// Vertical offset of the raster's top edge that centers the first line
    /// on the canvas midline.
    pub fn start_offset(&self, canvas: Canvas) -> f64 {
        f64::from(canvas.height) / 2.0 - (f64::from(self.padding_px) + self.line_height_px / 2.0)
    }

    /// Offset that centers the last line on the canvas midline.
    pub fn end_offset(&self, canvas: Canvas) -> f64 {
        f64::from(canvas.height) / 2.0
            - (f64::from(self.padding_px) + f64::from(self.content_height())
                - self.line_height_px / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
