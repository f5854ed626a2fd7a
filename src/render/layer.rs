use crate::foundation::core::Canvas;
use crate::foundation::error::{GlintError, GlintResult};
use crate::foundation::math::{u8_to_unit, unit_to_u8};

/// A W×H raster with straight (non-premultiplied) RGBA channels normalized to
/// [0,1], interleaved row-major. Layers are built once before the frame loop
/// and stay immutable while it runs; the one exception is the scratch canvas
/// the scroll effect blits into per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerRgbaF32 {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` interleaved RGBA values.
    pub data: Vec<f32>,
}

impl LayerRgbaF32 {
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> GlintResult<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(GlintError::dimension(format!(
                "rgba8 buffer is {} bytes, expected {expected} for {width}x{height}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: rgba.iter().map(|&v| u8_to_unit(v)).collect(),
        })
    }

    /// Build from an opaque RGB8 buffer, synthesizing a fully opaque alpha
    /// plane. Required input normalization for alpha-less assets.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> GlintResult<Self> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(GlintError::dimension(format!(
                "rgb8 buffer is {} bytes, expected {expected} for {width}x{height}",
                rgb.len()
            )));
        }
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for px in rgb.chunks_exact(3) {
            data.push(u8_to_unit(px[0]));
            data.push(u8_to_unit(px[1]));
            data.push(u8_to_unit(px[2]));
            data.push(1.0);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A canvas-sized layer filled with one color.
    pub fn solid(canvas: Canvas, rgba: [f32; 4]) -> Self {
        let n = canvas.pixel_count();
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&rgba);
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// A fully transparent canvas-sized layer.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0.0; canvas.pixel_count() * 4],
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Extract the alpha channel as a standalone per-pixel plane.
    pub fn alpha_plane(&self) -> Vec<f32> {
        self.data.chunks_exact(4).map(|px| px[3]).collect()
    }

    /// Multiply each pixel's color by its alpha and force alpha to 1, i.e.
    /// flatten the layer over black. The shine effect's static base.
    pub fn flattened_over_black(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let a = px[3];
            data.push(px[0] * a);
            data.push(px[1] * a);
            data.push(px[2] * a);
            data.push(1.0);
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    pub fn ensure_same_size(&self, other: &Self) -> GlintResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(GlintError::dimension(format!(
                "layers are {}x{} and {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(())
    }

    /// Copy `src` into `self` with its top-left corner at `(dst_x, dst_y)`,
    /// clipping whatever falls outside the canvas. Offsets may be negative.
    pub fn blit(&mut self, src: &Self, dst_x: i64, dst_y: i64) {
        let dw = i64::from(self.width);
        let dh = i64::from(self.height);
        let sw = i64::from(src.width);
        let sh = i64::from(src.height);

        let x0 = dst_x.max(0);
        let y0 = dst_y.max(0);
        let x1 = (dst_x + sw).min(dw);
        let y1 = (dst_y + sh).min(dh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let row_len = ((x1 - x0) * 4) as usize;
        for dy in y0..y1 {
            let sy = dy - dst_y;
            let sx = x0 - dst_x;
            let src_off = ((sy * sw + sx) * 4) as usize;
            let dst_off = ((dy * dw + x0) * 4) as usize;
            self.data[dst_off..dst_off + row_len]
                .copy_from_slice(&src.data[src_off..src_off + row_len]);
        }
    }

    /// Convert to an opaque 8-bit RGB frame, dropping alpha.
    pub fn to_frame_rgb(&self) -> FrameRgb {
        let mut data = Vec::with_capacity(self.pixel_count() * 3);
        for px in self.data.chunks_exact(4) {
            data.push(unit_to_u8(px[0]));
            data.push(unit_to_u8(px[1]));
            data.push(unit_to_u8(px[2]));
        }
        FrameRgb {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// One finished frame: 3-channel, 8-bit, interleaved, row-major top-to-bottom.
/// Exactly the byte layout the encoder sink consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgb {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
