use crate::render::layer::LayerRgbaF32;

/// Remap every pixel of `layer` to the given HSL lightness, keeping hue,
/// saturation and alpha. The shine effect feeds this `1.0` to derive the
/// "shine white" foreground from the icon.
pub fn with_lightness(layer: &LayerRgbaF32, lightness: f64) -> LayerRgbaF32 {
    let l = lightness.clamp(0.0, 1.0);
    let mut data = Vec::with_capacity(layer.data.len());
    for px in layer.data.chunks_exact(4) {
        let (h, s, _) = rgb_to_hsl(f64::from(px[0]), f64::from(px[1]), f64::from(px[2]));
        let (r, g, b) = hsl_to_rgb(h, s, l);
        data.push(r as f32);
        data.push(g as f32);
        data.push(b as f32);
        data.push(px[3]);
    }
    LayerRgbaF32 {
        width: layer.width,
        height: layer.height,
        data,
    }
}

/// Standard sRGB -> HSL with all components normalized to [0,1]
/// (hue included).
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    (h, s, l)
}

/// Standard HSL -> sRGB, inputs and outputs in [0,1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
