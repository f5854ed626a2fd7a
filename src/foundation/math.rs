/// Linear interpolation between `a` and `b` at parameter `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Normalize an 8-bit channel value to [0,1].
pub fn u8_to_unit(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Convert a unit-range channel value to 8-bit storage.
///
/// Clamps to [0,255] first, then truncates. Every channel of every frame goes
/// through this exact conversion; mixing rounding modes between frames would
/// show up as banding flicker.
pub fn unit_to_u8(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
