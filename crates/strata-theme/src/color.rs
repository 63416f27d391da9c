//! Linear RGBA colour with clamped interpolation.

use serde::{Deserialize, Serialize};

/// An RGBA colour with `f32` channels in `[0, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// An opaque colour.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Interpolates every channel from `self` towards `other`.
    ///
    /// `t` is clamped to `[0, 1]`, so `t = 0` yields `self` and `t = 1` yields `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Grey shade of `value` on a black to white ramp.
    pub fn grey(value: f32) -> Self {
        Self::BLACK.lerp(Self::WHITE, value)
    }

    /// Converts to 8-bit channels, clamping out-of-range values.
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::rgb(1.0, 0.0, 0.0);
        let b = Color::rgb(0.0, 0.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_lerp_clamps_factor() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn test_grey_ramp() {
        assert_eq!(Color::grey(0.0), Color::BLACK);
        assert_eq!(Color::grey(1.0), Color::WHITE);
        assert_eq!(Color::grey(0.25).g, 0.25);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Color::MAGENTA.to_rgba8(), [255, 0, 255, 255]);
        assert_eq!(Color::rgb(0.5, 2.0, -1.0).to_rgba8(), [128, 255, 0, 255]);
    }

    #[test]
    fn test_missing_alpha_defaults_to_opaque() {
        let color: Color = ron::from_str("(r: 0.2, g: 0.4, b: 0.6)").unwrap();
        assert_eq!(color.a, 1.0);
    }
}
