use std::fmt;

/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are multiplied by `a`. Renderers blend with
/// `One, OneMinusSrcAlpha`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const RED: Color = Color::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::opaque(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::opaque(0.5, 0.5, 0.5);
    pub const YELLOW: Color = Color::opaque(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::opaque(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::opaque(1.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::opaque(1.0, 0.5, 0.0);
    pub const PINK: Color = Color::opaque(1.0, 0.75, 0.8);
    pub const PURPLE: Color = Color::opaque(0.5, 0.0, 0.5);
    pub const BROWN: Color = Color::opaque(0.6, 0.3, 0.2);
    pub const SKIN: Color = Color::opaque(0.9, 0.8, 0.7);

    #[inline]
    pub const fn transparent() -> Self {
        Self::TRANSPARENT
    }

    /// Opaque color; premultiplied and straight forms coincide at `a == 1`.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a premultiplied color from straight RGBA bytes (`0`–`255`), as
    /// produced by hex literals and decoded images.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Alpha-composites `self` over `dst` (Porter-Duff "over" on premultiplied values).
    #[inline]
    pub fn blend_over(self, dst: Color) -> Color {
        let inv = 1.0 - self.a;
        Self {
            r: self.r + dst.r * inv,
            g: self.g + dst.g * inv,
            b: self.b + dst.b * inv,
            a: self.a + dst.a * inv,
        }
    }

    /// Returns the color with alpha scaled by `factor` (clamped to [0, 1]).
    #[inline]
    pub fn with_opacity(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self { r: self.r * f, g: self.g * f, b: self.b * f, a: self.a * f }
    }

    /// Channels as an array, for GPU vertex data.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    /// Formats the straight-alpha form as `rgba(r,g,b,a)` with two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_straight();
        write!(f, "rgba({r:.2},{g:.2},{b:.2},{a:.2})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn to_straight_round_trips_translucent_color() {
        let (r, g, b, a) = Color::from_straight(0.2, 0.4, 0.8, 0.5).to_straight();
        assert!((r - 0.2).abs() < 1e-6 && (g - 0.4).abs() < 1e-6 && (b - 0.8).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }

    #[test]
    fn opaque_over_anything_is_itself() {
        assert_eq!(Color::RED.blend_over(Color::BLUE), Color::RED);
    }

    #[test]
    fn transparent_over_dst_is_dst() {
        assert_eq!(Color::TRANSPARENT.blend_over(Color::GREEN), Color::GREEN);
    }

    #[test]
    fn half_white_over_black_is_mid_gray() {
        let c = Color::from_straight(1.0, 1.0, 1.0, 0.5).blend_over(Color::BLACK);
        assert_eq!(c, Color::from_premul(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn display_uses_straight_alpha() {
        assert_eq!(Color::from_straight(1.0, 0.0, 0.0, 0.5).to_string(), "rgba(1.00,0.00,0.00,0.50)");
    }

    #[test]
    fn with_opacity_scales_every_channel() {
        let c = Color::opaque(1.0, 0.5, 0.0).with_opacity(0.5);
        assert_eq!(c, Color::from_premul(0.5, 0.25, 0.0, 0.5));
        assert_eq!(Color::WHITE.with_opacity(2.0), Color::WHITE);
    }
}
