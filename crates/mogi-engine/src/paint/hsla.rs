use std::fmt;

use super::Color;

/// Hue/saturation/lightness color with straight alpha.
///
/// `h` is in degrees `[0, 360)`; `s`, `l` and `a` are in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Converts to straight RGB and premultiplies.
    pub fn to_color(self) -> Color {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Color::from_straight(l, l, l, self.a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color::from_straight(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
            self.a,
        )
    }
}

impl From<Hsla> for Color {
    fn from(hsla: Hsla) -> Color {
        hsla.to_color()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({:.2},{:.2},{:.2},{:.2})", self.h, self.s, self.l, self.a)
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    } else if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5 && (a.a - b.a).abs() < 1e-5
    }

    #[test]
    fn primary_hues() {
        assert!(close(Hsla::new(0.0, 1.0, 0.5, 1.0).to_color(), Color::RED));
        assert!(close(Hsla::new(120.0, 1.0, 0.5, 1.0).to_color(), Color::GREEN));
        assert!(close(Hsla::new(240.0, 1.0, 0.5, 1.0).to_color(), Color::BLUE));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert!(close(Hsla::new(200.0, 0.0, 0.5, 1.0).to_color(), Color::GRAY));
    }

    #[test]
    fn hue_wraps_around() {
        assert!(close(Hsla::new(360.0, 1.0, 0.5, 1.0).to_color(), Color::RED));
    }

    #[test]
    fn alpha_is_premultiplied() {
        let c = Hsla::new(0.0, 1.0, 0.5, 0.5).to_color();
        assert!(close(c, Color::from_premul(0.5, 0.0, 0.0, 0.5)));
    }
}
