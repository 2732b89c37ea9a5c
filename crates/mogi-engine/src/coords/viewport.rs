use super::Vec2;

/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for converting logical px
/// positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// Orthographic projection as a column-major 4x4 matrix.
///
/// Equivalent to `glOrtho(0, width, height, 0, -1, 1)`: logical `(0, 0)` maps to
/// the top-left corner of clip space and `(width, height)` to the bottom-right.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    pub cols: [[f32; 4]; 4],
}

impl Projection {
    /// Top-left origin, +Y down mapping for a `width` × `height` canvas.
    pub fn top_left(width: f32, height: f32) -> Self {
        Self::orthographic(0.0, width, height, 0.0, -1.0, 1.0)
    }

    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fnr = far - near;
        Self {
            cols: [
                [2.0 / rl, 0.0, 0.0, 0.0],
                [0.0, 2.0 / tb, 0.0, 0.0],
                [0.0, 0.0, -2.0 / fnr, 0.0],
                [-(right + left) / rl, -(top + bottom) / tb, -(far + near) / fnr, 1.0],
            ],
        }
    }

    /// Maps a logical point (z = 0) to normalized device coordinates.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let c = &self.cols;
        Vec2::new(
            c[0][0] * p.x + c[1][0] * p.y + c[3][0],
            c[0][1] * p.x + c[1][1] * p.y + c[3][1],
        )
    }
}

/// Keeps the cached canvas size and its projection in sync with host resizes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportSync {
    viewport: Viewport,
    projection: Projection,
}

impl ViewportSync {
    /// Starts from `initial`. An invalid initial size falls back to 1×1 so the
    /// projection stays finite until the first real resize.
    pub fn new(initial: Viewport) -> Self {
        let viewport = if initial.is_valid() { initial } else { Viewport::new(1.0, 1.0) };
        Self {
            viewport,
            projection: Projection::top_left(viewport.width, viewport.height),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Applies a host-reported size change.
    ///
    /// Zero, negative or non-finite sizes (minimized windows) are ignored and the
    /// previous mapping is kept. Returns whether the mapping changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let next = Viewport::new(width, height);
        if !next.is_valid() {
            return false;
        }
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        self.projection = Projection::top_left(width, height);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
    }

    // ── Projection ────────────────────────────────────────────────────────

    #[test]
    fn top_left_maps_origin_to_upper_left_ndc() {
        let p = Projection::top_left(800.0, 600.0);
        assert!(approx(p.apply(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn top_left_maps_extent_to_lower_right_ndc() {
        let p = Projection::top_left(800.0, 600.0);
        assert!(approx(p.apply(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn y_grows_downward() {
        let p = Projection::top_left(100.0, 100.0);
        let upper = p.apply(Vec2::new(50.0, 10.0));
        let lower = p.apply(Vec2::new(50.0, 90.0));
        assert!(upper.y > lower.y);
    }

    // ── ViewportSync ──────────────────────────────────────────────────────

    #[test]
    fn resize_updates_size_and_mapping() {
        let mut sync = ViewportSync::new(Viewport::new(800.0, 600.0));
        assert!(sync.resize(1024.0, 768.0));
        assert_eq!(sync.viewport(), Viewport::new(1024.0, 768.0));
        assert!(approx(sync.projection().apply(Vec2::new(1024.0, 768.0)), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn zero_resize_keeps_previous_mapping() {
        let mut sync = ViewportSync::new(Viewport::new(800.0, 600.0));
        let before = *sync.projection();
        assert!(!sync.resize(0.0, 0.0));
        assert_eq!(sync.viewport(), Viewport::new(800.0, 600.0));
        assert_eq!(*sync.projection(), before);
    }

    #[test]
    fn negative_or_nan_resize_is_ignored() {
        let mut sync = ViewportSync::new(Viewport::new(320.0, 240.0));
        assert!(!sync.resize(-5.0, 100.0));
        assert!(!sync.resize(100.0, f32::NAN));
        assert_eq!(sync.viewport(), Viewport::new(320.0, 240.0));
    }

    #[test]
    fn invalid_initial_size_falls_back_to_unit() {
        let sync = ViewportSync::new(Viewport::new(0.0, 0.0));
        assert_eq!(sync.viewport(), Viewport::new(1.0, 1.0));
    }
}
