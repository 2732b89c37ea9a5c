use super::Vec2;

/// Circle in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Line segment in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
}

impl Line {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn delta(self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.delta().length()
    }

    /// Point at `dist` logical pixels from `start` along `dir` (a unit vector).
    #[inline]
    pub(crate) fn point_at(self, dir: Vec2, dist: f32) -> Vec2 {
        self.start + dir * dist
    }
}
