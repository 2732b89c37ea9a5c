/// Running frame-rate statistics fed with per-frame delta times.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    fps: f32,
    total_frames: u64,
    total_time: f64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame that took `dt` seconds.
    pub fn record(&mut self, dt: f32) {
        self.total_frames += 1;
        if dt > 0.0 && dt.is_finite() {
            self.fps = 1.0 / dt;
            self.total_time += dt as f64;
        } else {
            self.fps = 0.0;
        }
    }

    /// Instantaneous rate from the last recorded frame.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// `total_frames / total_time`, or zero before any time has elapsed.
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            (self.total_frames as f64 / self.total_time) as f32
        } else {
            0.0
        }
    }

    #[inline]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Accumulated seconds.
    #[inline]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_are_zero() {
        let s = FrameStats::new();
        assert_eq!(s.fps(), 0.0);
        assert_eq!(s.average_fps(), 0.0);
        assert_eq!(s.total_frames(), 0);
    }

    #[test]
    fn zero_dt_frame_counts_but_reports_zero_fps() {
        let mut s = FrameStats::new();
        s.record(0.0);
        assert_eq!(s.total_frames(), 1);
        assert_eq!(s.fps(), 0.0);
        assert_eq!(s.average_fps(), 0.0);
    }

    #[test]
    fn fps_is_reciprocal_of_dt() {
        let mut s = FrameStats::new();
        s.record(0.25);
        assert!((s.fps() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn average_uses_all_frames() {
        let mut s = FrameStats::new();
        s.record(0.0);
        s.record(0.5);
        s.record(0.5);
        // three frames over one second
        assert!((s.average_fps() - 3.0).abs() < 1e-5);
        assert!((s.total_time() - 1.0).abs() < 1e-9);
    }
}
