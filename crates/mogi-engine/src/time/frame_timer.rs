use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Measures the time between successive frame boundaries.
///
/// The first tick after construction or [`FrameTimer::reset`] reports `dt == 0`.
/// Delta time is not clamped; a stall shows up as one long frame.
#[derive(Debug, Clone, Default)]
pub struct FrameTimer {
    last: Option<Instant>,
    frame_index: u64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous timestamp so the next tick reports zero.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advances the timer using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the timer as if the frame boundary happened at `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Number of ticks so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn first_tick_is_zero() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.tick().dt, 0.0);
    }

    #[test]
    fn dt_is_difference_between_ticks() {
        let mut timer = FrameTimer::new();
        let t0 = Instant::now();
        timer.tick_at(t0);
        let ft = timer.tick_at(t0 + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn long_stalls_are_not_clamped() {
        let mut timer = FrameTimer::new();
        let t0 = Instant::now();
        timer.tick_at(t0);
        let ft = timer.tick_at(t0 + Duration::from_secs(2));
        assert!((ft.dt - 2.0).abs() < 1e-6);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut timer = FrameTimer::new();
        let t0 = Instant::now();
        timer.tick_at(t0);
        timer.reset();
        assert_eq!(timer.tick_at(t0 + Duration::from_secs(1)).dt, 0.0);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut timer = FrameTimer::new();
        let t0 = Instant::now();
        assert_eq!(timer.tick_at(t0).frame_index, 0);
        assert_eq!(timer.tick_at(t0).frame_index, 1);
        assert_eq!(timer.frame_index(), 2);
    }

    #[test]
    fn backwards_time_saturates_to_zero() {
        let mut timer = FrameTimer::new();
        let t0 = Instant::now() + Duration::from_secs(1);
        timer.tick_at(t0);
        assert_eq!(timer.tick_at(t0 - Duration::from_millis(5)).dt, 0.0);
    }
}
