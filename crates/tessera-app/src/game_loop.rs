//! Fixed-period tick clock.
//!
//! Host frames arrive at whatever rate the host runs; movement ticks fire at
//! a fixed period out of an accumulator. Ticks run one after another inside
//! [`TickClock::advance`], so they never overlap.

use std::ops::ControlFlow;

use tracing::warn;

/// Maximum frame time accepted per advance. Longer frames are clamped and the
/// simulation falls behind instead of running a burst of catch-up ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator that converts frame times into fixed-period ticks.
#[derive(Clone, Debug)]
pub struct TickClock {
    period: f64,
    accumulator: f64,
    tick_count: u64,
    frame_count: u64,
}

impl TickClock {
    /// A clock ticking every `period_ms` milliseconds. Zero is raised to one.
    pub fn from_millis(period_ms: u64) -> Self {
        Self {
            period: period_ms.max(1) as f64 / 1000.0,
            accumulator: 0.0,
            tick_count: 0,
            frame_count: 0,
        }
    }

    /// Tick period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Feed one host frame of `frame_time` seconds and run every tick that
    /// became due. `on_tick` receives the running tick number and may break
    /// to leave the remaining time in the accumulator.
    ///
    /// Returns the number of ticks run.
    pub fn advance(
        &mut self,
        frame_time: f64,
        mut on_tick: impl FnMut(u64) -> ControlFlow<()>,
    ) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }
        self.accumulator += frame_time;
        self.frame_count += 1;

        let mut ran = 0;
        while self.accumulator >= self.period {
            self.accumulator -= self.period;
            self.tick_count += 1;
            ran += 1;
            if on_tick(self.tick_count).is_break() {
                break;
            }
        }
        ran
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_all(_: u64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    #[test]
    fn test_single_period_runs_one_tick() {
        let mut clock = TickClock::from_millis(125);
        assert_eq!(clock.advance(0.125, run_all), 1);
        assert_eq!(clock.tick_count(), 1);
        assert_eq!(clock.advance(0.0, run_all), 0);
    }

    #[test]
    fn test_partial_frame_accumulates() {
        let mut clock = TickClock::from_millis(125);
        assert_eq!(clock.advance(0.0625, run_all), 0);
        assert_eq!(clock.advance(0.0625, run_all), 1);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_multiple_ticks_in_one_frame() {
        let mut clock = TickClock::from_millis(125);
        let mut seen = Vec::new();
        clock.advance(0.25, |n| {
            seen.push(n);
            ControlFlow::Continue(())
        });
        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = TickClock::from_millis(125);
        assert_eq!(clock.advance(10.0, run_all), 2);
        assert_eq!(clock.advance(0.0, run_all), 0);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut clock = TickClock::from_millis(125);
        assert_eq!(clock.advance(-1.0, run_all), 0);
        assert_eq!(clock.advance(0.125, run_all), 1);
    }

    #[test]
    fn test_break_keeps_remaining_time() {
        let mut clock = TickClock::from_millis(125);
        let ran = clock.advance(0.25, |_| ControlFlow::Break(()));
        assert_eq!(ran, 1);
        // The leftover period fires on the next frame, even a zero-length one.
        assert_eq!(clock.advance(0.0, run_all), 1);
    }

    #[test]
    fn test_thirty_ms_ticks_at_sixty_hz() {
        let mut clock = TickClock::from_millis(30);
        let mut ticks = 0;
        for _ in 0..60 {
            ticks += clock.advance(1.0 / 60.0, run_all);
        }
        assert_eq!(ticks, 33);
    }

    #[test]
    fn test_zero_period_raised() {
        let clock = TickClock::from_millis(0);
        assert!((clock.period() - 0.001).abs() < 1e-12);
    }
}
