//! Wall-clock pacing for the 60 Hz timer tick.
//!
//! Hosts that call `run_frame()` at the display rate get timer decay for
//! free. Hosts that drive `step()` directly feed elapsed wall time into a
//! `TimerClock` and call `tick_timers()` for each tick it reports due.
//! The sub-period remainder carries over between calls, so a stalled host
//! catches up in one burst instead of losing ticks.

use std::time::Duration;

/// Timer rate in ticks per second.
pub const TIMER_HZ: u32 = 60;

/// Interval between timer ticks (1/60 s).
pub const TICK_PERIOD: Duration = Duration::from_micros(16_667);

/// Elapsed-time accumulator producing 60 Hz ticks.
pub struct TimerClock {
    accumulated: Duration,
}

impl TimerClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
        }
    }

    /// Add elapsed wall time and return the number of ticks now due.
    ///
    /// After a stall this returns several ticks at once; time below one
    /// period stays accumulated for the next call.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let due = self.accumulated.as_nanos() / TICK_PERIOD.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.accumulated -= TICK_PERIOD * due;
        due
    }

    /// Drop any accumulated time (e.g. when the host resumes from pause).
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for TimerClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_period_elapsed_yields_no_tick() {
        let mut clock = TimerClock::new();
        assert_eq!(clock.advance(TICK_PERIOD / 2), 0);
    }

    #[test]
    fn whole_periods_yield_ticks() {
        let mut clock = TimerClock::new();
        assert_eq!(clock.advance(TICK_PERIOD), 1);
        assert_eq!(clock.advance(TICK_PERIOD * 3), 3);
    }

    #[test]
    fn remainder_carries_between_calls() {
        let mut clock = TimerClock::new();
        assert_eq!(clock.advance(TICK_PERIOD / 2), 0);
        assert_eq!(clock.advance(TICK_PERIOD / 2), 1);
    }

    #[test]
    fn stall_catches_up_in_one_burst() {
        let mut clock = TimerClock::new();
        // A half-second stall is due a full 30 ticks, not one.
        assert_eq!(clock.advance(TICK_PERIOD * 30), 30);
    }

    #[test]
    fn quarter_periods_accumulate_exactly() {
        let mut clock = TimerClock::new();
        let mut ticks = 0;
        for _ in 0..100 {
            ticks += clock.advance(TICK_PERIOD / 4);
        }
        assert_eq!(ticks, 25);
    }

    #[test]
    fn reset_discards_partial_progress() {
        let mut clock = TimerClock::new();
        assert_eq!(clock.advance(TICK_PERIOD / 2), 0);
        clock.reset();
        assert_eq!(clock.advance(TICK_PERIOD / 2), 0);
    }
}
