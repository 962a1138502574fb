//! Progress clock: per-phase countdown driven by an external tick source.

/// Tolerance for deciding a countdown has hit zero. Absorbs the rounding
/// that accumulates when the fraction is built from repeated subtraction.
const EXHAUST_EPS: f64 = 1e-9;

/// Countdown over the current phase, expressed as a remaining fraction in
/// `[0, 1]`: 1.0 means the phase just started, 0.0 means it has elapsed.
/// While paused, ticks are not consumed.
#[derive(Debug, Clone)]
pub struct ProgressClock {
    remaining: f64,
    running: bool,
    tick_interval: f64,
}

impl ProgressClock {
    pub(crate) fn new(tick_interval: f64) -> Self {
        Self {
            remaining: 1.0,
            running: false,
            tick_interval,
        }
    }

    #[inline]
    pub fn remaining_fraction(&self) -> f64 {
        self.remaining
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub(crate) fn reset(&mut self) {
        self.remaining = 1.0;
    }

    /// Consume one tick against a phase lasting `phase_duration` seconds.
    /// Returns true when this tick exhausts the countdown; the fraction is
    /// clamped to exactly 0.0 until the caller resets it for the next phase.
    pub(crate) fn tick(&mut self, phase_duration: f64) -> bool {
        if !self.running {
            return false;
        }
        if phase_duration <= 0.0 {
            // The engine never enters a zero-duration phase; exhaust instead
            // of dividing by zero if that invariant is ever broken.
            debug_assert!(false, "tick against zero-duration phase");
            self.remaining = 0.0;
            return true;
        }
        self.remaining -= self.tick_interval / phase_duration;
        if self.remaining <= EXHAUST_EPS {
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full_and_paused() {
        let clock = ProgressClock::new(0.1);
        assert_eq!(clock.remaining_fraction(), 1.0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_paused_clock_ignores_ticks() {
        let mut clock = ProgressClock::new(0.1);
        assert!(!clock.tick(1.0));
        assert_eq!(clock.remaining_fraction(), 1.0);
    }

    #[test]
    fn test_exact_tick_count_exhausts() {
        let mut clock = ProgressClock::new(0.1);
        clock.set_running(true);

        for _ in 0..9 {
            assert!(!clock.tick(1.0));
        }
        assert!(clock.tick(1.0));
        assert_eq!(clock.remaining_fraction(), 0.0);
    }

    #[test]
    fn test_fraction_decrements_proportionally() {
        let mut clock = ProgressClock::new(0.1);
        clock.set_running(true);

        clock.tick(2.0);
        assert!((clock.remaining_fraction() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_full_fraction() {
        let mut clock = ProgressClock::new(0.1);
        clock.set_running(true);
        clock.tick(1.0);
        clock.reset();
        assert_eq!(clock.remaining_fraction(), 1.0);
    }
}
