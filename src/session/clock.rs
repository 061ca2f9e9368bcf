//! Fixed-step logic clock driven by a variable-rate frame loop.

use std::time::Duration;

/// Accumulates frame time and fires at most one logic tick per frame.
///
/// ```
/// use std::time::Duration;
/// use snake_words::session::GameClock;
///
/// let mut clock = GameClock::new(Duration::from_millis(500));
///
/// assert!(!clock.advance(Duration::from_millis(300)));
/// assert!(clock.advance(Duration::from_millis(300)));
/// // 100ms carried over into the next interval
/// assert_eq!(clock.pending(), Duration::from_millis(100));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameClock {
    interval: Duration,
    since_last_tick: Duration,
}

impl GameClock {
    /// Create a clock that ticks every `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            since_last_tick: Duration::ZERO,
        }
    }

    /// Time between ticks.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated towards the next tick.
    #[must_use]
    pub fn pending(&self) -> Duration {
        self.since_last_tick
    }

    /// Add one frame's elapsed time. Returns true if a tick is due, in which
    /// case one interval is consumed from the accumulator.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.since_last_tick += delta;
        if self.since_last_tick > self.interval {
            self.since_last_tick -= self.interval;
            true
        } else {
            false
        }
    }

    /// How far through the current interval we are, in `[0, 1]`.
    #[must_use]
    pub fn elapsed_fraction(&self) -> f32 {
        if self.interval.is_zero() {
            return 1.0;
        }
        (self.since_last_tick.as_secs_f32() / self.interval.as_secs_f32()).min(1.0)
    }
}
