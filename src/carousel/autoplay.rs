//! Recurring autoplay countdown driven by frame delta time.

use std::time::Duration;

// `elapsed` is None while stopped, so at most one countdown exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayTimer {
    delay: Duration,
    elapsed: Option<Duration>,
}

impl AutoplayTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, elapsed: None }
    }

    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    // Always restarts from zero
    pub fn start(&mut self) {
        self.stop();
        self.elapsed = Some(Duration::ZERO);
    }

    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.elapsed.map(|elapsed| self.delay.saturating_sub(elapsed))
    }

    /// Accumulates `dt` and returns how many whole delays have elapsed.
    /// The remainder is kept so fires stay exactly one delay apart. A zero
    /// delay never fires.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return 0;
        };
        let delay_nanos = self.delay.as_nanos();
        if delay_nanos == 0 {
            return 0;
        }

        *elapsed += dt;
        let fires = u32::try_from(elapsed.as_nanos() / delay_nanos).unwrap_or(u32::MAX);
        *elapsed = elapsed.saturating_sub(self.delay.saturating_mul(fires));
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(5000);

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = AutoplayTimer::new(DELAY);
        assert_eq!(timer.tick(Duration::from_secs(60)), 0);
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn fires_once_per_delay() {
        let mut timer = AutoplayTimer::new(DELAY);
        timer.start();

        assert_eq!(timer.tick(Duration::from_millis(4999)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
        assert_eq!(timer.remaining(), Some(DELAY));
        assert_eq!(timer.tick(Duration::from_millis(5000)), 1);
    }

    #[test]
    fn long_frame_keeps_cadence() {
        let mut timer = AutoplayTimer::new(DELAY);
        timer.start();

        assert_eq!(timer.tick(Duration::from_millis(12_000)), 2);
        assert_eq!(timer.remaining(), Some(Duration::from_millis(3000)));
    }

    #[test]
    fn start_restarts_countdown() {
        let mut timer = AutoplayTimer::new(DELAY);
        timer.start();
        timer.tick(Duration::from_millis(4000));

        timer.start();
        assert_eq!(timer.remaining(), Some(DELAY));
        assert_eq!(timer.tick(Duration::from_millis(4000)), 0);
    }

    #[test]
    fn zero_delay_never_fires() {
        let mut timer = AutoplayTimer::new(Duration::ZERO);
        timer.start();

        assert_eq!(timer.tick(Duration::from_millis(16)), 0);
        assert_eq!(timer.tick(Duration::from_secs(60)), 0);
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn reset_and_stop_are_idempotent() {
        let mut timer = AutoplayTimer::new(DELAY);
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());

        timer.reset();
        timer.reset();
        assert!(timer.is_running());
        assert_eq!(timer.remaining(), Some(DELAY));
    }
}
