use std::time::{Duration, Instant};

/// Event loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Period of the countdown schedule
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Get event loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// A cancellable one-second repeating schedule.
///
/// The event loop polls it with the current instant and gets back the number of
/// whole periods that elapsed since the last poll, so a late wakeup still yields
/// one tick per elapsed second. At most one schedule is armed at a time.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    next_due: Option<Instant>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the schedule starting at `now`. Any previous schedule is cancelled
    /// first.
    pub fn arm(&mut self, now: Instant) {
        self.cancel();
        self.next_due = Some(now + TICK_PERIOD);
    }

    /// Cancel the schedule. Idempotent.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of periods due at `now`; advances the deadline past them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };
        let mut count = 0;
        while next <= now {
            count += 1;
            next += TICK_PERIOD;
        }
        self.next_due = Some(next);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_unarmed_schedule_never_fires() {
        let mut schedule = Schedule::new();
        let now = Instant::now();
        assert_eq!(schedule.due(now + Duration::from_secs(10)), 0);
        assert!(!schedule.is_armed());
    }

    #[test]
    fn test_fires_once_per_second() {
        let mut schedule = Schedule::new();
        let start = Instant::now();
        schedule.arm(start);

        assert_eq!(schedule.due(start + Duration::from_millis(999)), 0);
        assert_eq!(schedule.due(start + Duration::from_millis(1000)), 1);
        assert_eq!(schedule.due(start + Duration::from_millis(1500)), 0);
        assert_eq!(schedule.due(start + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn test_late_poll_catches_up() {
        let mut schedule = Schedule::new();
        let start = Instant::now();
        schedule.arm(start);

        assert_eq!(schedule.due(start + Duration::from_millis(3250)), 3);
        assert_eq!(schedule.due(start + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut schedule = Schedule::new();
        let start = Instant::now();
        schedule.arm(start);
        schedule.cancel();
        schedule.cancel();
        assert!(!schedule.is_armed());
        assert_eq!(schedule.due(start + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_rearm_replaces_previous_schedule() {
        let mut schedule = Schedule::new();
        let start = Instant::now();
        schedule.arm(start);
        schedule.arm(start + Duration::from_millis(500));

        // Only the second schedule's deadline counts
        assert_eq!(schedule.due(start + Duration::from_millis(1200)), 0);
        assert_eq!(schedule.due(start + Duration::from_millis(1500)), 1);
    }
}
