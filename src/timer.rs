use crate::domain::{Mode, Settings};
use crate::ticker::Schedule;
use std::time::Instant;

/// Result of applying one or more ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is stopped, nothing happened
    Idle,
    /// Countdown advanced and is still running
    Counting,
    /// Countdown reached zero and the timer stopped
    Expired,
}

/// Countdown state machine: mode, remaining seconds and the schedule driving
/// the per-second tick. The timer is running exactly while the schedule is armed.
#[derive(Debug, Clone)]
pub struct Timer {
    mode: Mode,
    remaining_seconds: u32,
    schedule: Schedule,
}

impl Timer {
    /// Create a stopped timer set to the full duration of `mode`
    pub fn new(mode: Mode, settings: &Settings) -> Self {
        Self {
            mode,
            remaining_seconds: settings.seconds_for(mode),
            schedule: Schedule::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_armed()
    }

    /// Stop any countdown and reset to the full duration of `mode`
    pub fn switch_mode(&mut self, mode: Mode, settings: &Settings) {
        self.stop();
        self.mode = mode;
        self.remaining_seconds = settings.seconds_for(mode);
    }

    /// Start counting down. Returns false when there is nothing left to count.
    ///
    /// Starting a running timer keeps the existing schedule.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.remaining_seconds == 0 {
            return false;
        }
        if !self.is_running() {
            self.schedule.arm(now);
        }
        true
    }

    /// Stop counting down. Idempotent.
    pub fn stop(&mut self) {
        self.schedule.cancel();
    }

    /// Apply one second of countdown
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.stop();
            return TickOutcome::Expired;
        }
        TickOutcome::Counting
    }

    /// Apply every tick the schedule has due at `now`
    pub fn advance(&mut self, now: Instant) -> TickOutcome {
        let due = self.schedule.due(now);
        let mut outcome = if self.is_running() {
            TickOutcome::Counting
        } else {
            TickOutcome::Idle
        };
        for _ in 0..due {
            outcome = self.tick();
            if outcome == TickOutcome::Expired {
                break;
            }
        }
        outcome
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }

    /// Text mirrored into the terminal window title
    pub fn window_title(&self) -> String {
        format!("{} - Time to focus!", self.clock())
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}
