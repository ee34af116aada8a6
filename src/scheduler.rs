// Reset scheduler - Fires once at the next local midnight, then every 24h

use crate::date::DateService;
use chrono::{DateTime, Duration as ChronoDuration, Local};
use std::time::Duration;
use tracing::{debug, info};

/// Fixed period between fires after the first midnight.
pub fn reset_period() -> ChronoDuration {
    ChronoDuration::hours(24)
}

/// Receives the midnight rollover.
pub trait MidnightHandler {
    fn on_midnight(&mut self);
}

/// Deadlines are wall-clock instants, so time spent suspended counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Waiting for the first local midnight after start.
    Armed { deadline: DateTime<Local> },
    /// Firing on a fixed 24h period. Not re-anchored to local midnight, so a
    /// DST change while running shifts later fires by the DST offset.
    Recurring { next: DateTime<Local> },
}

/// Driven from the event loop: call [`ResetScheduler::poll`] on every tick.
pub struct ResetScheduler {
    dates: DateService,
    state: SchedulerState,
}

impl ResetScheduler {
    pub fn start(dates: DateService) -> Self {
        let wait_ms = dates.milliseconds_until_next_midnight();
        let deadline = dates.now() + ChronoDuration::milliseconds(wait_ms as i64);
        info!(wait_ms, deadline = %deadline, "midnight reset armed");
        Self {
            dates,
            state: SchedulerState::Armed { deadline },
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    fn deadline(&self) -> DateTime<Local> {
        match self.state {
            SchedulerState::Armed { deadline } => deadline,
            SchedulerState::Recurring { next } => next,
        }
    }

    pub fn time_until_next(&self) -> Duration {
        (self.deadline() - self.dates.now())
            .to_std()
            .unwrap_or_default()
    }

    /// Fires the handler at most once if the current deadline has passed.
    pub fn poll<H: MidnightHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        let now = self.dates.now();
        let deadline = self.deadline();
        if now < deadline {
            return false;
        }

        // Several periods missed while suspended collapse into one fire.
        let mut next = deadline + reset_period();
        while next <= now {
            next += reset_period();
        }

        if let SchedulerState::Armed { .. } = self.state {
            debug!("first midnight reached, switching to a fixed 24h period");
        }
        self.state = SchedulerState::Recurring { next };

        handler.on_midnight();
        true
    }
}
