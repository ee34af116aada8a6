// Date service - Local calendar day and time until the next local midnight

use crate::models::DayStamp;
use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveDateTime, TimeZone};
use std::rc::Rc;
use std::time::Duration;

/// Source of the current local instant.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the host clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Clone)]
pub struct DateService {
    clock: Rc<dyn Clock>,
}

impl DateService {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn system() -> Self {
        Self::new(Rc::new(SystemClock))
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn today(&self) -> DayStamp {
        DayStamp::from_date(self.clock.now().date_naive())
    }

    /// Time from now until 00:00:00.000 of the next local calendar day.
    ///
    /// Always recomputed from the clock; DST changes between calls move the
    /// result.
    pub fn until_next_midnight(&self) -> Duration {
        let now = self.clock.now();
        let target = next_local_midnight(now);
        (target - now).to_std().unwrap_or_default()
    }

    pub fn milliseconds_until_next_midnight(&self) -> u64 {
        self.until_next_midnight().as_millis() as u64
    }
}

fn next_local_midnight(now: DateTime<Local>) -> DateTime<Local> {
    let tomorrow = now.date_naive() + ChronoDuration::days(1);
    let midnight = tomorrow.and_time(chrono::NaiveTime::MIN);

    // 00:00 can fall inside a DST gap; take the first local minute that exists.
    (0..=180)
        .map(|minutes| midnight + ChronoDuration::minutes(minutes))
        .find_map(|candidate| Local.from_local_datetime(&candidate).earliest())
        .unwrap_or_else(|| naive_fallback(now, midnight))
}

fn naive_fallback(now: DateTime<Local>, midnight: NaiveDateTime) -> DateTime<Local> {
    now + (midnight - now.naive_local())
}

/// Clock that only moves when told to.
#[cfg(test)]
pub struct ManualClock {
    now: std::cell::Cell<DateTime<Local>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Rc<Self> {
        Rc::new(Self {
            now: std::cell::Cell::new(local(year, month, day, hour, minute)),
        })
    }

    pub fn advance(&self, by: ChronoDuration) {
        self.now.set(self.now.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.now.get()
    }
}

#[cfg(test)]
pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .expect("valid local time")
}
