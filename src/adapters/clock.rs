use chrono::{Local, NaiveDateTime};

use crate::domain::ports::Clock;

/// Local wall clock. Naive local time is deliberate: send times are
/// configured in the machine's local time and no time-zone handling exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
