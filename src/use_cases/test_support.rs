use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ports::Clock;

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch_seconds(seconds: i64) -> Self {
        let time = Utc.timestamp_opt(seconds, 0).single();
        Self(time.expect("expected valid timestamp"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
