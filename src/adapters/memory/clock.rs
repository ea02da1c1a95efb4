//! Clock pinned to a preset instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock that always reports the instant it was built with.
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock pinned to `at`.
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
