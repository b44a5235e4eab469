//! Local wall-clock sampling.

use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

/// Source of the instant each frame is computed from.
pub trait Clock {
    /// Current local wall-clock instant.
    fn now(&mut self) -> OffsetDateTime;
}

/// Reads the system clock in the local time zone.
///
/// The offset observed at startup is reused whenever the platform refuses to
/// report it later.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    fallback: UtcOffset,
}

impl SystemClock {
    /// Capture the current local offset.
    ///
    /// Must run while the process is still single-threaded.
    pub fn new() -> Self {
        let fallback = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            warn!(%err, "local UTC offset unavailable, showing UTC");
            UtcOffset::UTC
        });
        Self { fallback }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> OffsetDateTime {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc().to_offset(self.fallback))
    }
}

impl<F: FnMut() -> OffsetDateTime> Clock for F {
    fn now(&mut self) -> OffsetDateTime {
        self()
    }
}
