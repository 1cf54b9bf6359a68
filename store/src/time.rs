use jiff::Timestamp;
#[cfg(feature = "mock-time")]
use std::sync::{Arc, Mutex, PoisonError};

/// Clock used to stamp new records.
///
/// The constructor is the same with and without `mock-time`, so callers do
/// not need to care which one they got. With the feature enabled the clock
/// starts at the current time and only moves when told to.
#[derive(Clone)]
pub struct TimeSource {
    #[cfg(feature = "mock-time")]
    time: Arc<Mutex<Timestamp>>,
}

impl Default for TimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeSource")
            .field("now", &self.now())
            .finish()
    }
}

impl TimeSource {
    #[cfg(not(feature = "mock-time"))]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(feature = "mock-time")]
    pub fn new() -> Self {
        Self::frozen_at(Timestamp::now())
    }

    #[cfg(feature = "mock-time")]
    pub fn frozen_at(initial_time: Timestamp) -> Self {
        Self {
            time: Arc::new(Mutex::new(initial_time)),
        }
    }

    #[cfg(not(feature = "mock-time"))]
    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    #[cfg(feature = "mock-time")]
    pub fn now(&self) -> Timestamp {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Milliseconds since the Unix epoch; the raw material for record ids.
    pub fn now_millis(&self) -> i64 {
        self.now().as_millisecond()
    }

    #[cfg(feature = "mock-time")]
    pub fn advance(&self, duration: jiff::Span) {
        let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(next) = time.checked_add(duration) {
            *time = next;
        }
    }

    #[cfg(feature = "mock-time")]
    pub fn set(&self, time: Timestamp) {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner) = time;
    }
}
