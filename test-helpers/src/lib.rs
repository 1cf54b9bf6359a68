use std::cell::{Cell, RefCell};
use std::rc::Rc;

use jiff::Timestamp;
use store::{MemoryStorage, Storage, StorageError, StoreConfig, TimeSource};
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

pub mod mock;

/// 2025-01-01T00:00:00Z, the instant every frozen clock starts at.
pub const FROZEN_AT: Timestamp = Timestamp::constant(1_735_689_600, 0);

pub fn get_subscriber(env_filter: &str) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let writer = fmt::Layer::new().with_test_writer().without_time();
    Registry::default().with(env_filter).with(writer)
}

/// Route `tracing` output through the test harness. Safe to call from every
/// test; only the first call installs anything.
pub fn init_test_logging() {
    let _ = LogTracer::init();
    let _ = get_subscriber("error").try_init();
}

/// A clock stopped at `FROZEN_AT`.
pub fn frozen_clock() -> TimeSource {
    TimeSource::frozen_at(FROZEN_AT)
}

pub fn test_config() -> StoreConfig {
    StoreConfig {
        key_prefix: "test.".into(),
        ..Default::default()
    }
}

/// Storage whose writes can be switched to fail, the way a full or
/// disabled `localStorage` throws. Reads always succeed.
#[derive(Debug, Clone)]
pub struct FailingStorage {
    inner: MemoryStorage,
    failing: Rc<Cell<bool>>,
}

impl FailingStorage {
    /// Fails writes on top of existing slots, starting straight away.
    pub fn over(inner: MemoryStorage) -> Self {
        Self {
            inner,
            failing: Rc::new(Cell::new(true)),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn inner(&self) -> &MemoryStorage {
        &self.inner
    }
}

impl Storage for FailingStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.inner.write(key, value)
    }
}

/// Storage that remembers which slots were written, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn over(inner: MemoryStorage) -> Self {
        Self {
            inner,
            writes: Rc::default(),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    pub fn inner(&self) -> &MemoryStorage {
        &self.inner
    }
}

impl Storage for RecordingStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.borrow_mut().push(key.to_string());
        self.inner.write(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failing_storage_starts_failing() {
        let storage = FailingStorage::over(MemoryStorage::new());
        assert!(matches!(
            storage.write("test.zones", "[]"),
            Err(StorageError::Write { .. })
        ));
        assert_eq!(storage.inner().slot("test.zones"), None);

        storage.set_failing(false);
        assert!(storage.write("test.zones", "[]").is_ok());
        assert_eq!(storage.inner().slot("test.zones").as_deref(), Some("[]"));
    }
}
