use records::Record;
use store::{Collection, TimeSource};
use yewdux::{Context, Store};

use crate::config::ConsoleConfig;
use crate::storage::LocalStorage;

/// One collection held in the app-wide yewdux context. Each entity type
/// gets its own store, loaded from `localStorage` the first time any
/// component asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<R: Record> {
    pub collection: Collection<R, LocalStorage>,
}

impl<R: Record> Store for CollectionState<R> {
    fn new(_cx: &Context) -> Self {
        let config = ConsoleConfig::from_build_env();
        Self {
            collection: Collection::load(
                LocalStorage,
                TimeSource::new(),
                &config.store,
            ),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
