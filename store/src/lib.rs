//! Client-side record store for the Fieldbook console.
//!
//! ## Design Decisions
//!
//! ### Full-collection persistence
//! - **One slot per entity**: every collection is stored as a single JSON
//!   array under `"{key_prefix}{COLLECTION_KEY}"`. There are no partial or
//!   delta writes; every mutation rewrites the whole array.
//! - **Write first, then commit**: `Collection` encodes and writes the new
//!   array before replacing its in-memory list, so a failed write leaves
//!   the collection exactly as it was.
//! - **Last writer wins**: there is no versioning or conflict detection,
//!   including across browser tabs. `Collection::reload` re-reads a slot.
//!
//! ### Generic field access
//! - Records are typed, but search and sort address fields by dot path
//!   (`"address.city"`). Both go through the record's serialised JSON form
//!   and reduce each field to a `FieldValue`.
//! - Sort order: missing values last (in both directions), then
//!   `Bool < Number < Text`; numbers numerically, text byte-wise and case
//!   sensitive.
//!
//! ### Time Source Dependency
//! - New record ids are creation timestamps in milliseconds taken from a
//!   `TimeSource`, bumped until unique. With the `mock-time` feature the
//!   clock is frozen and settable so tests get predictable ids.

pub mod collection;
pub mod config;
pub mod fields;
pub mod form;
pub mod search;
pub mod storage;
pub mod table;
pub mod time;

pub use collection::{Collection, CollectionError, Confirm, Removal};
pub use config::StoreConfig;
pub use fields::FieldValue;
pub use form::{
    FieldUpdateError, FormLifecycle, FormMode, FormPhase, SubmitOutcome,
};
pub use search::{SearchResult, search_records};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use table::{SortDirection, TableController, TableView};
pub use time::TimeSource;
