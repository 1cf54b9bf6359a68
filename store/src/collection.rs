//! Generic collection manager, one instance per entity type.

use records::{Record, RecordId};

use crate::config::StoreConfig;
use crate::storage::{Storage, StorageError};
use crate::time::TimeSource;

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Could not encode the collection")]
    Encode(#[from] serde_json::Error),
}

/// Gate in front of destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    /// The user said no; nothing changed.
    Declined,
    NotFound,
}

/// The in-memory list for one entity, mirrored in full to one storage slot
/// after every change.
#[derive(Debug, Clone)]
pub struct Collection<R, S> {
    items: Vec<R>,
    storage: S,
    clock: TimeSource,
    slot: String,
}

impl<R: PartialEq, S> PartialEq for Collection<R, S> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot && self.items == other.items
    }
}

impl<R: Record, S: Storage> Collection<R, S> {
    /// Read the collection from storage. An empty or unreadable slot gives an
    /// empty collection; unreadable data is logged, not propagated.
    pub fn load(storage: S, clock: TimeSource, config: &StoreConfig) -> Self {
        let slot = config.slot_for::<R>();
        let items = read_slot(&storage, &slot);
        Self {
            items,
            storage,
            clock,
            slot,
        }
    }

    /// Throw away the in-memory list and read the slot again, picking up
    /// writes made elsewhere (another tab, another handle).
    pub fn reload(&mut self) {
        self.items = read_slot(&self.storage, &self.slot);
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    /// Insert or replace a record and persist the whole collection.
    ///
    /// A draft without an assigned id is inserted with a fresh one. A draft
    /// whose id is already present replaces that record in place; an
    /// unknown id is inserted as-is. Returns the stored record.
    #[tracing::instrument(skip_all, fields(slot = %self.slot), err)]
    pub fn save_item(&mut self, mut draft: R) -> Result<R, CollectionError> {
        let mut next = self.items.clone();

        let position = if draft.has_assigned_id() {
            draft
                .id()
                .and_then(|id| next.iter().position(|item| item.id() == Some(id)))
        } else {
            draft.set_id(self.next_id());
            None
        };

        match position {
            Some(i) => next[i] = draft.clone(),
            None => next.push(draft.clone()),
        }

        self.persist(&next)?;
        self.items = next;

        tracing::info!(
            id = %draft.id().map(ToString::to_string).unwrap_or_default(),
            replaced = position.is_some(),
            "Saved {}",
            draft.display_name()
        );
        Ok(draft)
    }

    /// Delete a record after the user confirms.
    #[tracing::instrument(skip_all, fields(slot = %self.slot, %id), err)]
    pub fn remove_item(
        &mut self,
        id: &RecordId,
        confirm: &impl Confirm,
    ) -> Result<Removal, CollectionError> {
        let Some(record) = self.get(id) else {
            return Ok(Removal::NotFound);
        };

        let prompt = format!(
            "Delete {}? This cannot be undone.",
            record.display_name()
        );
        if !confirm.confirm(&prompt) {
            tracing::warn!("Deletion declined");
            return Ok(Removal::Declined);
        }

        let next: Vec<R> = self
            .items
            .iter()
            .filter(|item| item.id() != Some(id))
            .cloned()
            .collect();

        self.persist(&next)?;
        self.items = next;

        tracing::info!("Removed record");
        Ok(Removal::Removed)
    }

    /// Creation time in milliseconds, bumped past any id already taken.
    fn next_id(&self) -> RecordId {
        let mut candidate = self.clock.now_millis().max(1);
        while self
            .items
            .iter()
            .any(|item| item.id() == Some(&RecordId::Number(candidate)))
        {
            candidate += 1;
        }
        RecordId::Number(candidate)
    }

    fn persist(&self, items: &[R]) -> Result<(), CollectionError> {
        let encoded = serde_json::to_string(items)?;
        self.storage.write(&self.slot, &encoded)?;
        tracing::debug!(slot = %self.slot, count = items.len(), "Persisted collection");
        Ok(())
    }
}

fn read_slot<R: Record>(storage: &impl Storage, slot: &str) -> Vec<R> {
    let raw = match storage.read(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::error!("{e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<R>>(&raw) {
        Ok(mut items) => {
            items.iter_mut().for_each(R::migrate);
            tracing::debug!(slot, count = items.len(), "Loaded collection");
            items
        }
        Err(e) => {
            tracing::warn!(slot, "Ignoring unreadable collection: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use records::VehicleType;

    fn van(name: &str) -> VehicleType {
        VehicleType {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let storage = MemoryStorage::new();
        let clock = TimeSource::new();
        let mut types: Collection<VehicleType, _> =
            Collection::load(storage, clock, &StoreConfig::default());

        let first = types.save_item(van("Van")).ok().and_then(|v| v.id);
        let second = types.save_item(van("Pickup")).ok().and_then(|v| v.id);
        assert!(first.is_some());
        assert_ne!(first, second);
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn test_closure_confirm() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm("Delete?"));
        assert!(!no.confirm("Delete?"));
    }
}
