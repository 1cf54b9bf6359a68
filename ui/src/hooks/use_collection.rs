use records::{Record, RecordId};
use std::rc::Rc;
use store::{CollectionError, Removal};
use wasm_bindgen::prelude::*;
use web_sys::StorageEvent;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::CollectionState;
use crate::storage::BrowserConfirm;

/// Hook return type for one entity collection
pub struct CollectionHandle<R: Record> {
    pub items: Rc<Vec<R>>,
    /// Insert or replace; the stored record comes back.
    pub save_item: Callback<R, Result<R, CollectionError>>,
    /// Delete after `window.confirm`.
    pub remove_item: Callback<RecordId, Result<Removal, CollectionError>>,
    pub reload: Callback<()>,
}

/// Shared access to the `R` collection. Every component using this hook
/// sees the same list, and changes made in other tabs are picked up
/// through the `storage` event.
#[hook]
pub fn use_collection<R: Record>() -> CollectionHandle<R> {
    let (state, dispatch) = use_store::<CollectionState<R>>();
    let items = use_memo(state, |state| state.collection.items().to_vec());

    let save_item = {
        let dispatch = dispatch.clone();
        use_callback((), move |draft: R, _: &()| -> Result<R, CollectionError> {
            let mut next = (*dispatch.get()).clone();
            let saved = next.collection.save_item(draft)?;
            dispatch.set(next);
            Ok(saved)
        })
    };

    let remove_item = {
        let dispatch = dispatch.clone();
        use_callback(
            (),
            move |id: RecordId, _: &()| -> Result<Removal, CollectionError> {
                let mut next = (*dispatch.get()).clone();
                let removal =
                    next.collection.remove_item(&id, &BrowserConfirm)?;
                if removal == Removal::Removed {
                    dispatch.set(next);
                }
                Ok(removal)
            },
        )
    };

    let reload = {
        let dispatch = dispatch.clone();
        use_callback((), move |_: (), _: &()| {
            let mut next = (*dispatch.get()).clone();
            next.collection.reload();
            dispatch.set(next);
        })
    };

    // Another tab wrote to our slot (or cleared storage): re-read it
    use_effect_with((), {
        let reload = reload.clone();
        let slot = dispatch.get().collection.slot().to_string();
        move |_| {
            let window = web_sys::window();
            let closure =
                Closure::wrap(Box::new(move |event: StorageEvent| {
                    if touches_slot(event.key().as_deref(), &slot) {
                        tracing::debug!(%slot, "Slot changed in another tab");
                        reload.emit(());
                    }
                }) as Box<dyn FnMut(StorageEvent)>);

            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "storage",
                    closure.as_ref().unchecked_ref(),
                ) {
                    tracing::warn!(
                        "Could not listen for storage changes: {e:?}"
                    );
                }
            }

            move || {
                if let Some(window) = &window {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "storage",
                        closure.as_ref().unchecked_ref(),
                    ) {
                        tracing::warn!(
                            "Could not remove storage listener: {e:?}"
                        );
                    }
                }
                drop(closure);
            }
        }
    });

    CollectionHandle {
        items,
        save_item,
        remove_item,
        reload,
    }
}

/// A `storage` event with no key means the whole store was cleared.
fn touches_slot(key: Option<&str>, slot: &str) -> bool {
    key.is_none_or(|key| key == slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_slot() {
        assert!(touches_slot(Some("fieldbook.zones"), "fieldbook.zones"));
        assert!(touches_slot(None, "fieldbook.zones"));
        assert!(!touches_slot(Some("fieldbook.routes"), "fieldbook.zones"));
    }
}
