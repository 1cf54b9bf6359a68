use records::{FieldErrors, Record};
use serde_json::Value;
use std::rc::Rc;
use store::{FieldUpdateError, FormLifecycle, FormMode};
use yew::prelude::*;

use crate::contexts::notices::{Notice, use_notices};
use crate::hooks::use_collection;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: Record>(pub FormLifecycle<R>);

impl<R: Record> Default for FormState<R> {
    fn default() -> Self {
        Self(FormLifecycle::default())
    }
}

pub enum FormAction<R> {
    OpenNew(R),
    OpenEdit(R),
    Update { path: String, value: Value },
    BeginSave,
    Saved,
    Failed(String),
    Close,
}

impl<R: Record> Reducible for FormState<R> {
    type Action = FormAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();

        match action {
            FormAction::OpenNew(defaults) => form.open_new(defaults),
            FormAction::OpenEdit(record) => form.open_edit(record),
            FormAction::Update { path, value } => {
                match form.update_field(&path, value) {
                    Ok(()) => {}
                    // Shown on the field itself
                    Err(e @ FieldUpdateError::Rejected { .. }) => {
                        tracing::debug!("{e}");
                    }
                    Err(e) => tracing::warn!("{e}"),
                }
            }
            FormAction::BeginSave => {
                form.begin_save();
            }
            FormAction::Saved => form.save_succeeded(),
            FormAction::Failed(message) => form.save_failed(message),
            FormAction::Close => form.close(),
        }

        Rc::new(Self(form))
    }
}

/// Hook return type for an add/edit form
pub struct AddEditHandle<R: Record> {
    pub is_open: bool,
    pub is_saving: bool,
    pub mode: Option<FormMode>,
    pub draft: R,
    pub errors: FieldErrors,
    pub open_new: Callback<R>,
    pub open_edit: Callback<R>,
    pub on_update_field: Callback<(String, Value)>,
    pub on_close: Callback<()>,
    pub on_save: Callback<()>,
}

/// Draft state for creating or editing one `R`, committed through the
/// shared collection.
#[hook]
pub fn use_add_edit<R: Record>() -> AddEditHandle<R> {
    let form = use_reducer(FormState::<R>::default);
    let collection = use_collection::<R>();
    let notices = use_notices();

    let open_new = {
        let form = form.clone();
        Callback::from(move |defaults: R| {
            form.dispatch(FormAction::OpenNew(defaults))
        })
    };

    let open_edit = {
        let form = form.clone();
        Callback::from(move |record: R| {
            form.dispatch(FormAction::OpenEdit(record))
        })
    };

    let on_update_field = {
        let form = form.clone();
        Callback::from(move |(path, value): (String, Value)| {
            form.dispatch(FormAction::Update { path, value })
        })
    };

    let on_close = {
        let form = form.clone();
        Callback::from(move |_: ()| form.dispatch(FormAction::Close))
    };

    let on_save = {
        let form = form.clone();
        let save_item = collection.save_item.clone();
        Callback::from(move |_: ()| {
            // The reducer repeats this check and records the errors
            let draft = form.0.clone().begin_save();
            form.dispatch(FormAction::BeginSave);
            let Some(draft) = draft else {
                return;
            };

            let form = form.clone();
            let save_item = save_item.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match save_item.emit(draft) {
                    Ok(saved) => {
                        notices.post(Notice::saved(&saved.display_name()));
                        form.dispatch(FormAction::Saved);
                    }
                    Err(e) => {
                        notices.post(Notice::storage_failed(&e));
                        form.dispatch(FormAction::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    AddEditHandle {
        is_open: form.0.is_open(),
        is_saving: form.0.is_saving(),
        mode: form.0.mode(),
        draft: form.0.draft().clone(),
        errors: form.0.errors().clone(),
        open_new,
        open_edit,
        on_update_field,
        on_close,
        on_save,
    }
}
