//! Add/edit form lifecycle shared by every entity.
//!
//! ```text
//! Closed --open_new/open_edit--> Open(mode) --begin_save--> Saving(mode)
//!   ^                              |   ^                      |      |
//!   |                              |   +---- save_failed -----+      |
//!   +------------ close -----------+                                 |
//!   +------------------------- save_succeeded -----------------------+
//! ```
//!
//! `New` and `Edit` differ only in where the draft came from.

use records::{FieldErrors, Record};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::future::Future;

use crate::fields::set_path;

pub const INVALID_VALUE_MESSAGE: &str = "Invalid value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Closed,
    Open(FormMode),
    Saving(FormMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// Validation failed; the errors are on the form.
    Invalid,
    /// The commit failed; the message is in `errors.submit`.
    Failed,
    NotOpen,
}

#[derive(Debug, thiserror::Error)]
pub enum FieldUpdateError {
    #[error("The form is not open for editing")]
    NotOpen,
    #[error("Unknown field '{0}'")]
    InvalidPath(String),
    #[error("Invalid value for '{field}'")]
    Rejected {
        field: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not read the draft")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormLifecycle<R> {
    phase: FormPhase,
    draft: R,
    errors: FieldErrors,
    /// Fields whose last input could not be stored. The draft still holds
    /// the previous value, so saving waits until they are fixed.
    rejected: BTreeSet<String>,
}

impl<R: Record> Default for FormLifecycle<R> {
    fn default() -> Self {
        Self {
            phase: FormPhase::Closed,
            draft: R::default(),
            errors: FieldErrors::new(),
            rejected: BTreeSet::new(),
        }
    }
}

impl<R: Record> FormLifecycle<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self.phase {
            FormPhase::Closed => None,
            FormPhase::Open(mode) | FormPhase::Saving(mode) => Some(mode),
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.phase, FormPhase::Saving(_))
    }

    pub fn draft(&self) -> &R {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn open_new(&mut self, defaults: R) {
        self.draft = defaults;
        self.errors = FieldErrors::new();
        self.rejected.clear();
        self.phase = FormPhase::Open(FormMode::New);
    }

    /// Start editing a copy of `record`, upgrading legacy shapes first.
    pub fn open_edit(&mut self, mut record: R) {
        record.migrate();
        self.draft = record;
        self.errors = FieldErrors::new();
        self.rejected.clear();
        self.phase = FormPhase::Open(FormMode::Edit);
    }

    /// Discard the draft from any phase.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Set one field by dot path from an untyped value, as form inputs do.
    ///
    /// Clears the field's error. A value that does not fit the field's type
    /// leaves the draft alone and puts an error on the field instead; that
    /// error outlives revalidation until the field gets a value it accepts.
    pub fn update_field(
        &mut self,
        path: &str,
        value: Value,
    ) -> Result<(), FieldUpdateError> {
        if !matches!(self.phase, FormPhase::Open(_)) {
            return Err(FieldUpdateError::NotOpen);
        }

        let mut document =
            serde_json::to_value(&self.draft).map_err(FieldUpdateError::Encode)?;
        if !set_path(&mut document, path, value) {
            return Err(FieldUpdateError::InvalidPath(path.to_string()));
        }

        self.errors.clear(path);
        match serde_json::from_value::<R>(document) {
            Ok(updated) => {
                self.draft = updated;
                self.rejected.remove(path);
                Ok(())
            }
            Err(source) => {
                self.errors.insert(path, INVALID_VALUE_MESSAGE);
                self.rejected.insert(path.to_string());
                Err(FieldUpdateError::Rejected {
                    field: path.to_string(),
                    source,
                })
            }
        }
    }

    /// Typed edit of the draft; clears `field`'s error.
    pub fn edit(
        &mut self,
        field: &str,
        f: impl FnOnce(&mut R),
    ) -> Result<(), FieldUpdateError> {
        if !matches!(self.phase, FormPhase::Open(_)) {
            return Err(FieldUpdateError::NotOpen);
        }
        f(&mut self.draft);
        self.errors.clear(field);
        self.rejected.remove(field);
        Ok(())
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.clear(field);
    }

    /// Validate and, if clean, move to `Saving` and hand out the draft to
    /// commit. On validation errors the form stays open with the errors set.
    pub fn begin_save(&mut self) -> Option<R> {
        let FormPhase::Open(mode) = self.phase else {
            return None;
        };

        let mut errors = self.draft.validate();
        for field in &self.rejected {
            errors.insert(field.as_str(), INVALID_VALUE_MESSAGE);
        }
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "Draft failed validation");
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::new();
        self.phase = FormPhase::Saving(mode);
        Some(self.draft.clone())
    }

    pub fn save_succeeded(&mut self) {
        if self.is_saving() {
            self.close();
        }
    }

    /// Return to editing with the failure shown as the submit error.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        if let FormPhase::Saving(mode) = self.phase {
            let message = message.into();
            tracing::warn!("Save failed: {message}");
            self.errors.set_submit(message);
            self.phase = FormPhase::Open(mode);
        }
    }

    /// Validate, commit and close. Commit errors land in `errors.submit`
    /// and are not propagated.
    pub fn submit<T, E: Display>(
        &mut self,
        commit: impl FnOnce(R) -> Result<T, E>,
    ) -> SubmitOutcome {
        if !matches!(self.phase, FormPhase::Open(_)) {
            return SubmitOutcome::NotOpen;
        }
        let Some(draft) = self.begin_save() else {
            return SubmitOutcome::Invalid;
        };
        self.finish(commit(draft))
    }

    /// `submit` for commits that complete asynchronously.
    pub async fn submit_async<T, E, Fut>(
        &mut self,
        commit: impl FnOnce(R) -> Fut,
    ) -> SubmitOutcome
    where
        E: Display,
        Fut: Future<Output = Result<T, E>>,
    {
        if !matches!(self.phase, FormPhase::Open(_)) {
            return SubmitOutcome::NotOpen;
        }
        let Some(draft) = self.begin_save() else {
            return SubmitOutcome::Invalid;
        };
        let result = commit(draft).await;
        self.finish(result)
    }

    fn finish<T, E: Display>(&mut self, result: Result<T, E>) -> SubmitOutcome {
        match result {
            Ok(_) => {
                self.save_succeeded();
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.save_failed(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
