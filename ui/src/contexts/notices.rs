//! Short messages about what just happened to a collection.

use std::rc::Rc;
use store::{CollectionError, Removal};
use uuid::Uuid;
use yew::prelude::*;

/// How long a notice that is not sticky stays up.
pub const NOTICE_LIFETIME_MS: u32 = 4000;
/// Older notices are dropped past this many.
const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Saved,
    Removed,
    /// The record was deleted elsewhere, e.g. in another tab.
    Missing,
    StorageFailed,
}

impl NoticeKind {
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Missing | Self::StorageFailed)
    }

    /// Storage failures stay until dismissed; the data did not change.
    pub fn is_sticky(self) -> bool {
        self == Self::StorageFailed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text,
        }
    }

    pub fn saved(display_name: &str) -> Self {
        Self::new(NoticeKind::Saved, format!("Saved {display_name}"))
    }

    /// The message for a save that did not reach storage. The error names
    /// the slot that failed.
    pub fn storage_failed(error: &CollectionError) -> Self {
        Self::new(NoticeKind::StorageFailed, error.to_string())
    }

    /// What to tell the user after a delete, if anything. A declined
    /// confirmation needs no message.
    pub fn for_removal(
        outcome: &Result<Removal, CollectionError>,
        singular: &str,
    ) -> Option<Self> {
        match outcome {
            Ok(Removal::Removed) => {
                Some(Self::new(NoticeKind::Removed, format!("Deleted {singular}")))
            }
            Ok(Removal::Declined) => None,
            Ok(Removal::NotFound) => Some(Self::new(
                NoticeKind::Missing,
                format!("That {singular} no longer exists"),
            )),
            Err(e) => Some(Self::storage_failed(e)),
        }
    }
}

/// Notices on screen, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoticeBoard {
    pub notices: Vec<Notice>,
}

pub enum NoticeAction {
    Post(Notice),
    Dismiss(Uuid),
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut notices = self.notices.clone();
        match action {
            NoticeAction::Post(notice) => {
                notices.push(notice);
                let excess = notices.len().saturating_sub(MAX_NOTICES);
                notices.drain(..excess);
            }
            NoticeAction::Dismiss(id) => notices.retain(|n| n.id != id),
        }
        Rc::new(Self { notices })
    }
}

pub type NoticeContext = UseReducerHandle<NoticeBoard>;

#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Children,
}

#[function_component]
pub fn NoticeProvider(props: &NoticeProviderProps) -> Html {
    let board = use_reducer(NoticeBoard::default);

    html! {
        <ContextProvider<NoticeContext> context={board}>
            {props.children.clone()}
        </ContextProvider<NoticeContext>>
    }
}

/// Posts notices. Outside a `NoticeProvider` they only reach the log.
#[derive(Clone)]
pub struct NoticeHandle {
    context: Option<NoticeContext>,
}

impl NoticeHandle {
    pub fn post(&self, notice: Notice) {
        if notice.kind.is_failure() {
            tracing::warn!("{}", notice.text);
        } else {
            tracing::info!("{}", notice.text);
        }
        let Some(context) = self.context.clone() else {
            return;
        };

        let id = notice.id;
        let sticky = notice.kind.is_sticky();
        context.dispatch(NoticeAction::Post(notice));

        if !sticky {
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
                context.dispatch(NoticeAction::Dismiss(id));
            });
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(NoticeAction::Dismiss(id));
        }
    }
}

#[hook]
pub fn use_notices() -> NoticeHandle {
    NoticeHandle {
        context: use_context::<NoticeContext>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::StorageError;

    fn write_failure() -> CollectionError {
        CollectionError::Storage(StorageError::Write {
            key: "fieldbook.zones".into(),
            reason: "quota exceeded".into(),
        })
    }

    #[test]
    fn test_removal_outcomes() {
        let removed = Notice::for_removal(&Ok(Removal::Removed), "zone");
        assert_eq!(
            removed.map(|n| (n.kind, n.text)),
            Some((NoticeKind::Removed, "Deleted zone".to_string()))
        );

        assert_eq!(Notice::for_removal(&Ok(Removal::Declined), "zone"), None);

        let missing = Notice::for_removal(&Ok(Removal::NotFound), "zone");
        assert_eq!(missing.map(|n| n.kind), Some(NoticeKind::Missing));

        let failed = Notice::for_removal(&Err(write_failure()), "zone");
        let failed = failed.map(|n| (n.kind, n.text));
        assert_eq!(
            failed,
            Some((
                NoticeKind::StorageFailed,
                "Could not save 'fieldbook.zones': quota exceeded".to_string()
            ))
        );
    }

    #[test]
    fn test_only_storage_failures_stick() {
        assert!(NoticeKind::StorageFailed.is_sticky());
        assert!(!NoticeKind::Missing.is_sticky());
        assert!(NoticeKind::Missing.is_failure());
        assert!(!NoticeKind::Saved.is_failure());
    }

    #[test]
    fn test_board_keeps_the_latest_notices() {
        let mut board = Rc::new(NoticeBoard::default());
        for i in 0..7 {
            let notice = Notice::saved(&format!("zone {i}"));
            board = board.reduce(NoticeAction::Post(notice));
        }
        let texts: Vec<_> =
            board.notices.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "Saved zone 2",
                "Saved zone 3",
                "Saved zone 4",
                "Saved zone 5",
                "Saved zone 6"
            ]
        );

        let first = board.notices[0].id;
        board = board.reduce(NoticeAction::Dismiss(first));
        assert_eq!(board.notices.len(), 4);
        assert!(board.notices.iter().all(|n| n.id != first));
    }
}
