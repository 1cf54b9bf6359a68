use crate::contexts::notices::{Notice, NoticeContext, use_notices};
use yew::prelude::*;

/// The notice stack in the top right corner.
#[function_component]
pub fn NoticeList() -> Html {
    let notices = use_context::<NoticeContext>()
        .map(|board| board.notices.clone())
        .unwrap_or_default();

    if notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full" role="status">
            {for notices.into_iter().map(|notice| {
                let key = notice.id.to_string();
                html! { <NoticeItem {key} {notice} /> }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeItemProps {
    pub notice: Notice,
}

#[function_component]
pub fn NoticeItem(props: &NoticeItemProps) -> Html {
    let handle = use_notices();
    let notice = &props.notice;

    let colors = if notice.kind.is_failure() {
        "bg-red-50 border-red-200 text-red-700"
    } else {
        "bg-green-50 border-green-200 text-green-700"
    };

    let on_dismiss = {
        let id = notice.id;
        Callback::from(move |_: MouseEvent| handle.dismiss(id))
    };

    html! {
        <div class={format!("flex items-start gap-3 p-4 rounded-lg border shadow-lg {colors}")}>
            <p class="flex-1 min-w-0 text-sm font-medium">{&notice.text}</p>
            <button
                type="button"
                onclick={on_dismiss}
                class="text-neutral-400 hover:text-neutral-600"
                title="Dismiss"
            >
                {"×"}
            </button>
        </div>
    }
}
