use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// 1-based
    pub current_page: usize,
    pub total_pages: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub total_rows: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        current_page,
        total_pages,
        first_row,
        last_row,
        total_rows,
        ..
    } = *props;

    // Nothing to page through
    if total_rows == 0 {
        return html! {};
    }

    let is_first_page = current_page <= 1;
    let is_last_page = current_page >= total_pages;

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(current_page.saturating_sub(1));
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(current_page + 1);
        })
    };

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 rounded-md text-sm \
             font-medium text-neutral-400 bg-neutral-100 cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 rounded-md text-sm \
             font-medium text-neutral-700 bg-white hover:bg-neutral-50 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200">
            <button
                onclick={on_previous}
                disabled={is_first_page}
                class={button_class(is_first_page)}
            >
                {"Previous"}
            </button>

            <span class="text-sm text-neutral-600">
                {format!(
                    "Showing {first_row}-{last_row} of {total_rows} \
                     (page {current_page} of {total_pages})"
                )}
            </span>

            <button
                onclick={on_next}
                disabled={is_last_page}
                class={button_class(is_last_page)}
            >
                {"Next"}
            </button>
        </div>
    }
}
