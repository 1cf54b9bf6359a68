use records::RecordId;
use yew::prelude::*;

use crate::components::{FormPanel, PaginationControls, RecordTable, SearchBox};
use crate::config::ConsoleConfig;
use crate::contexts::notices::{Notice, use_notices};
use crate::entities::EntityView;
use crate::hooks::{
    use_add_edit, use_collection, use_table, use_table_search, use_title,
};

/// List, search and edit page for one entity type.
#[function_component]
pub fn EntityPage<R: EntityView>() -> Html {
    use_title(R::TITLE);
    let notices = use_notices();

    let collection = use_collection::<R>();
    let search = use_table_search(collection.items.clone(), R::SEARCH_FIELDS);
    let page_size = R::PAGE_SIZE
        .unwrap_or_else(|| ConsoleConfig::from_build_env().store.default_page_size);
    let rows = use_memo(search.result.clone(), |result| result.items.clone());
    let table = use_table(
        rows,
        R::DEFAULT_SORT,
        R::DEFAULT_DIRECTION,
        page_size,
    );
    let form = use_add_edit::<R>();

    let on_add = {
        let open_new = form.open_new.clone();
        Callback::from(move |_: MouseEvent| open_new.emit(R::new_draft()))
    };

    let on_delete = {
        let remove_item = collection.remove_item.clone();
        let notices = notices.clone();
        Callback::from(move |id: RecordId| {
            let outcome = remove_item.emit(id);
            if let Some(notice) = Notice::for_removal(&outcome, R::SINGULAR) {
                notices.post(notice);
            }
        })
    };

    let view = table.view.clone();
    let empty_message = if search.query.trim().is_empty() {
        format!("No {} yet.", R::TITLE.to_lowercase())
    } else {
        format!("No {} match \"{}\".", R::TITLE.to_lowercase(), search.query)
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900">{R::TITLE}</h1>
                <button
                    onclick={on_add}
                    class="px-4 py-2 text-sm font-medium text-white \
                           bg-neutral-900 hover:bg-neutral-800 rounded-md"
                >
                    {format!("Add {}", R::SINGULAR)}
                </button>
            </div>

            <SearchBox
                query={AttrValue::from(search.query.clone())}
                on_search={search.on_search.clone()}
                placeholder={format!("Search {}", R::TITLE.to_lowercase())}
            />

            <RecordTable<R>
                view={view.clone()}
                columns={R::COLUMNS}
                on_sort={table.on_sort.clone()}
                on_edit={form.open_edit.clone()}
                {on_delete}
                {empty_message}
            />

            <PaginationControls
                current_page={view.current_page}
                total_pages={view.total_pages}
                first_row={view.first_row_number()}
                last_row={view.last_row_number()}
                total_rows={view.total_rows}
                on_page_change={table.on_page.clone()}
            />

            <FormPanel<R>
                is_open={form.is_open}
                is_saving={form.is_saving}
                mode={form.mode}
                draft={form.draft.clone()}
                errors={form.errors.clone()}
                on_update_field={form.on_update_field.clone()}
                on_close={form.on_close.clone()}
                on_save={form.on_save.clone()}
            />
        </div>
    }
}
