use serde::Serialize;
use std::rc::Rc;
use store::{SearchResult, search_records};
use yew::prelude::*;

pub struct TableSearchHandle<R> {
    pub query: String,
    pub on_search: Callback<String>,
    pub result: Rc<SearchResult<R>>,
}

/// Search box state plus the filtered rows, recomputed only when the
/// items, fields or query change.
#[hook]
pub fn use_table_search<R>(
    items: Rc<Vec<R>>,
    fields: &'static [&'static str],
) -> TableSearchHandle<R>
where
    R: Serialize + Clone + PartialEq + 'static,
{
    let query = use_state(String::new);

    let result = use_memo(
        (items, fields, (*query).clone()),
        |(items, fields, query)| {
            search_records(items.as_slice(), *fields, query)
        },
    );

    let on_search = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    TableSearchHandle {
        query: (*query).clone(),
        on_search,
        result,
    }
}
