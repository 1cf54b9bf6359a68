use serde::Serialize;
use std::rc::Rc;
use store::{SortDirection, TableController, TableView};
use yew::prelude::*;

pub struct TableHandle<R> {
    pub view: Rc<TableView<R>>,
    /// Column header clicked.
    pub on_sort: Callback<String>,
    pub on_page: Callback<usize>,
}

#[hook]
pub fn use_table<R>(
    rows: Rc<Vec<R>>,
    default_field: &'static str,
    default_direction: SortDirection,
    page_size: usize,
) -> TableHandle<R>
where
    R: Serialize + Clone + PartialEq + 'static,
{
    let controller = use_state(|| {
        TableController::new(default_field, default_direction, page_size)
    });

    let view = use_memo(
        (rows, (*controller).clone()),
        |(rows, controller)| controller.clone().view(rows.as_slice()),
    );

    // Store the clamped page so it never points past the end after the
    // rows shrink.
    {
        let controller = controller.clone();
        use_effect_with(
            (view.current_page, view.total_rows),
            move |(page, total_rows)| {
                if controller.current_page() != *page {
                    let mut next = (*controller).clone();
                    next.set_total_rows(*total_rows);
                    controller.set(next);
                }
            },
        );
    }

    let on_sort = {
        let controller = controller.clone();
        let total_rows = view.total_rows;
        Callback::from(move |field: String| {
            let mut next = (*controller).clone();
            next.set_total_rows(total_rows);
            next.sort_by(&field);
            controller.set(next);
        })
    };

    let on_page = {
        let controller = controller.clone();
        let total_rows = view.total_rows;
        Callback::from(move |page: usize| {
            let mut next = (*controller).clone();
            next.set_total_rows(total_rows);
            next.set_page(page);
            controller.set(next);
        })
    };

    TableHandle {
        view,
        on_sort,
        on_page,
    }
}
