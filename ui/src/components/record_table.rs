use records::RecordId;
use std::rc::Rc;
use store::fields::{FieldValue, field_value, to_document};
use store::{SortDirection, TableView};
use yew::prelude::*;

use crate::entities::{Column, EntityView};

#[derive(Properties, PartialEq)]
pub struct RecordTableProps<R: EntityView> {
    pub view: Rc<TableView<R>>,
    pub columns: &'static [Column],
    pub on_sort: Callback<String>,
    pub on_edit: Callback<R>,
    pub on_delete: Callback<RecordId>,
    #[prop_or_default]
    pub empty_message: AttrValue,
}

fn cell_text(value: FieldValue) -> String {
    match value {
        FieldValue::Bool(true) => "Yes".to_string(),
        FieldValue::Bool(false) => "No".to_string(),
        other => other.to_string(),
    }
}

#[function_component]
pub fn RecordTable<R: EntityView>(props: &RecordTableProps<R>) -> Html {
    let view = &props.view;

    let header = |column: &Column| {
        let field = column.field;
        if column.derived {
            return html! {
                <th scope="col"
                    class="px-4 py-2 text-left text-xs font-medium uppercase \
                           tracking-wider text-neutral-500">
                    {column.label}
                </th>
            };
        }
        let on_click = {
            let on_sort = props.on_sort.clone();
            Callback::from(move |_: MouseEvent| on_sort.emit(field.to_string()))
        };
        let indicator = match (view.sort_field == field, view.sort_direction) {
            (false, _) => "",
            (true, SortDirection::Ascending) => " ▲",
            (true, SortDirection::Descending) => " ▼",
        };
        let aria_sort = match (view.sort_field == field, view.sort_direction) {
            (false, _) => "none",
            (true, SortDirection::Ascending) => "ascending",
            (true, SortDirection::Descending) => "descending",
        };
        html! {
            <th scope="col" aria-sort={aria_sort}
                class="px-4 py-2 text-left text-xs font-medium uppercase \
                       tracking-wider text-neutral-500">
                <button type="button" onclick={on_click} class="hover:text-neutral-900">
                    {column.label}{indicator}
                </button>
            </th>
        }
    };

    let row = |index: usize, record: &R| {
        let document = to_document(record);
        let key = record
            .id()
            .map_or_else(|| format!("row-{index}"), ToString::to_string);

        let on_edit = {
            let on_edit = props.on_edit.clone();
            let record = record.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(record.clone()))
        };
        let on_delete = record.id().cloned().map(|id| {
            let on_delete = props.on_delete.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        });

        html! {
            <tr key={key} class="border-t border-neutral-200 hover:bg-neutral-50">
                {for props.columns.iter().map(|column| {
                    let text = if column.derived {
                        record.derived_cell(column.field).unwrap_or_default()
                    } else {
                        cell_text(field_value(&document, column.field))
                    };
                    html! {
                        <td class="px-4 py-2 text-sm text-neutral-900">{text}</td>
                    }
                })}
                <td class="px-4 py-2 text-sm text-right space-x-3 whitespace-nowrap">
                    <button type="button" onclick={on_edit}
                        class="text-neutral-700 hover:underline">
                        {"Edit"}
                    </button>
                    if let Some(on_delete) = on_delete {
                        <button type="button" onclick={on_delete}
                            class="text-red-600 hover:underline">
                            {"Delete"}
                        </button>
                    }
                </td>
            </tr>
        }
    };

    html! {
        <div class="overflow-x-auto border border-neutral-200 rounded-lg">
            <table class="min-w-full">
                <thead class="bg-neutral-50">
                    <tr>
                        {for props.columns.iter().map(header)}
                        <th scope="col" class="px-4 py-2">
                            <span class="sr-only">{"Actions"}</span>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    if view.rows.is_empty() {
                        <tr>
                            <td colspan={(props.columns.len() + 1).to_string()}
                                class="px-4 py-8 text-center text-sm text-neutral-500">
                                {props.empty_message.clone()}
                            </td>
                        </tr>
                    } else {
                        {for view.rows.iter().enumerate().map(|(i, r)| row(i, r))}
                    }
                </tbody>
            </table>
        </div>
    }
}
