use records::FieldErrors;
use serde_json::Value;
use store::FormMode;
use store::fields::{lookup, to_document};
use yew::prelude::*;

use crate::components::FieldInput;
use crate::entities::EntityView;

#[derive(Properties, PartialEq)]
pub struct FormPanelProps<R: EntityView> {
    pub is_open: bool,
    pub is_saving: bool,
    pub mode: Option<FormMode>,
    pub draft: R,
    pub errors: FieldErrors,
    pub on_update_field: Callback<(String, Value)>,
    pub on_close: Callback<()>,
    pub on_save: Callback<()>,
}

/// Add/edit form for one record, laid out from `R::FORM_FIELDS`.
#[function_component]
pub fn FormPanel<R: EntityView>(props: &FormPanelProps<R>) -> Html {
    if !props.is_open {
        return html! {};
    }

    let document = to_document(&props.draft);
    let title = match props.mode {
        Some(FormMode::Edit) => format!("Edit {}", R::SINGULAR),
        _ => format!("New {}", R::SINGULAR),
    };

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/40">
            <div class="max-w-2xl w-full max-h-[90vh] overflow-y-auto bg-white \
                        p-8 rounded-lg shadow-md">
                <h2 class="text-xl font-bold text-neutral-900 mb-6">{title}</h2>

                <form onsubmit={on_submit} class="space-y-4" novalidate={true}>
                    if let Some(error) = props.errors.submit() {
                        <div class="p-4 rounded-md bg-red-50 border border-red-200">
                            <p class="text-sm text-red-700">{error.to_string()}</p>
                        </div>
                    }

                    {for R::FORM_FIELDS.iter().map(|field| {
                        let value = lookup(&document, field.path)
                            .cloned()
                            .unwrap_or(Value::Null);
                        html! {
                            <FieldInput
                                key={field.path}
                                path={field.path}
                                label={field.label}
                                kind={field.kind}
                                {value}
                                errors={props.errors.clone()}
                                on_change={props.on_update_field.clone()}
                                disabled={props.is_saving}
                            />
                        }
                    })}

                    <div class="flex space-x-3 pt-2">
                        <button
                            type="button"
                            onclick={on_cancel}
                            class="flex-1 py-2 px-4 border border-neutral-300 \
                                   rounded-md text-sm font-medium text-neutral-700 \
                                   bg-white hover:bg-neutral-50"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            disabled={props.is_saving}
                            class="flex-1 py-2 px-4 rounded-md text-sm font-medium \
                                   text-white bg-neutral-900 hover:bg-neutral-800 \
                                   disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            if props.is_saving {
                                {"Saving..."}
                            } else {
                                {"Save"}
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
