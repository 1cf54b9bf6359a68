use records::validation::normalize_phone;
use records::{
    Customer, FieldErrors, InspectionPointCategory, InvoiceLine, Record,
    VehicleType, Zone, lines_total,
};
use serde_json::{Value, json};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::ConsoleConfig;
use crate::entities::{FieldKind, ReferenceTo, format_money};
use crate::hooks::use_collection;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
    rounded-md shadow-sm bg-white text-neutral-900 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 \
    disabled:opacity-50";

/// Turn what the user typed into the JSON value stored at the field.
///
/// Blank numeric and date inputs become `null`. Text that does not parse
/// as a number is passed through as a string so that the form rejects it
/// and marks the field.
pub fn parse_input(kind: FieldKind, raw: &str) -> Value {
    let trimmed = raw.trim();
    match kind {
        FieldKind::Integer | FieldKind::Decimal | FieldKind::Date
            if trimmed.is_empty() =>
        {
            Value::Null
        }
        FieldKind::Integer => trimmed
            .parse::<i64>()
            .map_or_else(|_| Value::String(raw.to_string()), |n| json!(n)),
        FieldKind::Decimal => match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => json!(n),
            _ => Value::String(raw.to_string()),
        },
        FieldKind::Date => Value::String(trimmed.to_string()),
        FieldKind::Bool => Value::Bool(matches!(trimmed, "true" | "on")),
        _ => Value::String(raw.to_string()),
    }
}

/// How a stored value is shown in a text-like input.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn target_value(e: &Event) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    /// Dot path of the field in the draft.
    pub path: AttrValue,
    pub label: AttrValue,
    pub kind: FieldKind,
    /// Current value at `path`; `Null` when absent.
    pub value: Value,
    pub errors: FieldErrors,
    pub on_change: Callback<(String, Value)>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component]
pub fn FieldInput(props: &FieldInputProps) -> Html {
    let kind = props.kind;
    let path = props.path.clone();
    let id = format!("field-{}", path.replace('.', "-"));
    let error = props.errors.get(&path).map(str::to_string);
    let disabled = props.disabled;

    let emit_parsed = {
        let on_change = props.on_change.clone();
        let path = path.clone();
        Callback::from(move |raw: String| {
            on_change.emit((path.to_string(), parse_input(kind, &raw)))
        })
    };
    let on_input = {
        let emit_parsed = emit_parsed.clone();
        Callback::from(move |e: InputEvent| emit_parsed.emit(target_value(&e)))
    };
    let on_select = {
        let emit_parsed = emit_parsed.clone();
        Callback::from(move |e: Event| emit_parsed.emit(target_value(&e)))
    };

    let text = display_value(&props.value);
    let control = match kind {
        FieldKind::TextArea => html! {
            <textarea id={id.clone()} rows="4" class={INPUT_CLASS}
                value={text} oninput={on_input} {disabled} />
        },
        FieldKind::Bool => {
            let checked = props.value.as_bool().unwrap_or(false);
            let on_toggle = {
                let on_change = props.on_change.clone();
                let path = path.clone();
                Callback::from(move |e: Event| {
                    let checked = e
                        .target_dyn_into::<HtmlInputElement>()
                        .is_some_and(|input| input.checked());
                    on_change.emit((path.to_string(), Value::Bool(checked)))
                })
            };
            html! {
                <input id={id.clone()} type="checkbox" class="h-4 w-4"
                    {checked} onchange={on_toggle} {disabled} />
            }
        }
        FieldKind::Select(options) => html! {
            <select id={id.clone()} class={INPUT_CLASS} onchange={on_select}
                {disabled}>
                {for options.iter().map(|option| html! {
                    <option value={*option} selected={text == *option}>
                        {*option}
                    </option>
                })}
            </select>
        },
        FieldKind::Reference(to) => {
            let on_pick = {
                let on_change = props.on_change.clone();
                let path = path.clone();
                Callback::from(move |name: String| {
                    on_change.emit((path.to_string(), Value::String(name)))
                })
            };
            match to {
                ReferenceTo::Customers => html! {
                    <ReferenceSelect<Customer> id={id.clone()} value={text}
                        on_pick={on_pick} {disabled} />
                },
                ReferenceTo::VehicleTypes => html! {
                    <ReferenceSelect<VehicleType> id={id.clone()} value={text}
                        on_pick={on_pick} {disabled} />
                },
                ReferenceTo::Zones => html! {
                    <ReferenceSelect<Zone> id={id.clone()} value={text}
                        on_pick={on_pick} {disabled} />
                },
                ReferenceTo::InspectionPointCategories => html! {
                    <ReferenceSelect<InspectionPointCategory> id={id.clone()}
                        value={text} on_pick={on_pick} {disabled} />
                },
            }
        }
        FieldKind::LineItems => html! {
            <LineItems lines={props.value.clone()} errors={props.errors.clone()}
                on_change={props.on_change.clone()} {disabled} />
        },
        FieldKind::Phone => {
            // Reformat once the user leaves the field
            let on_blur = {
                let on_change = props.on_change.clone();
                let path = path.clone();
                Callback::from(move |e: Event| {
                    let raw = target_value(&e);
                    let config = ConsoleConfig::from_build_env();
                    let formatted =
                        normalize_phone(&raw, &config.store.default_country_code)
                            .unwrap_or(raw);
                    on_change.emit((path.to_string(), Value::String(formatted)))
                })
            };
            html! {
                <input id={id.clone()} type="tel" class={INPUT_CLASS}
                    value={text} oninput={on_input} onchange={on_blur}
                    placeholder="+44 20 7946 0958" {disabled} />
            }
        }
        other => {
            let (input_type, step) = match other {
                FieldKind::Email => ("email", None),
                FieldKind::Integer => ("number", Some("1")),
                FieldKind::Decimal => ("number", Some("any")),
                FieldKind::Date => ("date", None),
                _ => ("text", None),
            };
            html! {
                <input id={id.clone()} type={input_type} step={step}
                    class={INPUT_CLASS} value={text} oninput={on_input}
                    {disabled} />
            }
        }
    };

    html! {
        <div class={if kind == FieldKind::Bool { "flex items-center gap-2" } else { "" }}>
            <label for={id} class="block text-sm font-medium text-neutral-700 mb-1">
                {props.label.clone()}
            </label>
            {control}
            if let Some(error) = error {
                <p class="mt-1 text-sm text-red-600">{error}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReferenceSelectProps {
    pub id: String,
    pub value: String,
    pub on_pick: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Pick another record by display name. A name that no longer matches any
/// record stays selectable so editing does not silently change it.
#[function_component]
pub fn ReferenceSelect<R: Record>(props: &ReferenceSelectProps) -> Html {
    let collection = use_collection::<R>();

    let mut names: Vec<String> =
        collection.items.iter().map(Record::display_name).collect();
    names.sort();
    names.dedup();
    let dangling = !props.value.is_empty() && !names.contains(&props.value);

    let on_change = {
        let on_pick = props.on_pick.clone();
        Callback::from(move |e: Event| on_pick.emit(target_value(&e)))
    };

    html! {
        <select id={props.id.clone()} class={INPUT_CLASS} onchange={on_change}
            disabled={props.disabled}>
            <option value="" selected={props.value.is_empty()}>{"Select..."}</option>
            if dangling {
                <option value={props.value.clone()} selected={true}>
                    {format!("{} (not found)", props.value)}
                </option>
            }
            {for names.into_iter().map(|name| {
                let selected = name == props.value;
                html! { <option value={name.clone()} {selected}>{name}</option> }
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct LineItemsProps {
    /// The `lines` array.
    pub lines: Value,
    pub errors: FieldErrors,
    pub on_change: Callback<(String, Value)>,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Invoice lines: one row per line, editable in place, with a running
/// total.
#[function_component]
pub fn LineItems(props: &LineItemsProps) -> Html {
    let lines = props.lines.as_array().cloned().unwrap_or_default();
    let parsed: Vec<InvoiceLine> = lines
        .iter()
        .map(|line| serde_json::from_value(line.clone()).unwrap_or_default())
        .collect();
    let total = format_money(lines_total(&parsed));

    let on_add = {
        let on_change = props.on_change.clone();
        let lines = lines.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = lines.clone();
            next.push(json!({"description": "", "quantity": 1, "unit_price": 0}));
            on_change.emit(("lines".to_string(), Value::Array(next)))
        })
    };

    let line_field = |i: usize, name: &'static str, label: &'static str, kind| {
        let value = lines[i].get(name).cloned().unwrap_or(Value::Null);
        html! {
            <FieldInput path={format!("lines.{i}.{name}")} {label} {kind} {value}
                errors={props.errors.clone()} on_change={props.on_change.clone()}
                disabled={props.disabled} />
        }
    };

    html! {
        <div class="space-y-3">
            <span class="block text-sm font-medium text-neutral-700">{"Lines"}</span>
            {for (0..lines.len()).map(|i| {
                let on_remove = {
                    let on_change = props.on_change.clone();
                    let lines = lines.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = lines.clone();
                        next.remove(i);
                        on_change.emit(("lines".to_string(), Value::Array(next)))
                    })
                };
                html! {
                    <div key={i} class="grid grid-cols-4 gap-2 items-end">
                        {line_field(i, "description", "Description", FieldKind::Text)}
                        {line_field(i, "quantity", "Quantity", FieldKind::Decimal)}
                        {line_field(i, "unit_price", "Unit price", FieldKind::Decimal)}
                        <div class="flex items-center justify-between">
                            <span class="text-sm">{format_money(parsed[i].amount())}</span>
                            <button type="button" onclick={on_remove}
                                disabled={props.disabled}
                                class="text-sm text-red-600 hover:underline">
                                {"Remove"}
                            </button>
                        </div>
                    </div>
                }
            })}
            <div class="flex items-center justify-between">
                <button type="button" onclick={on_add} disabled={props.disabled}
                    class="text-sm text-neutral-700 hover:underline">
                    {"+ Add line"}
                </button>
                <span class="text-sm font-medium">{format!("Total {total}")}</span>
            </div>
        </div>
    }
}
