//! Inputs bound to a `(section, field)` path of a [`FormStateStore`]
//!
//! Each widget reads its value through a per-field memo and writes back with
//! `set_field`. Rejected writes are logged by the store.

use crate::shared::state::FormStateStore;
use leptos::prelude::*;

/// Single-line input bound to a text field
#[component]
pub fn FormInput(
    store: FormStateStore,
    section: &'static str,
    field: &'static str,
    /// Label text
    #[prop(into)]
    label: String,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
    /// Input type: "text" (default), "url", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let value = store.text_memo(section, field);
    let input_id = format!("{}-{}", section, field);

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id.clone()>
                {label}
            </label>
            <input
                id=input_id
                class="form__input"
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| {
                    store.set_field(section, field, event_target_value(&ev)).ok();
                }
            />
        </div>
    }
}

/// Multi-line input bound to a text field
#[component]
pub fn FormTextarea(
    store: FormStateStore,
    section: &'static str,
    field: &'static str,
    /// Label text
    #[prop(into)]
    label: String,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let value = store.text_memo(section, field);
    let textarea_id = format!("{}-{}", section, field);

    view! {
        <div class="form__group">
            <label class="form__label" for=textarea_id.clone()>
                {label}
            </label>
            <textarea
                id=textarea_id
                class="form__textarea"
                required=required
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    store.set_field(section, field, event_target_value(&ev)).ok();
                }
            />
        </div>
    }
}

/// Select bound to a text field; options are (value, label) pairs
#[component]
pub fn FormSelect(
    store: FormStateStore,
    section: &'static str,
    field: &'static str,
    /// Label text
    #[prop(into)]
    label: String,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let value = store.text_memo(section, field);
    let select_id = format!("{}-{}", section, field);

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id.clone()>
                {label}
            </label>
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    store.set_field(section, field, event_target_value(&ev)).ok();
                }
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == option_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
