use super::action_button::{ActionButton, ButtonVariant};
use crate::shared::state::FormStateStore;
use contracts::domain::a001_project::limits::ListLimits;
use leptos::prelude::*;

/// Editable list of text rows bound to `(section, index, field?)` paths.
///
/// Rows are keyed by position, so an input keeps its DOM node (and focus)
/// while the user types. The add button is disabled at `limits.max` and the
/// remove buttons at `limits.min`. Rejected writes are logged by the store.
#[component]
pub fn TextListEditor(
    store: FormStateStore,
    section: &'static str,
    /// Field of a nested section holding the list; `None` for a flat section
    #[prop(optional)]
    field: Option<&'static str>,
    limits: ListLimits,
    /// Row placeholder prefix, numbered from 1
    item_label: &'static str,
    /// Caption of the add button
    add_label: &'static str,
    /// Required attribute on each row
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let items = store.list_memo(section, field);
    let len = move || items.with(Vec::len);

    view! {
        <div class="form__list">
            <For
                each=move || 0..len()
                key=|index| *index
                children=move |index| {
                    let value = move || items.with(|list| list.get(index).cloned().unwrap_or_default());
                    view! {
                        <div class="form__list-row">
                            <input
                                class="form__input"
                                placeholder=format!("{} {}", item_label, index + 1)
                                required=required
                                prop:value=value
                                on:input=move |ev| {
                                    store
                                        .set_array_element(
                                            section,
                                            index as isize,
                                            event_target_value(&ev),
                                            field,
                                        )
                                        .ok();
                                }
                            />
                            <ActionButton
                                variant=ButtonVariant::Danger
                                disabled=Signal::derive(move || !limits.can_remove(len()))
                                on_click=Callback::new(move |_| {
                                    store.remove_array_element(section, index as isize, field).ok();
                                })
                            >
                                "Remove"
                            </ActionButton>
                        </div>
                    }
                }
            />
            <ActionButton
                variant=ButtonVariant::Secondary
                disabled=Signal::derive(move || !limits.can_append(len()))
                on_click=Callback::new(move |_| {
                    store.append_array_element(section, field).ok();
                })
            >
                {format!("+ {}", add_label)}
            </ActionButton>
        </div>
    }
}
