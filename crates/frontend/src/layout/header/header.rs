use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <header data-zone="header" class="header">
            <button
                class="header__menu-btn"
                aria-label="Open navigation"
                on:click=move |_| ctx.toggle_mobile()
            >
                {icon("menu")}
            </button>
            <span class="header__title">"Back Office"</span>
        </header>
    }
}
