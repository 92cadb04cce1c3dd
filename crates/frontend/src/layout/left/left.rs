use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Sidebar container; a backdrop closes the mobile overlay
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div
            class="app-sidebar__backdrop"
            class:hidden=move || !ctx.mobile_open.get()
            on:click=move |_| ctx.close_mobile()
        />
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || ctx.sidebar_collapsed.get()
            class:app-sidebar--mobile-open=move || ctx.mobile_open.get()
        >
            {children()}
        </aside>
    }
}
