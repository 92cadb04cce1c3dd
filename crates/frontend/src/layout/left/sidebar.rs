//! Sidebar navigation of the back office

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Dashboard", href: "/", icon: "file-text" },
    NavItem { label: "Blogs", href: "/blogs", icon: "file-text" },
    NavItem { label: "Project", href: "/project", icon: "folder" },
    NavItem { label: "Messages", href: "/dashboard/messages", icon: "message-square" },
    NavItem { label: "Skills", href: "/skills", icon: "layers" },
    NavItem { label: "Other", href: "/other", icon: "settings" },
];

/// An item is active on its own page and, except for the root, below it
fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let collapsed = move || ctx.sidebar_collapsed.get();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <Show when=move || !collapsed()>
                    <span class="app-sidebar__title">"SB CMS"</span>
                </Show>
                <button
                    class="app-sidebar__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| ctx.toggle_collapsed()
                >
                    {move || if collapsed() { icon("menu") } else { icon("x") }}
                </button>
            </div>

            <nav class="app-sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <A
                                href=item.href
                                attr:class=move || {
                                    if is_active(item.href, &location.pathname.get()) {
                                        "app-sidebar__item app-sidebar__item--active"
                                    } else {
                                        "app-sidebar__item"
                                    }
                                }
                                on:click=move |_| ctx.close_mobile()
                            >
                                {icon(item.icon)}
                                <Show when=move || !collapsed()>
                                    <span>{item.label}</span>
                                </Show>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
