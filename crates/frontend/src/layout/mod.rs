pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +---------+--------------------------------+
/// |         |            Header              |
/// | Sidebar +--------------------------------+
/// |         |        routed content          |
/// +---------+--------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>
            <div class="app-body">
                <header::Header />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
