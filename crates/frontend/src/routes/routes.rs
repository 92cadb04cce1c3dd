use crate::domain::a001_project::ui::details::{ProjectCreatePage, ProjectEditPage};
use crate::domain::a001_project::ui::list::ProjectList;
use crate::layout::Shell;
use crate::shared::components::PageHeader;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn Dashboard() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Dashboard" />
            <p>
                "Manage the portfolio content from the navigation. "
                <A href="/project">"Go to projects"</A>
            </p>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Not available" back_href="/" />
            <p>"This section is not available in the back office yet."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/project") view=ProjectList />
                    <Route path=path!("/project/create-project") view=ProjectCreatePage />
                    <Route path=path!("/project/:slug/edit-project") view=ProjectEditPage />
                </Routes>
            </Shell>
        </Router>
    }
}
