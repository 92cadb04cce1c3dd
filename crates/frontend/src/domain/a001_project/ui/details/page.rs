use super::view::ProjectDetails;
use super::view_model::{FormMode, ProjectDetailsViewModel};
use crate::shared::components::PageHeader;
use crate::system::auth::use_credentials;
use contracts::domain::a001_project::ProjectSlug;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// `/project/create-project`
#[component]
pub fn ProjectCreatePage() -> impl IntoView {
    let vm = ProjectDetailsViewModel::new(FormMode::Create, use_credentials());

    view! {
        <div class="page">
            <PageHeader title=vm.title() back_href="/project" />
            <ProjectDetails vm=vm />
        </div>
    }
}

/// `/project/:slug/edit-project`
#[component]
pub fn ProjectEditPage() -> impl IntoView {
    let params = use_params_map();
    let raw_slug = params.with_untracked(|p| p.get("slug")).unwrap_or_default();

    match ProjectSlug::new(raw_slug) {
        Ok(slug) => {
            let vm = ProjectDetailsViewModel::new(FormMode::Update { slug }, use_credentials());
            vm.load_if_needed();
            view! {
                <div class="page">
                    <PageHeader title=vm.title() back_href="/project" />
                    <ProjectDetails vm=vm />
                </div>
            }
            .into_any()
        }
        Err(e) => view! {
            <div class="page">
                <PageHeader title="Edit Project" back_href="/project" />
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            </div>
        }
        .into_any(),
    }
}
