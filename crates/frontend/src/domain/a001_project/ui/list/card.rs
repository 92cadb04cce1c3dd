use crate::shared::icons::icon;
use contracts::domain::a001_project::Project;
use contracts::domain::common::{EntityKey, EntityRoot};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// One project in the list, with edit and delete actions.
///
/// While this project is being deleted the delete action is replaced by a
/// spinner.
#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] deleting: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let slug = project.key().map(|k| k.as_string());
    let title = project.title().to_string();
    let description = project.description().to_string();
    let has_slug = slug.is_some();
    let edit_href = slug
        .as_deref()
        .map(|s| format!("/project/{}/edit-project", urlencoding::encode(s)));
    let slug = StoredValue::new(slug.unwrap_or_default());

    view! {
        <div class="project-card">
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
            </div>
            <div class="project-card__actions">
                {edit_href.map(|href| view! {
                    <A href=href attr:class="project-card__edit" attr:title="Edit">
                        {icon("edit")}
                    </A>
                })}
                {move || {
                    if deleting.get() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Transparent
                                disabled=!has_slug
                                on_click=move |_| on_delete.run(slug.get_value())
                            >
                                {icon("delete")}
                            </Button>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
