mod card;

use self::card::ProjectCard;
use crate::domain::a001_project::ui::details::model;
use crate::shared::components::{Notice, NoticeBar, PageHeader};
use crate::shared::icons::icon;
use crate::system::auth::use_credentials;
use contracts::domain::a001_project::{Project, ProjectSlug};
use contracts::domain::common::{EntityKey, EntityRoot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

/// `/project`: all projects of the portfolio
#[component]
pub fn ProjectList() -> impl IntoView {
    let credentials = StoredValue::new(use_credentials());

    let items = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(false);
    // Slug of the project whose delete request is in flight
    let deleting = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            let credentials = credentials.get_value();
            match model::fetch_projects(&credentials).await {
                Ok(projects) => items.set(projects),
                Err(e) => {
                    log::error!("Error fetching projects: {}", e);
                    notice.set(Some(Notice::error("Failed to fetch projects. Please try again.")));
                }
            }
            loading.set(false);
        });
    };

    let handle_delete = Callback::new(move |raw_slug: String| {
        let slug = match ProjectSlug::new(raw_slug) {
            Ok(slug) => slug,
            Err(e) => {
                notice.set(Some(Notice::error(e)));
                return;
            }
        };
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message("Are you sure you want to delete this project?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        deleting.set(Some(slug.to_string()));
        notice.set(None);
        spawn_local(async move {
            let credentials = credentials.get_value();
            match model::delete_project(&credentials, &slug).await {
                Ok(()) => {
                    notice.set(Some(Notice::success("Project deleted successfully.")));
                    fetch();
                }
                Err(e) => {
                    log::error!("Error deleting project '{}': {}", slug, e);
                    notice.set(Some(Notice::error("Failed to delete project. Please try again.")));
                }
            }
            deleting.set(None);
        });
    });

    // Load on mount
    Effect::new(move |_| fetch());

    view! {
        <div class="page project-list">
            <PageHeader title=Project::list_name()>
                <Space>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <A href="/project/create-project" attr:class="button button--primary">
                        {icon("plus")}
                        " Add Project"
                    </A>
                </Space>
            </PageHeader>

            <NoticeBar notice=notice />

            {move || {
                if loading.get() && items.with(Vec::is_empty) {
                    view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Loading projects..."
                        </Flex>
                    }
                    .into_any()
                } else if items.with(Vec::is_empty) {
                    view! { <p class="project-list__empty">"No projects found."</p> }.into_any()
                } else {
                    items
                        .get()
                        .into_iter()
                        .map(|project| {
                            let slug = project.key().map(|k| k.as_string()).unwrap_or_default();
                            let is_deleting = Signal::derive(move || {
                                deleting.with(|d| d.as_deref() == Some(slug.as_str()))
                            });
                            view! {
                                <ProjectCard
                                    project=project
                                    deleting=is_deleting
                                    on_delete=handle_delete
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
