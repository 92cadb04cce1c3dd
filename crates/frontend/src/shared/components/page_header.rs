use leptos::prelude::*;
use leptos_router::components::A;

/// PageHeader component - header for list and form pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional link back to the parent page
    #[prop(optional)]
    back_href: Option<&'static str>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {back_href.map(|href| view! {
                    <A href=href attr:class="page-header__back">"← Back"</A>
                })}
                <h1 class="page-header__title">{title}</h1>
            </div>
            <div class="page-header__actions">
                {children.map(|children| children())}
            </div>
        </div>
    }
}
