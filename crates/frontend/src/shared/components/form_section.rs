use leptos::prelude::*;

/// Titled group of form controls
#[component]
pub fn FormSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="form__section">
            <h3 class="form__section-title">{title}</h3>
            <div class="form__section-body">{children()}</div>
        </section>
    }
}
