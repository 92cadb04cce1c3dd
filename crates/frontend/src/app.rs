use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::CredentialsProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Layout state (sidebar) for the whole app.
    provide_context(AppGlobalContext::new());

    view! {
        <CredentialsProvider>
            <AppRoutes />
        </CredentialsProvider>
    }
}
