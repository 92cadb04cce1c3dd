use leptos::prelude::*;

use super::storage;

/// Credentials attached to every back-office API request.
///
/// Read once when the application starts and handed to the model layer
/// explicitly; request code never reaches into browser storage itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    token: Option<String>,
}

impl ApiCredentials {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn from_storage() -> Self {
        let credentials = Self::new(storage::get_token());
        if credentials.token.is_none() {
            log::debug!("no API token in storage, requests go out unauthenticated");
        }
        credentials
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token.as_deref().unwrap_or_default())
    }
}

/// Credentials context provider component
#[component]
pub fn CredentialsProvider(children: Children) -> impl IntoView {
    provide_context(ApiCredentials::from_storage());
    children()
}

/// Hook to access the API credentials
pub fn use_credentials() -> ApiCredentials {
    use_context::<ApiCredentials>().expect("CredentialsProvider not found in component tree")
}
