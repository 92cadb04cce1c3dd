//! Build-time configuration of the back-office client
//!
//! The CMS location is baked in at compile time from
//! `SB_BACK_OFFICE_BASE_URL`; a wasm client has no config file to read.

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const API_VERSION: &str = "v1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("SB_BACK_OFFICE_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL
        } else {
            trimmed
        };
        Self {
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Versioned API root, e.g. "http://localhost:3000/api/v1"
    pub fn api_url(&self) -> String {
        format!("{}/{}", self.base_url, API_VERSION)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
