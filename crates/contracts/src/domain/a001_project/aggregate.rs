use crate::domain::common::{EntityKey, EntityRoot};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Key
// ============================================================================

/// URL slug of a project. The single key for fetch, update and delete routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectSlug(String);

impl ProjectSlug {
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("Slug must not be empty".into());
        }
        if trimmed.contains('/') {
            return Err(format!("Slug must not contain '/': {}", trimmed));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl EntityKey for ProjectSlug {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Self::new(s)
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [Self::Completed, Self::InProgress, Self::Planned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Planned => "Planned",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown project status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    #[default]
    FullStackDevelopment,
    FrontendDevelopment,
    BackendDevelopment,
    MobileAppDevelopment,
    DataScience,
    MachineLearning,
    Devops,
    UiUxDesign,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 8] = [
        Self::FullStackDevelopment,
        Self::FrontendDevelopment,
        Self::BackendDevelopment,
        Self::MobileAppDevelopment,
        Self::DataScience,
        Self::MachineLearning,
        Self::Devops,
        Self::UiUxDesign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullStackDevelopment => "full-stack-development",
            Self::FrontendDevelopment => "frontend-development",
            Self::BackendDevelopment => "backend-development",
            Self::MobileAppDevelopment => "mobile-app-development",
            Self::DataScience => "data-science",
            Self::MachineLearning => "machine-learning",
            Self::Devops => "devops",
            Self::UiUxDesign => "ui-ux-design",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullStackDevelopment => "Full Stack Development",
            Self::FrontendDevelopment => "Frontend Development",
            Self::BackendDevelopment => "Backend Development",
            Self::MobileAppDevelopment => "Mobile App Development",
            Self::DataScience => "Data Science",
            Self::MachineLearning => "Machine Learning",
            Self::Devops => "DevOps",
            Self::UiUxDesign => "UI/UX Design",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown project category: {}", s))
    }
}

/// Empty, unknown or non-string wire values read as `None`, so the form falls
/// back to the default instead of the whole record failing to load.
fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.trim().parse().ok()))
}

// ============================================================================
// Entity
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectBasicInfo {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectMeta {
    #[serde(deserialize_with = "lenient_option")]
    pub status: Option<ProjectStatus>,
    #[serde(deserialize_with = "lenient_option")]
    pub category: Option<ProjectCategory>,
    pub client: Option<String>,
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectLinks {
    pub github_url: Option<String>,
    pub live_demo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectOverview {
    pub context: Option<String>,
    pub target_audience: Option<String>,
    pub objectives: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectTechnologies {
    pub frontend: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub real_time: Option<String>,
    pub deployment: Option<String>,
    #[serde(rename = "thirdPartyAPI")]
    pub third_party_api: Option<String>,
}

/// Portfolio project as stored by the CMS
///
/// Every part is optional: partially persisted entities still load and are
/// completed with defaults when the edit form is hydrated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub basic_info: Option<ProjectBasicInfo>,
    pub meta: Option<ProjectMeta>,
    pub links: Option<ProjectLinks>,
    pub overview: Option<ProjectOverview>,
    pub screenshots: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub technologies: Option<ProjectTechnologies>,
    pub lessons_learned: Option<Vec<String>>,
}

impl Project {
    pub fn description(&self) -> &str {
        self.basic_info
            .as_ref()
            .and_then(|b| b.description.as_deref())
            .unwrap_or_default()
    }

    pub fn screenshot_urls(&self) -> &[String] {
        self.screenshots.as_deref().unwrap_or_default()
    }
}

impl EntityRoot for Project {
    type Key = ProjectSlug;

    fn key(&self) -> Option<Self::Key> {
        self.basic_info
            .as_ref()
            .and_then(|b| b.slug.as_deref())
            .and_then(|slug| ProjectSlug::new(slug).ok())
    }

    fn title(&self) -> &str {
        self.basic_info
            .as_ref()
            .and_then(|b| b.title.as_deref())
            .unwrap_or_default()
    }

    fn collection_name() -> &'static str {
        "projects"
    }

    fn element_name() -> &'static str {
        "Project"
    }

    fn list_name() -> &'static str {
        "Projects"
    }
}
