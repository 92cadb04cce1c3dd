//! Form shape of a project
//!
//! The create and update screens edit a project through a [`FormRecord`] with
//! a fixed set of sections. This module declares that shape, fills it from a
//! persisted [`Project`] and turns it back into the JSON part of the request.

use super::aggregate::{Project, ProjectCategory, ProjectSlug, ProjectStatus};
use crate::shared::form_record::{FieldValue, FormRecord, Section};
use serde::Serialize;

/// Section names of the project form
pub mod section {
    pub const BASIC_INFO: &str = "basicInfo";
    pub const META: &str = "meta";
    pub const LINKS: &str = "links";
    pub const OVERVIEW: &str = "overview";
    pub const FEATURES: &str = "features";
    pub const TECHNOLOGIES: &str = "technologies";
    pub const LESSONS_LEARNED: &str = "lessonsLearned";
}

/// Field names inside the nested sections
pub mod field {
    pub const TITLE: &str = "title";
    pub const SLUG: &str = "slug";
    pub const DESCRIPTION: &str = "description";

    pub const STATUS: &str = "status";
    pub const CATEGORY: &str = "category";
    pub const CLIENT: &str = "client";
    pub const TIMEFRAME: &str = "timeframe";

    pub const GITHUB_URL: &str = "githubUrl";
    pub const LIVE_DEMO_URL: &str = "liveDemoUrl";

    pub const CONTEXT: &str = "context";
    pub const TARGET_AUDIENCE: &str = "targetAudience";
    pub const OBJECTIVES: &str = "objectives";

    pub const FRONTEND: &str = "frontend";
    pub const BACKEND: &str = "backend";
    pub const DATABASE: &str = "database";
    pub const REAL_TIME: &str = "realTime";
    pub const DEPLOYMENT: &str = "deployment";
    pub const THIRD_PARTY_API: &str = "thirdPartyAPI";
}

pub const DEFAULT_TIMEFRAME: &str = "Oct 2023 – Jan 2024";

/// Technology fields in display order
pub const TECHNOLOGY_FIELDS: [&str; 6] = [
    field::FRONTEND,
    field::BACKEND,
    field::DATABASE,
    field::REAL_TIME,
    field::DEPLOYMENT,
    field::THIRD_PARTY_API,
];

/// Caption for a technology field: a space before every capital, upper-cased.
///
/// `realTime` -> `REAL TIME`, `thirdPartyAPI` -> `THIRD PARTY A P I`
pub fn technology_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label.to_uppercase()
}

/// Empty record the creation form starts from (and is reset to after a submit)
pub fn initial_record() -> FormRecord {
    hydrate_record(&Project::default())
}

/// Record for the update form, filled from a persisted project.
///
/// Missing text becomes `""`, missing or empty lists become `[""]`, missing
/// status/category/timeframe take the creation defaults.
pub fn hydrate_record(project: &Project) -> FormRecord {
    let basic = project.basic_info.clone().unwrap_or_default();
    let meta = project.meta.clone().unwrap_or_default();
    let links = project.links.clone().unwrap_or_default();
    let overview = project.overview.clone().unwrap_or_default();
    let tech = project.technologies.clone().unwrap_or_default();

    let timeframe = meta
        .timeframe
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string());

    FormRecord::new()
        .with_section(
            section::BASIC_INFO,
            Section::fields([
                (field::TITLE, text(basic.title)),
                (field::SLUG, text(basic.slug)),
                (field::DESCRIPTION, text(basic.description)),
            ]),
        )
        .with_section(
            section::META,
            Section::fields([
                (
                    field::STATUS,
                    FieldValue::text(meta.status.unwrap_or_default().as_str()),
                ),
                (
                    field::CATEGORY,
                    FieldValue::text(meta.category.unwrap_or_default().as_str()),
                ),
                (field::CLIENT, text(meta.client)),
                (field::TIMEFRAME, FieldValue::text(timeframe)),
            ]),
        )
        .with_section(
            section::LINKS,
            Section::fields([
                (field::GITHUB_URL, text(links.github_url)),
                (field::LIVE_DEMO_URL, text(links.live_demo_url)),
            ]),
        )
        .with_section(
            section::OVERVIEW,
            Section::fields([
                (field::CONTEXT, text(overview.context)),
                (field::TARGET_AUDIENCE, text(overview.target_audience)),
                (
                    field::OBJECTIVES,
                    FieldValue::List(list_or_blank(overview.objectives).into()),
                ),
            ]),
        )
        .with_section(
            section::FEATURES,
            Section::list(list_or_blank(project.features.clone())),
        )
        .with_section(
            section::TECHNOLOGIES,
            Section::fields([
                (field::FRONTEND, text(tech.frontend)),
                (field::BACKEND, text(tech.backend)),
                (field::DATABASE, text(tech.database)),
                (field::REAL_TIME, text(tech.real_time)),
                (field::DEPLOYMENT, text(tech.deployment)),
                (field::THIRD_PARTY_API, text(tech.third_party_api)),
            ]),
        )
        .with_section(
            section::LESSONS_LEARNED,
            Section::list(list_or_blank(project.lessons_learned.clone())),
        )
}

fn text(value: Option<String>) -> FieldValue {
    FieldValue::Text(value.unwrap_or_default())
}

fn list_or_blank(items: Option<Vec<String>>) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items,
        _ => vec![String::new()],
    }
}

/// Check the fields the CMS requires before a submit.
///
/// Returns the first problem as a message for the form.
pub fn validate_record(record: &FormRecord) -> Result<(), String> {
    let required = [
        (section::BASIC_INFO, field::TITLE, "Project title is required"),
        (section::BASIC_INFO, field::SLUG, "URL slug is required"),
        (section::BASIC_INFO, field::DESCRIPTION, "Description is required"),
        (section::OVERVIEW, field::CONTEXT, "Context is required"),
    ];
    for (section_name, field_name, message) in required {
        let value = record
            .text(section_name, field_name)
            .map_err(|e| e.to_string())?;
        if value.trim().is_empty() {
            return Err(message.to_string());
        }
    }

    let slug = record
        .text(section::BASIC_INFO, field::SLUG)
        .map_err(|e| e.to_string())?;
    ProjectSlug::new(slug)?;

    let objectives = record
        .list(section::OVERVIEW, Some(field::OBJECTIVES))
        .map_err(|e| e.to_string())?;
    if let Some(pos) = objectives.iter().position(|o| o.trim().is_empty()) {
        return Err(format!("Objective {} must not be empty", pos + 1));
    }

    record
        .text(section::META, field::STATUS)
        .map_err(|e| e.to_string())?
        .parse::<ProjectStatus>()?;
    record
        .text(section::META, field::CATEGORY)
        .map_err(|e| e.to_string())?
        .parse::<ProjectCategory>()?;

    Ok(())
}

/// JSON sent as the `data` part of the multipart create/update request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(flatten)]
    pub record: FormRecord,
    /// Screenshots already stored by the CMS that the update keeps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_screenshot_urls: Option<Vec<String>>,
}

impl ProjectPayload {
    pub fn for_create(record: FormRecord) -> Self {
        Self {
            record,
            existing_screenshot_urls: None,
        }
    }

    pub fn for_update(record: FormRecord, existing_screenshot_urls: Vec<String>) -> Self {
        Self {
            record,
            existing_screenshot_urls: Some(existing_screenshot_urls),
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::aggregate::{ProjectBasicInfo, ProjectMeta, ProjectOverview};

    fn filled() -> FormRecord {
        let mut record = initial_record();
        record.set_field(section::BASIC_INFO, field::TITLE, "Demo").unwrap();
        record.set_field(section::BASIC_INFO, field::SLUG, "demo").unwrap();
        record
            .set_field(section::BASIC_INFO, field::DESCRIPTION, "A demo")
            .unwrap();
        record
            .set_field(section::OVERVIEW, field::CONTEXT, "Side project")
            .unwrap();
        record
            .set_array_element(section::OVERVIEW, 0, "Learn Rust", Some(field::OBJECTIVES))
            .unwrap();
        record
    }

    #[test]
    fn test_initial_record_shape() {
        let record = initial_record();
        assert_eq!(record.len(), 7);
        assert_eq!(record.text(section::META, field::STATUS).unwrap(), "completed");
        assert_eq!(
            record.text(section::META, field::CATEGORY).unwrap(),
            "full-stack-development"
        );
        assert_eq!(
            record.text(section::META, field::TIMEFRAME).unwrap(),
            DEFAULT_TIMEFRAME
        );
        assert_eq!(record.list(section::FEATURES, None).unwrap().len(), 1);
        assert_eq!(
            record
                .list(section::OVERVIEW, Some(field::OBJECTIVES))
                .unwrap()
                .len(),
            1
        );
        for key in TECHNOLOGY_FIELDS {
            assert_eq!(record.text(section::TECHNOLOGIES, key).unwrap(), "");
        }
    }

    #[test]
    fn test_hydrate_fills_defaults() {
        let project = Project {
            basic_info: Some(ProjectBasicInfo {
                title: Some("Shop".into()),
                slug: Some("shop".into()),
                description: None,
            }),
            meta: Some(ProjectMeta {
                status: Some(ProjectStatus::Planned),
                timeframe: Some(String::new()),
                ..Default::default()
            }),
            overview: Some(ProjectOverview {
                objectives: Some(vec![]),
                ..Default::default()
            }),
            features: Some(vec!["Cart".into(), "Checkout".into()]),
            ..Default::default()
        };

        let record = hydrate_record(&project);

        assert_eq!(record.text(section::BASIC_INFO, field::TITLE).unwrap(), "Shop");
        assert_eq!(record.text(section::BASIC_INFO, field::DESCRIPTION).unwrap(), "");
        assert_eq!(record.text(section::META, field::STATUS).unwrap(), "planned");
        assert_eq!(
            record.text(section::META, field::CATEGORY).unwrap(),
            "full-stack-development"
        );
        assert_eq!(
            record.text(section::META, field::TIMEFRAME).unwrap(),
            DEFAULT_TIMEFRAME
        );
        let objectives: Vec<String> = record
            .list(section::OVERVIEW, Some(field::OBJECTIVES))
            .unwrap()
            .iter()
            .cloned()
            .collect();
        assert_eq!(objectives, vec![String::new()]);
        let features: Vec<String> = record
            .list(section::FEATURES, None)
            .unwrap()
            .iter()
            .cloned()
            .collect();
        assert_eq!(features, vec!["Cart".to_string(), "Checkout".to_string()]);
        assert_eq!(record.list(section::LESSONS_LEARNED, None).unwrap().len(), 1);
    }

    #[test]
    fn test_hydrate_defaults_unreadable_meta() {
        let project: Project = serde_json::from_str(
            r#"{"basicInfo":{"slug":"game"},"meta":{"status":"","category":"game-development"}}"#,
        )
        .unwrap();
        let record = hydrate_record(&project);
        assert_eq!(record.text(section::META, field::STATUS).unwrap(), "completed");
        assert_eq!(
            record.text(section::META, field::CATEGORY).unwrap(),
            "full-stack-development"
        );
    }

    #[test]
    fn test_technology_labels() {
        assert_eq!(technology_label("frontend"), "FRONTEND");
        assert_eq!(technology_label("realTime"), "REAL TIME");
        assert_eq!(technology_label("thirdPartyAPI"), "THIRD PARTY A P I");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(
            validate_record(&initial_record()),
            Err("Project title is required".to_string())
        );

        let mut record = filled();
        record.set_field(section::OVERVIEW, field::CONTEXT, "  ").unwrap();
        assert_eq!(validate_record(&record), Err("Context is required".to_string()));

        let mut record = filled();
        record
            .append_array_element(section::OVERVIEW, Some(field::OBJECTIVES))
            .unwrap();
        assert_eq!(
            validate_record(&record),
            Err("Objective 2 must not be empty".to_string())
        );

        let mut record = filled();
        record.set_field(section::BASIC_INFO, field::SLUG, "a/b").unwrap();
        assert!(validate_record(&record).is_err());

        let mut record = filled();
        record.set_field(section::META, field::STATUS, "archived").unwrap();
        assert!(validate_record(&record).is_err());

        assert_eq!(validate_record(&filled()), Ok(()));
    }

    #[test]
    fn test_payload_shape() {
        let create = ProjectPayload::for_create(filled());
        let json = serde_json::to_value(&create).unwrap();
        assert_eq!(json["basicInfo"]["title"], "Demo");
        assert_eq!(json["features"], serde_json::json!([""]));
        assert_eq!(json["technologies"]["thirdPartyAPI"], "");
        assert!(json.get("existingScreenshotUrls").is_none());

        let update = ProjectPayload::for_update(filled(), vec!["https://cdn/x.png".into()]);
        let json: serde_json::Value =
            serde_json::from_str(&update.to_json_string().unwrap()).unwrap();
        assert_eq!(
            json["existingScreenshotUrls"],
            serde_json::json!(["https://cdn/x.png"])
        );
        assert_eq!(json["overview"]["objectives"], serde_json::json!(["Learn Rust"]));
    }

    #[test]
    fn test_payload_parses_back_into_project() {
        let json = ProjectPayload::for_create(filled()).to_json_string().unwrap();
        let project: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(hydrate_record(&project), filled());
    }
}
