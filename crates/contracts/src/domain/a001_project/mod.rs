pub mod aggregate;
pub mod form;
pub mod limits;

pub use aggregate::{
    Project, ProjectBasicInfo, ProjectCategory, ProjectLinks, ProjectMeta, ProjectOverview,
    ProjectSlug, ProjectStatus, ProjectTechnologies,
};
pub use form::{hydrate_record, initial_record, validate_record, ProjectPayload};
