//! Project Details UI Module
//!
//! MVVM split:
//! - model.rs: API functions (fetch, create, update, delete)
//! - view_model.rs: form state, screenshot selection and submit command
//! - view.rs: the form itself
//! - page.rs: routed create/edit pages

pub mod model;
mod page;
mod view;
mod view_model;

pub use page::{ProjectCreatePage, ProjectEditPage};
pub use view::ProjectDetails;
pub use view_model::{FormMode, ProjectDetailsViewModel};
