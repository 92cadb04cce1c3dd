//! Types shared by the back-office frontend: the path-addressed form record,
//! the project entity and its form shape, and the API envelope.

pub mod domain;
pub mod shared;
