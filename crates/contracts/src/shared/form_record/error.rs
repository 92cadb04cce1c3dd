use super::section::Shape;
use thiserror::Error;

/// Caller-contract violations reported by [`FormRecord`](super::FormRecord) operations.
///
/// A failed operation leaves the record unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("section `{section}`: expected {expected}, found {actual}")]
    ShapeMismatch {
        section: String,
        expected: Shape,
        actual: Shape,
    },

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("section `{section}` has no field `{field}`")]
    UnknownField { section: String, field: String },
}

impl FormError {
    pub(super) fn shape_mismatch(section: &str, expected: Shape, actual: Shape) -> Self {
        Self::ShapeMismatch {
            section: section.to_string(),
            expected,
            actual,
        }
    }

    pub(super) fn unknown_section(section: &str) -> Self {
        Self::UnknownSection(section.to_string())
    }

    pub(super) fn unknown_field(section: &str, field: &str) -> Self {
        Self::UnknownField {
            section: section.to_string(),
            field: field.to_string(),
        }
    }
}
