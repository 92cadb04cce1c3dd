use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// List of text values (objectives, features, ...).
pub type TextList = Vector<String>;

/// Value stored under a field of a nested section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(TextList),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::Text(_) => Shape::TextField,
            Self::List(_) => Shape::ListField,
        }
    }
}

/// Top-level group of a form record.
///
/// A section is either a mapping of named fields or directly a list of values
/// (a flat array section). The kind never changes once the section exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    Fields(OrdMap<String, FieldValue>),
    List(TextList),
}

impl Section {
    pub fn fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        Self::Fields(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::Fields(_) => Shape::NestedSection,
            Self::List(_) => Shape::FlatList,
        }
    }
}

/// Shape of a path target, used in [`FormError::ShapeMismatch`](super::FormError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    NestedSection,
    FlatList,
    TextField,
    ListField,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Shape::NestedSection => "a nested section",
            Shape::FlatList => "a flat list section",
            Shape::TextField => "a text field",
            Shape::ListField => "a list field",
        };
        f.write_str(label)
    }
}
