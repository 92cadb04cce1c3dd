//! Path-addressed form record
//!
//! A [`FormRecord`] holds the values of a form as named sections. Inputs are
//! bound to paths inside the record:
//! - `(section, field)` for a text field of a nested section
//! - `(section, index, field?)` for an element of a list; with `field` the list
//!   lives under that field of a nested section, without it the section itself
//!   is the list
//!
//! Sections are kept in persistent `im` collections, so cloning a record is
//! cheap and a mutation copies only the path it touches. Sibling sections keep
//! sharing their data with earlier snapshots.
//!
//! Every mutating operation either succeeds completely or returns a
//! [`FormError`] and leaves the record as it was.

mod error;
mod section;

pub use error::FormError;
pub use section::{FieldValue, Section, Shape, TextList};

use im::OrdMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    sections: OrdMap<String, Section>,
}

impl FormRecord {
    /// Record without sections. Every mutation on it fails with `UnknownSection`.
    pub fn new() -> Self {
        Self {
            sections: OrdMap::new(),
        }
    }

    /// Builder: add (or overwrite) a section while assembling an initial shape
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.sections.insert(name.into(), section);
        self
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Read a text field of a nested section
    pub fn text(&self, section: &str, field: &str) -> Result<&str, FormError> {
        match self.fields(section)?.get(field) {
            Some(FieldValue::Text(text)) => Ok(text),
            Some(FieldValue::List(_)) => Err(FormError::shape_mismatch(
                section,
                Shape::TextField,
                Shape::ListField,
            )),
            None => Err(FormError::unknown_field(section, field)),
        }
    }

    /// Read the list addressed by `(section, field?)`
    pub fn list(&self, section: &str, field: Option<&str>) -> Result<&TextList, FormError> {
        let entry = self
            .sections
            .get(section)
            .ok_or_else(|| FormError::unknown_section(section))?;
        match (entry, field) {
            (Section::List(items), None) => Ok(items),
            (Section::Fields(fields), Some(field)) => match fields.get(field) {
                Some(FieldValue::List(items)) => Ok(items),
                Some(FieldValue::Text(_)) => Err(FormError::shape_mismatch(
                    section,
                    Shape::ListField,
                    Shape::TextField,
                )),
                None => Err(FormError::unknown_field(section, field)),
            },
            (entry, field) => Err(Self::list_path_mismatch(section, entry, field)),
        }
    }

    /// Replace the whole record. No validation: the caller guarantees the shape.
    pub fn replace_record(&mut self, next: FormRecord) {
        *self = next;
    }

    /// `record[section][field] = value` for an existing text field
    pub fn set_field(
        &mut self,
        section: &str,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        match self.fields_mut(section)?.get_mut(field) {
            Some(FieldValue::Text(text)) => {
                *text = value.into();
                Ok(())
            }
            Some(FieldValue::List(_)) => Err(FormError::shape_mismatch(
                section,
                Shape::TextField,
                Shape::ListField,
            )),
            None => Err(FormError::unknown_field(section, field)),
        }
    }

    /// Overwrite element `index` of the addressed list. Never grows the list.
    pub fn set_array_element(
        &mut self,
        section: &str,
        index: isize,
        value: impl Into<String>,
        field: Option<&str>,
    ) -> Result<(), FormError> {
        let items = self.list_mut(section, field)?;
        let at = checked_index(index, items.len())?;
        items.set(at, value.into());
        Ok(())
    }

    /// Push an empty string onto the addressed list
    pub fn append_array_element(
        &mut self,
        section: &str,
        field: Option<&str>,
    ) -> Result<(), FormError> {
        self.list_mut(section, field)?.push_back(String::new());
        Ok(())
    }

    /// Remove element `index` of the addressed list, keeping the order of the rest
    pub fn remove_array_element(
        &mut self,
        section: &str,
        index: isize,
        field: Option<&str>,
    ) -> Result<(), FormError> {
        let items = self.list_mut(section, field)?;
        let at = checked_index(index, items.len())?;
        items.remove(at);
        Ok(())
    }

    fn fields(&self, section: &str) -> Result<&OrdMap<String, FieldValue>, FormError> {
        match self.sections.get(section) {
            Some(Section::Fields(fields)) => Ok(fields),
            Some(Section::List(_)) => Err(FormError::shape_mismatch(
                section,
                Shape::NestedSection,
                Shape::FlatList,
            )),
            None => Err(FormError::unknown_section(section)),
        }
    }

    fn fields_mut(&mut self, section: &str) -> Result<&mut OrdMap<String, FieldValue>, FormError> {
        match self.sections.get_mut(section) {
            Some(Section::Fields(fields)) => Ok(fields),
            Some(Section::List(_)) => Err(FormError::shape_mismatch(
                section,
                Shape::NestedSection,
                Shape::FlatList,
            )),
            None => Err(FormError::unknown_section(section)),
        }
    }

    fn list_mut(&mut self, section: &str, field: Option<&str>) -> Result<&mut TextList, FormError> {
        let entry = self
            .sections
            .get_mut(section)
            .ok_or_else(|| FormError::unknown_section(section))?;
        match (entry, field) {
            (Section::List(items), None) => Ok(items),
            (Section::Fields(fields), Some(field)) => match fields.get_mut(field) {
                Some(FieldValue::List(items)) => Ok(items),
                Some(FieldValue::Text(_)) => Err(FormError::shape_mismatch(
                    section,
                    Shape::ListField,
                    Shape::TextField,
                )),
                None => Err(FormError::unknown_field(section, field)),
            },
            (entry, field) => Err(Self::list_path_mismatch(section, entry, field)),
        }
    }

    // A field on a flat list, or no field on a nested section.
    fn list_path_mismatch(section: &str, entry: &Section, field: Option<&str>) -> FormError {
        let expected = if field.is_some() {
            Shape::NestedSection
        } else {
            Shape::FlatList
        };
        FormError::shape_mismatch(section, expected, entry.shape())
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_index(index: isize, len: usize) -> Result<usize, FormError> {
    usize::try_from(index)
        .ok()
        .filter(|&at| at < len)
        .ok_or(FormError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormRecord {
        FormRecord::new()
            .with_section(
                "overview",
                Section::fields([
                    ("context", FieldValue::text("")),
                    ("objectives", FieldValue::list(["ship", "learn"])),
                ]),
            )
            .with_section("features", Section::list([""]))
    }

    #[test]
    fn test_set_field_on_flat_section_is_shape_mismatch() {
        let mut record = sample();
        let err = record.set_field("features", "title", "x").unwrap_err();
        assert_eq!(
            err,
            FormError::ShapeMismatch {
                section: "features".into(),
                expected: Shape::NestedSection,
                actual: Shape::FlatList,
            }
        );
    }

    #[test]
    fn test_set_field_on_list_field_is_shape_mismatch() {
        let mut record = sample();
        let err = record
            .set_field("overview", "objectives", "x")
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::ShapeMismatch {
                expected: Shape::TextField,
                actual: Shape::ListField,
                ..
            }
        ));
    }

    #[test]
    fn test_field_path_on_flat_list_is_shape_mismatch() {
        let mut record = sample();
        let err = record
            .append_array_element("features", Some("objectives"))
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::ShapeMismatch {
                expected: Shape::NestedSection,
                actual: Shape::FlatList,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_field_on_nested_section_is_shape_mismatch() {
        let mut record = sample();
        let err = record.append_array_element("overview", None).unwrap_err();
        assert!(matches!(
            err,
            FormError::ShapeMismatch {
                expected: Shape::FlatList,
                actual: Shape::NestedSection,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_section_is_not_created() {
        let mut record = sample();
        let err = record.append_array_element("lessons", None).unwrap_err();
        assert_eq!(err, FormError::UnknownSection("lessons".into()));
        assert!(record.section("lessons").is_none());
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_unknown_field_is_not_created() {
        let mut record = sample();
        let err = record.set_field("overview", "audience", "devs").unwrap_err();
        assert_eq!(
            err,
            FormError::UnknownField {
                section: "overview".into(),
                field: "audience".into(),
            }
        );
        assert_eq!(record, sample());
    }

    #[test]
    fn test_nested_list_operations() {
        let mut record = sample();
        record
            .set_array_element("overview", 1, "teach", Some("objectives"))
            .unwrap();
        record
            .remove_array_element("overview", 0, Some("objectives"))
            .unwrap();
        record
            .append_array_element("overview", Some("objectives"))
            .unwrap();
        let objectives: Vec<&str> = record
            .list("overview", Some("objectives"))
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(objectives, vec!["teach", ""]);
    }

    #[test]
    fn test_empty_record_rejects_mutations() {
        let mut record = FormRecord::new();
        assert!(record.is_empty());
        assert!(matches!(
            record.set_field("basicInfo", "title", "x"),
            Err(FormError::UnknownSection(_))
        ));
        assert!(matches!(
            record.remove_array_element("features", 0, None),
            Err(FormError::UnknownSection(_))
        ));
        assert!(record.is_empty());
    }

    #[test]
    fn test_remove_last_element_leaves_empty_list() {
        let mut record = sample();
        record.remove_array_element("features", 0, None).unwrap();
        assert!(record.list("features", None).unwrap().is_empty());
        assert_eq!(
            record.remove_array_element("features", 0, None),
            Err(FormError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::IndexOutOfRange { index: -1, len: 2 }.to_string(),
            "index -1 is out of range for a list of length 2"
        );
        assert_eq!(
            FormError::shape_mismatch("features", Shape::NestedSection, Shape::FlatList)
                .to_string(),
            "section `features`: expected a nested section, found a flat list section"
        );
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "features": [""],
                "overview": { "context": "", "objectives": ["ship", "learn"] }
            })
        );
        let back: FormRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
