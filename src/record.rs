//! MARC bibliographic record structures.
//!
//! This module provides the in-memory record types the extractors read from:
//! - [`Record`] - A bibliographic record
//! - [`Field`] - Variable data fields (010+)
//! - [`Subfield`] - Coded data elements within fields
//!
//! Records are produced by whatever parser the indexing pipeline uses. They
//! derive `serde` traits so a pipeline can hand them over as JSON.
//!
//! # Examples
//!
//! ```
//! use marc_indexer::{Field, Record};
//!
//! let record = Record::builder()
//!     .control_field_str("001", "12345")
//!     .field(
//!         Field::builder("907".to_string(), ' ', ' ')
//!             .subfield_str('a', ".b10082281")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_field("907").and_then(|f| f.get_subfield('a')), Some(".b10082281"));
//! ```

use crate::marc_record::MarcRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A MARC bibliographic record
///
/// Fields are grouped by tag in an `IndexMap`. Tags keep the order in which
/// they were first added, and fields sharing a tag keep record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Control fields (000-009) - tag -> value, preserves insertion order
    #[serde(default)]
    pub control_fields: IndexMap<String, String>,
    /// Data fields (010+) - tag -> fields, preserves insertion order
    #[serde(default)]
    pub fields: IndexMap<String, Vec<Field>>,
}

/// A data field in a MARC record (fields 010 and higher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 characters)
    pub tag: String,
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields in declaration order
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Record {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Record::default()
    }

    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Add a control field (000-009)
    pub fn add_control_field(&mut self, tag: String, value: String) {
        self.control_fields.insert(tag, value);
    }

    /// Add a control field using string slices
    pub fn add_control_field_str(&mut self, tag: &str, value: &str) {
        self.add_control_field(tag.to_string(), value.to_string());
    }

    /// Get a control field value
    #[must_use]
    pub fn get_control_field(&self, tag: &str) -> Option<&str> {
        self.control_fields.get(tag).map(String::as_str)
    }

    /// Add a data field after any existing fields with the same tag
    pub fn add_field(&mut self, field: Field) {
        self.fields
            .entry(field.tag.clone())
            .or_default()
            .push(field);
    }

    /// Get all fields with a given tag
    #[must_use]
    pub fn get_fields(&self, tag: &str) -> Option<&[Field]> {
        self.fields.get(tag).map(Vec::as_slice)
    }

    /// Get first field with a given tag
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.get(tag).and_then(|v| v.first())
    }

    /// Iterate over all data fields, grouped by tag
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values().flat_map(|v| v.iter())
    }
}

impl MarcRecord for Record {
    fn get_control_field(&self, tag: &str) -> Option<&str> {
        Record::get_control_field(self, tag)
    }

    fn get_fields(&self, tag: &str) -> Option<&[Field]> {
        Record::get_fields(self, tag)
    }
}

/// Builder for fluently constructing records
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a control field using string slices
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_control_field_str(tag, value);
        self
    }

    /// Add a data field to the record being built
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a new data field with no subfields
    #[must_use]
    pub fn new(tag: String, indicator1: char, indicator2: char) -> Self {
        Field {
            tag,
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_indexer::Field;
    ///
    /// let field = Field::builder("856".to_string(), '4', '0')
    ///     .subfield_str('u', "http://example.org/item")
    ///     .subfield_str('z', "Full text")
    ///     .build();
    /// assert_eq!(field.get_subfield('z'), Some("Full text"));
    /// ```
    #[must_use]
    pub fn builder(tag: String, indicator1: char, indicator2: char) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag, indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// Get first value for a subfield code
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Iterate over all subfields
    pub fn subfields(&self) -> impl Iterator<Item = &Subfield> {
        self.subfields.iter()
    }

    /// Iterate over subfield values with a specific code
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }
}

/// Builder for fluently constructing fields
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Add a subfield to the field being built
    #[must_use]
    pub fn subfield(mut self, code: char, value: String) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new();
        assert!(record.control_fields.is_empty());
        assert!(record.fields.is_empty());
    }

    #[test]
    fn test_add_control_field() {
        let mut record = Record::new();
        record.add_control_field("001".to_string(), "12345".to_string());
        assert_eq!(record.get_control_field("001"), Some("12345"));
        assert_eq!(record.get_control_field("003"), None);
    }

    #[test]
    fn test_fields_keep_record_order_within_tag() {
        let mut record = Record::new();
        record.add_field(
            Field::builder("511".to_string(), '1', ' ')
                .subfield_str('a', "First")
                .build(),
        );
        record.add_field(
            Field::builder("245".to_string(), '1', '0')
                .subfield_str('a', "Title")
                .build(),
        );
        record.add_field(
            Field::builder("511".to_string(), '0', ' ')
                .subfield_str('a', "Second")
                .build(),
        );

        let names: Vec<_> = record
            .get_fields("511")
            .unwrap()
            .iter()
            .filter_map(|f| f.get_subfield('a'))
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(record.get_field("511").unwrap().indicator1, '1');
        assert_eq!(record.fields().count(), 3);
    }

    #[test]
    fn test_field_subfields() {
        let mut field = Field::new("998".to_string(), ' ', ' ');
        field.add_subfield_str('a', "main");
        field.add_subfield_str('f', "-");
        field.add_subfield_str('a', "arts");

        assert_eq!(field.get_subfield('a'), Some("main"));
        assert_eq!(field.get_subfield('b'), None);
        let locations: Vec<_> = field.subfields_by_code('a').collect();
        assert_eq!(locations, vec!["main", "arts"]);
        assert_eq!(field.subfields().count(), 3);
    }

    #[test]
    fn test_record_serde_round_trip_preserves_order() {
        let record = Record::builder()
            .control_field_str("001", "ocm123")
            .field(
                Field::builder("700".to_string(), '1', ' ')
                    .subfield_str('a', "Smith")
                    .build(),
            )
            .field(
                Field::builder("100".to_string(), '1', ' ')
                    .subfield_str('a', "Jones")
                    .build(),
            )
            .build();

        let json = serde_json::to_string(&record).unwrap();
        let restored: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
        let tags: Vec<_> = restored.fields.keys().map(String::as_str).collect();
        assert_eq!(tags, vec!["700", "100"]);
    }

    #[test]
    fn test_record_deserializes_without_control_fields() {
        let json = r#"{"fields": {"907": [{"tag": "907", "indicator1": " ", "indicator2": " ",
            "subfields": [{"code": "a", "value": ".b1000001x"}]}]}}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.control_fields.is_empty());
        assert_eq!(
            record.get_field("907").and_then(|f| f.get_subfield('a')),
            Some(".b1000001x")
        );
    }
}
