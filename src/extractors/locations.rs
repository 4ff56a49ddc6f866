//! Library and location code collection.
//!
//! Location codes live in two places in legacy exports: repeated codes in
//! the first bibliographic-level location field, and one code per attached
//! item field. Both are merged, bibliographic codes first.

use crate::field_spec::FieldSpec;
use crate::marc_record::MarcRecord;
use crate::value_set::ValueSet;
use serde::{Deserialize, Serialize};

/// Where location codes are read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationRule {
    /// Every matching subfield of the first occurrence of this tag
    pub first_field: FieldSpec,
    /// The first matching subfield of every occurrence of this tag
    pub every_field: FieldSpec,
}

impl Default for LocationRule {
    fn default() -> Self {
        LocationRule {
            first_field: FieldSpec::from_static("998", &['a']),
            every_field: FieldSpec::from_static("945", &['l']),
        }
    }
}

/// Collect trimmed location codes from both sources.
///
/// Codes that are empty after trimming are skipped.
///
/// # Examples
///
/// ```
/// use marc_indexer::extractors::locations::{location_codes, LocationRule};
/// use marc_indexer::{Field, Record};
///
/// let mut record = Record::new();
/// record.add_field(Field::builder("998".to_string(), ' ', ' ')
///     .subfield_str('a', "main ")
///     .subfield_str('a', "arts")
///     .build());
/// record.add_field(Field::builder("945".to_string(), ' ', ' ').subfield_str('l', "law  ").build());
///
/// let codes = location_codes(&record, &LocationRule::default());
/// assert_eq!(codes.to_vec(), vec!["main", "arts", "law"]);
/// ```
#[must_use]
pub fn location_codes<R: MarcRecord + ?Sized>(record: &R, rule: &LocationRule) -> ValueSet {
    let mut codes = ValueSet::new();

    if let Some(field) = record.get_field(rule.first_field.tag()) {
        codes.extend(
            field
                .subfields()
                .filter(|sf| rule.first_field.wants(sf.code))
                .map(|sf| sf.value.trim())
                .filter(|code| !code.is_empty()),
        );
    }

    for field in record.fields_by_tag(rule.every_field.tag()) {
        let code = field
            .subfields()
            .find(|sf| rule.every_field.wants(sf.code))
            .map(|sf| sf.value.trim());
        match code {
            Some(code) if !code.is_empty() => {
                codes.insert(code);
            }
            _ => tracing::trace!(tag = %field.tag, "item field without location"),
        }
    }

    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Record};

    fn bib_locations(codes: &[&str]) -> Field {
        let mut field = Field::new("998".to_string(), ' ', ' ');
        for code in codes {
            field.add_subfield_str('a', code);
        }
        field
    }

    fn item(location: &str) -> Field {
        Field::builder("945".to_string(), ' ', ' ')
            .subfield_str('a', "barcode")
            .subfield_str('l', location)
            .subfield_str('l', "second")
            .build()
    }

    #[test]
    fn test_only_first_bib_location_field_used() {
        let mut record = Record::new();
        record.add_field(bib_locations(&["main", "arts"]));
        record.add_field(bib_locations(&["ignored"]));
        let codes = location_codes(&record, &LocationRule::default());
        assert_eq!(codes.to_vec(), vec!["main", "arts"]);
    }

    #[test]
    fn test_first_code_of_every_item() {
        let mut record = Record::new();
        record.add_field(item(" law "));
        record.add_field(item("music"));
        let codes = location_codes(&record, &LocationRule::default());
        assert_eq!(codes.to_vec(), vec!["law", "music"]);
    }

    #[test]
    fn test_merge_order_and_dedup() {
        let mut record = Record::new();
        record.add_field(item("main"));
        record.add_field(item("law"));
        record.add_field(bib_locations(&["arts", "main "]));
        let codes = location_codes(&record, &LocationRule::default());
        assert_eq!(codes.to_vec(), vec!["arts", "main", "law"]);
    }

    #[test]
    fn test_blank_codes_dropped() {
        let mut record = Record::new();
        record.add_field(bib_locations(&["  "]));
        record.add_field(item(" "));
        assert!(location_codes(&record, &LocationRule::default()).is_empty());
    }

    #[test]
    fn test_no_fields_yields_empty() {
        assert!(location_codes(&Record::new(), &LocationRule::default()).is_empty());
    }
}
