//! Suppression flag resolution.
//!
//! The status subfield carries `-` for records that should be visible.
//! Only that marker produces a value; a missing field or any other code
//! resolves to absent, and the index configuration deletes documents whose
//! suppression field is empty.

use crate::field_selector::first_field_value;
use crate::field_spec::FieldSpec;
use crate::marc_record::MarcRecord;

/// Default field spec holding the suppression code.
pub const DEFAULT_SUPPRESSION_SPEC: &str = "998f";

/// Status code, after trimming, that marks a visible record.
pub const UNSUPPRESSED_MARKER: &str = "-";

/// Value emitted for visible records.
pub const UNSUPPRESSED: &str = "unsuppressed";

/// Resolve the suppression flag.
///
/// Returns `Some(UNSUPPRESSED)` only when the status code trims to exactly
/// `-`. Every other state, including a missing field, is `None`.
///
/// # Examples
///
/// ```
/// use marc_indexer::extractors::suppression::{suppression_status, UNSUPPRESSED};
/// use marc_indexer::{Field, FieldSpec, Record};
///
/// let spec = FieldSpec::parse("998f").unwrap();
/// let mut record = Record::new();
/// assert_eq!(suppression_status(&record, &spec), None);
///
/// record.add_field(Field::builder("998".to_string(), ' ', ' ').subfield_str('f', " - ").build());
/// assert_eq!(suppression_status(&record, &spec), Some(UNSUPPRESSED));
/// ```
#[must_use]
pub fn suppression_status<R: MarcRecord + ?Sized>(
    record: &R,
    spec: &FieldSpec,
) -> Option<&'static str> {
    let code = first_field_value(record, spec)?;
    if code.trim() == UNSUPPRESSED_MARKER {
        Some(UNSUPPRESSED)
    } else {
        tracing::debug!(code, "record is suppressed");
        None
    }
}

/// True unless the record carries the unsuppressed marker.
#[must_use]
pub fn is_suppressed<R: MarcRecord + ?Sized>(record: &R, spec: &FieldSpec) -> bool {
    suppression_status(record, spec).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Record};

    fn record_with_998f(value: &str) -> Record {
        Record::builder()
            .field(
                Field::builder("998".to_string(), ' ', ' ')
                    .subfield_str('a', "main")
                    .subfield_str('f', value)
                    .build(),
            )
            .build()
    }

    fn spec() -> FieldSpec {
        FieldSpec::parse(DEFAULT_SUPPRESSION_SPEC).unwrap()
    }

    #[test]
    fn test_dash_is_unsuppressed() {
        assert_eq!(suppression_status(&record_with_998f("-"), &spec()), Some(UNSUPPRESSED));
        assert_eq!(suppression_status(&record_with_998f(" - "), &spec()), Some(UNSUPPRESSED));
        assert!(!is_suppressed(&record_with_998f("-"), &spec()));
    }

    #[test]
    fn test_other_codes_are_absent() {
        assert_eq!(suppression_status(&record_with_998f("d"), &spec()), None);
        assert_eq!(suppression_status(&record_with_998f("--"), &spec()), None);
        assert_eq!(suppression_status(&record_with_998f(""), &spec()), None);
        assert!(is_suppressed(&record_with_998f("n"), &spec()));
    }

    #[test]
    fn test_missing_field_is_absent() {
        let record = Record::new();
        assert_eq!(suppression_status(&record, &spec()), None);
        assert!(is_suppressed(&record, &spec()));
    }

    #[test]
    fn test_missing_subfield_is_absent() {
        let record = Record::builder()
            .field(
                Field::builder("998".to_string(), ' ', ' ')
                    .subfield_str('a', "main")
                    .build(),
            )
            .build();
        assert_eq!(suppression_status(&record, &spec()), None);
    }
}
