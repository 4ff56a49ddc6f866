//! Bibliographic record number normalization.
//!
//! The catalog exports record numbers such as `.b10082281` with a leading
//! period and, on some exports, one trailing check character. The index id
//! is the number with every period removed, cut back to the legacy
//! eight-character form when longer.

use crate::field_selector::first_field_value;
use crate::field_spec::FieldSpec;
use crate::marc_record::MarcRecord;

/// Default field spec holding the record number.
pub const DEFAULT_BIB_NUMBER_SPEC: &str = "907a";

/// Length of a legacy record number once periods are removed.
pub const LEGACY_ID_LEN: usize = 8;

/// Strip periods and drop one trailing character past the legacy length.
///
/// Exactly one character is removed, whatever the excess.
///
/// # Examples
///
/// ```
/// use marc_indexer::extractors::identifier::normalize_bib_number;
///
/// assert_eq!(normalize_bib_number(".b1008228"), "b1008228");
/// assert_eq!(normalize_bib_number(".b10082281"), "b1008228");
/// ```
#[must_use]
pub fn normalize_bib_number(raw: &str) -> String {
    let mut id: String = raw.chars().filter(|&c| c != '.').collect();
    if id.chars().count() > LEGACY_ID_LEN {
        id.pop();
    }
    id
}

/// Extract and normalize the record number.
///
/// `None` when the record has no such subfield, which the pipeline reads as
/// "delete this document". An empty subfield yields `Some("")`.
#[must_use]
pub fn bib_record_number<R: MarcRecord + ?Sized>(record: &R, spec: &FieldSpec) -> Option<String> {
    let Some(raw) = first_field_value(record, spec) else {
        tracing::debug!(spec = %spec, "record has no record number");
        return None;
    };
    Some(normalize_bib_number(raw))
}
