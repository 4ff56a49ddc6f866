//! Publication date resolution.
//!
//! The date is read from the publication statement, falling back to the
//! production/publication field used by newer cataloging rules. The raw
//! text is handed to a [`DateCleaner`] once.

use crate::date_cleaning::DateCleaner;
use crate::field_selector::field_values_joined;
use crate::field_spec::{FieldSpec, FieldSpecList};
use crate::marc_record::MarcRecord;
use serde::{Deserialize, Serialize};

/// Separator used when a date subfield repeats.
pub const DEFAULT_DATE_SEPARATOR: &str = ", ";

/// Where the publication date is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRule {
    /// Specs tried first
    pub primary: FieldSpecList,
    /// Specs tried when `primary` yields nothing
    pub fallback: FieldSpecList,
    /// Joins repeated values
    pub separator: String,
}

impl Default for DateRule {
    fn default() -> Self {
        DateRule {
            primary: FieldSpec::from_static("260", &['c']).into(),
            fallback: FieldSpec::from_static("264", &['c']).into(),
            separator: DEFAULT_DATE_SEPARATOR.to_string(),
        }
    }
}

/// The raw, uncleaned date text: primary specs, else fallback specs.
#[must_use]
pub fn raw_publication_date<R: MarcRecord + ?Sized>(record: &R, rule: &DateRule) -> Option<String> {
    field_values_joined(record, &rule.primary, &rule.separator)
        .or_else(|| field_values_joined(record, &rule.fallback, &rule.separator))
}

/// Resolve and clean the publication date.
///
/// # Examples
///
/// ```
/// use marc_indexer::extractors::publication_date::{publication_date, DateRule};
/// use marc_indexer::{Field, Record, YearDateCleaner};
///
/// let mut record = Record::new();
/// record.add_field(Field::builder("264".to_string(), ' ', '1').subfield_str('c', "[2015]").build());
///
/// let date = publication_date(&record, &DateRule::default(), &YearDateCleaner::default());
/// assert_eq!(date, Some("2015".to_string()));
/// ```
#[must_use]
pub fn publication_date<R, C>(record: &R, rule: &DateRule, cleaner: &C) -> Option<String>
where
    R: MarcRecord + ?Sized,
    C: DateCleaner + ?Sized,
{
    let Some(raw) = raw_publication_date(record, rule) else {
        tracing::debug!("record has no publication date");
        return None;
    };
    Some(cleaner.clean(&raw))
}
