//! Read-only lookup trait the extractors are written against.
//!
//! The indexer never owns record parsing. Any record type that can answer
//! "which fields carry this tag, in record order" implements [`MarcRecord`]
//! and can be passed to every extractor in this crate.

use crate::record::Field;

/// Read-only view of a MARC bibliographic record.
///
/// Only [`get_fields`](MarcRecord::get_fields) and
/// [`get_control_field`](MarcRecord::get_control_field) are required; the
/// remaining lookups derive from them.
///
/// # Examples
///
/// ```
/// use marc_indexer::{Field, MarcRecord, Record};
///
/// fn count_urls<R: MarcRecord + ?Sized>(record: &R) -> usize {
///     record.fields_by_tag("856").filter(|f| f.get_subfield('u').is_some()).count()
/// }
///
/// let mut record = Record::new();
/// record.add_field(Field::builder("856".to_string(), '4', '0').subfield_str('u', "http://x").build());
/// assert_eq!(count_urls(&record), 1);
/// ```
pub trait MarcRecord {
    /// Get the value of a control field (000-009).
    ///
    /// Returns `None` if the field does not exist.
    fn get_control_field(&self, tag: &str) -> Option<&str>;

    /// Get all fields with a given tag, in record order.
    ///
    /// Returns `None` if no field carries the tag.
    #[must_use]
    fn get_fields(&self, tag: &str) -> Option<&[Field]>;

    /// Get the first field with a given tag.
    #[must_use]
    fn get_field(&self, tag: &str) -> Option<&Field> {
        self.get_fields(tag).and_then(<[Field]>::first)
    }

    /// Iterate over fields with a given tag, in record order.
    ///
    /// A missing tag yields an empty iterator.
    fn fields_by_tag(&self, tag: &str) -> std::slice::Iter<'_, Field> {
        self.get_fields(tag).unwrap_or(&[]).iter()
    }
}
