//! Full-text URL extraction.
//!
//! Each electronic location field with a URL becomes one `"url|link text"`
//! entry. The display layer splits on the first `|`; neither part is
//! escaped, so a `|` inside a URL or note passes through as-is.

use crate::field_spec::{IndicatorFilter, TagList};
use crate::marc_record::MarcRecord;
use crate::value_set::ValueSet;
use serde::{Deserialize, Serialize};

/// Link text used when a field carries no public note.
pub const DEFAULT_LINK_TEXT: &str = "Access this resource online";

/// Separator between the URL and its link text.
pub const URL_TEXT_SEPARATOR: char = '|';

/// Which fields and subfields hold full-text links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlRule {
    /// Tags to visit, in order
    pub tags: TagList,
    /// Subfield holding the URL
    pub url_code: char,
    /// Subfield holding the link text
    pub text_code: char,
    /// Link text when `text_code` is missing
    pub default_text: String,
    /// Optional second indicator filter (e.g. `0` for the resource itself)
    pub indicator2: IndicatorFilter,
}

impl Default for UrlRule {
    fn default() -> Self {
        UrlRule {
            tags: TagList::from_static(&["856"]),
            url_code: 'u',
            text_code: 'z',
            default_text: DEFAULT_LINK_TEXT.to_string(),
            indicator2: IndicatorFilter::Any,
        }
    }
}

/// Build `"url|text"` entries for every field that carries a URL.
///
/// Fields without a URL subfield contribute nothing, even when they carry
/// link text.
///
/// # Examples
///
/// ```
/// use marc_indexer::extractors::urls::{full_text_urls, UrlRule};
/// use marc_indexer::{Field, Record};
///
/// let mut record = Record::new();
/// record.add_field(Field::builder("856".to_string(), '4', '0')
///     .subfield_str('u', "http://example.org/a")
///     .build());
///
/// let urls = full_text_urls(&record, &UrlRule::default());
/// assert_eq!(urls.to_vec(), vec!["http://example.org/a|Access this resource online"]);
/// ```
#[must_use]
pub fn full_text_urls<R: MarcRecord + ?Sized>(record: &R, rule: &UrlRule) -> ValueSet {
    let mut urls = ValueSet::new();
    for tag in rule.tags.iter() {
        for field in record.fields_by_tag(tag) {
            if !rule.indicator2.matches(field.indicator2) {
                continue;
            }
            let Some(url) = field.get_subfield(rule.url_code) else {
                tracing::trace!(tag, "skipping link field without a URL");
                continue;
            };
            let text = field
                .get_subfield(rule.text_code)
                .unwrap_or(rule.default_text.as_str());
            urls.insert(format!("{url}{URL_TEXT_SEPARATOR}{text}"));
        }
    }
    urls
}
