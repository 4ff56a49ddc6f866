//! Indexer configuration.
//!
//! [`IndexerConfig`] names the tags and subfield codes every extractor reads.
//! Each section falls back to its defaults, so a site only lists what
//! differs from a stock export:
//!
//! ```json
//! {
//!   "bib_number": "907a",
//!   "suppression": "998f",
//!   "urls": { "tags": "856:956", "indicator2": "0" },
//!   "performers": { "field": "511a", "cast_indicator": "1" },
//!   "locations": { "first_field": "998a", "every_field": "945l" },
//!   "publication_date": { "primary": "260c", "fallback": "264c" }
//! }
//! ```
//!
//! Textual specs are validated while deserializing; a malformed tag fails
//! the load rather than silently matching nothing.

use crate::error::Result;
use crate::extractors::{DateRule, LocationRule, PerformerRule, UrlRule};
use crate::field_spec::FieldSpec;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Tags and codes for every extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexerConfig {
    /// Field spec holding the record number
    pub bib_number: FieldSpec,
    /// Field spec holding the suppression code
    pub suppression: FieldSpec,
    /// Full-text link fields
    pub urls: UrlRule,
    /// Cast/performer note field
    pub performers: PerformerRule,
    /// Location code fields
    pub locations: LocationRule,
    /// Publication date fields
    pub publication_date: DateRule,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig {
            bib_number: FieldSpec::from_static("907", &['a']),
            suppression: FieldSpec::from_static("998", &['f']),
            urls: UrlRule::default(),
            performers: PerformerRule::default(),
            locations: LocationRule::default(),
            publication_date: DateRule::default(),
        }
    }
}

impl IndexerConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, names an unknown section,
    /// or contains an invalid field spec.
    ///
    /// # Examples
    ///
    /// ```
    /// use marc_indexer::IndexerConfig;
    ///
    /// let config = IndexerConfig::from_json_str(r#"{"bib_number": "001a"}"#).unwrap();
    /// assert_eq!(config.bib_number.tag(), "001");
    /// assert_eq!(config.suppression.to_string(), "998f");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a configuration from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the document is invalid.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading indexer config");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexerError;
    use crate::extractors::identifier::DEFAULT_BIB_NUMBER_SPEC;
    use crate::extractors::suppression::DEFAULT_SUPPRESSION_SPEC;
    use crate::field_spec::IndicatorFilter;

    #[test]
    fn test_defaults() {
        let config = IndexerConfig::default();
        assert_eq!(config.bib_number.to_string(), DEFAULT_BIB_NUMBER_SPEC);
        assert_eq!(config.suppression.to_string(), DEFAULT_SUPPRESSION_SPEC);
        assert_eq!(config.urls.tags.to_string(), "856");
        assert_eq!(config.urls.url_code, 'u');
        assert_eq!(config.urls.text_code, 'z');
        assert_eq!(config.performers.field.to_string(), "511a");
        assert_eq!(config.performers.cast_indicator, '1');
        assert_eq!(config.locations.first_field.to_string(), "998a");
        assert_eq!(config.locations.every_field.to_string(), "945l");
        assert_eq!(config.publication_date.primary.to_string(), "260c");
        assert_eq!(config.publication_date.fallback.to_string(), "264c");
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = IndexerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, IndexerConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = IndexerConfig::from_json_str(
            r#"{"urls": {"tags": "856:956", "indicator2": "0"},
                "publication_date": {"primary": "260c:008"}}"#,
        )
        .unwrap();
        assert_eq!(config.urls.tags.tags(), ["856", "956"]);
        assert_eq!(config.urls.indicator2, IndicatorFilter::Exact('0'));
        assert_eq!(config.urls.url_code, 'u');
        assert_eq!(config.publication_date.primary.specs().len(), 2);
        assert_eq!(config.publication_date.separator, ", ");
    }

    #[test]
    fn test_invalid_spec_rejected() {
        let err = IndexerConfig::from_json_str(r#"{"bib_number": "90"}"#).unwrap_err();
        assert!(matches!(err, IndexerError::InvalidConfig(_)));

        assert!(IndexerConfig::from_json_str(r#"{"urls": {"tags": "856:"}}"#).is_err());
        assert!(IndexerConfig::from_json_str(r#"{"unknown": 1}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = IndexerConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(IndexerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = IndexerConfig::from_path("/nonexistent/indexer.json").unwrap_err();
        assert!(matches!(err, IndexerError::IoError(_)));
    }
}
