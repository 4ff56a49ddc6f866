//! Per-record extraction facade.
//!
//! [`RecordIndexer`] binds an [`IndexerConfig`] and a [`DateCleaner`] so the
//! pipeline can call each extractor with only a record. It holds no mutable
//! state; one indexer can serve any number of records, from any thread when
//! the cleaner is `Sync`.
//!
//! # Examples
//!
//! ```
//! use marc_indexer::{Field, Record, RecordIndexer};
//!
//! let record = Record::builder()
//!     .field(Field::builder("907".to_string(), ' ', ' ').subfield_str('a', ".b10082281").build())
//!     .field(Field::builder("998".to_string(), ' ', ' ')
//!         .subfield_str('a', "main")
//!         .subfield_str('f', "-")
//!         .build())
//!     .build();
//!
//! let indexer = RecordIndexer::default();
//! let values = indexer.extract_all(&record);
//! assert_eq!(values.id.as_deref(), Some("b1008228"));
//! assert_eq!(values.suppressed.as_deref(), Some("unsuppressed"));
//! assert_eq!(values.locations.to_vec(), vec!["main"]);
//! ```

use crate::config::IndexerConfig;
use crate::date_cleaning::{DateCleaner, YearDateCleaner};
use crate::extractors::{self, Participants};
use crate::marc_record::MarcRecord;
use crate::value_set::ValueSet;
use serde::Serialize;

/// Every extractor's output for one record.
///
/// Absent scalars and empty sets mean "omit or delete this index field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedValues {
    /// Normalized record number
    pub id: Option<String>,
    /// `"unsuppressed"` for visible records, absent otherwise
    pub suppressed: Option<String>,
    /// `"url|text"` full-text links
    pub urls: ValueSet,
    /// Cast names
    pub cast: ValueSet,
    /// Performer names
    pub performers: ValueSet,
    /// Library/location codes
    pub locations: ValueSet,
    /// Cleaned publication date
    pub publication_date: Option<String>,
}

/// Runs the configured extractors against records.
#[derive(Debug, Clone)]
pub struct RecordIndexer<C = YearDateCleaner> {
    config: IndexerConfig,
    cleaner: C,
}

impl RecordIndexer<YearDateCleaner> {
    /// Create an indexer with the stock date cleaner.
    #[must_use]
    pub fn new(config: IndexerConfig) -> Self {
        RecordIndexer {
            config,
            cleaner: YearDateCleaner::default(),
        }
    }
}

impl Default for RecordIndexer<YearDateCleaner> {
    fn default() -> Self {
        Self::new(IndexerConfig::default())
    }
}

impl<C: DateCleaner> RecordIndexer<C> {
    /// Create an indexer with a custom date cleaner.
    #[must_use]
    pub fn with_cleaner(config: IndexerConfig, cleaner: C) -> Self {
        RecordIndexer { config, cleaner }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Normalized record number, see [`extractors::identifier`].
    #[must_use]
    pub fn bib_record_number<R: MarcRecord + ?Sized>(&self, record: &R) -> Option<String> {
        extractors::bib_record_number(record, &self.config.bib_number)
    }

    /// Suppression flag, see [`extractors::suppression`].
    #[must_use]
    pub fn suppression_status<R: MarcRecord + ?Sized>(&self, record: &R) -> Option<&'static str> {
        extractors::suppression_status(record, &self.config.suppression)
    }

    /// Full-text links, see [`extractors::urls`].
    #[must_use]
    pub fn full_text_urls<R: MarcRecord + ?Sized>(&self, record: &R) -> ValueSet {
        extractors::full_text_urls(record, &self.config.urls)
    }

    /// Cast names, see [`extractors::performers`].
    #[must_use]
    pub fn cast<R: MarcRecord + ?Sized>(&self, record: &R) -> ValueSet {
        extractors::cast(record, &self.config.performers)
    }

    /// Performer names, see [`extractors::performers`].
    #[must_use]
    pub fn performers<R: MarcRecord + ?Sized>(&self, record: &R) -> ValueSet {
        extractors::performers(record, &self.config.performers)
    }

    /// Location codes, see [`extractors::locations`].
    #[must_use]
    pub fn location_codes<R: MarcRecord + ?Sized>(&self, record: &R) -> ValueSet {
        extractors::location_codes(record, &self.config.locations)
    }

    /// Cleaned publication date, see [`extractors::publication_date`].
    #[must_use]
    pub fn publication_date<R: MarcRecord + ?Sized>(&self, record: &R) -> Option<String> {
        extractors::publication_date(record, &self.config.publication_date, &self.cleaner)
    }

    /// Run every extractor once.
    #[must_use]
    pub fn extract_all<R: MarcRecord + ?Sized>(&self, record: &R) -> ExtractedValues {
        let Participants { cast, performers } =
            extractors::partition(record, &self.config.performers);
        let values = ExtractedValues {
            id: self.bib_record_number(record),
            suppressed: self.suppression_status(record).map(str::to_string),
            urls: self.full_text_urls(record),
            cast,
            performers,
            locations: self.location_codes(record),
            publication_date: self.publication_date(record),
        };
        if values.id.is_none() {
            tracing::debug!("extracted record has no id");
        }
        values
    }
}
