#![warn(missing_docs)]

//! # marc-indexer: MARC field extraction for search indexing
//!
//! Routines that turn one parsed MARC bibliographic record into the values a
//! search index document needs: a record id, a suppression flag, full-text
//! links, cast and performer names, location codes and a publication date.
//!
//! Every routine is a pure function over a read-only record. Parsing raw
//! catalog data, mapping values onto index fields and running the pipeline
//! belong to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use marc_indexer::{Field, Record, RecordIndexer};
//!
//! let record = Record::builder()
//!     .field(Field::builder("907".to_string(), ' ', ' ').subfield_str('a', ".b1008228.1").build())
//!     .field(Field::builder("856".to_string(), '4', '0')
//!         .subfield_str('u', "http://example.org/book")
//!         .build())
//!     .build();
//!
//! let values = RecordIndexer::default().extract_all(&record);
//! assert_eq!(values.id.as_deref(), Some("b1008228"));
//! assert_eq!(values.suppressed, None);
//! assert_eq!(values.urls.to_vec(), vec!["http://example.org/book|Access this resource online"]);
//! ```
//!
//! ## Generic selection
//!
//! ```
//! use marc_indexer::{Field, FieldSelector, IndicatorFilter, Record, SubfieldFilter};
//!
//! let mut record = Record::new();
//! record.add_field(Field::builder("650".to_string(), ' ', '0').subfield_str('a', "Operas").build());
//! record.add_field(Field::builder("650".to_string(), ' ', '7').subfield_str('a', "Opera").build());
//!
//! let lcsh = FieldSelector::parse("650")
//!     .unwrap()
//!     .subfield(SubfieldFilter::Code('a'))
//!     .indicators(IndicatorFilter::Any, IndicatorFilter::Exact('0'))
//!     .select(&record);
//! assert_eq!(lcsh.to_vec(), vec!["Operas"]);
//! ```
//!
//! ## Modules
//!
//! - [`record`] - Record structures (`Record`, `Field`, `Subfield`)
//! - [`marc_record`] - The read-only lookup trait extractors accept
//! - [`field_spec`] - Tag lists, field specs and filters
//! - [`field_selector`] - Generic subfield value selection
//! - [`value_set`] - Ordered, duplicate-free output sets
//! - [`extractors`] - Single-purpose extractors
//! - [`date_cleaning`] - Publication date canonicalization
//! - [`config`] - Extractor configuration
//! - [`indexer`] - Per-record facade over all extractors
//! - [`error`] - Error types and result type

pub mod config;
pub mod date_cleaning;
pub mod error;
pub mod extractors;
pub mod field_selector;
pub mod field_spec;
pub mod indexer;
pub mod marc_record;
/// Record structures (`Record`, `Field`, `Subfield`)
pub mod record;
pub mod value_set;

pub use config::IndexerConfig;
pub use date_cleaning::{DateCleaner, YearDateCleaner};
pub use error::{IndexerError, Result};
pub use field_selector::FieldSelector;
pub use field_spec::{FieldSpec, FieldSpecList, IndicatorFilter, SubfieldFilter, TagList};
pub use indexer::{ExtractedValues, RecordIndexer};
pub use marc_record::MarcRecord;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use value_set::ValueSet;
