//! Single-purpose extractors for index document values.
//!
//! Each extractor is a free function over any [`MarcRecord`](crate::MarcRecord)
//! plus a small rule naming the tags and codes it reads. Rules default to the
//! usual layout of an integrated library system export and deserialize from
//! [`IndexerConfig`](crate::IndexerConfig).
//!
//! - [`identifier`] - record number normalization
//! - [`suppression`] - visible/suppressed flag
//! - [`urls`] - full-text links
//! - [`performers`] - cast and performer names
//! - [`locations`] - library/location codes
//! - [`publication_date`] - cleaned publication date

pub mod identifier;
pub mod locations;
pub mod performers;
pub mod publication_date;
pub mod suppression;
pub mod urls;

pub use identifier::bib_record_number;
pub use locations::{location_codes, LocationRule};
pub use performers::{cast, partition, performers, Participants, PerformerRule};
pub use publication_date::{publication_date, DateRule};
pub use suppression::{suppression_status, UNSUPPRESSED};
pub use urls::{full_text_urls, UrlRule};
