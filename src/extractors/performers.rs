//! Cast and performer partitioning.
//!
//! Participant/performer notes share one tag; the first indicator tells a
//! cast list apart from other performers. Every field with a name lands on
//! exactly one side of the partition.

use crate::field_spec::FieldSpec;
use crate::marc_record::MarcRecord;
use crate::value_set::ValueSet;
use serde::{Deserialize, Serialize};

/// Which field, subfield and indicator separate cast from performers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformerRule {
    /// Participant/performer note tag and the subfield holding the names
    pub field: FieldSpec,
    /// First indicator value marking a cast list
    pub cast_indicator: char,
}

impl Default for PerformerRule {
    fn default() -> Self {
        PerformerRule {
            field: FieldSpec::from_static("511", &['a']),
            cast_indicator: '1',
        }
    }
}

/// Names split by the first indicator test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participants {
    /// Fields whose first indicator equals the cast marker
    pub cast: ValueSet,
    /// Every other field
    pub performers: ValueSet,
}

/// Split every named field into cast or performers in one pass.
///
/// # Examples
///
/// ```
/// use marc_indexer::extractors::performers::{partition, PerformerRule};
/// use marc_indexer::{Field, Record};
///
/// let mut record = Record::new();
/// record.add_field(Field::builder("511".to_string(), '1', ' ').subfield_str('a', "Meryl Streep").build());
/// record.add_field(Field::builder("511".to_string(), '0', ' ').subfield_str('a', "Berlin Philharmonic").build());
///
/// let split = partition(&record, &PerformerRule::default());
/// assert_eq!(split.cast.to_vec(), vec!["Meryl Streep"]);
/// assert_eq!(split.performers.to_vec(), vec!["Berlin Philharmonic"]);
/// ```
#[must_use]
pub fn partition<R: MarcRecord + ?Sized>(record: &R, rule: &PerformerRule) -> Participants {
    let mut participants = Participants::default();
    for field in record.fields_by_tag(rule.field.tag()) {
        let Some(name) = field
            .subfields()
            .find(|sf| rule.field.wants(sf.code))
            .map(|sf| sf.value.as_str())
        else {
            continue;
        };
        if field.indicator1 == rule.cast_indicator {
            participants.cast.insert(name);
        } else {
            participants.performers.insert(name);
        }
    }
    participants
}

/// Names from fields whose first indicator is the cast marker.
#[must_use]
pub fn cast<R: MarcRecord + ?Sized>(record: &R, rule: &PerformerRule) -> ValueSet {
    partition(record, rule).cast
}

/// Names from fields whose first indicator is anything but the cast marker.
#[must_use]
pub fn performers<R: MarcRecord + ?Sized>(record: &R, rule: &PerformerRule) -> ValueSet {
    partition(record, rule).performers
}
