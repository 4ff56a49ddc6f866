//! Generic subfield value extraction.
//!
//! [`FieldSelector`] is the core every extractor builds on: given a tag list,
//! optional indicator filters and a subfield filter, it walks a record and
//! collects matching subfield values into a [`ValueSet`].
//!
//! Visit order is fixed: tags in list order, then fields in record order
//! within a tag, then subfields in declaration order within a field. The
//! first occurrence of a value decides its position in the output.
//!
//! # Examples
//!
//! ```
//! use marc_indexer::{Field, FieldSelector, Record, SubfieldFilter};
//!
//! let mut record = Record::new();
//! record.add_field(Field::builder("100".to_string(), '1', ' ').subfield_str('a', "Smith").build());
//! record.add_field(Field::builder("700".to_string(), '1', ' ')
//!     .subfield_str('a', "Smith")
//!     .subfield_str('e', "editor")
//!     .build());
//!
//! let names = FieldSelector::parse("100:700").unwrap().select(&record);
//! assert_eq!(names.to_vec(), vec!["Smith", "editor"]);
//!
//! let editors = FieldSelector::parse("700")
//!     .unwrap()
//!     .subfield(SubfieldFilter::Code('e'))
//!     .select(&record);
//! assert_eq!(editors.to_vec(), vec!["editor"]);
//! ```

use crate::error::Result;
use crate::field_spec::{FieldSpec, FieldSpecList, IndicatorFilter, SubfieldFilter, TagList};
use crate::marc_record::MarcRecord;
use crate::record::Field;
use crate::value_set::ValueSet;

/// A selection of subfield values by tag, indicators and subfield code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    /// Tags to visit, in order
    pub tags: TagList,
    /// Subfield filter applied within each matching field
    pub subfields: SubfieldFilter,
    /// Required first indicator
    pub indicator1: IndicatorFilter,
    /// Required second indicator
    pub indicator2: IndicatorFilter,
}

impl FieldSelector {
    /// Select every subfield of every field carrying one of `tags`.
    #[must_use]
    pub fn new(tags: TagList) -> Self {
        FieldSelector {
            tags,
            subfields: SubfieldFilter::Any,
            indicator1: IndicatorFilter::Any,
            indicator2: IndicatorFilter::Any,
        }
    }

    /// Build a selector from a `:`-separated tag list.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag list is malformed.
    pub fn parse(tags: &str) -> Result<Self> {
        Ok(Self::new(TagList::parse(tags)?))
    }

    /// Restrict extraction to a subfield code.
    #[must_use]
    pub fn subfield(mut self, filter: SubfieldFilter) -> Self {
        self.subfields = filter;
        self
    }

    /// Require both indicators to match.
    #[must_use]
    pub fn indicators(mut self, indicator1: IndicatorFilter, indicator2: IndicatorFilter) -> Self {
        self.indicator1 = indicator1;
        self.indicator2 = indicator2;
        self
    }

    /// Check a field's indicators against this selector.
    ///
    /// The tag is not checked; [`fields`](Self::fields) only visits listed tags.
    #[must_use]
    pub fn matches_indicators(&self, field: &Field) -> bool {
        self.indicator1.matches(field.indicator1) && self.indicator2.matches(field.indicator2)
    }

    /// Iterate over the fields this selector visits, in visit order.
    pub fn fields<'a, R>(&'a self, record: &'a R) -> impl Iterator<Item = &'a Field> + 'a
    where
        R: MarcRecord + ?Sized,
    {
        self.tags
            .iter()
            .flat_map(move |tag| record.fields_by_tag(tag))
            .filter(move |field| self.matches_indicators(field))
    }

    /// Collect the selected subfield values.
    ///
    /// With [`SubfieldFilter::Any`] every subfield value of a matching field
    /// is collected; with [`SubfieldFilter::Code`] only the first subfield
    /// carrying that code contributes.
    #[must_use]
    pub fn select<R: MarcRecord + ?Sized>(&self, record: &R) -> ValueSet {
        let mut values = ValueSet::new();
        for field in self.fields(record) {
            tracing::trace!(tag = %field.tag, "visiting field");
            match self.subfields {
                SubfieldFilter::Any => {
                    values.extend(field.subfields().map(|sf| sf.value.as_str()));
                }
                SubfieldFilter::Code(code) => {
                    if let Some(value) = field.get_subfield(code) {
                        values.insert(value);
                    }
                }
            }
        }
        values
    }
}

/// Get the first value named by a field spec.
///
/// Walks the fields of the spec's tag in record order and returns the first
/// subfield whose code the spec requests. `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use marc_indexer::{field_selector::first_field_value, Field, FieldSpec, Record};
///
/// let mut record = Record::new();
/// record.add_field(Field::builder("998".to_string(), ' ', ' ').subfield_str('f', "-").build());
///
/// let spec = FieldSpec::parse("998f").unwrap();
/// assert_eq!(first_field_value(&record, &spec), Some("-"));
/// ```
#[must_use]
pub fn first_field_value<'a, R>(record: &'a R, spec: &FieldSpec) -> Option<&'a str>
where
    R: MarcRecord + ?Sized,
{
    record.fields_by_tag(spec.tag()).find_map(|field| {
        field
            .subfields()
            .find(|sf| spec.wants(sf.code))
            .map(|sf| sf.value.as_str())
    })
}

/// Collect every value named by a list of field specs.
///
/// Unlike [`FieldSelector::select`] with a single code, every subfield whose
/// code the spec requests contributes, not only the first per field.
#[must_use]
pub fn field_values<R: MarcRecord + ?Sized>(record: &R, specs: &FieldSpecList) -> ValueSet {
    let mut values = ValueSet::new();
    for spec in specs.specs() {
        for field in record.fields_by_tag(spec.tag()) {
            values.extend(
                field
                    .subfields()
                    .filter(|sf| spec.wants(sf.code))
                    .map(|sf| sf.value.as_str()),
            );
        }
    }
    values
}

/// Join every value named by `specs` with `separator`.
///
/// Empty values are skipped. Returns `None` when no non-empty value was
/// found.
#[must_use]
pub fn field_values_joined<R: MarcRecord + ?Sized>(
    record: &R,
    specs: &FieldSpecList,
    separator: &str,
) -> Option<String> {
    let values = field_values(record, specs);
    let present: Vec<&str> = values.iter().filter(|value| !value.is_empty()).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(separator))
    }
}
