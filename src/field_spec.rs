//! Typed field specifications for extraction requests.
//!
//! Extraction requests name fields with compact strings inherited from
//! catalog indexing configuration:
//!
//! - a tag list, one or more tags separated by `:` (`"100:700"`)
//! - a field spec, a tag followed by zero or more subfield codes (`"907a"`,
//!   `"245abc"`, `"856"`)
//! - a field spec list, field specs separated by `:` (`"260c:264c"`)
//!
//! Wildcards are explicit variants ([`SubfieldFilter::Any`],
//! [`IndicatorFilter::Any`]) rather than sentinel strings, so no real tag or
//! code can collide with "match everything".

use crate::error::{IndexerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between tags or field specs in textual form.
pub const SPEC_SEPARATOR: char = ':';

/// Validate a single three-character tag.
///
/// # Errors
///
/// Returns [`IndexerError::InvalidTag`] unless `tag` is exactly three ASCII
/// alphanumeric characters.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.len() == 3 && tag.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        Err(IndexerError::InvalidTag(tag.to_string()))
    }
}

/// Filter on subfield codes within a matching field.
///
/// Serialized as an optional character: `null` for [`SubfieldFilter::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<char>", into = "Option<char>")]
pub enum SubfieldFilter {
    /// Every subfield of the field, in declaration order.
    #[default]
    Any,
    /// Only the first subfield carrying this code.
    Code(char),
}

impl SubfieldFilter {
    /// Check whether a subfield code passes this filter
    #[must_use]
    pub fn matches(self, code: char) -> bool {
        match self {
            SubfieldFilter::Any => true,
            SubfieldFilter::Code(wanted) => wanted == code,
        }
    }
}

impl From<Option<char>> for SubfieldFilter {
    fn from(code: Option<char>) -> Self {
        code.map_or(SubfieldFilter::Any, SubfieldFilter::Code)
    }
}

impl From<SubfieldFilter> for Option<char> {
    fn from(filter: SubfieldFilter) -> Self {
        match filter {
            SubfieldFilter::Any => None,
            SubfieldFilter::Code(code) => Some(code),
        }
    }
}

/// Filter on one of a field's two indicators.
///
/// Serialized as an optional character: `null` for [`IndicatorFilter::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<char>", into = "Option<char>")]
pub enum IndicatorFilter {
    /// Do not filter on this indicator.
    #[default]
    Any,
    /// The indicator must equal this character exactly.
    Exact(char),
}

impl IndicatorFilter {
    /// Check whether an indicator value passes this filter
    #[must_use]
    pub fn matches(self, indicator: char) -> bool {
        match self {
            IndicatorFilter::Any => true,
            IndicatorFilter::Exact(wanted) => wanted == indicator,
        }
    }
}

impl From<Option<char>> for IndicatorFilter {
    fn from(indicator: Option<char>) -> Self {
        indicator.map_or(IndicatorFilter::Any, IndicatorFilter::Exact)
    }
}

impl From<IndicatorFilter> for Option<char> {
    fn from(filter: IndicatorFilter) -> Self {
        match filter {
            IndicatorFilter::Any => None,
            IndicatorFilter::Exact(indicator) => Some(indicator),
        }
    }
}

/// One or more field tags, visited in list order.
///
/// # Examples
///
/// ```
/// use marc_indexer::TagList;
///
/// let tags: TagList = "100:700".parse().unwrap();
/// assert_eq!(tags.tags(), ["100", "700"]);
/// assert!("100::700".parse::<TagList>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Build a tag list from individual tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or any tag is malformed.
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() {
            return Err(IndexerError::InvalidTag(String::new()));
        }
        for tag in &tags {
            validate_tag(tag)?;
        }
        Ok(TagList { tags })
    }

    /// A list holding a single tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is malformed.
    pub fn single(tag: impl Into<String>) -> Result<Self> {
        let tag: String = tag.into();
        Self::new([tag])
    }

    /// Parse a `:`-separated tag list
    ///
    /// # Errors
    ///
    /// Returns an error if any tag is empty or malformed.
    pub fn parse(spec: &str) -> Result<Self> {
        Self::new(spec.split(SPEC_SEPARATOR).map(str::trim))
    }

    /// Tag list from built-in defaults that are known to be well formed.
    pub(crate) fn from_static(tags: &[&str]) -> Self {
        TagList {
            tags: tags.iter().map(|&tag| tag.to_string()).collect(),
        }
    }

    /// The tags in visit order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Iterate over the tags in visit order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl FromStr for TagList {
    type Err = IndexerError;

    fn from_str(s: &str) -> Result<Self> {
        TagList::parse(s)
    }
}

impl TryFrom<String> for TagList {
    type Error = IndexerError;

    fn try_from(value: String) -> Result<Self> {
        TagList::parse(&value)
    }
}

impl From<TagList> for String {
    fn from(list: TagList) -> Self {
        list.to_string()
    }
}

impl fmt::Display for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tags.join(":"))
    }
}

/// A tag plus the subfield codes to read from it.
///
/// An empty code list means every subfield of the field.
///
/// # Examples
///
/// ```
/// use marc_indexer::FieldSpec;
///
/// let spec: FieldSpec = "245abc".parse().unwrap();
/// assert_eq!(spec.tag(), "245");
/// assert_eq!(spec.codes(), ['a', 'b', 'c']);
/// assert!(spec.wants('b'));
/// assert!(!spec.wants('z'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldSpec {
    tag: String,
    codes: Vec<char>,
}

impl FieldSpec {
    /// Build a spec from a tag and subfield codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is malformed or a code is not an ASCII
    /// alphanumeric character.
    pub fn new(tag: impl Into<String>, codes: &[char]) -> Result<Self> {
        let tag = tag.into();
        validate_tag(&tag)?;
        if let Some(bad) = codes.iter().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(IndexerError::InvalidFieldSpec(format!(
                "{tag}: invalid subfield code {bad:?}"
            )));
        }
        let mut unique = Vec::with_capacity(codes.len());
        for &code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Ok(FieldSpec { tag, codes: unique })
    }

    /// Parse a spec like `"907a"` or `"856"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec is shorter than a tag or contains
    /// invalid characters.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        let split = spec
            .char_indices()
            .nth(3)
            .map_or(spec.len(), |(idx, _)| idx);
        let (tag, codes) = spec.split_at(split);
        if tag.chars().count() != 3 {
            return Err(IndexerError::InvalidFieldSpec(spec.to_string()));
        }
        let codes: Vec<char> = codes.chars().collect();
        Self::new(tag, &codes)
    }

    /// Field spec from built-in defaults that are known to be well formed.
    pub(crate) fn from_static(tag: &str, codes: &[char]) -> Self {
        FieldSpec {
            tag: tag.to_string(),
            codes: codes.to_vec(),
        }
    }

    /// The field tag
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The subfield codes in spec order; empty means every subfield
    #[must_use]
    pub fn codes(&self) -> &[char] {
        &self.codes
    }

    /// Check whether a subfield code is requested by this spec
    #[must_use]
    pub fn wants(&self, code: char) -> bool {
        self.codes.is_empty() || self.codes.contains(&code)
    }

    /// The spec narrowed to a single [`SubfieldFilter`], when it names at
    /// most one code.
    #[must_use]
    pub fn subfield_filter(&self) -> Option<SubfieldFilter> {
        match self.codes.as_slice() {
            [] => Some(SubfieldFilter::Any),
            [code] => Some(SubfieldFilter::Code(*code)),
            _ => None,
        }
    }
}

impl FromStr for FieldSpec {
    type Err = IndexerError;

    fn from_str(s: &str) -> Result<Self> {
        FieldSpec::parse(s)
    }
}

impl TryFrom<String> for FieldSpec {
    type Error = IndexerError;

    fn try_from(value: String) -> Result<Self> {
        FieldSpec::parse(&value)
    }
}

impl From<FieldSpec> for String {
    fn from(spec: FieldSpec) -> Self {
        spec.to_string()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        for code in &self.codes {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

/// Several field specs visited in order, e.g. `"100a:700a"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldSpecList {
    specs: Vec<FieldSpec>,
}

impl FieldSpecList {
    /// Parse a `:`-separated list of field specs
    ///
    /// # Errors
    ///
    /// Returns an error if any component is empty or malformed.
    pub fn parse(spec: &str) -> Result<Self> {
        let specs = spec
            .split(SPEC_SEPARATOR)
            .map(FieldSpec::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(FieldSpecList { specs })
    }

    /// Build a list from already validated specs.
    ///
    /// # Errors
    ///
    /// Returns an error if `specs` is empty.
    pub fn new(specs: Vec<FieldSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(IndexerError::InvalidFieldSpec(String::new()));
        }
        Ok(FieldSpecList { specs })
    }

    /// The specs in visit order
    #[must_use]
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }
}

impl From<FieldSpec> for FieldSpecList {
    fn from(spec: FieldSpec) -> Self {
        FieldSpecList { specs: vec![spec] }
    }
}

impl FromStr for FieldSpecList {
    type Err = IndexerError;

    fn from_str(s: &str) -> Result<Self> {
        FieldSpecList::parse(s)
    }
}

impl TryFrom<String> for FieldSpecList {
    type Error = IndexerError;

    fn try_from(value: String) -> Result<Self> {
        FieldSpecList::parse(&value)
    }
}

impl From<FieldSpecList> for String {
    fn from(list: FieldSpecList) -> Self {
        list.to_string()
    }
}

impl fmt::Display for FieldSpecList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.specs.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(":"))
    }
}
