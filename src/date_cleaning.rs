//! Publication date cleaning.
//!
//! Catalogers record publication dates as free text: `"c1984."`,
//! `"[1999]"`, `"1994 [i.e. 1995]"`, `"[198-?]"`. The index wants a plain
//! year. [`DateCleaner`] is the seam the publication date extractor calls
//! through; [`YearDateCleaner`] is the stock implementation.
//!
//! Cleaning is best effort: input with no recognizable year comes back
//! unchanged, it never aborts extraction for the record.

use lazy_static::lazy_static;
use regex::Regex;

/// Canonicalizes a raw publication date statement.
///
/// Implemented for any `Fn(&str) -> String`, so a closure can stand in for a
/// site-specific cleaner.
///
/// # Examples
///
/// ```
/// use marc_indexer::DateCleaner;
///
/// let upper = |raw: &str| raw.to_uppercase();
/// assert_eq!(upper.clean("n.d."), "N.D.");
/// ```
pub trait DateCleaner {
    /// Return the canonical form of `raw`, or `raw` itself when it cannot be
    /// cleaned.
    fn clean(&self, raw: &str) -> String;
}

impl<F> DateCleaner for F
where
    F: Fn(&str) -> String,
{
    fn clean(&self, raw: &str) -> String {
        self(raw)
    }
}

// Patterns are fixed literals; a failed compile is a programming error.
lazy_static! {
    static ref BRACKETED_YEAR: Regex = Regex::new(r"\[([12]\d{3})\]").expect("valid regex");
    static ref CORRECTED_YEAR: Regex =
        Regex::new(r"i\.\s*e\.?\s*([12]\d{3})").expect("valid regex");
    static ref BRACKETED_CENTURY: Regex = Regex::new(r"\[(19)\](\d{2})").expect("valid regex");
    static ref MISREAD_ONE: Regex = Regex::new(r"\bl(\d{3})\b").expect("valid regex");
    static ref LEADING_YEAR: Regex =
        Regex::new(r"^\[?\s*(?:c|p|©|℗)?\s*([12]\d{3})").expect("valid regex");
    static ref UNKNOWN_DECADE: Regex = Regex::new(r"\b([12]\d{2})[-?u]").expect("valid regex");
    static ref ANY_YEAR: Regex = Regex::new(r"([12]\d{3})").expect("valid regex");
}

/// Latest year accepted by default.
pub const DEFAULT_MAX_YEAR: u32 = 2100;

/// Reduces a date statement to a four-digit year.
///
/// Patterns are tried from most to least specific: a bracketed year, an
/// "i.e." correction, a bracketed century (`[19]84`), a lowercase `l` typed
/// for `1`, a leading year with an optional copyright or phonogram mark, an
/// unknown decade (`198-`, `198?`, `198u` become `1980`), and finally any
/// four-digit year. Years past `max_year` are rejected.
///
/// # Examples
///
/// ```
/// use marc_indexer::{DateCleaner, YearDateCleaner};
///
/// let cleaner = YearDateCleaner::default();
/// assert_eq!(cleaner.clean("c1984."), "1984");
/// assert_eq!(cleaner.clean("[198-?]"), "1980");
/// assert_eq!(cleaner.clean("1994 [i.e. 1995]"), "1995");
/// assert_eq!(cleaner.clean("n.d."), "n.d.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearDateCleaner {
    /// Latest plausible year
    pub max_year: u32,
}

impl Default for YearDateCleaner {
    fn default() -> Self {
        YearDateCleaner {
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl YearDateCleaner {
    /// Extract the year from `raw`, or `None` when no plausible year exists.
    #[must_use]
    pub fn year(&self, raw: &str) -> Option<String> {
        let candidate = BRACKETED_YEAR
            .captures(raw)
            .or_else(|| CORRECTED_YEAR.captures(raw))
            .map(|caps| caps[1].to_string())
            .or_else(|| {
                BRACKETED_CENTURY
                    .captures(raw)
                    .map(|caps| format!("{}{}", &caps[1], &caps[2]))
            })
            .or_else(|| MISREAD_ONE.captures(raw).map(|caps| format!("1{}", &caps[1])))
            .or_else(|| {
                LEADING_YEAR
                    .captures(raw.trim())
                    .map(|caps| caps[1].to_string())
            })
            .or_else(|| {
                UNKNOWN_DECADE
                    .captures(raw)
                    .map(|caps| format!("{}0", &caps[1]))
            })
            .or_else(|| ANY_YEAR.captures(raw).map(|caps| caps[1].to_string()))?;

        let year: u32 = candidate.parse().ok()?;
        if year > self.max_year {
            tracing::debug!(raw, year, "rejecting implausible publication year");
            return None;
        }
        Some(candidate)
    }
}

impl DateCleaner for YearDateCleaner {
    fn clean(&self, raw: &str) -> String {
        self.year(raw).unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_copyright_years() {
        let cleaner = YearDateCleaner::default();
        assert_eq!(cleaner.clean("1999"), "1999");
        assert_eq!(cleaner.clean("1999."), "1999");
        assert_eq!(cleaner.clean("c1984."), "1984");
        assert_eq!(cleaner.clean("p1999"), "1999");
        assert_eq!(cleaner.clean("©2003"), "2003");
        assert_eq!(cleaner.clean("1999, c2000"), "1999");
    }

    #[test]
    fn test_bracketed_forms() {
        let cleaner = YearDateCleaner::default();
        assert_eq!(cleaner.clean("[1984]"), "1984");
        assert_eq!(cleaner.clean("[c1984]"), "1984");
        assert_eq!(cleaner.clean("[19]84"), "1984");
        assert_eq!(cleaner.clean("1994 [i.e. 1995]"), "1995");
    }

    #[test]
    fn test_unknown_decade() {
        let cleaner = YearDateCleaner::default();
        assert_eq!(cleaner.clean("[198-?]"), "1980");
        assert_eq!(cleaner.clean("197u"), "1970");
    }

    #[test]
    fn test_decade_marker_after_full_year() {
        let cleaner = YearDateCleaner::default();
        assert_eq!(cleaner.clean("ca. 1120-1130"), "1120");
        assert_eq!(cleaner.clean("ca. 1250?"), "1250");
        assert_eq!(cleaner.clean("ca. [198-?]"), "1980");
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            &*BRACKETED_YEAR,
            &*CORRECTED_YEAR,
            &*BRACKETED_CENTURY,
            &*MISREAD_ONE,
            &*LEADING_YEAR,
            &*UNKNOWN_DECADE,
            &*ANY_YEAR,
        ] {
            assert!(!pattern.as_str().is_empty());
        }
    }

    #[test]
    fn test_misread_digit() {
        let cleaner = YearDateCleaner::default();
        assert_eq!(cleaner.clean("l998"), "1998");
    }

    #[test]
    fn test_unrecognized_input_unchanged() {
        let cleaner = YearDateCleaner::default();
        assert_eq!(cleaner.clean("n.d."), "n.d.");
        assert_eq!(cleaner.clean("s.a."), "s.a.");
        assert_eq!(cleaner.clean(""), "");
    }

    #[test]
    fn test_implausible_year_unchanged() {
        let cleaner = YearDateCleaner { max_year: 2030 };
        assert_eq!(cleaner.clean("2999"), "2999");
        assert_eq!(cleaner.year("2999"), None);
        assert_eq!(cleaner.year("2029"), Some("2029".to_string()));
    }

    #[test]
    fn test_closure_cleaner() {
        let cleaner = |raw: &str| format!("<{raw}>");
        assert_eq!(cleaner.clean("1999"), "<1999>");
    }
}
