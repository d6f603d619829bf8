//! Numeric tag ranges for selecting groups of fields.
//!
//! Cataloging rules talk about "1xx" or "8xx" fields. Rather than matching
//! wildcard strings, tags are parsed to integers once and compared against an
//! inclusive [`TagRange`].
//!
//! # Examples
//!
//! ```
//! use mrrc_lint::TagRange;
//!
//! assert!(TagRange::MAIN_ENTRIES.contains_tag("110"));
//! assert!(!TagRange::MAIN_ENTRIES.contains_tag("245"));
//! assert!(!TagRange::SERIES_ADDED_ENTRIES.contains_tag("856"));
//! ```

use std::fmt;

/// Parse a three-digit MARC tag into its numeric value.
///
/// Returns `None` for tags that are not exactly three ASCII digits.
#[must_use]
pub fn parse_tag(tag: &str) -> Option<u16> {
    if tag.len() != 3 || !tag.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tag.parse().ok()
}

/// Whether a tag names a control field (001-009).
#[must_use]
pub fn is_control_tag(tag: &str) -> bool {
    matches!(parse_tag(tag), Some(n) if n < 10)
}

/// An inclusive range of numeric field tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagRange {
    start: u16,
    end: u16,
}

impl TagRange {
    /// Main entries (100-199).
    pub const MAIN_ENTRIES: TagRange = TagRange::new(100, 199);
    /// Series statements (400-499).
    pub const SERIES_STATEMENTS: TagRange = TagRange::new(400, 499);
    /// Notes (500-599).
    pub const NOTES: TagRange = TagRange::new(500, 599);
    /// Subject access fields (600-699).
    pub const SUBJECTS: TagRange = TagRange::new(600, 699);
    /// Series added entries (800-830).
    pub const SERIES_ADDED_ENTRIES: TagRange = TagRange::new(800, 830);

    /// Create a range covering `start..=end`.
    #[must_use]
    pub const fn new(start: u16, end: u16) -> Self {
        TagRange { start, end }
    }

    /// Range covering a single tag.
    #[must_use]
    pub const fn single(tag: u16) -> Self {
        TagRange::new(tag, tag)
    }

    /// Whether the numeric tag falls within the range.
    #[must_use]
    pub const fn contains(&self, tag: u16) -> bool {
        tag >= self.start && tag <= self.end
    }

    /// Whether a textual tag falls within the range. Non-numeric tags never match.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        parse_tag(tag).is_some_and(|n| self.contains(n))
    }
}

impl fmt::Display for TagRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{:03}", self.start)
        } else {
            write!(f, "{:03}-{:03}", self.start, self.end)
        }
    }
}
