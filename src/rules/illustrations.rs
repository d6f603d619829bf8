//! Book 008 against the physical description (300).
//!
//! Three checks run in order: the extent in `$a`, the dimensions in `$c`, and
//! the illustration codes of 008/18-21 against the wording of `$b` (or `$a`
//! for plates).

use crate::diagnostic::Diagnostic;
use crate::fixed_field::{Field008, MaterialType};
use crate::linter::RuleContext;
use crate::record::{Field, Record};
use lazy_static::lazy_static;
use regex::Regex;

/// How an illustration code relates to the 300 wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Code and keyword must appear together.
    Reversible,
    /// The code requires the keyword; the keyword alone is not reported.
    CodeRequiresKeyword,
    /// Recognized, not cross-checked.
    FlagOnly,
}

/// Which 300 subfield holds the wording for a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Extent,
    OtherDetails,
}

impl Location {
    fn code(self) -> char {
        match self {
            Location::Extent => 'a',
            Location::OtherDetails => 'b',
        }
    }
}

struct Category {
    code: char,
    label: &'static str,
    direction: Direction,
    location: Location,
    keyword: Option<Regex>,
}

fn category(
    code: char,
    label: &'static str,
    direction: Direction,
    location: Location,
    keyword: Option<&str>,
) -> Category {
    Category {
        code,
        label,
        direction,
        location,
        keyword: keyword
            .map(|k| Regex::new(&format!("(?i){k}")).expect("illustration keyword compiles")),
    }
}

lazy_static! {
    static ref CATEGORIES: Vec<Category> = {
        use Direction::{CodeRequiresKeyword, FlagOnly, Reversible};
        use Location::{Extent, OtherDetails};
        vec![
            category(
                'a',
                "illustrations",
                Reversible,
                OtherDetails,
                Some(r"\bill(?:us)?\.|\billustrations?\b"),
            ),
            category('b', "maps", Reversible, OtherDetails, Some(r"\bmaps?\b")),
            category(
                'c',
                "portraits",
                Reversible,
                OtherDetails,
                Some(r"\bports?\.|\bportraits?\b"),
            ),
            category('d', "charts", Reversible, OtherDetails, Some(r"\bcharts?\b")),
            category('e', "plans", Reversible, OtherDetails, Some(r"\bplans?\b")),
            category('f', "plates", Reversible, Extent, Some(r"\bplates?\b|\bleaves of plates\b")),
            category('g', "music", Reversible, OtherDetails, Some(r"\bmusic\b")),
            category(
                'h',
                "facsimiles",
                Reversible,
                OtherDetails,
                Some(r"\bfacsims?\.|\bfacsimiles?\b"),
            ),
            category(
                'i',
                "coats of arms",
                CodeRequiresKeyword,
                OtherDetails,
                Some(r"\bcoats? of arms\b"),
            ),
            category(
                'j',
                "genealogical tables",
                CodeRequiresKeyword,
                OtherDetails,
                Some(r"\bgeneal(?:ogical|\.)\s*tables?\b"),
            ),
            category('k', "forms", CodeRequiresKeyword, OtherDetails, Some(r"\bforms\b")),
            category('l', "samples", CodeRequiresKeyword, OtherDetails, Some(r"\bsamples\b")),
            category('m', "phonodisc, phonowire, etc.", FlagOnly, OtherDetails, None),
            category('o', "photographs", FlagOnly, OtherDetails, None),
            category('p', "illuminations", FlagOnly, OtherDetails, None),
        ]
    };
    static ref EXTENT_TERM: Regex = Regex::new(concat!(
        r"(?i)\b(?:p|v|vols?|col|ll)\.",
        r"|\b(?:pages?|leaves|leaf|volumes?|columns|sheets?|unpaged|pieces?|items?",
        r"|atlas(?:es)?|portfolios?|box(?:es)?|case)\b",
    ))
    .expect("extent pattern compiles");
    static ref DIMENSION_UNIT: Regex =
        Regex::new(r"\b(?:cm|mm)\b|\bin\.").expect("dimension pattern compiles");
}

/// The illustration categories known for 008/18-21, as `(code, label, direction)`.
#[must_use]
pub fn illustration_categories() -> Vec<(char, &'static str, Direction)> {
    CATEGORIES
        .iter()
        .map(|c| (c.code, c.label, c.direction))
        .collect()
}

fn joined(field: &Field, code: char) -> String {
    field.get_subfield_values(code).join(" ")
}

fn check_extent(field: &Field) -> Option<Diagnostic> {
    let extent = joined(field, 'a');
    if extent.is_empty() {
        return Some(Diagnostic::new("300", "Extent (subfield _a) is missing."));
    }
    if EXTENT_TERM.is_match(&extent) {
        return None;
    }
    Some(Diagnostic::new(
        "300",
        format!("Extent (subfield _a) lacks a pagination or extent term ('{extent}')."),
    ))
}

fn check_dimensions(field: &Field) -> Option<Diagnostic> {
    let dimensions = joined(field, 'c');
    if dimensions.is_empty() || DIMENSION_UNIT.is_match(&dimensions) {
        return None;
    }
    Some(Diagnostic::new(
        "300",
        "Dimensions (subfield _c) lack 'cm.', 'mm.', or 'in.'.",
    ))
}

fn check_illustrations(field: &Field, f008: &Field008) -> Vec<Diagnostic> {
    let codes: Vec<char> = f008
        .slice(18, 4)
        .chars()
        .filter(|c| !matches!(c, ' ' | '|'))
        .collect();
    let extent = joined(field, 'a');
    let details = joined(field, 'b');

    let mut diagnostics = Vec::new();
    for cat in CATEGORIES.iter() {
        let Some(keyword) = &cat.keyword else {
            continue;
        };
        let text = match cat.location {
            Location::Extent => &extent,
            Location::OtherDetails => &details,
        };
        let coded = codes.contains(&cat.code);
        let mentioned = keyword.is_match(text);
        let subfield = cat.location.code();

        if coded && !mentioned && cat.direction != Direction::FlagOnly {
            diagnostics.push(Diagnostic::new(
                "300",
                format!(
                    "008 bytes 18-21 has code '{}' ({}) but subfield _{subfield} does not mention it.",
                    cat.code, cat.label
                ),
            ));
        } else if mentioned && !coded && cat.direction == Direction::Reversible {
            diagnostics.push(Diagnostic::new(
                "300",
                format!(
                    "Subfield _{subfield} mentions {} but 008 bytes 18-21 lacks code '{}'.",
                    cat.label, cat.code
                ),
            ));
        }
    }
    diagnostics
}

/// Cross-check a book's 300 against its 008.
///
/// Prepublication (CIP) records are skipped when the CIP exemption is on,
/// since their physical description is provisional.
#[must_use]
pub fn check_book_008_vs_300(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if MaterialType::classify(&record.leader) != Some(MaterialType::Book) {
        return Vec::new();
    }
    if ctx.config.exempt_cip && record.leader.is_cip() {
        return Vec::new();
    }
    let Some(field) = record.get_field("300") else {
        return Vec::new();
    };

    let mut diagnostics = Vec::new();
    diagnostics.extend(check_extent(field));
    diagnostics.extend(check_dimensions(field));
    if let Some(f008) = Field008::from_record(record) {
        diagnostics.extend(check_illustrations(field, &f008));
    }
    diagnostics
}
