//! Book 008 nature-of-contents and index bytes against the notes.

use crate::diagnostic::Diagnostic;
use crate::fixed_field::{Field008, MaterialType};
use crate::linter::RuleContext;
use crate::record::{Field, Record};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BIBLIOGRAPHY: Regex = Regex::new(r"(?i)bibliograph(?:ical references?|y|ies)")
        .expect("bibliography pattern compiles");
    static ref INDEX: Regex =
        Regex::new(r"(?i)\bincludes?\b.*\bindex(?:es)?\b").expect("index pattern compiles");
}

fn notes<'a>(record: &'a Record, tag: &'a str) -> impl Iterator<Item = String> + 'a {
    record.fields_by_tag(tag).map(Field::value)
}

/// Compare 008/24-27 code `b` with 504, and 008/31 with index notes.
#[must_use]
pub fn check_book_008_vs_bibref_index(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if MaterialType::classify(&record.leader) != Some(MaterialType::Book) {
        return Vec::new();
    }
    let Some(f008) = Field008::from_record(record) else {
        return Vec::new();
    };

    let mut diagnostics = Vec::new();
    let coded = f008.slice(24, 4).contains('b');
    let in_504 = notes(record, "504").any(|n| BIBLIOGRAPHY.is_match(&n));
    let in_500 = notes(record, "500").any(|n| BIBLIOGRAPHY.is_match(&n));

    if in_500 {
        diagnostics.push(Diagnostic::new(
            "500",
            "Bibliographical references should be in a 504, not a 500.",
        ));
    }
    if coded && !in_504 && !in_500 {
        diagnostics.push(Diagnostic::new(
            "008",
            "Nature of contents has 'b' (bibliographies) but no 504 mentions \
             bibliographical references.",
        ));
    } else if in_504 && !coded {
        diagnostics.push(Diagnostic::new(
            "504",
            "Mentions bibliographical references but 008 bytes 24-27 lacks 'b'.",
        ));
    }

    let has_index_note = notes(record, "500")
        .chain(notes(record, "504"))
        .any(|n| INDEX.is_match(&n));
    match (f008.byte(31), has_index_note) {
        (Some('1'), false) => diagnostics.push(Diagnostic::new(
            "008",
            "Index byte is '1' but no note says the item includes an index.",
        )),
        (Some('0'), true) => diagnostics.push(Diagnostic::new(
            "008",
            "Index byte is '0' but a note says the item includes an index.",
        )),
        _ => {},
    }
    diagnostics
}
