//! Structural checks: empty content, control characters, field length,
//! required 040 and LCCN format.

use crate::diagnostic::Diagnostic;
use crate::linter::RuleContext;
use crate::record::{Field, Record};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Pre-2001 form: 3-char prefix, 8 digits, blank suffix.
    // Current form: 2-char prefix, 10 digits.
    static ref LCCN: Regex =
        Regex::new(r"^(?:[a-z ]{3}\d{8} |[a-z ]{2}\d{10})$").expect("LCCN pattern compiles");
}

/// Fields without subfields and subfields without text.
#[must_use]
pub fn check_empty_subfields(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for field in record.fields() {
        if field.subfields.is_empty() {
            diagnostics.push(Diagnostic::new(
                field.tag.as_str(),
                "Field has no subfields.",
            ));
            continue;
        }
        for subfield in field.subfields().filter(|sf| sf.value.is_empty()) {
            diagnostics.push(Diagnostic::new(
                field.tag.as_str(),
                format!("Subfield _{} is empty.", subfield.code),
            ));
        }
    }
    diagnostics
}

/// Control characters inside subfield text.
#[must_use]
pub fn check_control_characters(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    record
        .fields()
        .flat_map(|field| {
            field
                .subfields()
                .filter(|sf| sf.value.chars().any(char::is_control))
                .map(move |sf| {
                    Diagnostic::new(
                        field.tag.as_str(),
                        format!("Subfield _{} has a control character.", sf.code),
                    )
                })
        })
        .collect()
}

/// Encoded length of a data field: indicators, delimiter and code per
/// subfield, the data, and the field terminator.
fn encoded_length(field: &Field) -> usize {
    2 + field
        .subfields()
        .map(|sf| 2 + sf.value.len())
        .sum::<usize>()
        + 1
}

/// Fields longer than the configured maximum.
#[must_use]
pub fn check_field_length(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let max = ctx.config.max_field_length;
    let control = record
        .control_fields_iter()
        .map(|(tag, value)| (tag, value.len() + 1));
    let data = record
        .fields()
        .map(|field| (field.tag.as_str(), encoded_length(field)));

    control
        .chain(data)
        .filter(|(_, length)| *length > max)
        .map(|(tag, length)| {
            Diagnostic::new(
                tag,
                format!("Field length {length} exceeds the maximum of {max}."),
            )
        })
        .collect()
}

/// Every record needs a cataloging source field.
#[must_use]
pub fn check_040_present(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if record.has_field("040") {
        return Vec::new();
    }
    vec![Diagnostic::new("040", "Record lacks 040 field.")]
}

/// Structure of the LC control number in 010 `$a`.
#[must_use]
pub fn check_010(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    record
        .fields_by_tag("010")
        .flat_map(|field| field.subfields_by_code('a'))
        .filter(|lccn| !LCCN.is_match(lccn))
        .map(|lccn| {
            Diagnostic::new(
                "010",
                format!("Subfield _a ('{lccn}') is not a valid LCCN."),
            )
        })
        .collect()
}
