//! Spacing and repeated-punctuation checks on subfield text.

use super::text::runs_of;
use crate::diagnostic::Diagnostic;
use crate::linter::RuleContext;
use crate::record::{Field, Record, Subfield};

fn subfield_diagnostic(field: &Field, subfield: &Subfield, problem: &str) -> Diagnostic {
    Diagnostic::new(
        field.tag.as_str(),
        format!("Subfield _{} {problem}", subfield.code),
    )
}

/// Apply `check` to every subfield of every field not exempt from spacing rules.
fn scan_subfields<F>(record: &Record, ctx: &RuleContext<'_>, mut check: F) -> Vec<Diagnostic>
where
    F: FnMut(&Field, &Subfield, &mut Vec<Diagnostic>),
{
    let mut diagnostics = Vec::new();
    for field in record
        .fields()
        .filter(|f| !ctx.config.is_spacing_exempt(&f.tag))
    {
        for subfield in field.subfields() {
            check(field, subfield, &mut diagnostics);
        }
    }
    diagnostics
}

/// Runs of two or more spaces inside subfield text.
#[must_use]
pub fn check_internal_spaces(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    scan_subfields(record, ctx, |field, subfield, out| {
        if subfield.value.trim_matches(' ').contains("  ") {
            out.push(subfield_diagnostic(
                field,
                subfield,
                "has multiple internal spaces.",
            ));
        }
    })
}

/// Subfield text starting or ending with a space.
#[must_use]
pub fn check_leading_trailing_spaces(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    scan_subfields(record, ctx, |field, subfield, out| {
        if subfield.value.starts_with(' ') {
            out.push(subfield_diagnostic(field, subfield, "has leading space(s)."));
        }
        if subfield.value.ends_with(' ') {
            out.push(subfield_diagnostic(field, subfield, "has trailing space(s)."));
        }
    })
}

/// Doubled periods and repeated commas.
///
/// A run of exactly two periods is reported; three or more form an ellipsis.
/// Any run of two or more commas is reported.
#[must_use]
pub fn check_double_punctuation(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for field in record.fields() {
        for subfield in field.subfields() {
            if !ctx.config.is_double_punctuation_exempt(&field.tag)
                && runs_of(&subfield.value, '.').contains(&2)
            {
                diagnostics.push(subfield_diagnostic(
                    field,
                    subfield,
                    "has multiple consecutive periods.",
                ));
            }
            if runs_of(&subfield.value, ',').iter().any(|&n| n >= 2) {
                diagnostics.push(subfield_diagnostic(
                    field,
                    subfield,
                    "has multiple consecutive commas.",
                ));
            }
        }
    }
    diagnostics
}

/// A hyphen standing alone between spaces (`" - "`).
#[must_use]
pub fn check_floating_hyphens(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    scan_subfields(record, ctx, |field, subfield, out| {
        if subfield.value.contains(" - ") {
            out.push(subfield_diagnostic(
                field,
                subfield,
                "may have a floating hyphen.",
            ));
        }
    })
}
