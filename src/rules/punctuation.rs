//! Ending punctuation of descriptive fields.
//!
//! Titles and most notes close with a terminal mark. Uniform and varying
//! titles do not, unless the period belongs to an abbreviation, an ellipsis
//! or an initial.

use super::text::{last_data_subfield, preview, strip_closers};
use crate::config::LintConfig;
use crate::diagnostic::Diagnostic;
use crate::linter::RuleContext;
use crate::record::{Field, Record};
use crate::tag_range::TagRange;

/// Fields whose last data subfield must end with terminal punctuation.
pub const TERMINAL_PUNCTUATION_TAGS: &[&str] = &[
    "245", "500", "501", "502", "504", "505", "506", "507", "508", "510", "511", "513", "514",
    "515", "516", "518", "520", "521", "522", "524", "525", "526", "530", "533", "534", "535",
    "536", "538", "540", "541", "544", "545", "546", "547", "550", "552", "555", "556", "561",
    "562", "563", "565", "567", "580", "581", "583", "584", "585", "586",
];

/// Fields that should not end with a period.
pub const NON_TERMINAL_TAGS: &[&str] = &["130", "240", "246", "730", "740"];

const TERMINAL_MARKS: [char; 4] = ['.', '?', '!', '-'];

/// Metric symbols take no period of their own in a 300.
const METRIC_SYMBOLS: [&str; 2] = ["cm.", "mm."];

fn ends_with_terminal_mark(text: &str) -> bool {
    strip_closers(text.trim_end())
        .chars()
        .next_back()
        .is_some_and(|c| TERMINAL_MARKS.contains(&c))
}

/// Whether a trailing period belongs to the last word rather than closing the field.
fn period_is_part_of_word(text: &str, config: &LintConfig) -> bool {
    if text.ends_with("...") {
        return true;
    }
    let Some(last_word) = text.split_whitespace().next_back() else {
        return false;
    };
    if config.is_abbreviation(last_word) {
        return true;
    }
    let mut chars = last_word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(initial), Some('.'), None) if initial.is_uppercase()
    )
}

fn last_text(field: &Field) -> Option<&str> {
    last_data_subfield(field).map(|sf| sf.value.trim_end())
}

/// 245 and notes must end with `.`, `?`, `!` or `-`.
#[must_use]
pub fn check_ending_punctuation(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    record
        .fields()
        .filter(|f| TERMINAL_PUNCTUATION_TAGS.contains(&f.tag.as_str()))
        .filter_map(|field| {
            let text = last_text(field)?;
            if ends_with_terminal_mark(text) {
                return None;
            }
            Some(Diagnostic::new(
                field.tag.as_str(),
                format!(
                    "Should end with '.', '?', '!' or '-' ('{}').",
                    preview(&field.value(), ctx.config.preview_length)
                ),
            ))
        })
        .collect()
}

/// Uniform and varying titles should not end with a period.
#[must_use]
pub fn check_nonpunct_ending_fields(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    record
        .fields()
        .filter(|f| NON_TERMINAL_TAGS.contains(&f.tag.as_str()))
        .filter_map(|field| {
            let text = last_text(field)?;
            if !text.ends_with('.') || period_is_part_of_word(text, ctx.config) {
                return None;
            }
            Some(Diagnostic::new(
                field.tag.as_str(),
                format!(
                    "Should not end with a period ('{}').",
                    preview(&field.value(), ctx.config.preview_length)
                ),
            ))
        })
        .collect()
}

fn ends_with_metric_symbol(text: &str) -> bool {
    text.split_whitespace()
        .next_back()
        .is_some_and(|word| METRIC_SYMBOLS.contains(&word))
}

/// 300 closes with a period when a series statement follows, and otherwise
/// only when its last word is an abbreviation. `cm` and `mm` are symbols, so
/// a final `cm.` without a series is always reported.
#[must_use]
pub fn check_300_ending_punctuation(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let has_series = record.has_field_in_range(TagRange::SERIES_STATEMENTS);
    record
        .fields_by_tag("300")
        .filter_map(|field| {
            let text = last_text(field)?;
            let closed = strip_closers(text).ends_with('.') || text.ends_with(')');
            let problem = if has_series {
                (!closed).then_some("Should end with a period when a 4xx is present")
            } else {
                (text.ends_with('.')
                    && (ends_with_metric_symbol(text) || !period_is_part_of_word(text, ctx.config)))
                    .then_some("Should not end with a period when no 4xx is present")
            };
            let problem = problem?;
            Some(Diagnostic::new(
                "300",
                format!(
                    "{problem} ('{}').",
                    preview(&field.value(), ctx.config.preview_length)
                ),
            ))
        })
        .collect()
}
