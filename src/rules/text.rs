//! Text helpers shared by the rules.

use crate::record::{Field, Subfield};

/// Subfields that carry control data rather than descriptive text.
const NON_DATA_SUBFIELDS: [char; 5] = ['2', '3', '5', '6', '8'];

/// Short rendering of a field value for diagnostics.
///
/// Text of up to `2 * n` characters is returned whole; longer text keeps the
/// first and last `n` characters around ` ___ `.
pub(crate) fn preview(text: &str, n: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= n * 2 {
        return text.to_string();
    }
    let head: String = chars[..n].iter().collect();
    let tail: String = chars[chars.len() - n..].iter().collect();
    format!("{head} ___ {tail}")
}

/// Last subfield holding descriptive text.
pub(crate) fn last_data_subfield(field: &Field) -> Option<&Subfield> {
    field
        .subfields
        .iter()
        .rev()
        .find(|sf| !NON_DATA_SUBFIELDS.contains(&sf.code))
}

/// Lengths of each run of `ch` in `text`.
pub(crate) fn runs_of(text: &str, ch: char) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;
    for c in text.chars() {
        if c == ch {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

/// Text with any trailing closing brackets or quotes removed.
pub(crate) fn strip_closers(text: &str) -> &str {
    text.trim_end_matches([')', ']', '"'])
}
