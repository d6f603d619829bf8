//! Geographic subject access against the 043 geographic area code.

use crate::diagnostic::Diagnostic;
use crate::linter::RuleContext;
use crate::record::Record;
use crate::tag_range::TagRange;

fn is_exception(value: &str, exceptions: &[String]) -> bool {
    let heading = value.trim().trim_end_matches(['.', ',', ';', ' ']);
    exceptions.iter().any(|e| e == heading)
}

/// A 651 `$a` or any 6xx `$z` calls for a 043, reported once per record.
#[must_use]
pub fn check_geographic_subjects_vs_043(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if record.has_field("043") {
        return Vec::new();
    }
    let exceptions = &ctx.config.geographic_exceptions;
    let geographic = record.fields_in_range(TagRange::SUBJECTS).any(|field| {
        field
            .subfields()
            .filter(|sf| sf.code == 'z' || (field.tag == "651" && sf.code == 'a'))
            .any(|sf| !is_exception(&sf.value, exceptions))
    });
    if geographic {
        return vec![Diagnostic::new(
            "043",
            "Record has 651 or 6xx subfield _z but no 043.",
        )];
    }
    Vec::new()
}
