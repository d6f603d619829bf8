//! Language codes in 041 and their agreement with 008/35-37.

use crate::code_tables::Classification;
use crate::diagnostic::Diagnostic;
use crate::fixed_field::Field008;
use crate::linter::RuleContext;
use crate::record::{Field, Record};

/// Check 041 language codes and compare the first `$a` with 008/35-37.
///
/// Code validity is only checked when 041 second indicator is blank (MARC
/// language codes); other sources are compared as-is.
#[must_use]
pub fn check_041_vs_008(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let Some(field) = record.get_field("041") else {
        return Vec::new();
    };

    let mut diagnostics = Vec::new();
    if field.indicator2 == ' ' {
        diagnostics.extend(check_codes(field, ctx));
    }

    let Some(f008) = Field008::from_record(record) else {
        return diagnostics;
    };
    let language = f008.language();
    if language.trim().is_empty() {
        return diagnostics;
    }
    if let Some(first) = field.get_subfield('a').and_then(first_code) {
        if first != language {
            diagnostics.push(Diagnostic::new(
                "041",
                format!(
                    "First code ({first}) does not match 008 bytes 35-37 (Language {language})."
                ),
            ));
        }
    }
    diagnostics
}

fn first_code(value: &str) -> Option<String> {
    let code: String = value.chars().take(3).collect();
    (code.chars().count() == 3).then_some(code)
}

fn check_codes(field: &Field, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for subfield in field.subfields().filter(|sf| sf.code.is_ascii_lowercase()) {
        let chars: Vec<char> = subfield.value.chars().collect();
        if chars.len() % 3 != 0 {
            diagnostics.push(Diagnostic::new(
                "041",
                format!(
                    "Subfield _{} ('{}') must be evenly divisible by 3.",
                    subfield.code, subfield.value
                ),
            ));
            continue;
        }
        for chunk in chars.chunks(3) {
            let code: String = chunk.iter().collect();
            let verdict = match ctx.code_tables.classify_language(&code) {
                Classification::Valid => continue,
                Classification::Obsolete => "may be obsolete",
                Classification::Unknown => "is not valid",
            };
            diagnostics.push(Diagnostic::new(
                "041",
                format!("Subfield _{}, {code}, {verdict}.", subfield.code),
            ));
        }
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;
    use crate::rules::test_support::{field, run};

    fn record(f008: Option<&str>, f041: Field) -> Record {
        let mut record = Record::new(Leader::default());
        if let Some(value) = f008 {
            record.add_control_field_str("008", value);
        }
        record.add_field(f041);
        record
    }

    const ENG_008: &str = "860506s1986    nyu           000 1 eng d";

    #[test]
    fn test_matching_first_code() {
        let r = record(Some(ENG_008), field("041", '1', ' ', &[('a', "engfre"), ('h', "ger")]));
        assert!(run(check_041_vs_008, &r).is_empty());
    }

    #[test]
    fn test_first_code_mismatch() {
        let r = record(Some(ENG_008), field("041", '0', ' ', &[('a', "fre")]));
        assert_eq!(
            run(check_041_vs_008, &r),
            vec!["041: First code (fre) does not match 008 bytes 35-37 (Language eng)."]
        );
    }

    #[test]
    fn test_bad_codes() {
        let r = record(None, field("041", '0', ' ', &[('a', "engxx"), ('b', "zzzscr")]));
        assert_eq!(
            run(check_041_vs_008, &r),
            vec![
                "041: Subfield _a ('engxx') must be evenly divisible by 3.",
                "041: Subfield _b, zzz, is not valid.",
                "041: Subfield _b, scr, may be obsolete.",
            ]
        );
    }

    #[test]
    fn test_other_source_skips_code_validity() {
        let r = record(None, field("041", '0', '7', &[('a', "en"), ('2', "iso639-1")]));
        assert!(run(check_041_vs_008, &r).is_empty());
    }

    #[test]
    fn test_no_041() {
        let mut r = Record::new(Leader::default());
        r.add_control_field_str("008", ENG_008);
        assert!(run(check_041_vs_008, &r).is_empty());
    }
}
