//! Videorecordings: the 007 physical description bytes against 300 and 538.

use crate::diagnostic::Diagnostic;
use crate::linter::RuleContext;
use crate::record::{Field, Record};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COLOR: Regex = Regex::new(r"(?i)\bcol(?:\.|or\b)").expect("color pattern compiles");
    static ref BLACK_AND_WHITE: Regex =
        Regex::new(r"(?i)\bb\s?&\s?w\b|black and white").expect("b&w pattern compiles");
    static ref SOUND: Regex = Regex::new(r"(?i)\bsd\.|\bsound\b").expect("sound pattern compiles");
    static ref SILENT: Regex =
        Regex::new(r"(?i)\bsi\.|\bsilent\b").expect("silent pattern compiles");
    static ref DVD: Regex = Regex::new(r"\bDVD\b").expect("DVD pattern compiles");
    static ref VHS: Regex = Regex::new(r"\bVHS\b").expect("VHS pattern compiles");
    static ref DISC_SIZE: Regex =
        Regex::new(r"4 3/4 in\.|\b12 cm\b").expect("disc size pattern compiles");
    static ref VHS_SIZE: Regex = Regex::new(r"\b1/2 in\.").expect("VHS size pattern compiles");
}

/// Carrier word expected in 300 `$a` for 007/01.
fn carrier_word(code: char) -> Option<&'static str> {
    match code {
        'c' => Some("videocartridge"),
        'd' => Some("videodisc"),
        'f' => Some("videocassette"),
        'r' => Some("videoreel"),
        _ => None,
    }
}

fn joined(field: &Field, code: char) -> String {
    field.get_subfield_values(code).join(" ")
}

fn check_carrier(bytes: &[char], f300: &Field) -> Option<Diagnostic> {
    let code = *bytes.get(1)?;
    let word = carrier_word(code)?;
    let extent = joined(f300, 'a');
    if extent.to_lowercase().contains(word) {
        return None;
    }
    Some(Diagnostic::new(
        "300",
        format!("Subfield _a lacks '{word}' for 007 byte 01 '{code}'."),
    ))
}

fn check_color(bytes: &[char], f300: &Field) -> Vec<Diagnostic> {
    let Some(&code) = bytes.get(3) else {
        return Vec::new();
    };
    let details = joined(f300, 'b');
    let color: (&str, &Regex) = ("col.", &*COLOR);
    let black_and_white: (&str, &Regex) = ("b&w", &*BLACK_AND_WHITE);
    let required = match code {
        'b' => vec![black_and_white],
        'c' => vec![color],
        'm' => vec![color, black_and_white],
        _ => Vec::new(),
    };
    required
        .into_iter()
        .filter(|(_, pattern)| !pattern.is_match(&details))
        .map(|(term, _)| {
            Diagnostic::new(
                "300",
                format!("Subfield _b lacks '{term}' for 007 byte 03 '{code}'."),
            )
        })
        .collect()
}

fn check_format(bytes: &[char], notes: &str) -> Vec<Diagnostic> {
    let code = bytes.get(4).copied().unwrap_or(' ');
    let mut diagnostics = Vec::new();
    for (format_code, name, pattern) in [('v', "DVD", &*DVD), ('b', "VHS", &*VHS)] {
        let mentioned = pattern.is_match(notes);
        if code == format_code && !mentioned {
            diagnostics.push(Diagnostic::new(
                "538",
                format!("Does not mention {name} but 007 byte 04 is '{format_code}'."),
            ));
        } else if code != format_code && mentioned {
            diagnostics.push(Diagnostic::new(
                "007",
                format!("Byte 04 is '{code}' but 538 mentions {name}."),
            ));
        }
    }
    diagnostics
}

fn check_sound(bytes: &[char], f300: &Field) -> Option<Diagnostic> {
    let code = *bytes.get(5)?;
    let details = joined(f300, 'b');
    let (term, pattern) = match code {
        'a' => ("sd.", &*SOUND),
        ' ' => ("si.", &*SILENT),
        _ => return None,
    };
    if pattern.is_match(&details) {
        return None;
    }
    Some(Diagnostic::new(
        "300",
        format!("Subfield _b lacks '{term}' for 007 byte 05 '{code}'."),
    ))
}

fn check_dimensions(bytes: &[char], f300: &Field) -> Option<Diagnostic> {
    let dimensions = joined(f300, 'c');
    match (bytes.get(1), bytes.get(4)) {
        (Some('d'), _) if !DISC_SIZE.is_match(&dimensions) => Some(Diagnostic::new(
            "300",
            "Dimensions (subfield _c) should be 4 3/4 in. or 12 cm for a videodisc.",
        )),
        (Some('f'), Some('b')) if !VHS_SIZE.is_match(&dimensions) => Some(Diagnostic::new(
            "300",
            "Dimensions (subfield _c) should be 1/2 in. for a VHS videocassette.",
        )),
        _ => None,
    }
}

/// Cross-check a videorecording's 007 with its 300 and 538.
///
/// Applies to projected media (leader/06 `g`) with a videorecording 007.
#[must_use]
pub fn check_video_007_vs_300_vs_538(record: &Record, _ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    if record.leader.record_type != 'g' {
        return Vec::new();
    }
    let Some(f007) = record
        .get_control_fields("007")
        .iter()
        .find(|value| value.starts_with('v'))
    else {
        return Vec::new();
    };
    let bytes: Vec<char> = f007.chars().collect();

    let mut diagnostics = Vec::new();
    if let Some(f300) = record.get_field("300") {
        diagnostics.extend(check_carrier(&bytes, f300));
        diagnostics.extend(check_color(&bytes, f300));
        diagnostics.extend(check_sound(&bytes, f300));
        diagnostics.extend(check_dimensions(&bytes, f300));
    }
    // The format byte is only compared against a 538 that exists.
    if record.has_field("538") {
        let notes = record
            .fields_by_tag("538")
            .map(Field::value)
            .collect::<Vec<_>>()
            .join(" ");
        diagnostics.extend(check_format(&bytes, &notes));
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{field, leader, run};

    const VIDEO: &str = "00000ngm a2200000 a 4500";

    fn record(f007: &str, fields: Vec<Field>) -> Record {
        let mut record = Record::new(leader(VIDEO));
        record.add_control_field_str("007", f007);
        for f in fields {
            record.add_field(f);
        }
        record
    }

    fn dvd_300() -> Field {
        field(
            "300",
            ' ',
            ' ',
            &[('a', "1 videodisc (120 min.) :"), ('b', "sd., col. ;"), ('c', "4 3/4 in.")],
        )
    }

    #[test]
    fn test_consistent_dvd() {
        let r = record(
            "vd cvaizq",
            vec![dvd_300(), field("538", ' ', ' ', &[('a', "DVD.")])],
        );
        assert!(run(check_video_007_vs_300_vs_538, &r).is_empty());
    }

    #[test]
    fn test_dvd_missing_from_538() {
        let r = record(
            "vd cvaizq",
            vec![dvd_300(), field("538", ' ', ' ', &[('a', "Widescreen.")])],
        );
        assert_eq!(
            run(check_video_007_vs_300_vs_538, &r),
            vec!["538: Does not mention DVD but 007 byte 04 is 'v'."]
        );
    }

    #[test]
    fn test_no_538_leaves_format_unchecked() {
        let r = record("vd cvaizq", vec![dvd_300()]);
        assert!(run(check_video_007_vs_300_vs_538, &r).is_empty());

        let r = record("vf cbahou", Vec::new());
        assert!(run(check_video_007_vs_300_vs_538, &r).is_empty());
    }

    #[test]
    fn test_538_mentions_vhs_for_dvd() {
        let r = record(
            "vd cvaizq",
            vec![dvd_300(), field("538", ' ', ' ', &[('a', "DVD; also issued as VHS.")])],
        );
        assert_eq!(
            run(check_video_007_vs_300_vs_538, &r),
            vec!["007: Byte 04 is 'v' but 538 mentions VHS."]
        );
    }

    #[test]
    fn test_vhs_cassette_mismatches() {
        let r = record(
            "vf bbahou",
            vec![
                field(
                    "300",
                    ' ',
                    ' ',
                    &[('a', "1 videodisc (90 min.) :"), ('b', "sd., col. ;"), ('c', "12 cm")],
                ),
                field("538", ' ', ' ', &[('a', "VHS.")]),
            ],
        );
        assert_eq!(
            run(check_video_007_vs_300_vs_538, &r),
            vec![
                "300: Subfield _a lacks 'videocassette' for 007 byte 01 'f'.",
                "300: Subfield _b lacks 'b&w' for 007 byte 03 'b'.",
                "300: Dimensions (subfield _c) should be 1/2 in. for a VHS videocassette.",
            ]
        );
    }

    #[test]
    fn test_silent_video() {
        let r = record(
            "vd bv zq",
            vec![
                field("300", ' ', ' ', &[('a', "1 videodisc :"), ('b', "b&w ;"), ('c', "12 cm")]),
                field("538", ' ', ' ', &[('a', "DVD.")]),
            ],
        );
        assert_eq!(
            run(check_video_007_vs_300_vs_538, &r),
            vec!["300: Subfield _b lacks 'si.' for 007 byte 05 ' '."]
        );
    }

    #[test]
    fn test_not_applicable() {
        let mut book = Record::new(leader("00000nam a2200000 a 4500"));
        book.add_control_field_str("007", "vd cvaizq");
        assert!(run(check_video_007_vs_300_vs_538, &book).is_empty());

        let sound = record("sd fsngnnmmned", vec![dvd_300()]);
        assert!(run(check_video_007_vs_300_vs_538, &sound).is_empty());
    }
}
