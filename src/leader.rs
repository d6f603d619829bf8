//! MARC record leader parsing.
//!
//! The MARC leader is a 24-byte fixed-length field at the start of every MARC record.
//! The lint rules read five of its positions directly and use positions 06 and 07 to
//! select the material type that governs 008 bytes 18-34.
//!
//! # Structure
//!
//! - Positions 0-4: Record length (5 digits)
//! - Position 5: Record status
//! - Position 6: Type of record (a = language material, c = music, etc.)
//! - Position 7: Bibliographic level (m = monograph, s = serial, etc.)
//! - Position 8: Type of control
//! - Position 9: Character coding (space = MARC-8, a = UTF-8)
//! - Positions 10-11: Indicator and subfield code counts
//! - Positions 12-16: Base address of data (5 digits)
//! - Positions 17-19: Encoding level, descriptive cataloging form, multipart level
//! - Positions 20-23: Entry map (usually "4500")

use crate::error::{MarcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encoding level used by Cataloging in Publication (prepublication) records.
pub const CIP_ENCODING_LEVEL: char = '8';

/// MARC Leader - 24 bytes at the start of every MARC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Record length (5 digits) - positions 0-4
    pub record_length: u32,
    /// Record status (1 char) - position 5
    pub record_status: char,
    /// Type of record (1 char) - position 6
    pub record_type: char,
    /// Bibliographic level (1 char) - position 7
    pub bibliographic_level: char,
    /// Type of control (1 char) - position 8
    pub control_record_type: char,
    /// Character coding scheme (1 char) - position 9
    pub character_coding: char,
    /// Indicator count (1 digit) - position 10 (usually 2)
    pub indicator_count: u8,
    /// Subfield code count (1 digit) - position 11 (usually 2)
    pub subfield_code_count: u8,
    /// Base address of data (5 digits) - positions 12-16
    pub data_base_address: u32,
    /// Encoding level (1 char) - position 17
    pub encoding_level: char,
    /// Descriptive cataloging form (1 char) - position 18
    pub cataloging_form: char,
    /// Multipart resource record level (1 char) - position 19
    pub multipart_level: char,
    /// Entry map (4 chars) - positions 20-23
    pub reserved: String,
}

impl Default for Leader {
    /// A new, full-level, AACR 2 book leader (`00000nam a2200000 a 4500`).
    fn default() -> Self {
        Leader {
            record_length: 0,
            record_status: 'n',
            record_type: 'a',
            bibliographic_level: 'm',
            control_record_type: ' ',
            character_coding: 'a',
            indicator_count: 2,
            subfield_code_count: 2,
            data_base_address: 0,
            encoding_level: ' ',
            cataloging_form: 'a',
            multipart_level: ' ',
            reserved: "4500".to_string(),
        }
    }
}

impl Leader {
    /// Get valid values for a linted leader position (MARC 21 reference).
    ///
    /// Only the five positions checked by the leader validator have closed
    /// vocabularies here: 05, 06, 07, 17 and 18.
    ///
    /// # Example
    ///
    /// ```
    /// use mrrc_lint::Leader;
    /// let values = Leader::valid_values_at_position(5).unwrap();
    /// assert!(values.iter().any(|(code, _)| *code == 'n'));
    /// ```
    #[must_use]
    pub fn valid_values_at_position(position: usize) -> Option<Vec<(char, &'static str)>> {
        match position {
            5 => Some(vec![
                ('a', "Increase in encoding level"),
                ('c', "Corrected or revised"),
                ('d', "Deleted"),
                ('n', "New"),
                ('p', "Increase in encoding level from prepublication"),
            ]),
            6 => Some(vec![
                ('a', "Language material"),
                ('c', "Notated music"),
                ('d', "Manuscript notated music"),
                ('e', "Cartographic material"),
                ('f', "Manuscript cartographic material"),
                ('g', "Projected medium"),
                ('i', "Nonmusical sound recording"),
                ('j', "Musical sound recording"),
                ('k', "Two-dimensional nonprojectable graphic"),
                ('m', "Computer file"),
                ('o', "Kit"),
                ('p', "Mixed materials"),
                (
                    'r',
                    "Three-dimensional artifact or naturally occurring object",
                ),
                ('t', "Manuscript language material"),
            ]),
            7 => Some(vec![
                ('a', "Monographic component part"),
                ('b', "Serial component part"),
                ('c', "Collection"),
                ('d', "Subunit"),
                ('i', "Integrating resource"),
                ('m', "Monograph/Item"),
                ('s', "Serial"),
            ]),
            17 => Some(vec![
                (' ', "Full level"),
                ('1', "Full level, material not examined"),
                ('2', "Less-than-full level, material not examined"),
                ('3', "Abbreviated level"),
                ('4', "Core level"),
                ('5', "Partial (preliminary) level"),
                ('7', "Minimal level"),
                ('8', "Prepublication level"),
                ('u', "Unknown"),
                ('z', "Not applicable"),
            ]),
            18 => Some(vec![
                (' ', "Non-ISBD"),
                ('a', "AACR 2"),
                ('c', "ISBD punctuation omitted"),
                ('i', "ISBD punctuation included"),
                ('n', "Non-ISBD punctuation omitted"),
                ('u', "Unknown"),
            ]),
            _ => None,
        }
    }

    /// Get the description of a value at a linted leader position.
    ///
    /// # Example
    ///
    /// ```
    /// use mrrc_lint::Leader;
    /// assert_eq!(Leader::describe_value(6, 'g'), Some("Projected medium"));
    /// assert_eq!(Leader::describe_value(6, 'x'), None);
    /// ```
    #[must_use]
    pub fn describe_value(position: usize, value: char) -> Option<&'static str> {
        Self::valid_values_at_position(position).and_then(|values| {
            values
                .into_iter()
                .find(|(v, _)| *v == value)
                .map(|(_, desc)| desc)
        })
    }

    /// Parse a leader from 24 bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are too short or a numeric position is not numeric.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 24 {
            return Err(MarcError::InvalidLeader(format!(
                "Leader must be at least 24 bytes, got {}",
                bytes.len()
            )));
        }

        let record_length = parse_digits(&bytes[0..5])?;
        let indicator_count = parse_count(bytes[10], 10)?;
        let subfield_code_count = parse_count(bytes[11], 11)?;
        let data_base_address = parse_digits(&bytes[12..17])?;

        Ok(Leader {
            record_length,
            record_status: bytes[5] as char,
            record_type: bytes[6] as char,
            bibliographic_level: bytes[7] as char,
            control_record_type: bytes[8] as char,
            character_coding: bytes[9] as char,
            indicator_count,
            subfield_code_count,
            data_base_address,
            encoding_level: bytes[17] as char,
            cataloging_form: bytes[18] as char,
            multipart_level: bytes[19] as char,
            reserved: String::from_utf8_lossy(&bytes[20..24]).to_string(),
        })
    }

    /// Whether this is a Cataloging in Publication (prepublication level) record.
    #[must_use]
    pub fn is_cip(&self) -> bool {
        self.encoding_level == CIP_ENCODING_LEVEL
    }
}

impl FromStr for Leader {
    type Err = MarcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for Leader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:05}{}{}{}{}{}{}{}{:05}{}{}{}{}",
            self.record_length,
            self.record_status,
            self.record_type,
            self.bibliographic_level,
            self.control_record_type,
            self.character_coding,
            self.indicator_count,
            self.subfield_code_count,
            self.data_base_address,
            self.encoding_level,
            self.cataloging_form,
            self.multipart_level,
            self.reserved
        )
    }
}

/// Parse 5-digit ASCII number from bytes
fn parse_digits(bytes: &[u8]) -> Result<u32> {
    let s = String::from_utf8_lossy(bytes);
    s.parse::<u32>()
        .map_err(|_| MarcError::InvalidLeader(format!("Invalid numeric field: '{s}'")))
}

fn parse_count(byte: u8, position: usize) -> Result<u8> {
    (byte as char)
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| {
            MarcError::InvalidLeader(format!(
                "Invalid count at position {position}: {}",
                byte as char
            ))
        })
}
