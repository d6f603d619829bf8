//! The 008 fixed-length data elements.
//!
//! Bytes 00-17 and 35-39 of the 008 mean the same thing for every record.
//! Bytes 18-34 are defined per material type, which is derived from leader
//! positions 06 and 07. [`FixedFieldSchema`] holds the ordered byte ranges for
//! each [`MaterialType`], each with an anchored pattern its content must match.
//!
//! # Examples
//!
//! ```
//! use mrrc_lint::{Field008, Leader, MaterialType};
//!
//! let leader: Leader = "00000nam a2200000 a 4500".parse().unwrap();
//! assert_eq!(MaterialType::classify(&leader), Some(MaterialType::Book));
//!
//! let f = Field008::parse("860506s1986    nyu           000 1 eng d").unwrap();
//! assert_eq!(f.date1(), "1986");
//! assert_eq!(f.country(), "nyu");
//! ```

use crate::error::{MarcError, Result};
use crate::leader::Leader;
use crate::record::Record;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Required length of an 008 field.
pub const FIELD_008_LENGTH: usize = 40;

lazy_static! {
    static ref STANDARD: Arc<FixedFieldSchema> = Arc::new(
        FixedFieldSchema::standard().expect("standard 008 patterns compile"),
    );
}

/// Material class selecting the layout of 008 bytes 18-34.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialType {
    /// Books (language material)
    Book,
    /// Computer files
    ComputerFile,
    /// Maps (cartographic material)
    Map,
    /// Music and sound recordings
    Music,
    /// Continuing resources (serials, integrating resources)
    ContinuingResource,
    /// Visual materials
    VisualMaterial,
    /// Mixed materials
    MixedMaterial,
}

impl MaterialType {
    /// All material types, in schema order.
    pub const ALL: [MaterialType; 7] = [
        MaterialType::Book,
        MaterialType::ComputerFile,
        MaterialType::Map,
        MaterialType::Music,
        MaterialType::ContinuingResource,
        MaterialType::VisualMaterial,
        MaterialType::MixedMaterial,
    ];

    /// Derive the material type from leader/06 and leader/07.
    ///
    /// A serial bibliographic level always gives a continuing resource.
    /// Returns `None` for unrecognized types of record.
    #[must_use]
    pub fn classify(leader: &Leader) -> Option<MaterialType> {
        if leader.bibliographic_level == 's' {
            return Some(MaterialType::ContinuingResource);
        }
        match leader.record_type {
            'a' | 't' => Some(MaterialType::Book),
            'm' => Some(MaterialType::ComputerFile),
            'e' | 'f' => Some(MaterialType::Map),
            'c' | 'd' | 'i' | 'j' => Some(MaterialType::Music),
            'g' | 'k' | 'o' | 'r' => Some(MaterialType::VisualMaterial),
            'p' => Some(MaterialType::MixedMaterial),
            _ => None,
        }
    }

    /// Plural label used in diagnostics ("Books", "Maps", ...).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Book => "Books",
            Self::ComputerFile => "Computer files",
            Self::Map => "Maps",
            Self::Music => "Music",
            Self::ContinuingResource => "Continuing resources",
            Self::VisualMaterial => "Visual materials",
            Self::MixedMaterial => "Mixed materials",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A run of 008 bytes with a name and the pattern its content must match.
#[derive(Debug, Clone)]
pub struct ByteRange {
    /// First byte position.
    pub start: usize,
    /// Number of bytes.
    pub length: usize,
    /// Element name used in diagnostics.
    pub label: &'static str,
    pattern: Regex,
}

impl ByteRange {
    /// Create a byte range. The pattern is anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::Schema`] if the range leaves the 008 or the pattern
    /// does not compile.
    pub fn new(start: usize, length: usize, label: &'static str, pattern: &str) -> Result<Self> {
        if length == 0 || start + length > FIELD_008_LENGTH {
            return Err(MarcError::Schema(format!(
                "{label}: bytes {start}+{length} fall outside the 008"
            )));
        }
        let pattern = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| MarcError::Schema(format!("{label}: {e}")))?;
        Ok(ByteRange {
            start,
            length,
            label,
            pattern,
        })
    }

    /// Whether the given content is acceptable for this range.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    /// "Byte 29" or "Bytes 18-21".
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.length == 1 {
            format!("Byte {:02}", self.start)
        } else {
            format!(
                "Bytes {:02}-{:02}",
                self.start,
                self.start + self.length - 1
            )
        }
    }
}

// Shared vocabularies
const TARGET_AUDIENCE: &str = r"[ abcdefgj|]";
const FORM_OF_ITEM: &str = r"[ abcdfoqrs|]";
const GOVERNMENT_PUBLICATION: &str = r"[ acfilmosuz|]";
const ZERO_ONE: &str = r"[01|]";

fn undefined(length: usize) -> String {
    format!(r"[ |]{{{length}}}")
}

/// Byte-range definitions of 008/18-34 for every material type.
#[derive(Debug, Clone)]
pub struct FixedFieldSchema {
    tables: HashMap<MaterialType, Vec<ByteRange>>,
}

impl FixedFieldSchema {
    /// Shared instance of the MARC 21 schema, built once.
    #[must_use]
    pub fn bundled() -> Arc<FixedFieldSchema> {
        Arc::clone(&STANDARD)
    }

    /// Build the MARC 21 schema.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::Schema`] if a definition is malformed.
    pub fn standard() -> Result<Self> {
        let mut tables = HashMap::new();
        tables.insert(MaterialType::Book, book_ranges()?);
        tables.insert(MaterialType::ComputerFile, computer_file_ranges()?);
        tables.insert(MaterialType::Map, map_ranges()?);
        tables.insert(MaterialType::Music, music_ranges()?);
        tables.insert(MaterialType::ContinuingResource, continuing_resource_ranges()?);
        tables.insert(MaterialType::VisualMaterial, visual_material_ranges()?);
        tables.insert(MaterialType::MixedMaterial, mixed_material_ranges()?);
        debug!(
            "built 008 schema: {} byte ranges",
            tables.values().map(Vec::len).sum::<usize>()
        );
        Ok(FixedFieldSchema { tables })
    }

    /// Build a schema from explicit tables. Ranges are sorted by start byte.
    #[must_use]
    pub fn from_tables(mut tables: HashMap<MaterialType, Vec<ByteRange>>) -> Self {
        for ranges in tables.values_mut() {
            ranges.sort_by_key(|r| r.start);
        }
        FixedFieldSchema { tables }
    }

    /// Ranges for a material type in ascending byte order.
    #[must_use]
    pub fn ranges(&self, material: MaterialType) -> &[ByteRange] {
        self.tables.get(&material).map(Vec::as_slice).unwrap_or_default()
    }
}

fn book_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(18, 4, "Illustrations", r"[ abcdefghijklmop]{4}|\|{4}")?,
        ByteRange::new(22, 1, "Target audience", TARGET_AUDIENCE)?,
        ByteRange::new(23, 1, "Form of item", FORM_OF_ITEM)?,
        ByteRange::new(
            24,
            4,
            "Nature of contents",
            r"[ 256abcdefgijklmnopqrstuvwyz]{4}|\|{4}",
        )?,
        ByteRange::new(28, 1, "Government publication", GOVERNMENT_PUBLICATION)?,
        ByteRange::new(29, 1, "Conference publication", ZERO_ONE)?,
        ByteRange::new(30, 1, "Festschrift", ZERO_ONE)?,
        ByteRange::new(31, 1, "Index", ZERO_ONE)?,
        ByteRange::new(32, 1, "Undefined", &undefined(1))?,
        ByteRange::new(33, 1, "Literary form", r"[01cdefhijmpsu|]")?,
        ByteRange::new(34, 1, "Biography", r"[ abcd|]")?,
    ])
}

fn computer_file_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(18, 4, "Undefined", &undefined(4))?,
        ByteRange::new(22, 1, "Target audience", TARGET_AUDIENCE)?,
        ByteRange::new(23, 1, "Form of item", r"[ oq|]")?,
        ByteRange::new(24, 2, "Undefined", &undefined(2))?,
        ByteRange::new(26, 1, "Type of computer file", r"[abcdefghijmuz|]")?,
        ByteRange::new(27, 1, "Undefined", &undefined(1))?,
        ByteRange::new(28, 1, "Government publication", GOVERNMENT_PUBLICATION)?,
        ByteRange::new(29, 6, "Undefined", &undefined(6))?,
    ])
}

fn map_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(18, 4, "Relief", r"[ abcdefgijkmz]{4}|\|{4}")?,
        ByteRange::new(
            22,
            2,
            "Projection",
            r"  |a[abcdefgmnpuz]|b[abcdefghijklorsuz]|c[abcepuz]|d[abcdefghlz]|zz|\|\|",
        )?,
        ByteRange::new(24, 1, "Undefined", &undefined(1))?,
        ByteRange::new(25, 1, "Type of cartographic material", r"[abcdefguz|]")?,
        ByteRange::new(26, 2, "Undefined", &undefined(2))?,
        ByteRange::new(28, 1, "Government publication", GOVERNMENT_PUBLICATION)?,
        ByteRange::new(29, 1, "Form of item", FORM_OF_ITEM)?,
        ByteRange::new(30, 1, "Undefined", &undefined(1))?,
        ByteRange::new(31, 1, "Index", ZERO_ONE)?,
        ByteRange::new(32, 1, "Undefined", &undefined(1))?,
        ByteRange::new(
            33,
            2,
            "Special format characteristics",
            r"[ ejklnoprz]{2}|\|\|",
        )?,
    ])
}

fn music_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(
            18,
            2,
            "Form of composition",
            concat!(
                r"an|bd|bg|bl|bt|ca|cb|cc|cg|ch|cl|cn|co|cp|cr|cs|ct|cy|cz|df|dv|",
                r"fg|fl|fm|ft|gm|hy|jz|mc|md|mi|mo|mp|mr|ms|mu|mz|nc|nn|op|or|ov|",
                r"pg|pm|po|pp|pr|ps|pt|pv|rc|rd|rg|ri|rp|rq|sd|sg|sn|sp|st|su|sy|",
                r"tc|tl|ts|uu|vi|vr|wz|za|zz|\|\|",
            ),
        )?,
        ByteRange::new(20, 1, "Format of music", r"[abcdeghijklmnpuz|]")?,
        ByteRange::new(21, 1, "Music parts", r"[ defnu|]")?,
        ByteRange::new(22, 1, "Target audience", TARGET_AUDIENCE)?,
        ByteRange::new(23, 1, "Form of item", FORM_OF_ITEM)?,
        ByteRange::new(24, 6, "Accompanying matter", r"[ abcdefghikrsz]{6}|\|{6}")?,
        ByteRange::new(
            30,
            2,
            "Literary text for sound recordings",
            r"[ abcdefghijklmnoprstz]{2}|\|\|",
        )?,
        ByteRange::new(32, 1, "Undefined", &undefined(1))?,
        ByteRange::new(33, 1, "Transposition and arrangement", r"[ abcnu|]")?,
        ByteRange::new(34, 1, "Undefined", &undefined(1))?,
    ])
}

fn continuing_resource_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(18, 1, "Frequency", r"[ abcdefghijkmqstuwz|]")?,
        ByteRange::new(19, 1, "Regularity", r"[nrux|]")?,
        ByteRange::new(20, 1, "Undefined", &undefined(1))?,
        ByteRange::new(21, 1, "Type of continuing resource", r"[ dgjlmnpstw|]")?,
        ByteRange::new(22, 1, "Form of original item", r"[ abcdefoqs|]")?,
        ByteRange::new(23, 1, "Form of item", FORM_OF_ITEM)?,
        ByteRange::new(
            24,
            1,
            "Nature of entire work",
            r"[ 56abcdefghiklmnopqrstuvwyz|]",
        )?,
        ByteRange::new(
            25,
            3,
            "Nature of contents",
            r"[ 56abcdefghiklmnopqrstuvwyz]{3}|\|{3}",
        )?,
        ByteRange::new(28, 1, "Government publication", GOVERNMENT_PUBLICATION)?,
        ByteRange::new(29, 1, "Conference publication", ZERO_ONE)?,
        ByteRange::new(30, 3, "Undefined", &undefined(3))?,
        ByteRange::new(33, 1, "Original alphabet or script of title", r"[ abcdefghijkluz|]")?,
        ByteRange::new(34, 1, "Entry convention", r"[012|]")?,
    ])
}

fn visual_material_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(18, 3, "Running time", r"[0-9]{3}|---|nnn|\|{3}")?,
        ByteRange::new(21, 1, "Undefined", &undefined(1))?,
        ByteRange::new(22, 1, "Target audience", TARGET_AUDIENCE)?,
        ByteRange::new(23, 5, "Undefined", &undefined(5))?,
        ByteRange::new(28, 1, "Government publication", GOVERNMENT_PUBLICATION)?,
        ByteRange::new(29, 1, "Form of item", FORM_OF_ITEM)?,
        ByteRange::new(30, 3, "Undefined", &undefined(3))?,
        ByteRange::new(33, 1, "Type of visual material", r"[abcdfgiklmnopqrstvwz|]")?,
        ByteRange::new(34, 1, "Technique", r"[aclnuz|]")?,
    ])
}

fn mixed_material_ranges() -> Result<Vec<ByteRange>> {
    Ok(vec![
        ByteRange::new(18, 5, "Undefined", &undefined(5))?,
        ByteRange::new(23, 1, "Form of item", FORM_OF_ITEM)?,
        ByteRange::new(24, 11, "Undefined", &undefined(11))?,
    ])
}

/// Decoded view over a 40-character 008.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field008 {
    chars: Vec<char>,
}

impl Field008 {
    /// Wrap an 008 value. Returns `None` unless it is exactly 40 characters.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let chars: Vec<char> = value.chars().collect();
        (chars.len() == FIELD_008_LENGTH).then_some(Field008 { chars })
    }

    /// The record's first 008, if present and well sized.
    #[must_use]
    pub fn from_record(record: &Record) -> Option<Self> {
        record.get_control_field("008").and_then(Self::parse)
    }

    /// Characters `start..start + length`.
    ///
    /// # Panics
    ///
    /// Panics if the range extends past byte 39.
    #[must_use]
    pub fn slice(&self, start: usize, length: usize) -> String {
        self.chars[start..start + length].iter().collect()
    }

    /// Content of a schema byte range.
    #[must_use]
    pub fn range(&self, range: &ByteRange) -> String {
        self.slice(range.start, range.length)
    }

    /// Single byte, or `None` past byte 39.
    #[must_use]
    pub fn byte(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied()
    }

    /// Bytes 00-05.
    #[must_use]
    pub fn date_entered(&self) -> String {
        self.slice(0, 6)
    }

    /// Byte 06.
    #[must_use]
    pub fn date_type(&self) -> char {
        self.chars[6]
    }

    /// Bytes 07-10.
    #[must_use]
    pub fn date1(&self) -> String {
        self.slice(7, 4)
    }

    /// Bytes 11-14.
    #[must_use]
    pub fn date2(&self) -> String {
        self.slice(11, 4)
    }

    /// Bytes 15-17.
    #[must_use]
    pub fn country(&self) -> String {
        self.slice(15, 3)
    }

    /// Bytes 18-34, the material-specific part.
    #[must_use]
    pub fn material_specific(&self) -> String {
        self.slice(18, 17)
    }

    /// Bytes 35-37.
    #[must_use]
    pub fn language(&self) -> String {
        self.slice(35, 3)
    }

    /// Byte 38.
    #[must_use]
    pub fn modified_record(&self) -> char {
        self.chars[38]
    }

    /// Byte 39.
    #[must_use]
    pub fn cataloging_source(&self) -> char {
        self.chars[39]
    }
}

impl fmt::Display for Field008 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
