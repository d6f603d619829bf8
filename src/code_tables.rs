//! MARC country and language code lists.
//!
//! Both vocabularies are loaded from tab-separated sources with the columns
//! `code`, `label` and `status`. The lists compiled into the crate live in
//! `data/country_codes.tsv` and `data/language_codes.tsv`; callers with their
//! own maintained lists can build tables with [`CodeTables::from_readers`].
//!
//! Lookups ignore trailing blanks, since 008 stores two-letter country codes
//! padded to three positions (`"fr "`).

use crate::error::{MarcError, Result};
use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

const BUNDLED_COUNTRIES: &str = include_str!("../data/country_codes.tsv");
const BUNDLED_LANGUAGES: &str = include_str!("../data/language_codes.tsv");

lazy_static! {
    static ref BUNDLED: Arc<CodeTables> = Arc::new(
        CodeTables::from_readers(BUNDLED_COUNTRIES.as_bytes(), BUNDLED_LANGUAGES.as_bytes())
            .expect("bundled code tables are well formed"),
    );
}

/// Whether a listed code is still in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeStatus {
    /// Current code.
    Valid,
    /// Discontinued code, still found in older records.
    Obsolete,
}

/// Result of looking a code up in a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Listed and current.
    Valid,
    /// Listed but discontinued.
    Obsolete,
    /// Not listed.
    Unknown,
}

impl From<CodeStatus> for Classification {
    fn from(status: CodeStatus) -> Self {
        match status {
            CodeStatus::Valid => Classification::Valid,
            CodeStatus::Obsolete => Classification::Obsolete,
        }
    }
}

/// One row of a code list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// The code as it appears in records.
    pub code: String,
    /// Human-readable name.
    pub label: String,
    /// Current or discontinued.
    pub status: CodeStatus,
}

/// Immutable country and language vocabularies.
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
    countries: HashMap<String, CodeEntry>,
    languages: HashMap<String, CodeEntry>,
}

impl CodeTables {
    /// Shared tables built from the code lists compiled into the crate.
    ///
    /// The lists are parsed on first use and the same `Arc` is handed out
    /// afterwards.
    #[must_use]
    pub fn bundled() -> Arc<CodeTables> {
        Arc::clone(&BUNDLED)
    }

    /// Build tables from tab-separated country and language sources.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::Csv`] when a source cannot be read or a row does
    /// not deserialize, and [`MarcError::CodeTable`] when a code is empty,
    /// longer than three characters, or listed twice.
    pub fn from_readers<C: Read, L: Read>(countries: C, languages: L) -> Result<Self> {
        let countries = load_table(countries, "country")?;
        let languages = load_table(languages, "language")?;
        debug!(
            "loaded code tables: {} countries, {} languages",
            countries.len(),
            languages.len()
        );
        Ok(CodeTables {
            countries,
            languages,
        })
    }

    /// Classify a country of publication code (008/15-17).
    #[must_use]
    pub fn classify_country(&self, code: &str) -> Classification {
        self.country(code)
            .map_or(Classification::Unknown, |e| e.status.into())
    }

    /// Classify a language code (008/35-37, 041).
    ///
    /// Three blanks mean "not coded" and are valid.
    #[must_use]
    pub fn classify_language(&self, code: &str) -> Classification {
        if code == "   " {
            return Classification::Valid;
        }
        self.language(code)
            .map_or(Classification::Unknown, |e| e.status.into())
    }

    /// Look up a country entry.
    #[must_use]
    pub fn country(&self, code: &str) -> Option<&CodeEntry> {
        self.countries.get(code.trim_end_matches(' '))
    }

    /// Look up a language entry.
    #[must_use]
    pub fn language(&self, code: &str) -> Option<&CodeEntry> {
        self.languages.get(code.trim_end_matches(' '))
    }

    /// Number of country entries.
    #[must_use]
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of language entries.
    #[must_use]
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Every country entry, in no particular order.
    pub fn countries(&self) -> impl Iterator<Item = &CodeEntry> {
        self.countries.values()
    }

    /// Every language entry, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &CodeEntry> {
        self.languages.values()
    }
}

fn load_table<R: Read>(source: R, kind: &str) -> Result<HashMap<String, CodeEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(source);

    let mut table = HashMap::new();
    for row in reader.deserialize() {
        let entry: CodeEntry = row?;
        if entry.code.is_empty() || entry.code.len() > 3 {
            return Err(MarcError::CodeTable(format!(
                "{kind} code '{}' must be one to three characters",
                entry.code
            )));
        }
        if table.contains_key(&entry.code) {
            return Err(MarcError::CodeTable(format!(
                "duplicate {kind} code '{}'",
                entry.code
            )));
        }
        table.insert(entry.code.clone(), entry);
    }
    Ok(table)
}
