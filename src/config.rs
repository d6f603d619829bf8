//! Configuration options for linting.
//!
//! This module provides the [`LintConfig`] struct which controls vocabularies,
//! thresholds and exemptions used by the rules. Every field has a default, so
//! a JSON document only needs to name what it overrides.

use crate::error::{MarcError, Result};
use crate::leader_validation::LeaderVocabularies;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const BUNDLED_ABBREVIATIONS: &str = include_str!("../data/abbreviations.txt");

/// Configuration for the lint rules.
///
/// # Examples
///
/// ```
/// use mrrc_lint::LintConfig;
///
/// let config = LintConfig::default().with_preview_length(20);
/// assert_eq!(config.preview_length, 20);
///
/// let config = LintConfig::from_json(r#"{"exempt_cip": false}"#).unwrap();
/// assert!(!config.exempt_cip);
/// assert_eq!(config.max_field_length, 9999);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    // === Leader ===
    /// Allowed values for the linted leader positions.
    pub leader: LeaderVocabularies,

    // === 008 date entered ===
    /// Two-digit years `00..=date_entered_recent_max` are read as 20xx.
    pub date_entered_recent_max: u8,

    /// Two-digit years `date_entered_legacy_min..=99` are read as 19xx.
    ///
    /// Years between the two bounds are reported as out of range.
    pub date_entered_legacy_min: u8,

    // === Text rules ===
    /// Characters kept at each end of a field preview in diagnostics.
    pub preview_length: usize,

    /// Longest field, in bytes, before a field length diagnostic.
    pub max_field_length: usize,

    /// Words that may end a field in a period (`Inc.`, `U.S.`, ...).
    pub abbreviations: BTreeSet<String>,

    /// Subject subdivisions that do not call for a 043.
    pub geographic_exceptions: Vec<String>,

    /// Tags skipped by the spacing rules.
    pub spacing_exempt_tags: Vec<String>,

    /// Tags skipped by the consecutive-period check.
    pub double_punctuation_exempt_tags: Vec<String>,

    // === Exemptions ===
    /// Skip description-dependent rules for prepublication (CIP) records.
    pub exempt_cip: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            leader: LeaderVocabularies::default(),
            date_entered_recent_max: 6,
            date_entered_legacy_min: 80,
            preview_length: 10,
            max_field_length: 9999,
            abbreviations: parse_word_list(BUNDLED_ABBREVIATIONS),
            geographic_exceptions: vec![
                "Foreign countries".to_string(),
                "English-speaking countries".to_string(),
            ],
            spacing_exempt_tags: vec!["010".to_string()],
            double_punctuation_exempt_tags: vec!["856".to_string()],
            exempt_cip: true,
        }
    }
}

impl LintConfig {
    /// Parse a JSON configuration and check it.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::Json`] for malformed JSON and
    /// [`MarcError::Config`] if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LintConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`MarcError::Config`] naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.date_entered_legacy_min > 99 {
            return Err(MarcError::Config(format!(
                "date_entered_legacy_min must be at most 99, got {}",
                self.date_entered_legacy_min
            )));
        }
        if self.date_entered_recent_max >= self.date_entered_legacy_min {
            return Err(MarcError::Config(format!(
                "date_entered_recent_max ({}) must be below date_entered_legacy_min ({})",
                self.date_entered_recent_max, self.date_entered_legacy_min
            )));
        }
        if self.preview_length == 0 {
            return Err(MarcError::Config(
                "preview_length must be positive".to_string(),
            ));
        }
        if self.max_field_length == 0 {
            return Err(MarcError::Config(
                "max_field_length must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the leader vocabularies.
    #[must_use]
    pub fn with_leader_vocabularies(mut self, leader: LeaderVocabularies) -> Self {
        self.leader = leader;
        self
    }

    /// Set the two-digit year window for 008 date entered.
    #[must_use]
    pub fn with_date_entered_window(mut self, recent_max: u8, legacy_min: u8) -> Self {
        self.date_entered_recent_max = recent_max;
        self.date_entered_legacy_min = legacy_min;
        self
    }

    /// Set the preview length.
    #[must_use]
    pub fn with_preview_length(mut self, length: usize) -> Self {
        self.preview_length = length;
        self
    }

    /// Set the maximum field length.
    #[must_use]
    pub fn with_max_field_length(mut self, length: usize) -> Self {
        self.max_field_length = length;
        self
    }

    /// Add an abbreviation.
    #[must_use]
    pub fn with_abbreviation(mut self, word: impl Into<String>) -> Self {
        self.abbreviations.insert(word.into());
        self
    }

    /// Replace the geographic exceptions.
    #[must_use]
    pub fn with_geographic_exceptions(mut self, exceptions: Vec<String>) -> Self {
        self.geographic_exceptions = exceptions;
        self
    }

    /// Enable or disable the CIP exemption.
    #[must_use]
    pub fn with_exempt_cip(mut self, exempt: bool) -> Self {
        self.exempt_cip = exempt;
        self
    }

    /// Whether a word is a known abbreviation.
    #[must_use]
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Whether the spacing rules skip this tag.
    #[must_use]
    pub fn is_spacing_exempt(&self, tag: &str) -> bool {
        self.spacing_exempt_tags.iter().any(|t| t == tag)
    }

    /// Whether the consecutive-period check skips this tag.
    #[must_use]
    pub fn is_double_punctuation_exempt(&self, tag: &str) -> bool {
        self.double_punctuation_exempt_tags.iter().any(|t| t == tag)
    }
}

fn parse_word_list(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}
