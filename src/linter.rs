//! The rule registry and diagnostic aggregator.
//!
//! A [`Linter`] owns the shared lookup data ([`CodeTables`],
//! [`FixedFieldSchema`]), a [`LintConfig`], and an ordered list of rules.
//! [`Linter::check`] runs every rule against a record and concatenates their
//! diagnostics in registration order.
//!
//! # Examples
//!
//! ```
//! use mrrc_lint::{Field, Leader, Linter, Record};
//!
//! let record = Record::builder(Leader::default())
//!     .field(
//!         Field::builder("490".to_string(), '1', ' ')
//!             .subfield_str('a', "Occasional papers")
//!             .build(),
//!     )
//!     .build();
//!
//! let linter = Linter::new();
//! let messages: Vec<String> = linter.check(&record).iter().map(ToString::to_string).collect();
//! assert!(messages.contains(&"490: Indicator is 1 but 8xx does not exist.".to_string()));
//! ```

use crate::code_tables::CodeTables;
use crate::config::LintConfig;
use crate::control_field_validation::check_008;
use crate::diagnostic::Diagnostic;
use crate::fixed_field::FixedFieldSchema;
use crate::leader_validation::check_leader;
use crate::record::Record;
use crate::rules::{
    contents, dates, entries, geographic, illustrations, language, punctuation, spacing,
    structure, video,
};
use lazy_static::lazy_static;
use log::{debug, trace};
use rayon::prelude::*;
use std::fmt;
use std::sync::Arc;

lazy_static! {
    static ref DEFAULT_LINTER: Linter = Linter::new();
}

/// Read-only data handed to every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Country and language vocabularies.
    pub code_tables: &'a CodeTables,
    /// 008 byte-range definitions.
    pub schema: &'a FixedFieldSchema,
    /// Thresholds and exemptions.
    pub config: &'a LintConfig,
}

impl<'a> RuleContext<'a> {
    /// Bundle references to the lint components.
    #[must_use]
    pub fn new(
        code_tables: &'a CodeTables,
        schema: &'a FixedFieldSchema,
        config: &'a LintConfig,
    ) -> Self {
        RuleContext {
            code_tables,
            schema,
            config,
        }
    }
}

/// Signature shared by every rule.
pub type RuleFn = fn(&Record, &RuleContext<'_>) -> Vec<Diagnostic>;

/// A named rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Identifier used in logs and by [`Linter::rule_names`].
    pub name: &'static str,
    /// The check itself.
    pub check: RuleFn,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

impl Rule {
    /// Create a named rule.
    #[must_use]
    pub const fn new(name: &'static str, check: RuleFn) -> Self {
        Rule { name, check }
    }
}

fn leader_rule(record: &Record, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
    check_leader(record, &ctx.config.leader)
}

/// The built-in rules in their default order.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new("leader", leader_rule),
        Rule::new("control_field_008", check_008),
        Rule::new("internal_spaces", spacing::check_internal_spaces),
        Rule::new("leading_trailing_spaces", spacing::check_leading_trailing_spaces),
        Rule::new("double_punctuation", spacing::check_double_punctuation),
        Rule::new("floating_hyphens", spacing::check_floating_hyphens),
        Rule::new("empty_subfields", structure::check_empty_subfields),
        Rule::new("control_characters", structure::check_control_characters),
        Rule::new("field_length", structure::check_field_length),
        Rule::new("040_present", structure::check_040_present),
        Rule::new("010_lccn", structure::check_010),
        Rule::new("ending_punctuation", punctuation::check_ending_punctuation),
        Rule::new("nonpunct_endings", punctuation::check_nonpunct_ending_fields),
        Rule::new("300_ending_punctuation", punctuation::check_300_ending_punctuation),
        Rule::new("245_ind1_vs_1xx", entries::check_245_ind1_vs_1xx),
        Rule::new("240_vs_1xx", entries::check_240_vs_1xx),
        Rule::new("490_vs_8xx", entries::check_490_vs_8xx),
        Rule::new("041_vs_008", language::check_041_vs_008),
        Rule::new("pub_dates", dates::check_pub_dates),
        Rule::new("book_008_vs_300", illustrations::check_book_008_vs_300),
        Rule::new("book_008_vs_bibref_index", contents::check_book_008_vs_bibref_index),
        Rule::new("video_007_vs_300_vs_538", video::check_video_007_vs_300_vs_538),
        Rule::new("geographic_vs_043", geographic::check_geographic_subjects_vs_043),
    ]
}

/// Runs an ordered set of rules over records.
#[derive(Debug, Clone)]
pub struct Linter {
    code_tables: Arc<CodeTables>,
    schema: Arc<FixedFieldSchema>,
    config: LintConfig,
    rules: Vec<Rule>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter {
    /// Linter over the bundled tables and schema, default config and rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_components(
            CodeTables::bundled(),
            FixedFieldSchema::bundled(),
            LintConfig::default(),
        )
    }

    /// Linter over caller-supplied components with the default rules.
    #[must_use]
    pub fn with_components(
        code_tables: Arc<CodeTables>,
        schema: Arc<FixedFieldSchema>,
        config: LintConfig,
    ) -> Self {
        Linter {
            code_tables,
            schema,
            config,
            rules: default_rules(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: LintConfig) -> Self {
        self.config = config;
        self
    }

    /// Remove every rule, leaving an empty registry.
    #[must_use]
    pub fn without_rules(mut self) -> Self {
        self.rules.clear();
        self
    }

    /// Append a rule; it runs after those already registered.
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Context handed to rules by this linter.
    #[must_use]
    pub fn context(&self) -> RuleContext<'_> {
        RuleContext::new(&self.code_tables, &self.schema, &self.config)
    }

    /// Run every rule and concatenate the results in registration order.
    #[must_use]
    pub fn check(&self, record: &Record) -> Vec<Diagnostic> {
        let ctx = self.context();
        let mut diagnostics = Vec::new();
        for rule in &self.rules {
            let found = (rule.check)(record, &ctx);
            trace!("rule {} produced {} diagnostic(s)", rule.name, found.len());
            diagnostics.extend(found);
        }
        debug!(
            "checked record {}: {} diagnostic(s)",
            record.control_number().unwrap_or("<no 001>"),
            diagnostics.len()
        );
        diagnostics
    }

    /// Run a single registered rule by name.
    ///
    /// Returns `None` if no rule has that name.
    #[must_use]
    pub fn check_rule(&self, name: &str, record: &Record) -> Option<Vec<Diagnostic>> {
        let rule = self.rules.iter().find(|r| r.name == name)?;
        Some((rule.check)(record, &self.context()))
    }

    /// Check independent records in parallel. Results keep input order.
    #[must_use]
    pub fn check_batch(&self, records: &[Record]) -> Vec<Vec<Diagnostic>> {
        records.par_iter().map(|record| self.check(record)).collect()
    }
}

/// The shared default linter.
#[must_use]
pub fn default_linter() -> &'static Linter {
    &DEFAULT_LINTER
}

/// Run every default rule with the bundled tables.
#[must_use]
pub fn validate_all(record: &Record) -> Vec<Diagnostic> {
    DEFAULT_LINTER.check(record)
}

/// Check leader positions 05, 06, 07, 17 and 18 with the default vocabularies.
#[must_use]
pub fn validate_leader(record: &Record) -> Vec<Diagnostic> {
    check_leader(record, &DEFAULT_LINTER.config.leader)
}

/// Check the 008 with the bundled tables and schema.
#[must_use]
pub fn validate_control_field_008(record: &Record) -> Vec<Diagnostic> {
    check_008(record, &DEFAULT_LINTER.context())
}
