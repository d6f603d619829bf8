#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`record`]: Record view the rules read (`Record`, `Field`, `Subfield`)
//! - [`leader`]: MARC record leader (24-byte header)
//! - [`tag_range`]: Numeric tag ranges (`1xx`, `8xx`, ...)
//! - [`diagnostic`]: Lint findings and their rendering
//! - [`code_tables`]: Country and language code lists
//! - [`fixed_field`]: 008 layout per material type
//! - [`leader_validation`]: Leader vocabulary checks
//! - [`control_field_validation`]: 008 checks
//! - [`rules`]: Cross-field and text rules
//! - [`config`]: Lint configuration
//! - [`linter`]: Rule registry and aggregator
//! - [`error`]: Error types and result type

pub mod code_tables;
pub mod config;
pub mod control_field_validation;
pub mod diagnostic;
pub mod error;
pub mod fixed_field;
pub mod leader;
pub mod leader_validation;
pub mod linter;
/// Core MARC record structures (`Record`, `Field`, `Subfield`)
pub mod record;
pub mod rules;
pub mod tag_range;

pub use code_tables::{Classification, CodeEntry, CodeStatus, CodeTables};
pub use config::LintConfig;
pub use diagnostic::{Diagnostic, MESSAGE_SEPARATOR};
pub use error::{MarcError, Result};
pub use fixed_field::{ByteRange, Field008, FixedFieldSchema, MaterialType};
pub use leader::Leader;
pub use leader_validation::LeaderVocabularies;
pub use linter::{
    default_linter, validate_all, validate_control_field_008, validate_leader, Linter, Rule,
    RuleContext, RuleFn,
};
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use tag_range::TagRange;
