//! Cross-field and text rules.
//!
//! Every rule has the shape [`RuleFn`](crate::linter::RuleFn): it reads the
//! record through a [`RuleContext`](crate::linter::RuleContext) and returns
//! its diagnostics. Rules never see each other's output, and a rule whose
//! fields are missing returns nothing.

pub mod contents;
pub mod dates;
pub mod entries;
pub mod geographic;
pub mod illustrations;
pub mod language;
pub mod punctuation;
pub mod spacing;
pub mod structure;
mod text;
pub mod video;
