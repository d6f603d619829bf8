//! Diagnostics produced by the lint rules.
//!
//! A [`Diagnostic`] is a tag plus one or more message parts. Parts stay
//! separate internally; they are joined with [`MESSAGE_SEPARATOR`] only when
//! the diagnostic is rendered, which keeps the legacy single-line output format
//! (`"<tag>: <message>"`) stable for downstream report tools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token joining the parts of a multi-part message in rendered output.
pub const MESSAGE_SEPARATOR: &str = "\t";

/// Label rendered in place of a tag for record-level diagnostics.
pub const GLOBAL_LABEL: &str = "Record";

/// Tag used for leader diagnostics.
pub const LEADER_TAG: &str = "LDR";

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    tag: Option<String>,
    parts: Vec<String>,
}

impl Diagnostic {
    /// Diagnostic attached to a field tag.
    #[must_use]
    pub fn new(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            tag: Some(tag.into()),
            parts: vec![message.into()],
        }
    }

    /// Record-level diagnostic with no tag.
    #[must_use]
    pub fn global(message: impl Into<String>) -> Self {
        Diagnostic {
            tag: None,
            parts: vec![message.into()],
        }
    }

    /// Diagnostic made of several message parts.
    #[must_use]
    pub fn with_parts(tag: Option<String>, parts: Vec<String>) -> Self {
        Diagnostic { tag, parts }
    }

    /// The field tag, or `None` for record-level diagnostics.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The individual message parts.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The message with parts joined by [`MESSAGE_SEPARATOR`].
    #[must_use]
    pub fn message(&self) -> String {
        self.parts.join(MESSAGE_SEPARATOR)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.tag.as_deref().unwrap_or(GLOBAL_LABEL),
            self.message()
        )
    }
}

/// Render a list of diagnostics one per line, in order.
#[must_use]
pub fn render(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tagged() {
        let d = Diagnostic::new("490", "Indicator is 1 but 8xx does not exist.");
        assert_eq!(d.to_string(), "490: Indicator is 1 but 8xx does not exist.");
        assert_eq!(d.tag(), Some("490"));
        assert_eq!(d.parts().len(), 1);
    }

    #[test]
    fn test_render_global() {
        let d = Diagnostic::global("Record is empty.");
        assert_eq!(d.tag(), None);
        assert_eq!(d.to_string(), "Record: Record is empty.");
    }

    #[test]
    fn test_multi_part_joined_with_separator() {
        let d = Diagnostic::with_parts(
            Some("008".to_string()),
            vec!["first".to_string(), "second".to_string()],
        );
        assert_eq!(d.message(), "first\tsecond");
        assert_eq!(d.to_string(), "008: first\tsecond");
    }

    #[test]
    fn test_render_list_preserves_order() {
        let list = vec![Diagnostic::new("245", "b"), Diagnostic::new("100", "a")];
        assert_eq!(render(&list), vec!["245: b", "100: a"]);
    }
}
