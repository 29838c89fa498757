//! UI surface contract.

use serde::Serialize;

/// Severity level for transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something degraded but handled.
    Warning,
    /// Something failed.
    Error,
}

/// Named semantic text styles the host may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// De-emphasized text.
    Dim,
    /// Attention-drawing text.
    Warning,
}

impl TextStyle {
    /// Host-facing style name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dim => "dim",
            Self::Warning => "warning",
        }
    }
}

/// Host-provided interactive surface.
///
/// Hosts with no frontend attached report `is_attached() == false`; the
/// plugins then take their fail-safe paths and never call `confirm`.
pub trait Ui: Send + Sync {
    /// Whether an interactive surface is attached to this process.
    fn is_attached(&self) -> bool;

    /// Blocking yes/no confirmation dialog with a title and body.
    fn confirm(&self, title: &str, body: &str) -> bool;

    /// Transient notification.
    fn notify(&self, level: Severity, message: &str);

    /// Set a named status-bar fragment, or clear it with `None`.
    fn set_status(&self, key: &str, text: Option<String>);

    /// Apply a named semantic style to text.
    fn style(&self, style: TextStyle, text: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), r#""info""#);
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            r#""warning""#
        );
        assert_eq!(
            serde_json::to_string(&Severity::Error).unwrap(),
            r#""error""#
        );
    }

    #[test]
    fn style_names() {
        assert_eq!(TextStyle::Dim.name(), "dim");
        assert_eq!(TextStyle::Warning.name(), "warning");
    }
}
