//! Typed handler instructions and recorded side effects.

use crate::ui::Severity;
use serde::Serialize;

/// Instruction returned from input handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputAction {
    /// Let the host keep processing the input.
    Continue,
}

/// Veto returned from tool-call handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockDecision {
    /// Always true; present so the host sees `{"block": true, ...}`.
    pub block: bool,

    /// Human-readable reason for the veto.
    pub reason: String,
}

impl BlockDecision {
    /// Create a veto with a reason.
    #[must_use]
    pub fn new(reason: &str) -> Self {
        Self {
            block: true,
            reason: reason.to_string(),
        }
    }
}

/// Combined instruction for one event dispatch.
///
/// Permitted tool calls and lifecycle events serialize to `{}`, the
/// "no instruction" shape hosts treat as continue.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventReply {
    /// Instruction for `input` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<InputAction>,

    /// Veto for `tool_call` events.
    #[serde(flatten)]
    pub veto: Option<BlockDecision>,
}

/// One status-bar fragment update; `None` text clears the fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// Fragment key.
    pub key: String,

    /// New text, or `None` to clear.
    pub text: Option<String>,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Severity level.
    pub level: Severity,

    /// Message text.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reply_serializes_to_empty_object() {
        let reply = EventReply::default();
        assert_eq!(serde_json::to_string(&reply).unwrap(), "{}");
    }

    #[test]
    fn continue_action_serialization() {
        let reply = EventReply {
            action: Some(InputAction::Continue),
            veto: None,
        };
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"action":"continue"}"#
        );
    }

    #[test]
    fn veto_serialization() {
        let reply = EventReply {
            action: None,
            veto: Some(BlockDecision::new("user declined bash")),
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert_eq!(json, r#"{"block":true,"reason":"user declined bash"}"#);
    }

    #[test]
    fn status_update_clear_serialization() {
        let update = StatusUpdate {
            key: "uptime".to_string(),
            text: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"key":"uptime","text":null}"#);
    }

    #[test]
    fn notice_serialization() {
        let notice = Notice {
            level: Severity::Warning,
            message: "no interactive UI attached".to_string(),
        };
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains(r#""level":"warning""#));
    }
}
