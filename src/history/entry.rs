//! Session history entry types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record on a session's history branch.
///
/// Only custom entries matter to this crate; every other entry kind the
/// host stores deserializes to [`HistoryEntry::Other`] and is skipped
/// during scans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryEntry {
    /// Application-defined entry carrying a type tag and arbitrary payload.
    Custom {
        /// Application-defined type tag.
        custom_type: String,

        /// Payload stored with the entry.
        #[serde(default)]
        payload: Value,
    },

    /// Any entry kind this crate does not interpret.
    #[serde(other)]
    Other,
}

impl HistoryEntry {
    /// Create a custom entry.
    #[must_use]
    pub fn custom(custom_type: &str, payload: Value) -> Self {
        Self::Custom {
            custom_type: custom_type.to_string(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_custom_entry() {
        let json = r#"{"type": "custom", "custom_type": "gate-policy", "payload": {"policy": "allow-all"}}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        match entry {
            HistoryEntry::Custom {
                custom_type,
                payload,
            } => {
                assert_eq!(custom_type, "gate-policy");
                assert_eq!(payload["policy"], "allow-all");
            }
            HistoryEntry::Other => panic!("expected custom entry"),
        }
    }

    #[test]
    fn parse_custom_entry_without_payload() {
        let json = r#"{"type": "custom", "custom_type": "bookmark"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, HistoryEntry::custom("bookmark", Value::Null));
    }

    #[test]
    fn unknown_entry_kinds_are_opaque() {
        let json = r#"{"type": "message", "role": "user", "text": "hello"}"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry, HistoryEntry::Other);
    }

    #[test]
    fn custom_entry_round_trip() {
        let entry = HistoryEntry::custom("gate-policy", json!({"policy": "approve-all"}));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"custom""#));
        assert!(json.contains("gate-policy"));
        let parsed: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
