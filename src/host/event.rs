//! Event envelope parsed from host JSON.

use crate::history::HistoryEntry;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Input received from the host for one event or command dispatch.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope {
    /// Session identifier.
    pub session_id: String,

    /// User input text (for `input` events).
    #[serde(default)]
    pub text: Option<String>,

    /// Tool name (for `tool_call` events).
    #[serde(default)]
    pub tool_name: Option<String>,

    /// Tool input (for `tool_call` events).
    #[serde(default)]
    pub tool_input: Option<Value>,

    /// Entries on the active branch, oldest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,

    /// Host process start time, so uptime survives bridge invocations.
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}
