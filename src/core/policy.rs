//! Approval policy values and branch restoration.

use crate::history::HistoryEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Custom-entry tag under which policy changes are persisted.
pub const POLICY_ENTRY_TYPE: &str = "gate-policy";

/// User-selected tool approval policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalPolicy {
    /// Run every tool without asking.
    AllowAll,

    /// Confirm every tool call with the user.
    ApproveAll,
}

impl fmt::Display for ApprovalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllowAll => f.write_str("allow-all"),
            Self::ApproveAll => f.write_str("approve-all"),
        }
    }
}

/// Payload persisted with each policy change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Unique record identifier.
    pub id: String,

    /// Policy in effect from this point of the branch on.
    pub policy: ApprovalPolicy,

    /// When the change was made.
    pub changed_at: DateTime<Utc>,
}

impl PolicyRecord {
    /// Create a record for a policy change made now.
    #[must_use]
    pub fn new(policy: ApprovalPolicy) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            policy,
            changed_at: Utc::now(),
        }
    }

    /// Serialize into a custom-entry payload.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Extract the policy from a persisted payload, tolerating junk.
#[must_use]
pub fn policy_from_payload(payload: &Value) -> Option<ApprovalPolicy> {
    serde_json::from_value(payload.get("policy")?.clone()).ok()
}

/// Scan a branch for the effective policy.
///
/// Entries arrive oldest first, so the last parseable policy record wins.
/// Returns `None` when the branch carries no policy record; malformed
/// payloads are skipped, not fatal.
#[must_use]
pub fn scan_branch(entries: &[HistoryEntry]) -> Option<ApprovalPolicy> {
    let mut found = None;
    for entry in entries {
        if let HistoryEntry::Custom {
            custom_type,
            payload,
        } = entry
        {
            if custom_type == POLICY_ENTRY_TYPE {
                if let Some(policy) = policy_from_payload(payload) {
                    found = Some(policy);
                }
            }
        }
    }
    found
}
