//! Session history contract.

use crate::error::Result;
use crate::history::entry::HistoryEntry;
use serde_json::Value;

/// Host-provided access to the active session branch.
///
/// Entries are ordered oldest first. The gate's last-write-wins policy
/// scan depends on this ordering; implementations must not reverse it.
pub trait HistoryStore: Send + Sync {
    /// Ordered entries on the active branch, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot read the branch.
    fn branch(&self) -> Result<Vec<HistoryEntry>>;

    /// Append a custom entry to the active branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot persist the entry.
    fn append_custom(&self, custom_type: &str, payload: Value) -> Result<()>;
}
