//! In-memory history branch for tests and the stdio bridge.

use crate::error::Result;
use crate::history::entry::HistoryEntry;
use crate::history::traits::HistoryStore;
use serde_json::Value;
use std::sync::RwLock;

/// In-memory branch store.
///
/// The bridge seeds it from the envelope's `history` field and reports
/// entries appended during dispatch back to the host; tests use it as the
/// history double.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: RwLock<Vec<HistoryEntry>>,
    appended: RwLock<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    /// Create an empty branch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a branch seeded with existing entries, oldest first.
    #[must_use]
    pub fn seeded(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            appended: RwLock::new(Vec::new()),
        }
    }

    /// Entries appended since construction, in append order.
    #[must_use]
    pub fn appended(&self) -> Vec<HistoryEntry> {
        self.appended.read().unwrap().clone()
    }
}

impl HistoryStore for MemoryHistory {
    fn branch(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.read().unwrap().clone())
    }

    fn append_custom(&self, custom_type: &str, payload: Value) -> Result<()> {
        let entry = HistoryEntry::custom(custom_type, payload);
        self.entries.write().unwrap().push(entry.clone());
        self.appended.write().unwrap().push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_branch() {
        let store = MemoryHistory::new();
        assert!(store.branch().unwrap().is_empty());
        assert!(store.appended().is_empty());
    }

    #[test]
    fn seeded_branch_preserves_order() {
        let store = MemoryHistory::seeded(vec![
            HistoryEntry::custom("a", json!(1)),
            HistoryEntry::custom("b", json!(2)),
        ]);
        let branch = store.branch().unwrap();
        assert_eq!(branch.len(), 2);
        assert_eq!(branch[0], HistoryEntry::custom("a", json!(1)));
        assert_eq!(branch[1], HistoryEntry::custom("b", json!(2)));
    }

    #[test]
    fn append_extends_branch_and_tracks_appended() {
        let store = MemoryHistory::seeded(vec![HistoryEntry::Other]);
        store
            .append_custom("gate-policy", json!({"policy": "allow-all"}))
            .unwrap();

        let branch = store.branch().unwrap();
        assert_eq!(branch.len(), 2);

        let appended = store.appended();
        assert_eq!(appended.len(), 1);
        assert_eq!(
            appended[0],
            HistoryEntry::custom("gate-policy", json!({"policy": "allow-all"}))
        );
    }
}
