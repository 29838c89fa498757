//! UI surface for environments with no interactive frontend.

use crate::host::outcome::{Notice, StatusUpdate};
use crate::ui::traits::{Severity, TextStyle, Ui};
use std::sync::RwLock;

/// Headless surface: never attached, never confirms.
///
/// Status updates and notifications are recorded so the stdio bridge can
/// hand them back to the host in the event response.
#[derive(Debug, Default)]
pub struct HeadlessUi {
    status: RwLock<Vec<StatusUpdate>>,
    notices: RwLock<Vec<Notice>>,
}

impl HeadlessUi {
    /// Create a headless surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status updates recorded during dispatch, one per key (last write
    /// wins).
    #[must_use]
    pub fn status_updates(&self) -> Vec<StatusUpdate> {
        let recorded = self.status.read().unwrap();
        let mut out: Vec<StatusUpdate> = Vec::new();
        for update in recorded.iter() {
            if let Some(existing) = out.iter_mut().find(|u| u.key == update.key) {
                *existing = update.clone();
            } else {
                out.push(update.clone());
            }
        }
        out
    }

    /// Notifications recorded during dispatch.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.read().unwrap().clone()
    }
}

impl Ui for HeadlessUi {
    fn is_attached(&self) -> bool {
        false
    }

    fn confirm(&self, _title: &str, _body: &str) -> bool {
        false
    }

    fn notify(&self, level: Severity, message: &str) {
        self.notices.write().unwrap().push(Notice {
            level,
            message: message.to_string(),
        });
    }

    fn set_status(&self, key: &str, text: Option<String>) {
        self.status.write().unwrap().push(StatusUpdate {
            key: key.to_string(),
            text,
        });
    }

    fn style(&self, _style: TextStyle, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_attached_never_confirms() {
        let ui = HeadlessUi::new();
        assert!(!ui.is_attached());
        assert!(!ui.confirm("Run bash?", "command: ls"));
    }

    #[test]
    fn records_notices() {
        let ui = HeadlessUi::new();
        ui.notify(Severity::Warning, "no interactive UI attached");

        let notices = ui.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, Severity::Warning);
        assert!(notices[0].message.contains("no interactive UI"));
    }

    #[test]
    fn status_updates_keep_last_write_per_key() {
        let ui = HeadlessUi::new();
        ui.set_status("uptime", Some("up 00:00:00".to_string()));
        ui.set_status("approvals", Some("approvals: allow-all".to_string()));
        ui.set_status("uptime", Some("up 00:00:01".to_string()));

        let updates = ui.status_updates();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].key, "uptime");
        assert_eq!(updates[0].text.as_deref(), Some("up 00:00:01"));
        assert_eq!(updates[1].key, "approvals");
    }

    #[test]
    fn cleared_status_is_reported_as_none() {
        let ui = HeadlessUi::new();
        ui.set_status("uptime", Some("up 00:00:00".to_string()));
        ui.set_status("uptime", None);

        let updates = ui.status_updates();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].text.is_none());
    }

    #[test]
    fn style_is_passthrough() {
        let ui = HeadlessUi::new();
        assert_eq!(ui.style(TextStyle::Dim, "command: ls"), "command: ls");
    }
}
