//! Scripted UI surface for testing.

use crate::ui::traits::{Severity, TextStyle, Ui};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Scripted surface with queued confirmation answers and full recording.
///
/// Confirmation prompts consume queued answers in order and fall back to
/// "no" when the queue is empty, matching a user who dismisses dialogs.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    attached: bool,
    answers: Mutex<VecDeque<bool>>,
    confirms: Mutex<Vec<(String, String)>>,
    notices: Mutex<Vec<(Severity, String)>>,
    status: Mutex<HashMap<String, Option<String>>>,
}

impl ScriptedUi {
    /// Create a surface that reports an interactive frontend.
    #[must_use]
    pub fn attached() -> Self {
        Self {
            attached: true,
            ..Self::default()
        }
    }

    /// Create a surface with no interactive frontend.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirmation prompt.
    pub fn push_answer(&self, answer: bool) {
        self.answers.lock().unwrap().push_back(answer);
    }

    /// Prompts shown so far, as (title, body) pairs.
    #[must_use]
    pub fn confirms(&self) -> Vec<(String, String)> {
        self.confirms.lock().unwrap().clone()
    }

    /// Number of confirmation prompts shown so far.
    #[must_use]
    pub fn confirm_count(&self) -> usize {
        self.confirms.lock().unwrap().len()
    }

    /// Notifications shown so far.
    #[must_use]
    pub fn notices(&self) -> Vec<(Severity, String)> {
        self.notices.lock().unwrap().clone()
    }

    /// Last value set for a status key; `Some(None)` means cleared.
    #[must_use]
    pub fn status(&self, key: &str) -> Option<Option<String>> {
        self.status.lock().unwrap().get(key).cloned()
    }
}

impl Ui for ScriptedUi {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn confirm(&self, title: &str, body: &str) -> bool {
        self.confirms
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }

    fn notify(&self, level: Severity, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }

    fn set_status(&self, key: &str, text: Option<String>) {
        self.status.lock().unwrap().insert(key.to_string(), text);
    }

    fn style(&self, _style: TextStyle, text: &str) -> String {
        text.to_string()
    }
}
