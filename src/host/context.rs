//! Capability bundle handed to plugin handlers.

use crate::config::Config;
use crate::history::HistoryStore;
use crate::host::timer::Scheduler;
use crate::ui::Ui;

/// Host capabilities available to a handler for the duration of one event.
pub struct PluginContext<'a> {
    /// Interactive surface.
    pub ui: &'a dyn Ui,

    /// Active-branch history access.
    pub history: &'a dyn HistoryStore,

    /// Recurring-timer facility.
    pub scheduler: &'a dyn Scheduler,

    /// Plugin configuration.
    pub config: &'a Config,
}
