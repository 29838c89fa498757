//! `warden command` command implementation.
//!
//! Dispatches a registered command (`approvals`, `uptime`) through the
//! same stdin/stdout bridge as events.

use crate::cli::event::{BridgeResponse, write_json};
use crate::config::{Config, load_config};
use crate::core::UptimeReporter;
use crate::error::Result;
use crate::history::MemoryHistory;
use crate::host::outcome::EventReply;
use crate::host::timer::RecordingScheduler;
use crate::host::{EventEnvelope, PluginContext, Plugins, dispatch_command};
use crate::ui::HeadlessUi;
use std::io::{self, Read};

/// Run a command dispatch over stdin/stdout.
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or the command is unknown.
pub fn run(command_name: &str) -> Result<()> {
    let mut input_str = String::new();
    io::stdin().read_to_string(&mut input_str)?;

    let envelope = match serde_json::from_str::<EventEnvelope>(&input_str) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("failed to parse command envelope: {e}");
            return write_json(&EventReply::default());
        }
    };

    let config = load_config().unwrap_or_default();
    let response = dispatch_bridge_command(command_name, &envelope, &config)?;
    write_json(&response)
}

/// Dispatch one command invocation against fresh plugin instances.
pub(crate) fn dispatch_bridge_command(
    command_name: &str,
    envelope: &EventEnvelope,
    config: &Config,
) -> Result<BridgeResponse> {
    let ui = HeadlessUi::new();
    let history = MemoryHistory::seeded(envelope.history.clone());
    let scheduler = RecordingScheduler::new();
    let ctx = PluginContext {
        ui: &ui,
        history: &history,
        scheduler: &scheduler,
        config,
    };

    let mut plugins = Plugins::new();
    if let Some(started_at) = envelope.started_at {
        plugins.uptime = UptimeReporter::with_started_at(started_at);
    }
    plugins.gate.restore_from_branch(&envelope.session_id, &ctx);

    dispatch_command(command_name, envelope, &mut plugins, &ctx)?;

    Ok(BridgeResponse {
        reply: EventReply::default(),
        append: history.appended(),
        status: ui.status_updates(),
        notices: ui.notices(),
    })
}
