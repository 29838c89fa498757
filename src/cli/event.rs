//! `warden event` command implementation.
//!
//! The bridge for hook-style hosts: one JSON envelope on stdin, one JSON
//! response on stdout. Each invocation is a fresh process, so the gate is
//! rehydrated from the envelope's branch before interaction events, and
//! side effects (appends, status updates, notices) are handed back to the
//! host instead of applied in place.

use crate::config::{Config, load_config};
use crate::core::UptimeReporter;
use crate::error::Result;
use crate::history::{HistoryEntry, MemoryHistory};
use crate::host::outcome::{EventReply, Notice, StatusUpdate};
use crate::host::timer::RecordingScheduler;
use crate::host::{EventEnvelope, PluginContext, Plugins, dispatch_event};
use crate::ui::HeadlessUi;
use serde::Serialize;
use std::io::{self, Read, Write};

/// Full bridge response: handler instruction plus recorded side effects.
#[derive(Debug, Serialize)]
pub(crate) struct BridgeResponse {
    /// Instruction for the host (`action`, `block`/`reason`, or nothing).
    #[serde(flatten)]
    pub(crate) reply: EventReply,

    /// Custom entries the host should append to the active branch.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) append: Vec<HistoryEntry>,

    /// Status fragment updates, last write per key.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) status: Vec<StatusUpdate>,

    /// Notifications to surface.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) notices: Vec<Notice>,
}

/// Run an event dispatch over stdin/stdout.
///
/// Envelope parse failures fail open with an empty reply so a host bug
/// never wedges the session.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub fn run(event_name: &str) -> Result<()> {
    let mut input_str = String::new();
    io::stdin().read_to_string(&mut input_str)?;

    let envelope = match serde_json::from_str::<EventEnvelope>(&input_str) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("failed to parse event envelope: {e}");
            return write_json(&EventReply::default());
        }
    };

    let config = load_config().unwrap_or_default();
    let response = dispatch_bridge_event(event_name, &envelope, &config);
    write_json(&response)
}

/// Dispatch one envelope against fresh plugin instances.
pub(crate) fn dispatch_bridge_event(
    event_name: &str,
    envelope: &EventEnvelope,
    config: &Config,
) -> BridgeResponse {
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

    // Fresh process per invocation: lifecycle events restore on their own,
    // interaction events need the branch replayed first.
    if matches!(event_name, "input" | "tool_call") {
        plugins.gate.restore_from_branch(&envelope.session_id, &ctx);
    }

    let reply = dispatch_event(event_name, envelope, &mut plugins, &ctx);

    BridgeResponse {
        reply,
        append: history.appended(),
        status: ui.status_updates(),
        notices: ui.notices(),
    }
}

/// Write a serializable value as JSON to stdout.
pub(crate) fn write_json<T: Serialize>(output: &T) -> Result<()> {
    let json = serde_json::to_string(output)?;
    io::stdout().write_all(json.as_bytes())?;
    io::stdout().write_all(b"\n")?;
    Ok(())
}
