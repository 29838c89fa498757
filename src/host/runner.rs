//! Event and command dispatch.

use crate::core::{ApprovalGate, UptimeReporter};
use crate::error::{Error, Result};
use crate::host::context::PluginContext;
use crate::host::event::EventEnvelope;
use crate::host::outcome::EventReply;
use serde::Serialize;
use serde_json::Value;

/// Events the plugins subscribe to.
pub const SUBSCRIBED_EVENTS: &[&str] = &[
    "session_start",
    "session_switch",
    "session_shutdown",
    "session_tree",
    "session_fork",
    "input",
    "tool_call",
];

/// A command registered with the host.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommandSpec {
    /// Command name the host surfaces.
    pub name: &'static str,

    /// One-line description shown in the host's command list.
    pub description: &'static str,
}

/// Commands the plugins register.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "approvals",
        description: "Switch between allowing all tools and approving each call",
    },
    CommandSpec {
        name: "uptime",
        description: "Show elapsed runtime since the agent started",
    },
];

/// Both plugin instances for one running process.
#[derive(Debug, Default)]
pub struct Plugins {
    /// Tool approval gate.
    pub gate: ApprovalGate,

    /// Uptime status reporter.
    pub uptime: UptimeReporter,
}

impl Plugins {
    /// Create fresh plugin instances, starting the uptime clock now.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Dispatch one host event to the plugins.
///
/// Unknown event names are logged and ignored (fail open), matching how
/// a host that grows new events should not break older plugins.
pub fn dispatch_event(
    name: &str,
    envelope: &EventEnvelope,
    plugins: &mut Plugins,
    ctx: &PluginContext<'_>,
) -> EventReply {
    let mut reply = EventReply::default();
    match name {
        "session_start" | "session_switch" => {
            plugins.gate.restore_from_branch(&envelope.session_id, ctx);
            plugins.uptime.start_display(ctx);
        }
        "session_tree" | "session_fork" => {
            plugins.gate.restore_from_branch(&envelope.session_id, ctx);
        }
        "session_shutdown" => plugins.uptime.stop_display(ctx),
        "input" => reply.action = Some(plugins.gate.on_input(&envelope.session_id, ctx)),
        "tool_call" => {
            let tool_name = envelope.tool_name.as_deref().unwrap_or("unknown");
            let tool_input = envelope.tool_input.clone().unwrap_or(Value::Null);
            reply.veto =
                plugins
                    .gate
                    .on_tool_call(&envelope.session_id, tool_name, &tool_input, ctx);
        }
        other => tracing::warn!("unknown event: {other}"),
    }
    reply
}

/// Dispatch one registered command invocation.
///
/// # Errors
///
/// Returns [`Error::UnknownCommand`] if no plugin registers the name.
pub fn dispatch_command(
    name: &str,
    envelope: &EventEnvelope,
    plugins: &mut Plugins,
    ctx: &PluginContext<'_>,
) -> Result<()> {
    match name {
        "approvals" => {
            plugins.gate.on_mode_command(&envelope.session_id, ctx);
            Ok(())
        }
        "uptime" => {
            plugins.uptime.on_report_command(ctx);
            Ok(())
        }
        other => Err(Error::UnknownCommand(other.to_string())),
    }
}
