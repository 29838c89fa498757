//! Tool approval gate plugin.

use crate::core::policy::{ApprovalPolicy, POLICY_ENTRY_TYPE, PolicyRecord, scan_branch};
use crate::core::summary::{SUMMARY_PREVIEW_MAX, preview, summarize_tool_call};
use crate::host::context::PluginContext;
use crate::host::outcome::{BlockDecision, InputAction};
use crate::ui::{Severity, TextStyle};
use glob::Pattern;
use serde_json::Value;
use std::collections::HashMap;

/// Status-bar fragment key owned by the gate.
pub const STATUS_KEY: &str = "approvals";

/// Reason used when confirmation is required but no UI can show it.
pub const NO_UI_REASON: &str =
    "tool call requires confirmation, but no interactive UI is attached";

/// Prompt shown for the binary policy choice.
const CHOICE_TITLE: &str = "Tool approvals";
const CHOICE_BODY: &str =
    "Allow the agent to run tools without asking? Choosing \"no\" asks before each call.";

/// Tool approval gate.
///
/// Policy is keyed by session id and looked up on every event, so several
/// loaded sessions never bleed into each other. The authoritative value
/// lives in session history as `gate-policy` custom entries; this map is
/// just the resolved cache for the branches currently in play.
#[derive(Debug, Default)]
pub struct ApprovalGate {
    policies: HashMap<String, ApprovalPolicy>,
}

impl ApprovalGate {
    /// Create a gate with no policies resolved yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved policy for a session, if any.
    #[must_use]
    pub fn policy(&self, session_id: &str) -> Option<ApprovalPolicy> {
        self.policies.get(session_id).copied()
    }

    /// Handle user input: make sure a policy exists before the turn runs.
    pub fn on_input(&mut self, session_id: &str, ctx: &PluginContext<'_>) -> InputAction {
        self.ensure_policy(session_id, ctx);
        InputAction::Continue
    }

    /// Gate one tool call. `None` permits the call.
    pub fn on_tool_call(
        &mut self,
        session_id: &str,
        tool_name: &str,
        tool_input: &Value,
        ctx: &PluginContext<'_>,
    ) -> Option<BlockDecision> {
        match self.ensure_policy(session_id, ctx) {
            ApprovalPolicy::AllowAll => None,
            ApprovalPolicy::ApproveAll => {
                if matches_auto_allow(tool_name, &ctx.config.gate.auto_allow) {
                    return None;
                }
                if !ctx.ui.is_attached() {
                    return Some(BlockDecision::new(NO_UI_REASON));
                }
                let summary = summarize_tool_call(tool_name, tool_input);
                let body = ctx
                    .ui
                    .style(TextStyle::Dim, &preview(&summary, SUMMARY_PREVIEW_MAX));
                if ctx.ui.confirm(&format!("Run {tool_name}?"), &body) {
                    None
                } else {
                    Some(BlockDecision::new(&format!("user declined {tool_name}")))
                }
            }
        }
    }

    /// Handle the explicit `approvals` command.
    ///
    /// Always re-prompts, even when a policy is already set.
    pub fn on_mode_command(&mut self, session_id: &str, ctx: &PluginContext<'_>) {
        if !ctx.ui.is_attached() {
            ctx.ui.notify(
                Severity::Warning,
                "no interactive UI attached; approval mode unchanged",
            );
            return;
        }
        let policy = if ctx.ui.confirm(CHOICE_TITLE, CHOICE_BODY) {
            ApprovalPolicy::AllowAll
        } else {
            ApprovalPolicy::ApproveAll
        };
        self.set_policy(session_id, policy, ctx);
        ctx.ui
            .notify(Severity::Info, &format!("tool approvals: {policy}"));
    }

    /// Recompute the session policy from the active branch.
    ///
    /// The last parseable policy record wins; a branch with no record
    /// clears the in-memory value so the next interaction resolves it
    /// afresh. The status display is refreshed either way.
    pub fn restore_from_branch(&mut self, session_id: &str, ctx: &PluginContext<'_>) {
        match ctx.history.branch() {
            Ok(entries) => match scan_branch(&entries) {
                Some(policy) => {
                    self.policies.insert(session_id.to_string(), policy);
                }
                None => {
                    self.policies.remove(session_id);
                }
            },
            Err(e) => tracing::warn!("failed to read branch while restoring policy: {e}"),
        }
        self.render_status(session_id, ctx);
    }

    /// Resolve the session policy, prompting or falling back as needed.
    fn ensure_policy(&mut self, session_id: &str, ctx: &PluginContext<'_>) -> ApprovalPolicy {
        if let Some(policy) = self.policies.get(session_id) {
            let policy = *policy;
            self.render_status(session_id, ctx);
            return policy;
        }
        let policy = if ctx.ui.is_attached() {
            if ctx.ui.confirm(CHOICE_TITLE, CHOICE_BODY) {
                ApprovalPolicy::AllowAll
            } else {
                ApprovalPolicy::ApproveAll
            }
        } else {
            // Fail-safe: without a user to ask, require confirmation.
            ApprovalPolicy::ApproveAll
        };
        self.set_policy(session_id, policy, ctx);
        policy
    }

    /// Set, persist, and display a policy.
    fn set_policy(&mut self, session_id: &str, policy: ApprovalPolicy, ctx: &PluginContext<'_>) {
        self.policies.insert(session_id.to_string(), policy);
        let record = PolicyRecord::new(policy);
        if let Err(e) = ctx.history.append_custom(POLICY_ENTRY_TYPE, record.to_payload()) {
            tracing::warn!("failed to persist approval policy: {e}");
        }
        self.render_status(session_id, ctx);
    }

    /// Render the status fragment for the session's current policy.
    fn render_status(&self, session_id: &str, ctx: &PluginContext<'_>) {
        let text = self
            .policies
            .get(session_id)
            .map(|policy| ctx.ui.style(TextStyle::Dim, &format!("approvals: {policy}")));
        ctx.ui.set_status(STATUS_KEY, text);
    }
}

/// Check a tool name against configured auto-allow patterns.
fn matches_auto_allow(tool_name: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| match Pattern::new(p) {
        Ok(pattern) => pattern.matches(tool_name),
        // Fall back to a prefix match when the pattern does not parse.
        Err(_) => tool_name.starts_with(p.trim_end_matches('*')),
    })
}
