//! Plugin implementations: approval gate and uptime reporter.

pub mod gate;
pub mod policy;
pub mod summary;
pub mod uptime;

pub use gate::ApprovalGate;
pub use policy::{ApprovalPolicy, POLICY_ENTRY_TYPE, PolicyRecord, scan_branch};
pub use summary::{preview, summarize_tool_call};
pub use uptime::{UptimeReporter, format_hms};
