//! Host-facing contracts: event envelope, handler outcomes, dispatch,
//! and the recurring-timer facility.

pub mod context;
pub mod event;
pub mod outcome;
pub mod runner;
pub mod timer;

pub use context::PluginContext;
pub use event::EventEnvelope;
pub use outcome::{BlockDecision, EventReply, InputAction, Notice, StatusUpdate};
pub use runner::{
    COMMANDS, CommandSpec, Plugins, SUBSCRIBED_EVENTS, dispatch_command, dispatch_event,
};
pub use timer::{RecordingScheduler, Scheduler, TimerToken};
