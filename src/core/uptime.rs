//! Session uptime status plugin.

use crate::host::context::PluginContext;
use crate::host::timer::TimerToken;
use crate::ui::{Severity, TextStyle};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Status-bar fragment key owned by the reporter.
pub const STATUS_KEY: &str = "uptime";

/// Refresh period for the status display.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Elapsed-runtime status reporter.
///
/// The start timestamp is captured once per process; switching sessions
/// restarts the display but never resets elapsed time.
#[derive(Debug)]
pub struct UptimeReporter {
    started_at: DateTime<Utc>,
    ticker: Option<TimerToken>,
}

impl UptimeReporter {
    /// Create a reporter starting the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self::with_started_at(Utc::now())
    }

    /// Create a reporter with an explicit start time, e.g. the host
    /// process start carried through the bridge envelope.
    #[must_use]
    pub fn with_started_at(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            ticker: None,
        }
    }

    /// When the clock started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Begin (or restart) the periodic display.
    pub fn start_display(&mut self, ctx: &PluginContext<'_>) {
        if let Some(token) = self.ticker.take() {
            ctx.scheduler.cancel(token);
        }
        self.render(ctx);
        self.ticker = Some(ctx.scheduler.set_interval(TICK_PERIOD));
    }

    /// One periodic refresh, driven by the host timer.
    pub fn on_tick(&mut self, ctx: &PluginContext<'_>) {
        self.render(ctx);
    }

    /// Stop the periodic display and clear the status fragment.
    pub fn stop_display(&mut self, ctx: &PluginContext<'_>) {
        if let Some(token) = self.ticker.take() {
            ctx.scheduler.cancel(token);
        }
        ctx.ui.set_status(STATUS_KEY, None);
    }

    /// Handle the explicit `uptime` command: one-shot report plus an
    /// immediate status refresh, independent of the timer cadence.
    pub fn on_report_command(&mut self, ctx: &PluginContext<'_>) {
        let elapsed = self.elapsed_text(Utc::now());
        ctx.ui.notify(Severity::Info, &format!("up {elapsed}"));
        self.render(ctx);
    }

    /// Elapsed time at `now`, formatted `HH:MM:SS`.
    #[must_use]
    pub fn elapsed_text(&self, now: DateTime<Utc>) -> String {
        format_hms(now.signed_duration_since(self.started_at).num_milliseconds())
    }

    fn render(&self, ctx: &PluginContext<'_>) {
        let text = format!("up {}", self.elapsed_text(Utc::now()));
        ctx.ui
            .set_status(STATUS_KEY, Some(ctx.ui.style(TextStyle::Dim, &text)));
    }
}

impl Default for UptimeReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format elapsed milliseconds as zero-padded `HH:MM:SS`.
///
/// Negative durations (clock skew) clamp to zero.
#[must_use]
pub fn format_hms(elapsed_ms: i64) -> String {
    let total_secs = elapsed_ms.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
