//! warden CLI - approval gate and uptime plugins for coding-agent hosts.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use warden::cli;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("WARDEN_GIT_HASH");
    const IS_RELEASE: &str = env!("WARDEN_IS_RELEASE");

    // Use a static to avoid repeated allocations
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "warden")]
#[command(author, version = version(), about = "Approval gate and uptime plugins for coding-agent hosts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// [Internal] Dispatch a host event (JSON stdin/stdout). Called by the host.
    Event {
        /// Event name (session_start, session_switch, session_shutdown,
        /// session_tree, session_fork, input, tool_call).
        name: String,
    },

    /// [Internal] Dispatch a registered command (JSON stdin/stdout).
    Command {
        /// Command name (approvals, uptime).
        name: String,
    },

    /// [Host] Print the registration manifest (events and commands).
    Manifest,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Event { name } => cli::event::run(&name),
        Commands::Command { name } => cli::command::run(&name),
        Commands::Manifest => cli::manifest::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("warden: error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Route diagnostics to stderr; stdout carries the bridge protocol.
fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
