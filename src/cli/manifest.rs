//! `warden manifest` command implementation.

use crate::error::Result;
use crate::host::{COMMANDS, SUBSCRIBED_EVENTS};
use serde_json::json;

/// Print the registration descriptor the host uses to wire the plugins:
/// subscribed events and registered commands.
///
/// # Errors
///
/// Returns an error if the manifest cannot be serialized.
pub fn run() -> Result<()> {
    let manifest = json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "events": SUBSCRIBED_EVENTS,
        "commands": COMMANDS,
    });
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_shape() {
        let manifest = json!({
            "name": env!("CARGO_PKG_NAME"),
            "events": SUBSCRIBED_EVENTS,
            "commands": COMMANDS,
        });
        assert_eq!(manifest["name"], "warden");
        assert!(
            manifest["events"]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e == "tool_call")
        );
        assert!(
            manifest["commands"]
                .as_array()
                .unwrap()
                .iter()
                .any(|c| c["name"] == "approvals")
        );
    }
}
