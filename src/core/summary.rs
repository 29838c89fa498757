//! Human-readable tool-call summaries for confirmation prompts.

use serde_json::Value;

/// Known tool kinds and the single input field worth showing.
///
/// Anything not listed here renders its whole input as pretty JSON.
const KNOWN_TOOL_FIELDS: &[(&str, &str)] = &[
    ("bash", "command"),
    ("read", "path"),
    ("write", "path"),
    ("edit", "path"),
];

/// Maximum characters of summary shown in a confirmation body.
pub const SUMMARY_PREVIEW_MAX: usize = 600;

/// Designated input field for a known tool kind, if any.
#[must_use]
pub fn designated_field(tool_name: &str) -> Option<&'static str> {
    let name = tool_name.to_ascii_lowercase();
    KNOWN_TOOL_FIELDS
        .iter()
        .find(|&&(tool, _)| tool == name)
        .map(|&(_, field)| field)
}

/// Render the salient part of a tool call.
///
/// Known tools show their designated field (`command: ls`); a missing
/// field renders the `missing <field>` placeholder instead of failing;
/// unknown tools show the whole input as pretty-printed JSON.
#[must_use]
pub fn summarize_tool_call(tool_name: &str, tool_input: &Value) -> String {
    match designated_field(tool_name) {
        Some(field) => match tool_input.get(field) {
            Some(Value::String(text)) => format!("{field}: {text}"),
            Some(other) => format!("{field}: {other}"),
            None => format!("{field}: missing {field}"),
        },
        None => serde_json::to_string_pretty(tool_input)
            .unwrap_or_else(|_| tool_input.to_string()),
    }
}

/// Truncate long summaries for display.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}…")
    }
}
