//! Printing recorded device commands

use anyhow::{Context, Result};
use daub_paint::DrawCommand;
use std::fmt::Write;

use crate::config::OutputFormat;

pub fn format_commands(
    commands: &[DrawCommand],
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(commands)
            } else {
                serde_json::to_string(commands)
            };
            json.context("Failed to serialize commands")
        }
        OutputFormat::Text => Ok(format_text(commands)),
    }
}

/// One command per line, indented two spaces per open save
fn format_text(commands: &[DrawCommand]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for command in commands {
        if matches!(command, DrawCommand::Restore | DrawCommand::EndTransparencyLayer) {
            depth = depth.saturating_sub(1);
        }
        // Writing to a String cannot fail
        let _ = writeln!(out, "{:indent$}{command:?}", "", indent = depth * 2);
        if matches!(command, DrawCommand::Save | DrawCommand::BeginTransparencyLayer) {
            depth += 1;
        }
    }

    out
}
