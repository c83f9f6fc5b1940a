//! Plugin introspection via `analyseplugin`.
//!
//! The analyzer prints a free-form textual report; this module is the
//! only place that understands its layout. Everything downstream works
//! with the structured [`PluginDescriptor`].

use barrido_core::PluginDescriptor;
use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Run `analyseplugin` on a plugin file and parse its report.
///
/// A failing analyzer is fatal: the sweep is meaningless without a
/// descriptor.
pub fn analyze_plugin(plugin_path: &Path) -> Result<PluginDescriptor> {
    let output = Command::new("analyseplugin")
        .arg(plugin_path)
        .output()
        .map_err(|source| Error::Launch {
            tool: "analyseplugin",
            source,
        })?;

    if !output.status.success() {
        return Err(Error::ToolFailed {
            tool: "analyseplugin",
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(parse_analysis_report(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse an analyzer report into a descriptor.
///
/// Recognized fields:
/// - a `Plugin Name:` line (quoted or colon-delimited value)
/// - a `Plugin Label:` line (same forms)
/// - repeated port lines containing `input, audio` / `output, audio`
/// - `input, control` lines whose quoted string is the parameter name
///
/// Port counts come from counting matching lines, not from a count
/// field. A direction with zero audio ports falls back to 1 so a
/// report in an unexpected layout still yields a usable descriptor,
/// but loudly: the substitution is logged as a warning.
pub fn parse_analysis_report(report: &str) -> PluginDescriptor {
    let mut name = String::new();
    let mut label = String::new();
    let mut parameter_names = Vec::new();

    for line in report.lines() {
        if line.contains("Plugin Name:") {
            name = quoted_or_trailing(line);
        } else if line.contains("Plugin Label:") {
            label = quoted_or_trailing(line);
        } else if line.contains("input, control")
            && let Some(param) = quoted(line)
        {
            parameter_names.push(param.to_string());
        }
    }

    let mut num_inputs = report.matches("input, audio").count();
    let mut num_outputs = report.matches("output, audio").count();
    if num_inputs == 0 {
        tracing::warn!("report lists no audio input ports, assuming 1");
        num_inputs = 1;
    }
    if num_outputs == 0 {
        tracing::warn!("report lists no audio output ports, assuming 1");
        num_outputs = 1;
    }

    PluginDescriptor {
        name,
        label,
        num_inputs,
        num_outputs,
        parameter_names,
    }
}

/// First double-quoted substring of a line, if any.
fn quoted(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let len = line[start..].find('"')?;
    Some(&line[start..start + len])
}

/// Quoted value if present, otherwise everything after the last colon.
fn quoted_or_trailing(line: &str) -> String {
    if let Some(value) = quoted(line) {
        return value.to_string();
    }
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}
