//! Signal-path dispatch: native fast path or generic LADSPA chain.

use std::path::{Path, PathBuf};
use std::process::Command;

use barrido_core::PluginDescriptor;

use crate::{Error, Result};

/// Plugin label served by the dedicated native processor instead of
/// the generic LADSPA chain.
pub const NATIVE_LABEL: &str = "riaa";

/// Command name of the native processor.
const NATIVE_TOOL: &str = "riaa_process";

/// Runs one waveform through the effect under test.
///
/// The DSP itself is a black box; implementations only move audio from
/// `input` to `output`. Channel-count changes are plugin-dependent and
/// not validated here.
pub trait SignalProcessor {
    /// Process `input` into `output`.
    fn process(&self, input: &Path, output: &Path) -> Result<()>;
}

/// The dedicated native processor (`riaa_process in out <params...>`).
#[derive(Debug, Clone)]
pub struct NativeProcessor {
    params: Vec<String>,
}

impl NativeProcessor {
    /// Native processor with control values passed verbatim.
    pub fn new(params: &[String]) -> Self {
        Self {
            params: params.to_vec(),
        }
    }
}

impl SignalProcessor for NativeProcessor {
    fn process(&self, input: &Path, output: &Path) -> Result<()> {
        let result = Command::new(NATIVE_TOOL)
            .arg(input)
            .arg(output)
            .args(&self.params)
            .output()
            .map_err(|source| Error::Launch {
                tool: NATIVE_TOOL,
                source,
            })?;

        if !result.status.success() {
            return Err(Error::ToolFailed {
                tool: NATIVE_TOOL,
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// The generic effect chain (`sox in out ladspa <path> <label> <params...>`).
#[derive(Debug, Clone)]
pub struct LadspaProcessor {
    plugin_path: PathBuf,
    label: String,
    params: Vec<String>,
}

impl LadspaProcessor {
    /// Generic processor for a plugin file, label, and control values.
    pub fn new(plugin_path: &Path, label: &str, params: &[String]) -> Self {
        Self {
            plugin_path: plugin_path.to_path_buf(),
            label: label.to_string(),
            params: params.to_vec(),
        }
    }
}

impl SignalProcessor for LadspaProcessor {
    fn process(&self, input: &Path, output: &Path) -> Result<()> {
        let result = Command::new("sox")
            .arg(input)
            .arg(output)
            .arg("ladspa")
            .arg(&self.plugin_path)
            .arg(&self.label)
            .args(&self.params)
            .output()
            .map_err(|source| Error::Launch {
                tool: "sox",
                source,
            })?;

        if !result.status.success() {
            return Err(Error::ToolFailed {
                tool: "sox",
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Pick the processor for a descriptor, once per sweep.
///
/// A descriptor labeled [`NATIVE_LABEL`] gets the dedicated native
/// tool; everything else goes through the generic chain.
pub fn select_processor(
    descriptor: &PluginDescriptor,
    plugin_path: &Path,
    params: &[String],
) -> Box<dyn SignalProcessor> {
    if descriptor.label == NATIVE_LABEL {
        tracing::debug!("using native {NATIVE_TOOL} fast path");
        Box::new(NativeProcessor::new(params))
    } else {
        Box::new(LadspaProcessor::new(plugin_path, &descriptor.label, params))
    }
}
