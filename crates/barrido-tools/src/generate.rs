//! Test-tone generation.

use std::path::Path;
use std::process::Command;

use barrido_core::window::MeasurementWindow;

use crate::{Error, Result};

/// One tone to synthesize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Sine frequency in Hz.
    pub frequency: f64,
    /// Channel count of the produced waveform (the plugin's audio
    /// input count).
    pub channels: usize,
    /// Duration and trim window to keep.
    pub window: MeasurementWindow,
}

/// Produces a PCM waveform file for a [`ToneRequest`].
///
/// The synthesis algorithm is a collaborator detail; the pipeline only
/// relies on `dest` holding a non-empty waveform with the requested
/// channel layout afterwards.
pub trait ToneGenerator {
    /// Write the requested tone to `dest`.
    fn generate(&self, request: &ToneRequest, dest: &Path) -> Result<()>;
}

/// Tone generation via `sox synth`.
///
/// Invokes `sox -n <dest> synth <dur> sine <freq> channels <n>
/// trim <start> <len>` and validates the artifact by reading its WAV
/// header: a clean exit with an empty file still counts as a generator
/// failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoxGenerator;

impl ToneGenerator for SoxGenerator {
    fn generate(&self, request: &ToneRequest, dest: &Path) -> Result<()> {
        let output = Command::new("sox")
            .arg("-n")
            .arg(dest)
            .arg("synth")
            .arg(request.window.duration.to_string())
            .arg("sine")
            .arg(request.frequency.to_string())
            .arg("channels")
            .arg(request.channels.to_string())
            .arg("trim")
            .arg(request.window.trim_start.to_string())
            .arg(request.window.trim_len.to_string())
            .output()
            .map_err(|source| Error::Launch {
                tool: "sox",
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                tool: "sox",
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let reader = hound::WavReader::open(dest)?;
        if reader.len() == 0 {
            return Err(Error::EmptyTone);
        }
        Ok(())
    }
}
