//! External-tool layer for the barrido response tester.
//!
//! Everything here talks to the outside world or drives code that
//! does:
//!
//! - [`introspect`] - plugin analysis via `analyseplugin`
//! - [`generate`] - test-tone synthesis via `sox synth`
//! - [`process`] - the signal path: generic `sox ladspa` chain or the
//!   dedicated native processor
//! - [`stats`] - per-channel RMS extraction via `sox stat`
//! - [`pipeline`] - one frequency: generate, process, meter, convert
//! - [`sweep`] - the ladder loop, degrading per-frequency failures to
//!   sentinel records
//!
//! The pipeline is written against the [`ToneGenerator`],
//! [`SignalProcessor`], and [`LevelMeter`] traits; the `Sox*` types are
//! the production implementations, and tests substitute in-process
//! fakes. All tool invocations are synchronous and blocking with no
//! timeout: one tool's output file feeds the next.

pub mod generate;
pub mod introspect;
pub mod pipeline;
pub mod process;
pub mod stats;
pub mod sweep;

pub use generate::{SoxGenerator, ToneGenerator, ToneRequest};
pub use introspect::{analyze_plugin, parse_analysis_report};
pub use pipeline::MeasurementPipeline;
pub use process::{LadspaProcessor, NativeProcessor, SignalProcessor, select_processor};
pub use stats::{LevelMeter, SoxStat};
pub use sweep::run_sweep;

/// Error types for external-tool invocations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tool could not be launched at all (usually: not installed).
    #[error("failed to launch {tool}: {source}")]
    Launch {
        /// Name of the command that failed to start.
        tool: &'static str,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// A tool ran but exited unsuccessfully.
    #[error("{tool} failed ({status}): {stderr}")]
    ToolFailed {
        /// Name of the failing command.
        tool: &'static str,
        /// Exit status reported by the OS.
        status: std::process::ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The generator exited cleanly but produced no audio.
    #[error("generated tone is empty")]
    EmptyTone,

    /// WAV file read error while validating a tool's output.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error (temp files, file copies).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for tool operations.
pub type Result<T> = std::result::Result<T, Error>;
