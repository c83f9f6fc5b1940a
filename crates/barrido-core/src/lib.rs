//! Barrido Core - Data model and numerics for frequency-response sweeps
//!
//! This crate holds everything about a sweep that does not touch an
//! external tool:
//!
//! - [`descriptor`] - Introspected plugin metadata
//! - [`config`] - Immutable sweep configuration
//! - [`ladder`] - Logarithmically spaced test-frequency ladder
//! - [`window`] - Adaptive per-frequency measurement windows
//! - [`level`] - RMS amplitude to calibrated dB conversion
//! - [`table`] - Measurement records and the tab-delimited result table
//!
//! ## Example
//!
//! ```rust
//! use barrido_core::{SweepConfig, frequency_ladder, plan_window, db_from_rms};
//!
//! let config = SweepConfig {
//!     f_min: 100.0,
//!     f_max: 400.0,
//!     steps_per_octave: 1,
//!     ..SweepConfig::default()
//! };
//! config.validate().unwrap();
//!
//! let ladder = frequency_ladder(config.f_min, config.f_max, config.steps_per_octave);
//! assert_eq!(ladder.len(), 3); // 100, 200, 400
//!
//! let window = plan_window(ladder[0], &config);
//! assert_eq!(window.duration, 1.0);
//!
//! // A unity-gain sine at full peak amplitude reads 0 dB
//! assert!(db_from_rms(1.0 / 2f64.sqrt()).abs() < 1e-9);
//! ```

pub mod config;
pub mod descriptor;
pub mod ladder;
pub mod level;
pub mod table;
pub mod window;

pub use config::SweepConfig;
pub use descriptor::PluginDescriptor;
pub use ladder::frequency_ladder;
pub use level::{SILENCE_DB, db_from_rms};
pub use table::{MeasurementRecord, ResponseTable};
pub use window::{MeasurementWindow, plan_window};

/// Errors for sweep configuration validation.
///
/// All variants are fatal configuration errors and must be reported
/// before any measurement begins.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Steps per octave of zero would never advance the ladder.
    #[error("steps per octave must be positive")]
    ZeroStepsPerOctave,

    /// Sweep bounds must be positive frequencies.
    #[error("sweep frequency must be positive, got {0}")]
    NonPositiveFrequency(f64),

    /// The base duration scales the trim window and must be positive.
    #[error("base test duration must be positive, got {0}")]
    NonPositiveDuration(f64),
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
