//! RMS amplitude to calibrated dB conversion.

/// Sentinel for silent or failed measurements.
///
/// Far below any plausible real gain reading, so downstream consumers
/// can filter failures without a separate validity flag.
pub const SILENCE_DB: f64 = -200.0;

/// Convert an RMS amplitude to a dB gain figure.
///
/// The measurement chain is peak-referenced (0 dBFS = peak amplitude
/// 1.0) but a sine wave's RMS is `peak / sqrt(2)`, so `20*log10(sqrt(2))`
/// (about 3.01 dB) is added to report the gain relative to a full-scale
/// sine input. Non-positive (or non-finite) RMS maps to [`SILENCE_DB`].
pub fn db_from_rms(rms: f64) -> f64 {
    if rms > 0.0 {
        20.0 * rms.log10() + 20.0 * std::f64::consts::SQRT_2.log10()
    } else {
        SILENCE_DB
    }
}
