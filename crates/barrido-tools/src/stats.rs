//! Per-channel RMS extraction.

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Measures the RMS amplitude of one channel of a waveform file.
pub trait LevelMeter {
    /// RMS amplitude of `channel` (0-based) in linear scale.
    ///
    /// A report without a usable RMS field is a 0.0 reading, not an
    /// error: the sweep records it as the silence sentinel.
    fn channel_rms(&self, wav: &Path, channel: usize) -> Result<f64>;
}

/// RMS measurement via `sox <wav> -n remix <ch+1> stat`.
///
/// `sox stat` prints its report to stderr; both streams are scanned
/// for the first `RMS ... amplitude:` field. The exit status is
/// ignored, matching the lenient contract above.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoxStat;

impl LevelMeter for SoxStat {
    fn channel_rms(&self, wav: &Path, channel: usize) -> Result<f64> {
        let output = Command::new("sox")
            .arg(wav)
            .arg("-n")
            .arg("remix")
            .arg((channel + 1).to_string())
            .arg("stat")
            .output()
            .map_err(|source| Error::Launch {
                tool: "sox",
                source,
            })?;

        let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stderr));

        let rms = parse_rms_amplitude(&report).unwrap_or_else(|| {
            tracing::debug!(channel, "no RMS amplitude field in stat report");
            0.0
        });
        Ok(rms)
    }
}

/// First `RMS ... amplitude:` value in a stat report, if any.
pub fn parse_rms_amplitude(report: &str) -> Option<f64> {
    for line in report.lines() {
        if !line.contains("RMS") {
            continue;
        }
        if let Some((_, rest)) = line.split_once("amplitude:") {
            return rest.split_whitespace().next()?.parse().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT_REPORT: &str = "\
Samples read:             28800
Length (seconds):      0.600000
Scaled by:         2147483647.0
Maximum amplitude:     0.999999
Minimum amplitude:    -0.999999
Midline amplitude:     0.000000
Mean    norm:          0.636618
Mean    amplitude:     0.000000
RMS     amplitude:     0.707106
Maximum delta:         0.092251
RMS     delta:         0.065274
";

    #[test]
    fn extracts_the_first_rms_amplitude() {
        let rms = parse_rms_amplitude(STAT_REPORT).unwrap();
        assert!((rms - 0.707106).abs() < 1e-12);
    }

    #[test]
    fn plain_amplitude_lines_are_not_rms() {
        // "Maximum amplitude" and "Mean amplitude" must not match.
        let report = "Maximum amplitude:  0.9\nMean    amplitude:  0.1\n";
        assert_eq!(parse_rms_amplitude(report), None);
    }

    #[test]
    fn missing_field_yields_none() {
        assert_eq!(parse_rms_amplitude("Samples read: 100\n"), None);
        assert_eq!(parse_rms_amplitude(""), None);
    }

    #[test]
    fn unparsable_value_yields_none() {
        assert_eq!(parse_rms_amplitude("RMS     amplitude:     garbage\n"), None);
    }
}
