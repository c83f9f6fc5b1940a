//! Adaptive per-frequency measurement windows.
//!
//! A fixed signal duration either wastes most of a long low-frequency
//! capture or overruns a short high-frequency one. Each ladder point
//! instead gets a duration guaranteeing at least [`MIN_CYCLES`] full
//! cycles, floored at 1 second and capped at 10, and a trim window that
//! scales with it so the same relative fraction of the signal is
//! skipped and kept at every frequency.

use crate::SweepConfig;

/// Minimum number of full cycles a measurement must capture.
pub const MIN_CYCLES: f64 = 100.0;

/// Shortest adaptive duration in seconds.
pub const MIN_DURATION: f64 = 1.0;

/// Longest adaptive duration in seconds, bounding sweep runtime at low
/// frequencies.
pub const MAX_DURATION: f64 = 10.0;

/// Signal timing for one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementWindow {
    /// Total generated signal duration in seconds.
    pub duration: f64,
    /// Seconds skipped at the start (edge transients and settling).
    pub trim_start: f64,
    /// Seconds kept after `trim_start` for the actual measurement.
    pub trim_len: f64,
}

/// Derive the measurement window for one ladder frequency.
pub fn plan_window(frequency: f64, config: &SweepConfig) -> MeasurementWindow {
    let cycle_duration = 1.0 / frequency;
    let duration = (MIN_CYCLES * cycle_duration).clamp(MIN_DURATION, MAX_DURATION);

    let scale = duration / config.base_duration;
    MeasurementWindow {
        duration,
        trim_start: config.base_trim_start * scale,
        trim_len: config.base_trim_len * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_frequency_hits_the_one_second_floor() {
        // 100 cycles at 1 kHz is 0.1 s, below the floor.
        let w = plan_window(1000.0, &SweepConfig::default());
        assert_eq!(w.duration, 1.0);
    }

    #[test]
    fn low_frequency_hits_the_ten_second_cap() {
        // 100 cycles at 0.1 Hz would take 1000 s.
        let w = plan_window(0.1, &SweepConfig::default());
        assert_eq!(w.duration, 10.0);
    }

    #[test]
    fn mid_band_scales_with_cycle_count() {
        // 100 cycles at 50 Hz is exactly 2 s.
        let w = plan_window(50.0, &SweepConfig::default());
        assert_eq!(w.duration, 2.0);
    }

    #[test]
    fn trim_window_scales_proportionally() {
        let config = SweepConfig::default();
        let w = plan_window(50.0, &config);
        // duration doubled relative to base_duration, so both trims double.
        assert!((w.trim_start - 0.4).abs() < 1e-12);
        assert!((w.trim_len - 1.2).abs() < 1e-12);
    }

    #[test]
    fn trim_window_fits_inside_the_signal() {
        for &f in &[0.1, 5.0, 50.0, 440.0, 20000.0] {
            let w = plan_window(f, &SweepConfig::default());
            assert!(w.trim_start + w.trim_len <= w.duration + 1e-9);
        }
    }
}
