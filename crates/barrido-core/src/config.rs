//! Immutable sweep configuration.

use crate::{Error, Result};

/// Parameters for one frequency-response sweep.
///
/// Constructed once from the command line and passed by reference into
/// the sweep engine and measurement pipeline; no field is mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Lowest test frequency in Hz.
    pub f_min: f64,
    /// Highest test frequency in Hz. A value below `f_min` yields an
    /// empty ladder, not an error.
    pub f_max: f64,
    /// Ladder density: each step multiplies the frequency by
    /// `2^(1/steps_per_octave)`.
    pub steps_per_octave: u32,
    /// Reference test-signal duration in seconds. The adaptive window
    /// scales the trim values relative to this.
    pub base_duration: f64,
    /// Settle region skipped at the start of the reference signal, in
    /// seconds.
    pub base_trim_start: f64,
    /// Measured region kept after the settle region, in seconds.
    pub base_trim_len: f64,
    /// Control values handed verbatim to the signal processor, in
    /// declared port order.
    pub parameter_values: Vec<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            f_min: 5.0,
            f_max: 50000.0,
            steps_per_octave: 12,
            base_duration: 1.0,
            base_trim_start: 0.2,
            base_trim_len: 0.6,
            parameter_values: Vec::new(),
        }
    }
}

impl SweepConfig {
    /// Reject configurations that cannot produce a meaningful sweep.
    ///
    /// Must run before any measurement starts; all failures here are
    /// fatal configuration errors.
    pub fn validate(&self) -> Result<()> {
        if self.steps_per_octave == 0 {
            return Err(Error::ZeroStepsPerOctave);
        }
        if self.f_min <= 0.0 {
            return Err(Error::NonPositiveFrequency(self.f_min));
        }
        if self.f_max <= 0.0 {
            return Err(Error::NonPositiveFrequency(self.f_max));
        }
        if self.base_duration <= 0.0 {
            return Err(Error::NonPositiveDuration(self.base_duration));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SweepConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_steps_per_octave_is_rejected() {
        let config = SweepConfig {
            steps_per_octave: 0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::ZeroStepsPerOctave)
        ));
    }

    #[test]
    fn non_positive_frequencies_are_rejected() {
        let config = SweepConfig {
            f_min: 0.0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositiveFrequency(_))
        ));

        let config = SweepConfig {
            f_max: -20.0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositiveFrequency(_))
        ));
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        let config = SweepConfig {
            base_duration: 0.0,
            ..SweepConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositiveDuration(_))
        ));
    }

    #[test]
    fn inverted_bounds_are_not_a_validation_error() {
        // An inverted range produces zero records downstream, which is
        // the documented behavior rather than a hard failure.
        let config = SweepConfig {
            f_min: 400.0,
            f_max: 100.0,
            ..SweepConfig::default()
        };
        config.validate().unwrap();
    }
}
