//! Logarithmically spaced test-frequency ladder.

/// Build the ordered list of test frequencies for one sweep.
///
/// Starts at `f_min` and multiplies by `2^(1/steps_per_octave)` until
/// the next value would exceed `f_max`; the result is the largest
/// prefix of the geometric series with every element `<= f_max`.
/// Returns an empty ladder when `f_min > f_max`.
///
/// Callers must reject `steps_per_octave == 0` via
/// [`SweepConfig::validate`](crate::SweepConfig::validate) first; a
/// ratio of `2^(1/0)` would never terminate.
pub fn frequency_ladder(f_min: f64, f_max: f64, steps_per_octave: u32) -> Vec<f64> {
    debug_assert!(steps_per_octave > 0, "ladder with zero steps per octave");

    let ratio = 2f64.powf(1.0 / f64::from(steps_per_octave));
    let mut frequencies = Vec::new();
    let mut frequency = f_min;
    while frequency <= f_max {
        frequencies.push(frequency);
        frequency *= ratio;
    }
    frequencies
}
