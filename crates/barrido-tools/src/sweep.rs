//! The sweep engine: ladder times pipeline.

use barrido_core::{MeasurementRecord, ResponseTable, SILENCE_DB, frequency_ladder};

use crate::pipeline::MeasurementPipeline;

/// Sweep every ladder frequency through the pipeline, in ascending
/// order, strictly sequentially.
///
/// A failed measurement becomes a record with every channel at the
/// silence sentinel; the sweep never aborts on a single frequency and
/// performs no retries. `progress` is called with the point index and
/// frequency before each measurement.
pub fn run_sweep(
    pipeline: &MeasurementPipeline<'_>,
    mut progress: impl FnMut(usize, f64),
) -> ResponseTable {
    let config = pipeline.config();
    let num_outputs = pipeline.descriptor().num_outputs;
    let ladder = frequency_ladder(config.f_min, config.f_max, config.steps_per_octave);

    let mut table = ResponseTable::new(num_outputs);
    for (index, frequency) in ladder.into_iter().enumerate() {
        progress(index, frequency);
        let channel_db = match pipeline.measure(frequency) {
            Ok(values) => values,
            Err(error) => {
                tracing::warn!(frequency, %error, "measurement failed, recording sentinel");
                vec![SILENCE_DB; num_outputs]
            }
        };
        table.push(MeasurementRecord {
            frequency,
            channel_db,
        });
    }
    table
}
