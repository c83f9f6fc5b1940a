//! The per-frequency measurement pipeline.

use barrido_core::{PluginDescriptor, SweepConfig, db_from_rms, plan_window};

use crate::Result;
use crate::generate::{ToneGenerator, ToneRequest};
use crate::process::SignalProcessor;
use crate::stats::LevelMeter;

/// One frequency's measurement chain: adaptive window, tone
/// generation, processing, per-channel RMS metering, dB conversion.
///
/// Holds only borrows; nothing is shared across measurements except
/// the immutable configuration and descriptor. Temporary waveforms are
/// scoped to a single [`measure`](Self::measure) call and removed on
/// every exit path by their drop guards.
pub struct MeasurementPipeline<'a> {
    generator: &'a dyn ToneGenerator,
    processor: &'a dyn SignalProcessor,
    meter: &'a dyn LevelMeter,
    descriptor: &'a PluginDescriptor,
    config: &'a SweepConfig,
}

impl<'a> MeasurementPipeline<'a> {
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        generator: &'a dyn ToneGenerator,
        processor: &'a dyn SignalProcessor,
        meter: &'a dyn LevelMeter,
        descriptor: &'a PluginDescriptor,
        config: &'a SweepConfig,
    ) -> Self {
        Self {
            generator,
            processor,
            meter,
            descriptor,
            config,
        }
    }

    /// Descriptor of the effect under test.
    pub fn descriptor(&self) -> &PluginDescriptor {
        self.descriptor
    }

    /// Sweep configuration driving the ladder and windows.
    pub fn config(&self) -> &SweepConfig {
        self.config
    }

    /// Measure one frequency, returning one dB value per output
    /// channel.
    ///
    /// Any collaborator failure short-circuits; the sweep engine turns
    /// that into a sentinel record.
    pub fn measure(&self, frequency: f64) -> Result<Vec<f64>> {
        let window = plan_window(frequency, self.config);

        let tone = tempfile::Builder::new()
            .prefix("barrido-tone-")
            .suffix(".wav")
            .tempfile()?;
        let processed = tempfile::Builder::new()
            .prefix("barrido-out-")
            .suffix(".wav")
            .tempfile()?;

        let request = ToneRequest {
            frequency,
            channels: self.descriptor.num_inputs,
            window,
        };
        self.generator.generate(&request, tone.path())?;
        self.processor.process(tone.path(), processed.path())?;

        let mut channel_db = Vec::with_capacity(self.descriptor.num_outputs);
        for channel in 0..self.descriptor.num_outputs {
            let rms = self.meter.channel_rms(processed.path(), channel)?;
            channel_db.push(db_from_rms(rms));
        }

        tracing::debug!(
            frequency,
            duration = window.duration,
            ?channel_db,
            "measured ladder point"
        );
        Ok(channel_db)
    }
}
