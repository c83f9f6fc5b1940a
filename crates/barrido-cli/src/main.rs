//! barrido - frequency-response tester for LADSPA plugins.
//!
//! Sweeps log-spaced sine tones through a plugin with external tools
//! (`sox`, `analyseplugin`, optionally a native processor), writes a
//! tab-delimited gain table, and renders the response curve.

use std::path::PathBuf;

use barrido_core::{PluginDescriptor, SweepConfig, frequency_ladder};
use barrido_tools::{MeasurementPipeline, SoxGenerator, SoxStat, select_processor};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

/// Directory plugin identifiers resolve into.
const PLUGIN_DIR: &str = "/usr/local/lib/ladspa";

#[derive(Parser)]
#[command(name = "barrido")]
#[command(author, version, about = "Measure a plugin's frequency response", long_about = None)]
struct Cli {
    /// Plugin name (without the .so extension)
    plugin: String,

    /// Plugin control values in declared port order; comma-joined
    /// tokens are split into individual values
    #[arg(short = 'p', long = "params", num_args = 0.., value_name = "VALUE")]
    params: Vec<String>,

    /// Output table path (default: <plugin>_response.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Minimum test frequency in Hz
    #[arg(long, default_value_t = 5.0, value_name = "HZ")]
    f_min: f64,

    /// Maximum test frequency in Hz
    #[arg(long, default_value_t = 50000.0, value_name = "HZ")]
    f_max: f64,

    /// Ladder steps per octave
    #[arg(long, default_value_t = 12, value_name = "N")]
    steps: u32,

    /// Base test-signal duration in seconds
    #[arg(long, default_value_t = 1.0, value_name = "SEC")]
    duration: f64,

    /// Y-axis minimum in dB (default: auto-scale with 10% headroom)
    #[arg(long, value_name = "DB")]
    y_min: Option<f64>,

    /// Y-axis maximum in dB (default: auto-scale with 10% headroom)
    #[arg(long, value_name = "DB")]
    y_max: Option<f64>,

    /// Skip rendering the response plot
    #[arg(long)]
    no_plot: bool,
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let plugin_path = PathBuf::from(PLUGIN_DIR).join(format!("{}.so", cli.plugin));
    if !plugin_path.exists() {
        anyhow::bail!("plugin not found: {}", plugin_path.display());
    }

    let config = SweepConfig {
        f_min: cli.f_min,
        f_max: cli.f_max,
        steps_per_octave: cli.steps,
        base_duration: cli.duration,
        parameter_values: split_param_tokens(&cli.params),
        ..SweepConfig::default()
    };
    config.validate()?;

    let descriptor = barrido_tools::analyze_plugin(&plugin_path)?;
    print_plugin_info(&descriptor, &config.parameter_values);

    let generator = SoxGenerator;
    let meter = SoxStat;
    let processor = select_processor(&descriptor, &plugin_path, &config.parameter_values);
    let pipeline =
        MeasurementPipeline::new(&generator, processor.as_ref(), &meter, &descriptor, &config);

    let ladder_len = frequency_ladder(config.f_min, config.f_max, config.steps_per_octave).len();

    println!("=== Frequency Response Sweep ===");
    let bar = ProgressBar::new(ladder_len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let table = barrido_tools::run_sweep(&pipeline, |index, frequency| {
        bar.set_position(index as u64);
        bar.set_message(format!("{frequency:.1} Hz"));
    });
    bar.set_position(ladder_len as u64);
    bar.finish_with_message("done");

    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}_response.txt", cli.plugin)));
    table.save(&output_path)?;
    println!("Wrote {} rows to {}", table.len(), output_path.display());

    if !cli.no_plot {
        let plot_path = output_path.with_extension("svg");
        match barrido_plot::render_response(
            &table,
            descriptor.display_name(),
            (cli.y_min, cli.y_max),
            &plot_path,
        ) {
            Ok(()) => println!("Saved plot to {}", plot_path.display()),
            Err(error) => {
                tracing::warn!(%error, "plot rendering failed; table output is unaffected");
            }
        }
    }

    Ok(())
}

/// Split comma-joined parameter tokens into individual values.
///
/// `-p 1,1,0` and `-p 1 1 0` are equivalent.
fn split_param_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|token| token.split(','))
        .map(str::to_string)
        .collect()
}

/// Banner describing the plugin and the values under test.
fn print_plugin_info(descriptor: &PluginDescriptor, params: &[String]) {
    println!("=== Plugin Analysis ===");
    println!("Plugin Name:  \"{}\"", descriptor.name);
    println!("Plugin Label: \"{}\"", descriptor.label);
    println!(
        "Audio Channels: {} input(s), {} output(s)",
        descriptor.num_inputs, descriptor.num_outputs
    );
    println!();

    if !params.is_empty() {
        println!("=== Testing Parameters ===");
        for (index, value) in params.iter().enumerate() {
            // values past the declared ports pass through unnamed
            if let Some(name) = descriptor.parameter_names.get(index) {
                println!("  {name} = {value}");
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_joined_tokens_are_split() {
        let tokens = vec!["1,1,0".to_string()];
        assert_eq!(split_param_tokens(&tokens), vec!["1", "1", "0"]);
    }

    #[test]
    fn separate_tokens_pass_through() {
        let tokens = vec!["6".to_string(), "0".to_string()];
        assert_eq!(split_param_tokens(&tokens), vec!["6", "0"]);
    }

    #[test]
    fn mixed_forms_combine_in_order() {
        let tokens = vec!["1,1".to_string(), "0".to_string(), "2,3".to_string()];
        assert_eq!(split_param_tokens(&tokens), vec!["1", "1", "0", "2", "3"]);
    }

    #[test]
    fn empty_params_stay_empty() {
        assert!(split_param_tokens(&[]).is_empty());
    }
}
