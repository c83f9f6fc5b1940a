//! Response-curve rendering.
//!
//! Draws one line per output channel on a log-frequency x-axis and a
//! linear dB y-axis, written as an SVG next to the result table.
//! Rendering is strictly best-effort: callers treat any [`Error`] as a
//! soft failure and keep the table output.

use std::path::Path;

use barrido_core::{ResponseTable, SILENCE_DB};
use plotters::prelude::*;

/// Rendering failure.
///
/// Backend errors are carried as text; the caller only ever logs them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is nothing to draw.
    #[error("response table has no records")]
    EmptyTable,

    /// The plotting backend failed.
    #[error("render failed: {0}")]
    Render(String),
}

/// Line colors, cycled for plugins with more than eight outputs.
const CHANNEL_COLORS: [RGBColor; 8] = [
    BLUE,
    RED,
    GREEN,
    RGBColor(255, 165, 0), // orange
    RGBColor(128, 0, 128), // purple
    RGBColor(165, 42, 42), // brown
    MAGENTA,
    RGBColor(128, 128, 128), // gray
];

/// Render a response table to `dest`.
///
/// Y-axis bounds: an explicit `(Some, Some)` pair wins; otherwise the
/// range auto-scales over the non-sentinel data with 10% headroom per
/// side, widening to a fixed 1 dB margin when the data is flat.
pub fn render_response(
    table: &ResponseTable,
    title: &str,
    y_bounds: (Option<f64>, Option<f64>),
    dest: &Path,
) -> Result<(), Error> {
    if table.is_empty() {
        return Err(Error::EmptyTable);
    }

    let records = table.records();
    let x_min = records[0].frequency;
    let x_max = records[records.len() - 1].frequency;
    // a single-point table still needs a non-degenerate axis
    let (x_min, x_max) = if x_min < x_max {
        (x_min, x_max)
    } else {
        (x_min * 0.5, x_max * 2.0)
    };

    let (y_min, y_max) = y_range(table, y_bounds);

    let root = SVGBackend::new(dest, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Frequency Response: {title}"), ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Gain (dB)")
        .draw()
        .map_err(render_err)?;

    for channel in 0..table.num_channels() {
        let color = CHANNEL_COLORS[channel % CHANNEL_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                records.iter().map(|r| (r.frequency, r.channel_db[channel])),
                &color,
            ))
            .map_err(render_err)?
            .label(format!("Channel {channel}"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

fn render_err(error: impl std::fmt::Display) -> Error {
    Error::Render(error.to_string())
}

/// Y-axis range selection.
fn y_range(table: &ResponseTable, bounds: (Option<f64>, Option<f64>)) -> (f64, f64) {
    if let (Some(lo), Some(hi)) = bounds {
        return (lo, hi);
    }

    let mut data_min = f64::INFINITY;
    let mut data_max = f64::NEG_INFINITY;
    for record in table.records() {
        for &db in &record.channel_db {
            if db > SILENCE_DB {
                data_min = data_min.min(db);
                data_max = data_max.max(db);
            }
        }
    }

    let (mut lo, mut hi) = if data_min > data_max {
        // nothing but sentinels; any fixed window works
        (-1.0, 1.0)
    } else {
        let span = data_max - data_min;
        if span > 0.0 {
            (data_min - 0.1 * span, data_max + 0.1 * span)
        } else {
            (data_min - 1.0, data_max + 1.0)
        }
    };

    if let Some(explicit) = bounds.0 {
        lo = explicit;
    }
    if let Some(explicit) = bounds.1 {
        hi = explicit;
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrido_core::MeasurementRecord;

    fn table_with(values: &[(f64, f64)]) -> ResponseTable {
        let mut table = ResponseTable::new(1);
        for &(frequency, db) in values {
            table.push(MeasurementRecord {
                frequency,
                channel_db: vec![db],
            });
        }
        table
    }

    #[test]
    fn explicit_bounds_win() {
        let table = table_with(&[(100.0, -3.0), (200.0, 9.0)]);
        assert_eq!(
            y_range(&table, (Some(-24.0), Some(24.0))),
            (-24.0, 24.0)
        );
    }

    #[test]
    fn auto_scale_adds_ten_percent_headroom() {
        let table = table_with(&[(100.0, 0.0), (200.0, 10.0)]);
        let (lo, hi) = y_range(&table, (None, None));
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn sentinels_are_excluded_from_auto_scale() {
        let table = table_with(&[(100.0, SILENCE_DB), (200.0, 2.0), (400.0, 4.0)]);
        let (lo, hi) = y_range(&table, (None, None));
        assert!(lo > SILENCE_DB);
        assert!((lo - 1.8).abs() < 1e-12);
        assert!((hi - 4.2).abs() < 1e-12);
    }

    #[test]
    fn flat_data_widens_by_one_db() {
        let table = table_with(&[(100.0, 3.0), (200.0, 3.0)]);
        assert_eq!(y_range(&table, (None, None)), (2.0, 4.0));
    }

    #[test]
    fn single_explicit_bound_overrides_one_side() {
        let table = table_with(&[(100.0, 0.0), (200.0, 10.0)]);
        let (lo, hi) = y_range(&table, (Some(-30.0), None));
        assert_eq!(lo, -30.0);
        assert!((hi - 11.0).abs() < 1e-12);
    }

    #[test]
    fn all_sentinel_data_uses_the_fixed_window() {
        let table = table_with(&[(100.0, SILENCE_DB), (200.0, SILENCE_DB)]);
        assert_eq!(y_range(&table, (None, None)), (-1.0, 1.0));
    }

    #[test]
    fn empty_table_is_an_error() {
        let table = ResponseTable::new(1);
        let dir = tempfile::tempdir().unwrap();
        let err = render_response(&table, "x", (None, None), &dir.path().join("x.svg"));
        assert!(matches!(err, Err(Error::EmptyTable)));
    }

    #[test]
    fn renders_a_two_channel_curve() {
        let mut table = ResponseTable::new(2);
        for &f in &[100.0, 200.0, 400.0, 800.0] {
            table.push(MeasurementRecord {
                frequency: f,
                channel_db: vec![-3.0, SILENCE_DB],
            });
        }

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("response.svg");
        render_response(&table, "Test Plugin", (None, None), &dest).unwrap();

        let svg = std::fs::read_to_string(&dest).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Frequency Response: Test Plugin"));
    }
}
