//! Measurement records and the tab-delimited result table.
//!
//! The on-disk format is one header row naming the channel columns,
//! then one row per ladder frequency:
//!
//! ```text
//! Frequency\tChannel_0\tChannel_1
//! 100.000\t-0.02\t-0.01
//! 200.000\t-0.05\t-0.04
//! ```
//!
//! Frequencies carry 3 decimal places, dB values 2. Row order is
//! ladder order and is never changed by the writer or reader.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// One measured ladder point.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// Test frequency in Hz.
    pub frequency: f64,
    /// One dB value per output channel, sentinel-filled on failure.
    pub channel_db: Vec<f64>,
}

/// Ordered measurement records for one sweep.
///
/// Append-only; every record carries exactly `num_channels` dB values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTable {
    num_channels: usize,
    records: Vec<MeasurementRecord>,
}

impl ResponseTable {
    /// Create an empty table with a fixed channel count.
    pub fn new(num_channels: usize) -> Self {
        Self {
            num_channels,
            records: Vec::new(),
        }
    }

    /// Channel count every record must match.
    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    /// Records in sweep order.
    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record.
    ///
    /// # Panics
    ///
    /// Panics when the record's channel count does not match the
    /// table's; a short vector here would corrupt the column layout.
    pub fn push(&mut self, record: MeasurementRecord) {
        assert_eq!(
            record.channel_db.len(),
            self.num_channels,
            "record channel count must match the table"
        );
        self.records.push(record);
    }

    /// Serialize the table as tab-delimited text.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        write!(writer, "Frequency")?;
        for ch in 0..self.num_channels {
            write!(writer, "\tChannel_{ch}")?;
        }
        writeln!(writer)?;

        for record in &self.records {
            write!(writer, "{:.3}", record.frequency)?;
            for db in &record.channel_db {
                write!(writer, "\t{db:.2}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Write the table to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    /// Parse a table previously produced by [`write_to`](Self::write_to).
    ///
    /// Lines that do not match the expected column layout are skipped.
    pub fn read_from(reader: impl BufRead) -> std::io::Result<Self> {
        let mut num_channels = 0;
        let mut records = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if line.starts_with("Frequency") {
                num_channels = fields.len().saturating_sub(1);
                continue;
            }

            let Ok(frequency) = fields[0].parse::<f64>() else {
                continue;
            };
            let channel_db: Vec<f64> = fields[1..]
                .iter()
                .filter_map(|f| f.parse().ok())
                .collect();
            if channel_db.len() != fields.len() - 1 {
                continue;
            }
            if num_channels == 0 {
                // headerless input; infer the layout from the first row
                num_channels = channel_db.len();
            }
            if channel_db.len() == num_channels {
                records.push(MeasurementRecord {
                    frequency,
                    channel_db,
                });
            }
        }

        Ok(Self {
            num_channels,
            records,
        })
    }

    /// Read a table from a file.
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        Self::read_from(BufReader::new(File::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> ResponseTable {
        let mut table = ResponseTable::new(2);
        table.push(MeasurementRecord {
            frequency: 100.0,
            channel_db: vec![-0.015, 3.01],
        });
        table.push(MeasurementRecord {
            frequency: 200.0,
            channel_db: vec![-200.0, -6.0],
        });
        table
    }

    #[test]
    fn writer_produces_the_documented_layout() {
        let mut buf = Vec::new();
        sample_table().write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Frequency\tChannel_0\tChannel_1\n\
             100.000\t-0.01\t3.01\n\
             200.000\t-200.00\t-6.00\n"
        );
    }

    #[test]
    fn round_trip_preserves_rows_to_written_precision() {
        let table = sample_table();
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();

        let parsed = ResponseTable::read_from(buf.as_slice()).unwrap();
        assert_eq!(parsed.num_channels(), 2);
        assert_eq!(parsed.len(), table.len());
        for (original, reread) in table.records().iter().zip(parsed.records()) {
            assert!((original.frequency - reread.frequency).abs() < 5e-4 + 1e-9);
            for (a, b) in original.channel_db.iter().zip(&reread.channel_db) {
                assert!((a - b).abs() < 5e-3 + 1e-9);
            }
        }
    }

    #[test]
    fn reader_skips_malformed_rows() {
        let text = "Frequency\tChannel_0\n100.000\t-1.00\nnot-a-row\n200.000\t-2.00\n";
        let parsed = ResponseTable::read_from(text.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.records()[1].frequency, 200.0);
    }

    #[test]
    #[should_panic]
    fn push_rejects_mismatched_channel_count() {
        let mut table = ResponseTable::new(2);
        table.push(MeasurementRecord {
            frequency: 100.0,
            channel_db: vec![0.0],
        });
    }

    #[test]
    fn empty_table_round_trips() {
        let table = ResponseTable::new(1);
        let mut buf = Vec::new();
        table.write_to(&mut buf).unwrap();
        let parsed = ResponseTable::read_from(buf.as_slice()).unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.num_channels(), 1);
    }
}
