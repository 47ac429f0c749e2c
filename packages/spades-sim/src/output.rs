//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use spades::AppError;

use crate::metrics::MatchMetrics;
use crate::types::OutputFormat;

pub struct OutputWriter {
    writer: BufWriter<File>,
    format: OutputFormat,
    path: PathBuf,
    /// Matches held back for a single JSON array in `Json` format.
    pending: Vec<MatchMetrics>,
}

impl OutputWriter {
    /// Create `simulation_<run seed>.<ext>` under `output_dir`.
    pub fn new(output_dir: &str, format: OutputFormat, run_seed: u64) -> Result<Self, AppError> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let ext = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let path = dir.join(format!("simulation_{run_seed:016x}.{ext}"));
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            format,
            path,
            pending: Vec::new(),
        })
    }

    pub fn write_match(&mut self, metrics: &MatchMetrics) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(metrics)?;
                writeln!(self.writer, "{json}")?;
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }
        Ok(())
    }

    /// Flush everything and return the file written.
    pub fn finish(mut self) -> Result<PathBuf, AppError> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.writer, &self.pending)?;
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(self.path)
    }
}
