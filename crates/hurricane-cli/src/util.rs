use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use hurricane_data::{damage::NormalizeMode, dataset, record::RecordSet};
use serde::Serialize;

/// Report destination: a file when a path is given, stdout otherwise
pub struct Output {
    writer: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl Output {
    pub fn from_output_path(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = match &path {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };
        Ok(Self { writer, path })
    }

    fn display_path(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "stdout".to_owned(), |path| path.display().to_string())
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer_pretty(&mut self.writer, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        self.write_text("\n")
    }

    pub fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        let written = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush());
        written.with_context(|| format!("Failed to write report to {}", self.display_path()))?;
        if let Some(path) = &self.path {
            tracing::info!(path = %path.display(), "report written");
        }
        Ok(())
    }
}

/// Load the dataset columns and build the record set
///
/// # Arguments
///
/// * `path` - JSON dataset to load; the built-in Atlantic dataset when `None`
/// * `mode` - How unsuffixed damage figures are treated
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed, the columns have
/// different lengths, or a damage figure is rejected
pub fn load_records(path: Option<&Path>, mode: NormalizeMode) -> anyhow::Result<RecordSet> {
    let columns = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            dataset::load_json(path)?
        }
        None => {
            tracing::debug!("using built-in Atlantic Category 5 dataset");
            dataset::atlantic_category5()
        }
    };

    for name in columns.duplicate_names() {
        tracing::warn!(
            hurricane = name,
            "duplicate hurricane name, later record replaces earlier one"
        );
    }

    let records = columns
        .into_record_set(mode)
        .context("Failed to build hurricane records")?;
    tracing::debug!(
        records = records.len(),
        unrecorded_damage = records.iter().filter(|r| !r.damage.is_recorded()).count(),
        "records built"
    );
    Ok(records)
}

/// JSON envelope written for every machine-readable result
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T> {
    pub generated_at: DateTime<Utc>,
    pub dataset: String,
    pub result: &'a T,
}

impl<'a, T> JsonOutput<'a, T> {
    pub fn new(dataset: Option<&Path>, result: &'a T) -> Self {
        Self {
            generated_at: Utc::now(),
            dataset: dataset.map_or_else(
                || "built-in".to_owned(),
                |path| path.display().to_string(),
            ),
            result,
        }
    }
}
