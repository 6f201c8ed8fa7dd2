use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hurricane_data::{damage::NormalizeMode, record::RecordSet};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::{
    render::TextReport,
    util::{self, JsonOutput, Output},
};

use self::{
    areas::AreasArg, group_by::GroupByArg, max::MaxArg, records::RecordsArg, report::ReportArg,
};

mod areas;
mod group_by;
mod max;
mod records;
mod report;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Default log filter when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// What analysis to run (defaults to the full report)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the six standard analyses
    Report(#[clap(flatten)] ReportArg),
    /// Group hurricane names by the value of one field
    GroupBy(#[clap(flatten)] GroupByArg),
    /// Find the hurricane(s) with the largest value of one field
    Max(#[clap(flatten)] MaxArg),
    /// Count how many hurricanes hit each area
    Areas(#[clap(flatten)] AreasArg),
    /// Dump every hurricane record
    Records(#[clap(flatten)] RecordsArg),
}

/// Where records come from and how damage text is read
#[derive(Debug, Default, Clone, clap::Args)]
pub struct DatasetArg {
    /// JSON dataset with parallel columns (built-in Atlantic dataset if omitted)
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Reject damage figures without an 'M' or 'B' suffix instead of reading them as zero
    #[arg(long)]
    strict_damage: bool,
}

impl DatasetArg {
    fn normalize_mode(&self) -> NormalizeMode {
        if self.strict_damage {
            NormalizeMode::Strict
        } else {
            NormalizeMode::Lenient
        }
    }

    fn path(&self) -> Option<&Path> {
        self.dataset.as_deref()
    }

    fn load(&self) -> anyhow::Result<RecordSet> {
        util::load_records(self.path(), self.normalize_mode())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// How results are written
#[derive(Debug, Default, Clone, clap::Args)]
pub struct OutputArg {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Output file path (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl OutputArg {
    fn emit<T, F>(&self, dataset: &DatasetArg, result: &T, render: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce(&mut TextReport, &T) -> anyhow::Result<()>,
    {
        let mut output = Output::from_output_path(self.output.clone())?;
        match self.format {
            Format::Text => {
                let mut text = TextReport::new();
                render(&mut text, result)?;
                output.write_text(&text.into_string())
            }
            Format::Json => output.write_json(JsonOutput::new(dataset.path(), result)),
        }
    }
}

fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(&args.log_level);

    match args.mode.unwrap_or(Mode::Report(ReportArg::default())) {
        Mode::Report(arg) => report::run(&arg)?,
        Mode::GroupBy(arg) => group_by::run(&arg)?,
        Mode::Max(arg) => max::run(&arg)?,
        Mode::Areas(arg) => areas::run(&arg)?,
        Mode::Records(arg) => records::run(&arg)?,
    }
    Ok(())
}
