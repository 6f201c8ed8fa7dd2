use hurricane_data::{area::AreaFrequency, report::Report};

use super::{DatasetArg, OutputArg};

#[derive(Debug, Default, Clone, clap::Args)]
pub struct ReportArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let ReportArg { dataset, output } = arg;

    let records = dataset.load()?;
    let areas = AreaFrequency::from_records(&records);
    tracing::debug!(areas = areas.len(), "area frequency computed");

    let report = Report::new(&records, &areas);
    output.emit(dataset, &report, |text, report| text.report(report))
}
