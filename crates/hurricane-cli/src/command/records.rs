use super::{DatasetArg, OutputArg};

#[derive(Debug, Clone, clap::Args)]
pub struct RecordsArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &RecordsArg) -> anyhow::Result<()> {
    let RecordsArg { dataset, output } = arg;

    let records = dataset.load()?;
    output.emit(dataset, &records, |text, records| text.records(records))
}
