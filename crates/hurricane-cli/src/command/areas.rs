use hurricane_data::area::AreaFrequency;

use super::{DatasetArg, OutputArg};

#[derive(Debug, Clone, clap::Args)]
pub struct AreasArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &AreasArg) -> anyhow::Result<()> {
    let AreasArg { dataset, output } = arg;

    let records = dataset.load()?;
    let areas = AreaFrequency::from_records(&records);
    output.emit(dataset, &areas, |text, areas| {
        text.areas(areas)?;
        text.maximum("Most affected area", &areas.most_affected())
    })
}
