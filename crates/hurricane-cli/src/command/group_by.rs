use hurricane_data::record::Field;

use super::{DatasetArg, OutputArg};

#[derive(Debug, Clone, clap::Args)]
pub struct GroupByArg {
    /// Field to group by, e.g. "year", "mortality-scale", "damage-scale"
    field: Field,
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &GroupByArg) -> anyhow::Result<()> {
    let GroupByArg {
        field,
        dataset,
        output,
    } = arg;

    let records = dataset.load()?;
    let groups = records.organize_by(*field).group_by_value();
    tracing::debug!(%field, groups = groups.len(), "records grouped");

    let label = format!("Hurricanes categorized by {}", field.to_string().to_lowercase());
    output.emit(dataset, &groups, |text, groups| text.groups(&label, groups))
}
