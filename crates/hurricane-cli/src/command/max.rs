use hurricane_data::record::Field;

use super::{DatasetArg, OutputArg};

#[derive(Debug, Clone, clap::Args)]
pub struct MaxArg {
    /// Numeric field to maximize, e.g. "deaths", "damage", "max-sustained-wind"
    field: Field,
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    output: OutputArg,
}

pub fn run(arg: &MaxArg) -> anyhow::Result<()> {
    let MaxArg {
        field,
        dataset,
        output,
    } = arg;

    let records = dataset.load()?;
    let max = records.organize_by(*field).find_maximum();
    if max.names.is_empty() {
        tracing::warn!(%field, "no hurricane has a numeric value for this field");
    }

    let label = format!("Highest {}", field.to_string().to_lowercase());
    output.emit(dataset, &max, |text, max| text.maximum(&label, max))
}
