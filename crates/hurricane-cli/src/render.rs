//! Plain-text rendering of analysis results.

use std::fmt::Write as _;

use hurricane_data::{area::AreaFrequency, record::RecordSet, report::Report};
use hurricane_stats::organize::{Groups, Maximum};

pub const DELIMITER_WIDTH: usize = 25;

#[derive(Debug, Default)]
pub struct TextReport {
    buf: String,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn delimiter(&mut self) -> anyhow::Result<()> {
        writeln!(self.buf, "{}", "-".repeat(DELIMITER_WIDTH))?;
        Ok(())
    }

    pub fn groups(&mut self, label: &str, groups: &Groups) -> anyhow::Result<()> {
        writeln!(self.buf, "{label}:")?;
        for (key, names) in groups.iter() {
            writeln!(self.buf, "  {key}: {}", names.join(", "))?;
        }
        self.delimiter()
    }

    pub fn maximum(&mut self, label: &str, max: &Maximum) -> anyhow::Result<()> {
        let names = if max.names.is_empty() {
            "(none)".to_owned()
        } else {
            max.names.join(", ")
        };
        writeln!(self.buf, "{label}: {names} ({})", max.value)?;
        self.delimiter()
    }

    pub fn areas(&mut self, areas: &AreaFrequency) -> anyhow::Result<()> {
        writeln!(self.buf, "Hurricanes per affected area:")?;
        let width = areas
            .areas()
            .iter()
            .map(|count| count.area.chars().count())
            .max()
            .unwrap_or(0);
        for count in areas.areas() {
            writeln!(self.buf, "  {:<width$}  {}", count.area, count.frequency)?;
        }
        self.delimiter()
    }

    pub fn records(&mut self, records: &RecordSet) -> anyhow::Result<()> {
        for record in records {
            writeln!(self.buf, "{}:", record.name)?;
            writeln!(self.buf, "  Month: {}", record.month)?;
            writeln!(self.buf, "  Year: {}", record.year)?;
            writeln!(
                self.buf,
                "  Max Sustained Wind: {}",
                record.max_sustained_wind
            )?;
            writeln!(
                self.buf,
                "  Areas Affected: {}",
                record.areas_affected.join(", ")
            )?;
            writeln!(self.buf, "  Damage: {}", record.damage)?;
            writeln!(self.buf, "  Damage Scale: {}", record.damage_scale)?;
            writeln!(self.buf, "  Deaths: {}", record.deaths)?;
            writeln!(self.buf, "  Mortality Scale: {}", record.mortality_scale)?;
        }
        self.delimiter()
    }

    pub fn report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.groups("Hurricanes categorized by year", &report.by_year)?;
        self.groups(
            "Hurricanes categorized by mortality scale",
            &report.by_mortality_scale,
        )?;
        self.groups(
            "Hurricanes categorized by damage scale",
            &report.by_damage_scale,
        )?;
        self.maximum("Highest fatality", &report.highest_fatality)?;
        self.maximum("Greatest damage in US$", &report.greatest_damage)?;
        self.maximum("Most affected area", &report.most_affected_area)
    }
}

#[cfg(test)]
mod tests {
    use hurricane_data::{damage::NormalizeMode, dataset};

    use super::*;

    #[test]
    fn test_report_blocks_are_delimited() {
        let records = dataset::atlantic_category5()
            .into_record_set(NormalizeMode::Lenient)
            .unwrap();
        let areas = AreaFrequency::from_records(&records);
        let mut text = TextReport::new();
        text.report(&Report::new(&records, &areas)).unwrap();
        let text = text.into_string();

        let delimiter = "-".repeat(DELIMITER_WIDTH);
        assert_eq!(text.lines().filter(|l| *l == delimiter).count(), 6);
        assert!(text.contains("Highest fatality: Mitch (19325)\n"));
        assert!(text.contains("Greatest damage in US$: Katrina (125000000000)\n"));
        assert!(text.contains("Most affected area: Central America (9)\n"));
        assert!(text.contains("  2005: Emily, Katrina, Rita, Wilma\n"));
    }

    #[test]
    fn test_areas_table_is_aligned() {
        let records = dataset::atlantic_category5()
            .into_record_set(NormalizeMode::Lenient)
            .unwrap();
        let mut text = TextReport::new();
        text.areas(&AreaFrequency::from_records(&records)).unwrap();
        let text = text.into_string();
        let cuba = text.lines().find(|l| l.trim_start().starts_with("Cuba ")).unwrap();
        let mexico = text.lines().find(|l| l.trim_start().starts_with("Mexico ")).unwrap();
        assert_eq!(cuba.rfind(' '), mexico.rfind(' '));
        assert!(text.ends_with(&format!("{}\n", "-".repeat(DELIMITER_WIDTH))));
    }

    #[test]
    fn test_empty_maximum() {
        let mut text = TextReport::new();
        text.maximum(
            "Greatest damage in US$",
            &Maximum {
                names: vec![],
                value: 0.0,
            },
        )
        .unwrap();
        assert!(text.into_string().starts_with("Greatest damage in US$: (none) (0)\n"));
    }
}
