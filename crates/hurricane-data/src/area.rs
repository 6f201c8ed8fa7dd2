//! How often each area was hit.

use hurricane_stats::{
    frequency::FrequencyTable,
    organize::{AttributeOrganizer, Maximum, Named},
};
use serde::{Serialize, Serializer};

use crate::record::RecordSet;

/// Number of records listing one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaCount {
    #[serde(skip)]
    pub area: String,
    #[serde(rename = "Frequency")]
    pub frequency: usize,
}

impl Named for AreaCount {
    fn name(&self) -> &str {
        &self.area
    }
}

/// Areas in the order they first appear in the record set, with hit counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaFrequency {
    areas: Vec<AreaCount>,
}

impl AreaFrequency {
    /// Counts, for every area, how many records list it as affected.
    #[must_use]
    pub fn from_records(records: &RecordSet) -> Self {
        let table = records
            .iter()
            .flat_map(|record| record.areas_affected.iter().map(String::as_str))
            .collect::<FrequencyTable>();
        let areas = table
            .iter()
            .map(|(area, frequency)| AreaCount {
                area: area.to_owned(),
                frequency,
            })
            .collect();
        Self { areas }
    }

    #[must_use]
    pub fn get(&self, area: &str) -> Option<usize> {
        self.areas
            .iter()
            .find(|count| count.area == area)
            .map(|count| count.frequency)
    }

    #[must_use]
    pub fn areas(&self) -> &[AreaCount] {
        &self.areas
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Organizer keyed by `Frequency`.
    #[must_use]
    pub fn organize(&self) -> AttributeOrganizer<'_, AreaCount, impl Fn(&AreaCount) -> usize> {
        AttributeOrganizer::new(&self.areas, |count: &AreaCount| count.frequency)
    }

    /// The area(s) hit most often.
    #[must_use]
    pub fn most_affected(&self) -> Maximum {
        self.organize().find_maximum()
    }
}

impl Serialize for AreaFrequency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.areas.iter().map(|count| (&count.area, count)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{damage::NormalizeMode, dataset::RawColumns};

    fn records(areas: &[&[&str]]) -> RecordSet {
        let n = areas.len();
        RawColumns {
            names: (0..n).map(|i| format!("Storm {i}")).collect(),
            months: vec!["August".to_owned(); n],
            years: vec![2005; n],
            max_sustained_winds: vec![175.0; n],
            areas_affected: areas
                .iter()
                .map(|list| list.iter().map(|&a| a.to_owned()).collect())
                .collect(),
            damages: vec!["1B".to_owned(); n],
            deaths: vec![10; n],
        }
        .into_record_set(NormalizeMode::Lenient)
        .unwrap()
    }

    #[test]
    fn test_counts_records_per_area() {
        let set = records(&[&["Cuba", "Florida"], &["Cuba"]]);
        let freq = AreaFrequency::from_records(&set);
        assert_eq!(freq.len(), 2);
        assert_eq!(freq.get("Cuba"), Some(2));
        assert_eq!(freq.get("Florida"), Some(1));
        assert_eq!(freq.get("Texas"), None);
    }

    #[test]
    fn test_most_affected_reports_ties() {
        let set = records(&[&["Cuba", "Texas"], &["Texas", "Cuba"], &["Jamaica"]]);
        let max = AreaFrequency::from_records(&set).most_affected();
        assert_eq!(max.names, ["Cuba", "Texas"]);
        assert!((max.value - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_record_set() {
        let freq = AreaFrequency::from_records(&RecordSet::default());
        assert!(freq.is_empty());
        let max = freq.most_affected();
        assert!(max.names.is_empty());
        assert!(max.value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialize_nests_frequency() {
        let set = records(&[&["Cuba"], &["Cuba", "Bermuda"]]);
        let json = serde_json::to_string(&AreaFrequency::from_records(&set)).unwrap();
        assert_eq!(json, r#"{"Cuba":{"Frequency":2},"Bermuda":{"Frequency":1}}"#);
    }
}
