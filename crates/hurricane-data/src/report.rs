//! The standard set of analyses run over a record set.

use hurricane_stats::organize::{Groups, Maximum};
use serde::Serialize;

use crate::{
    area::AreaFrequency,
    record::{Field, RecordSet},
};

/// Results of the six standard analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub by_year: Groups,
    pub by_mortality_scale: Groups,
    pub by_damage_scale: Groups,
    pub highest_fatality: Maximum,
    pub greatest_damage: Maximum,
    pub most_affected_area: Maximum,
}

impl Report {
    #[must_use]
    pub fn new(records: &RecordSet, areas: &AreaFrequency) -> Self {
        Self {
            by_year: records.organize_by(Field::Year).group_by_value(),
            by_mortality_scale: records.organize_by(Field::MortalityScale).group_by_value(),
            by_damage_scale: records.organize_by(Field::DamageScale).group_by_value(),
            highest_fatality: records.organize_by(Field::Deaths).find_maximum(),
            greatest_damage: records.organize_by(Field::Damage).find_maximum(),
            most_affected_area: areas.most_affected(),
        }
    }
}
