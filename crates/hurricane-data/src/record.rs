//! Hurricane records and the record set they are collected into.
//!
//! A [`Record`] carries every field known about one hurricane. Records are
//! assembled from parallel per-field columns ([`RecordColumns`]) into a
//! [`RecordSet`] keyed by name. Once built, a record set is never modified.
//!
//! Fields are addressed through [`Field`] rather than by looking up names at
//! runtime; [`Field::value`] is the accessor handed to the attribute organizer.

use std::{collections::HashMap, str::FromStr};

use hurricane_stats::organize::{AttributeOrganizer, AttributeValue, Named};
use serde::Serialize;

use crate::{
    damage::{Damage, NOT_RECORDED, NormalizeDamagesError},
    scale::{DamageScale, Scale},
};

/// One hurricane and its derived severity scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Maximum sustained wind speed in mph.
    #[serde(rename = "Max Sustained Wind")]
    pub max_sustained_wind: f64,
    #[serde(rename = "Areas Affected")]
    pub areas_affected: Vec<String>,
    #[serde(rename = "Damage")]
    pub damage: Damage,
    #[serde(rename = "Damage Scale")]
    pub damage_scale: DamageScale,
    #[serde(rename = "Deaths")]
    pub deaths: u32,
    #[serde(rename = "Mortality Scale")]
    pub mortality_scale: Scale,
}

impl Named for Record {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A record field that reports can be organized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Field {
    #[display("Name")]
    Name,
    #[display("Month")]
    Month,
    #[display("Year")]
    Year,
    #[display("Max Sustained Wind")]
    MaxSustainedWind,
    #[display("Areas Affected")]
    AreasAffected,
    #[display("Damage")]
    Damage,
    #[display("Damage Scale")]
    DamageScale,
    #[display("Deaths")]
    Deaths,
    #[display("Mortality Scale")]
    MortalityScale,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown record field '{input}'")]
pub struct ParseFieldError {
    pub input: String,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Month,
        Field::Year,
        Field::MaxSustainedWind,
        Field::AreasAffected,
        Field::Damage,
        Field::DamageScale,
        Field::Deaths,
        Field::MortalityScale,
    ];

    /// Extracts this field from `record`.
    #[must_use]
    pub fn value(self, record: &Record) -> FieldValue {
        match self {
            Field::Name => FieldValue::Text(record.name.clone()),
            Field::Month => FieldValue::Text(record.month.clone()),
            Field::Year => FieldValue::Integer(i64::from(record.year)),
            Field::MaxSustainedWind => FieldValue::Number(record.max_sustained_wind),
            Field::AreasAffected => FieldValue::List(record.areas_affected.clone()),
            Field::Damage => match record.damage {
                Damage::Recorded(value) => FieldValue::Number(value),
                Damage::NotRecorded => FieldValue::NotRecorded,
            },
            Field::DamageScale => match record.damage_scale {
                DamageScale::Rated(scale) => FieldValue::Scale(scale),
                DamageScale::NotRecorded => FieldValue::NotRecorded,
            },
            Field::Deaths => FieldValue::Integer(i64::from(record.deaths)),
            Field::MortalityScale => FieldValue::Scale(record.mortality_scale),
        }
    }
}

fn normalize_field_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Field {
    type Err = ParseFieldError;

    /// Accepts the display label in any case, with or without separators
    /// (`"Max Sustained Wind"`, `"max-sustained-wind"`, `"maxsustainedwind"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_field_name(s);
        Field::ALL
            .into_iter()
            .find(|field| normalize_field_name(&field.to_string()) == wanted)
            .ok_or_else(|| ParseFieldError {
                input: s.to_owned(),
            })
    }
}

/// A field value extracted from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    List(Vec<String>),
    Scale(Scale),
    NotRecorded,
}

impl AttributeValue for FieldValue {
    fn group_key(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Integer(value) => value.to_string(),
            FieldValue::Number(value) => value.to_string(),
            FieldValue::List(items) => format!("[{}]", items.join(", ")),
            FieldValue::Scale(scale) => scale.to_string(),
            FieldValue::NotRecorded => NOT_RECORDED.to_owned(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_comparable(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(value) => Some(*value as f64),
            FieldValue::Number(value) => Some(*value),
            FieldValue::Scale(scale) => Some(f64::from(scale.get())),
            FieldValue::Text(_) | FieldValue::List(_) | FieldValue::NotRecorded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BuildRecordSetError {
    #[display("column '{column}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
    #[display("invalid damage column")]
    Damage(#[error(source)] NormalizeDamagesError),
}

/// Parallel per-field columns sharing one index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordColumns {
    pub names: Vec<String>,
    pub months: Vec<String>,
    pub years: Vec<i32>,
    pub max_sustained_winds: Vec<f64>,
    pub areas_affected: Vec<Vec<String>>,
    pub damages: Vec<Damage>,
    pub damage_scales: Vec<DamageScale>,
    pub deaths: Vec<u32>,
    pub mortality_scales: Vec<Scale>,
}

impl RecordColumns {
    fn check_lengths(&self) -> Result<(), BuildRecordSetError> {
        let expected = self.names.len();
        let lengths = [
            ("months", self.months.len()),
            ("years", self.years.len()),
            ("max_sustained_winds", self.max_sustained_winds.len()),
            ("areas_affected", self.areas_affected.len()),
            ("damages", self.damages.len()),
            ("damage_scales", self.damage_scales.len()),
            ("deaths", self.deaths.len()),
            ("mortality_scales", self.mortality_scales.len()),
        ];
        for (column, actual) in lengths {
            if actual != expected {
                return Err(BuildRecordSetError::LengthMismatch {
                    column,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Records keyed by unique name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    /// Zips parallel columns into a record set.
    ///
    /// A repeated name replaces the earlier record in place, keeping the
    /// position of its first occurrence.
    pub fn from_columns(columns: RecordColumns) -> Result<Self, BuildRecordSetError> {
        columns.check_lengths()?;

        let RecordColumns {
            names,
            months,
            years,
            max_sustained_winds,
            areas_affected,
            damages,
            damage_scales,
            deaths,
            mortality_scales,
        } = columns;

        let rows = names
            .into_iter()
            .zip(months)
            .zip(years)
            .zip(max_sustained_winds)
            .zip(areas_affected)
            .zip(damages)
            .zip(damage_scales)
            .zip(deaths)
            .zip(mortality_scales);

        let mut set = Self::default();
        for (
            (
                ((((((name, month), year), max_sustained_wind), areas_affected), damage), damage_scale),
                deaths,
            ),
            mortality_scale,
        ) in rows
        {
            set.insert(Record {
                name,
                month,
                year,
                max_sustained_wind,
                areas_affected,
                damage,
                damage_scale,
                deaths,
                mortality_scale,
            });
        }
        Ok(set)
    }

    fn insert(&mut self, record: Record) {
        if let Some(&idx) = self.index.get(&record.name) {
            self.records[idx] = record;
        } else {
            self.index.insert(record.name.clone(), self.records.len());
            self.records.push(record);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Organizer keyed by `field`.
    #[must_use]
    pub fn organize_by(
        &self,
        field: Field,
    ) -> AttributeOrganizer<'_, Record, impl Fn(&Record) -> FieldValue> {
        AttributeOrganizer::new(&self.records, move |record: &Record| field.value(record))
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for RecordSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.records.iter().map(|record| (&record.name, record)))
    }
}
