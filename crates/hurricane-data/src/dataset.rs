//! Raw input columns and the built-in Atlantic dataset.
//!
//! [`RawColumns`] is the shape a data source provides: seven parallel columns
//! with damage still in text form. It deserializes from a JSON object whose
//! keys are the field names below, so external datasets can be loaded without
//! any extra glue.

use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    damage::{self, NormalizeMode},
    record::{BuildRecordSetError, RecordColumns, RecordSet},
    scale,
};

/// Unprocessed parallel columns, one entry per hurricane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawColumns {
    pub names: Vec<String>,
    pub months: Vec<String>,
    pub years: Vec<i32>,
    pub max_sustained_winds: Vec<f64>,
    pub areas_affected: Vec<Vec<String>>,
    /// Damage text such as `"1.5B"`, `"200M"` or `"Damages not recorded"`.
    pub damages: Vec<String>,
    pub deaths: Vec<u32>,
}

impl RawColumns {
    /// Names that occur more than once, each reported at its second
    /// occurrence.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !seen.insert(*name))
            .collect()
    }

    /// Normalizes damage, derives both scales and builds the record set.
    pub fn into_record_set(self, mode: NormalizeMode) -> Result<RecordSet, BuildRecordSetError> {
        let damages = damage::normalize_damages(&self.damages, mode)
            .map_err(BuildRecordSetError::Damage)?;
        let damage_scales = scale::damage_scales(&damages);
        let mortality_scales = scale::mortality_scales(&self.deaths);

        RecordSet::from_columns(RecordColumns {
            names: self.names,
            months: self.months,
            years: self.years,
            max_sustained_winds: self.max_sustained_winds,
            areas_affected: self.areas_affected,
            damages,
            damage_scales,
            deaths: self.deaths,
            mortality_scales,
        })
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadDatasetError {
    #[display("failed to open dataset {}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to parse dataset {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads [`RawColumns`] from a JSON file.
pub fn load_json<P>(path: P) -> Result<RawColumns, LoadDatasetError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadDatasetError::Open {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadDatasetError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

/// The 34 Category 5 hurricanes recorded in the Atlantic between 1924 and
/// 2018.
#[must_use]
pub fn atlantic_category5() -> RawColumns {
    RawColumns {
        names: strings(&[
            "Cuba I",
            "San Felipe II Okeechobee",
            "Bahamas",
            "Cuba II",
            "CubaBrownsville",
            "Tampico",
            "Labor Day",
            "New England",
            "Carol",
            "Janet",
            "Carla",
            "Hattie",
            "Beulah",
            "Camille",
            "Edith",
            "Anita",
            "David",
            "Allen",
            "Gilbert",
            "Hugo",
            "Andrew",
            "Mitch",
            "Isabel",
            "Ivan",
            "Emily",
            "Katrina",
            "Rita",
            "Wilma",
            "Dean",
            "Felix",
            "Matthew",
            "Irma",
            "Maria",
            "Michael",
        ]),
        months: strings(&[
            "October",
            "September",
            "September",
            "November",
            "August",
            "September",
            "September",
            "September",
            "September",
            "September",
            "September",
            "October",
            "September",
            "August",
            "September",
            "September",
            "August",
            "August",
            "September",
            "September",
            "August",
            "October",
            "September",
            "September",
            "July",
            "August",
            "September",
            "October",
            "August",
            "September",
            "October",
            "September",
            "September",
            "October",
        ]),
        years: vec![
            1924, 1928, 1932, 1932, 1933, 1933, 1935, 1938, 1953, 1955, 1961, 1961, 1967, 1969,
            1971, 1977, 1979, 1980, 1988, 1989, 1992, 1998, 2003, 2004, 2005, 2005, 2005, 2005,
            2007, 2007, 2016, 2017, 2017, 2018,
        ],
        max_sustained_winds: vec![
            165.0, 160.0, 160.0, 175.0, 160.0, 160.0, 185.0, 160.0, 160.0, 175.0, 175.0, 160.0,
            160.0, 175.0, 160.0, 175.0, 175.0, 190.0, 185.0, 160.0, 175.0, 180.0, 165.0, 165.0,
            160.0, 175.0, 180.0, 185.0, 175.0, 175.0, 165.0, 180.0, 175.0, 160.0,
        ],
        areas_affected: vec![
            strings(&["Central America", "Mexico", "Cuba", "Florida", "The Bahamas"]),
            strings(&[
                "Lesser Antilles",
                "The Bahamas",
                "United States East Coast",
                "Atlantic Canada",
            ]),
            strings(&["The Bahamas", "Northeastern United States"]),
            strings(&[
                "Lesser Antilles",
                "Jamaica",
                "Cayman Islands",
                "Cuba",
                "The Bahamas",
                "Bermuda",
            ]),
            strings(&["The Bahamas", "Cuba", "Florida", "Texas", "Tamaulipas"]),
            strings(&["Jamaica", "Yucatán Peninsula"]),
            strings(&[
                "The Bahamas",
                "Florida",
                "Georgia",
                "The Carolinas",
                "Virginia",
            ]),
            strings(&[
                "Southeastern United States",
                "Northeastern United States",
                "Southwestern Quebec",
            ]),
            strings(&["Bermuda", "New England", "Atlantic Canada"]),
            strings(&["Lesser Antilles", "Central America"]),
            strings(&["Texas", "Louisiana", "Midwestern United States"]),
            strings(&["Central America"]),
            strings(&["The Caribbean", "Mexico", "Texas"]),
            strings(&["Cuba", "United States Gulf Coast"]),
            strings(&[
                "The Caribbean",
                "Central America",
                "Mexico",
                "United States Gulf Coast",
            ]),
            strings(&["Mexico"]),
            strings(&["The Caribbean", "United States East Coast"]),
            strings(&[
                "The Caribbean",
                "Yucatán Peninsula",
                "Mexico",
                "South Texas",
            ]),
            strings(&[
                "Jamaica",
                "Venezuela",
                "Central America",
                "Hispaniola",
                "Mexico",
            ]),
            strings(&["The Caribbean", "United States East Coast"]),
            strings(&["The Bahamas", "Florida", "United States Gulf Coast"]),
            strings(&["Central America", "Yucatán Peninsula", "South Florida"]),
            strings(&[
                "Greater Antilles",
                "Bahamas",
                "Eastern United States",
                "Ontario",
            ]),
            strings(&[
                "The Caribbean",
                "Venezuela",
                "United States Gulf Coast",
            ]),
            strings(&["Windward Islands", "Jamaica", "Mexico", "Texas"]),
            strings(&["Bahamas", "United States Gulf Coast"]),
            strings(&["Cuba", "United States Gulf Coast"]),
            strings(&["Greater Antilles", "Central America", "Florida"]),
            strings(&["The Caribbean", "Central America"]),
            strings(&["Nicaragua", "Honduras"]),
            strings(&[
                "Antilles",
                "Venezuela",
                "Colombia",
                "United States East Coast",
                "Atlantic Canada",
            ]),
            strings(&[
                "Cape Verde",
                "The Caribbean",
                "British Virgin Islands",
                "U.S. Virgin Islands",
                "Cuba",
                "Florida",
            ]),
            strings(&[
                "Lesser Antilles",
                "Virgin Islands",
                "Puerto Rico",
                "Dominican Republic",
                "Turks and Caicos Islands",
            ]),
            strings(&[
                "Central America",
                "United States Gulf Coast (especially Florida Panhandle)",
            ]),
        ],
        damages: strings(&[
            "Damages not recorded",
            "100M",
            "Damages not recorded",
            "40M",
            "27.9M",
            "5M",
            "Damages not recorded",
            "306M",
            "2M",
            "65.8M",
            "326M",
            "60.3M",
            "208M",
            "1.42B",
            "25.4M",
            "Damages not recorded",
            "1.54B",
            "1.24B",
            "7.1B",
            "10B",
            "26.5B",
            "6.2B",
            "5.37B",
            "23.3B",
            "1.01B",
            "125B",
            "12B",
            "29.4B",
            "1.76B",
            "720M",
            "15.1B",
            "64.8B",
            "91.6B",
            "25.1B",
        ]),
        deaths: vec![
            90, 4000, 16, 3103, 179, 184, 408, 682, 5, 1023, 43, 319, 688, 259, 37, 11, 2068, 269,
            318, 107, 65, 19325, 51, 124, 17, 1836, 125, 87, 45, 133, 603, 138, 3057, 74,
        ],
    }
}
