//! Hurricane records, severity scales and standard analyses.
//!
//! # Pipeline
//!
//! 1. **Load columns** ([`dataset::RawColumns`]): seven parallel columns, either
//!    the built-in [`dataset::atlantic_category5`] set or deserialized JSON
//! 2. **Normalize damage** ([`damage::Damage`]): `"1.5B"` becomes `1.5e9`, the
//!    not-recorded marker passes through
//! 3. **Classify** ([`scale`]): damage and deaths are bucketed into scales 0-5
//! 4. **Build records** ([`record::RecordSet`]): columns are zipped into
//!    records keyed by name
//! 5. **Aggregate** ([`area::AreaFrequency`], [`report::Report`]): area hit
//!    counts, grouping by field and maximum search
//!
//! # Examples
//!
//! ```
//! use hurricane_data::{
//!     area::AreaFrequency, damage::NormalizeMode, dataset, record::Field,
//! };
//!
//! let records = dataset::atlantic_category5()
//!     .into_record_set(NormalizeMode::Lenient)
//!     .unwrap();
//!
//! let deadliest = records.organize_by(Field::Deaths).find_maximum();
//! assert_eq!(deadliest.names, ["Mitch"]);
//!
//! let areas = AreaFrequency::from_records(&records);
//! println!("{} distinct areas", areas.len());
//! ```

pub mod area;
pub mod damage;
pub mod dataset;
pub mod record;
pub mod report;
pub mod scale;
