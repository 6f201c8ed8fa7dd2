//! Generic aggregation utilities for named record collections.
//!
//! This crate knows nothing about the records it aggregates. Callers hand it
//! a slice of entities that can report their own name ([`organize::Named`])
//! and a closure that extracts the attribute of interest. The extracted value
//! only needs to implement [`organize::AttributeValue`], which describes how
//! it is turned into a group key and whether it takes part in numeric
//! comparison.
//!
//! # Modules
//!
//! - [`organize`]: Group-by-value and find-maximum over an attribute accessor
//! - [`frequency`]: First-seen-ordered occurrence counting
//!
//! # Examples
//!
//! ## Grouping entities by an attribute
//!
//! ```
//! use hurricane_stats::organize::{AttributeOrganizer, Named};
//!
//! struct Storm {
//!     name: &'static str,
//!     year: u32,
//! }
//!
//! impl Named for Storm {
//!     fn name(&self) -> &str {
//!         self.name
//!     }
//! }
//!
//! let storms = [
//!     Storm { name: "Carla", year: 1961 },
//!     Storm { name: "Hattie", year: 1961 },
//!     Storm { name: "Beulah", year: 1967 },
//! ];
//! let groups = AttributeOrganizer::new(&storms, |s: &Storm| s.year).group_by_value();
//! assert_eq!(groups.get("1961"), Some(&["Carla".to_owned(), "Hattie".to_owned()][..]));
//! ```
//!
//! ## Counting occurrences
//!
//! ```
//! use hurricane_stats::frequency::FrequencyTable;
//!
//! let table = ["Cuba", "Florida", "Cuba"].into_iter().collect::<FrequencyTable>();
//! assert_eq!(table.get("Cuba"), Some(2));
//! assert_eq!(table.get("Florida"), Some(1));
//! ```

pub mod frequency;
pub mod organize;
