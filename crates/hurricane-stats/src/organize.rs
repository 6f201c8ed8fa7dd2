//! Attribute-keyed grouping and extremum search.
//!
//! [`AttributeOrganizer`] borrows a slice of named entities together with an
//! accessor closure that extracts one attribute from each entity. It offers two
//! read-only queries:
//!
//! - [`group_by_value`](AttributeOrganizer::group_by_value): partitions the
//!   entity names by the canonical string form of their attribute value
//! - [`find_maximum`](AttributeOrganizer::find_maximum): returns every entity
//!   tied for the largest comparable value
//!
//! # Group Keys
//!
//! Values are never used as map keys directly. Each value is converted into a
//! canonical string through [`AttributeValue::group_key`] first (decimal
//! formatting for numbers, unchanged text for strings), so values of any type
//! can be grouped with the same key comparison rules.
//!
//! # Maximum Semantics
//!
//! Only values for which [`AttributeValue::as_comparable`] returns `Some` take
//! part in the search. The running maximum starts at `0`, so:
//!
//! - Negative values never become the maximum
//! - Entities whose value is exactly `0` are reported when nothing is larger
//! - When no entity has a comparable value the result is `([], 0)`

use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// An entity that can report its own unique name.
pub trait Named {
    fn name(&self) -> &str;
}

impl<T> Named for &T
where
    T: Named + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A value extracted from an entity for grouping or comparison.
pub trait AttributeValue {
    /// Canonical string used as the group key for this value.
    fn group_key(&self) -> String;

    /// Numeric form of this value, or `None` if it must be skipped when
    /// searching for a maximum.
    fn as_comparable(&self) -> Option<f64>;
}

macro_rules! impl_numeric_attribute_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AttributeValue for $ty {
                fn group_key(&self) -> String {
                    self.to_string()
                }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn as_comparable(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_attribute_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

impl AttributeValue for str {
    fn group_key(&self) -> String {
        self.to_owned()
    }

    fn as_comparable(&self) -> Option<f64> {
        None
    }
}

impl AttributeValue for String {
    fn group_key(&self) -> String {
        self.clone()
    }

    fn as_comparable(&self) -> Option<f64> {
        None
    }
}

impl<T> AttributeValue for &T
where
    T: AttributeValue + ?Sized,
{
    fn group_key(&self) -> String {
        (**self).group_key()
    }

    fn as_comparable(&self) -> Option<f64> {
        (**self).as_comparable()
    }
}

impl<T> AttributeValue for Option<T>
where
    T: AttributeValue,
{
    fn group_key(&self) -> String {
        match self {
            Some(value) => value.group_key(),
            None => "None".to_owned(),
        }
    }

    fn as_comparable(&self) -> Option<f64> {
        self.as_ref().and_then(AttributeValue::as_comparable)
    }
}

/// Organizes a borrowed entity slice by one attribute.
///
/// The organizer never mutates the entities, and both queries can be repeated
/// with identical results.
#[derive(Debug, Clone)]
pub struct AttributeOrganizer<'a, T, F> {
    entries: &'a [T],
    value_of: F,
}

impl<'a, T, F, V> AttributeOrganizer<'a, T, F>
where
    T: Named,
    F: Fn(&T) -> V,
    V: AttributeValue,
{
    /// Creates an organizer over `entries`, keyed by the attribute `value_of`
    /// extracts.
    #[must_use]
    pub fn new(entries: &'a [T], value_of: F) -> Self {
        Self { entries, value_of }
    }

    /// Partitions entity names by the group key of their attribute value.
    ///
    /// Groups appear in the order their key was first seen, and names within a
    /// group follow the entity order of the slice. Every entity lands in
    /// exactly one group.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hurricane_stats::organize::{AttributeOrganizer, Named};
    /// # struct Area(&'static str, u32);
    /// # impl Named for Area { fn name(&self) -> &str { self.0 } }
    /// let areas = [Area("Cuba", 2), Area("Texas", 1), Area("Florida", 2)];
    /// let groups = AttributeOrganizer::new(&areas, |a: &Area| a.1).group_by_value();
    /// let keys = groups.iter().map(|(key, _)| key).collect::<Vec<_>>();
    /// assert_eq!(keys, ["2", "1"]);
    /// ```
    #[must_use]
    pub fn group_by_value(&self) -> Groups {
        let mut groups = Groups::default();
        for entry in self.entries {
            let key = (self.value_of)(entry).group_key();
            groups.push(key, entry.name());
        }
        groups
    }

    /// Finds every entity tied for the largest comparable attribute value.
    ///
    /// Non-comparable values are skipped. The search starts from `0`, so the
    /// result is `([], 0)` when no entity has a comparable value and negative
    /// values are never reported.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hurricane_stats::organize::{AttributeOrganizer, Named};
    /// # struct Storm(&'static str, Option<u64>);
    /// # impl Named for Storm { fn name(&self) -> &str { self.0 } }
    /// let storms = [Storm("Katrina", Some(1836)), Storm("Mitch", Some(19325)), Storm("Anita", None)];
    /// let max = AttributeOrganizer::new(&storms, |s: &Storm| s.1).find_maximum();
    /// assert_eq!(max.names, ["Mitch"]);
    /// assert_eq!(max.value, 19325.0);
    /// ```
    #[must_use]
    pub fn find_maximum(&self) -> Maximum {
        let value = self
            .entries
            .iter()
            .filter_map(|entry| (self.value_of)(entry).as_comparable())
            .fold(0.0_f64, |max, value| if value > max { value } else { max });

        #[allow(clippy::float_cmp)]
        let names = self
            .entries
            .iter()
            .filter(|&entry| (self.value_of)(entry).as_comparable() == Some(value))
            .map(|entry| entry.name().to_owned())
            .collect();

        Maximum { names, value }
    }
}

/// Entity names partitioned by group key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Groups {
    fn push(&mut self, key: String, name: &str) {
        if let Some(&idx) = self.index.get(&key) {
            self.groups[idx].1.push(name.to_owned());
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![name.to_owned()]));
        }
    }

    /// Names in the group for `key`, if any entity produced that key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&idx| self.groups[idx].1.as_slice())
    }

    /// Iterates over `(key, names)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(key, names)| (key.as_str(), names.as_slice()))
    }

    /// Number of distinct group keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for Groups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Entities tied for the maximum value of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Maximum {
    /// Names of every entity whose value equals `value`, in slice order.
    pub names: Vec<String>,
    /// The maximum comparable value, or `0` if there was none.
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Entry {
        name: &'static str,
        year: u32,
        damage: Option<f64>,
        month: &'static str,
    }

    impl Named for Entry {
        fn name(&self) -> &str {
            self.name
        }
    }

    fn entry(name: &'static str, year: u32, damage: Option<f64>, month: &'static str) -> Entry {
        Entry {
            name,
            year,
            damage,
            month,
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("Bahamas", 1932, None, "September"),
            entry("Cuba II", 1932, Some(40e6), "November"),
            entry("Tampico", 1933, Some(5e6), "September"),
            entry("Katrina", 2005, Some(125e9), "August"),
            entry("Rita", 2005, Some(12e9), "September"),
        ]
    }

    #[test]
    fn test_group_by_year_partitions_all_names() {
        let entries = sample();
        let groups = AttributeOrganizer::new(&entries, |e: &Entry| e.year).group_by_value();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.get("1932").unwrap(), ["Bahamas", "Cuba II"]);
        assert_eq!(groups.get("1933").unwrap(), ["Tampico"]);
        assert_eq!(groups.get("2005").unwrap(), ["Katrina", "Rita"]);

        let mut all = groups
            .iter()
            .flat_map(|(_, names)| names.iter().cloned())
            .collect::<Vec<_>>();
        all.sort();
        let mut expected = entries
            .iter()
            .map(|e| e.name.to_owned())
            .collect::<Vec<_>>();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_group_by_text_value() {
        let entries = sample();
        let groups = AttributeOrganizer::new(&entries, |e: &Entry| e.month).group_by_value();
        let keys = groups.iter().map(|(key, _)| key).collect::<Vec<_>>();
        assert_eq!(keys, ["September", "November", "August"]);
        assert_eq!(
            groups.get("September").unwrap(),
            ["Bahamas", "Tampico", "Rita"]
        );
    }

    #[test]
    fn test_group_by_empty_slice() {
        let entries: Vec<Entry> = vec![];
        let groups = AttributeOrganizer::new(&entries, |e: &Entry| e.year).group_by_value();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_find_maximum_skips_non_comparable() {
        let entries = sample();
        let max = AttributeOrganizer::new(&entries, |e: &Entry| e.damage).find_maximum();
        assert_eq!(max.names, ["Katrina"]);
        assert!((max.value - 125e9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_maximum_reports_ties() {
        let entries = sample();
        let max = AttributeOrganizer::new(&entries, |_: &Entry| 7_u32).find_maximum();
        assert_eq!(max.names.len(), entries.len());
        assert!((max.value - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_maximum_without_comparable_values() {
        let entries = sample();
        let max = AttributeOrganizer::new(&entries, |e: &Entry| e.month).find_maximum();
        assert!(max.names.is_empty());
        assert!(max.value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_maximum_ignores_negative_values() {
        // The running maximum starts at zero, so an all-negative attribute
        // reports nothing.
        let entries = sample();
        let max = AttributeOrganizer::new(&entries, |_: &Entry| -3_i32).find_maximum();
        assert!(max.names.is_empty());
        assert!(max.value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_find_maximum_zero_values_are_reported() {
        let entries = sample();
        let max = AttributeOrganizer::new(&entries, |e: &Entry| {
            if e.name == "Rita" { Some(0_u64) } else { None }
        })
        .find_maximum();
        assert_eq!(max.names, ["Rita"]);
    }

    #[test]
    fn test_queries_are_repeatable() {
        let entries = sample();
        let organizer = AttributeOrganizer::new(&entries, |e: &Entry| e.year);
        assert_eq!(organizer.group_by_value(), organizer.group_by_value());
        assert_eq!(organizer.find_maximum(), organizer.find_maximum());
    }

    #[test]
    fn test_option_group_key() {
        assert_eq!(Some(3_u8).group_key(), "3");
        assert_eq!(None::<u8>.group_key(), "None");
        assert_eq!(None::<u8>.as_comparable(), None);
    }
}
