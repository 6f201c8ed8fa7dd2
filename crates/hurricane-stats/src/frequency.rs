//! Occurrence counting with stable ordering.
//!
//! [`FrequencyTable`] counts how many times each distinct item has been seen.
//! Items are kept in the order they were first seen, so reports built from a
//! table come out in a deterministic order without sorting.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// A counter keyed by item, ordered by first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `item`.
    ///
    /// The first occurrence of an item initializes its count to 1.
    pub fn add(&mut self, item: &str) {
        if let Some(&idx) = self.index.get(item) {
            self.entries[idx].1 += 1;
        } else {
            self.index.insert(item.to_owned(), self.entries.len());
            self.entries.push((item.to_owned(), 1));
        }
    }

    /// Returns how many times `item` has been recorded.
    #[must_use]
    pub fn get(&self, item: &str) -> Option<usize> {
        self.index.get(item).map(|&idx| self.entries[idx].1)
    }

    /// Iterates over `(item, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(item, count)| (item.as_str(), *count))
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
