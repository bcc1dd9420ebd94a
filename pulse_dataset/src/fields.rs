// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field-name access to raw rows and the column names ingestion reads.

use std::collections::{BTreeMap, HashMap};

/// Marker the source uses for values it does not have.
pub const UNAVAILABLE: &str = "Not Available";

/// A raw row whose string fields are looked up by name.
///
/// Missing fields and empty strings are both "absent" as far as ingestion is
/// concerned; implementations may return either.
pub trait FieldSource {
    /// Returns the raw value of the named field, if the row has one.
    fn field(&self, name: &str) -> Option<&str>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<&str, &str> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Column names read by [`crate::DataStore`].
///
/// Category and year each have a primary and a fallback column: the first
/// usable value wins. Defaults match the NYC Local Law 84 energy and water
/// disclosure export.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldMap {
    /// Property name column.
    pub name: String,
    /// Region (borough) column.
    pub region: String,
    /// Primary category column.
    pub category: String,
    /// Category column used when the primary one is empty.
    pub category_fallback: String,
    /// Primary year column.
    pub year: String,
    /// Year column used when the primary one does not hold a valid year.
    pub year_fallback: String,
    /// Column for the metric encoded as color.
    pub metric_color: String,
    /// Column for the metric encoded as size.
    pub metric_size: String,
    /// Latitude column.
    pub latitude: String,
    /// Longitude column.
    pub longitude: String,
    /// Sentinel the source writes for unavailable values.
    pub unavailable: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            name: "Property Name".to_owned(),
            region: "Borough".to_owned(),
            category: "Primary Property Type - Self Selected".to_owned(),
            category_fallback: "Primary Property Type - Portfolio Manager-Calculated".to_owned(),
            year: "Calendar Year".to_owned(),
            year_fallback: "Year Ending".to_owned(),
            metric_color: "Weather Normalized Site EUI (kBtu/ft²)".to_owned(),
            metric_size: "Total (Location-Based) GHG Emissions (Metric Tons CO2e)".to_owned(),
            latitude: "Latitude".to_owned(),
            longitude: "Longitude".to_owned(),
            unavailable: UNAVAILABLE.to_owned(),
        }
    }
}

impl FieldMap {
    /// Every column name this map reads, for header validation and logging.
    #[must_use]
    pub fn columns(&self) -> [&str; 10] {
        [
            self.name.as_str(),
            self.region.as_str(),
            self.category.as_str(),
            self.category_fallback.as_str(),
            self.year.as_str(),
            self.year_fallback.as_str(),
            self.metric_color.as_str(),
            self.metric_size.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_return_present_fields() {
        let mut row = HashMap::new();
        row.insert("Latitude".to_owned(), "40.7".to_owned());
        assert_eq!(row.field("Latitude"), Some("40.7"));
        assert_eq!(row.field("Longitude"), None);

        let borrowed: BTreeMap<&str, &str> = [("Borough", "BRONX")].into_iter().collect();
        assert_eq!(borrowed.field("Borough"), Some("BRONX"));
    }

    #[test]
    fn default_columns_are_distinct() {
        let fields = FieldMap::default();
        let mut columns = fields.columns().to_vec();
        columns.sort_unstable();
        columns.dedup();
        assert_eq!(columns.len(), 10);
    }
}
