// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row validation and normalization.

use crate::dataset::{Dataset, DatasetBuilder, SkipReason};
use crate::entity::Entity;
use crate::fields::{FieldMap, FieldSource};

/// Turns raw rows into a [`Dataset`].
///
/// A row becomes an [`Entity`] only if it has finite coordinates, passes the
/// optional region restriction and carries a positive year. Everything else
/// is skipped and counted; ingestion never fails because of row content.
///
/// The region restriction covers deployments that show a single borough: when
/// set, rows from other regions are dropped at load time (compared
/// case-insensitively) instead of being filtered later.
#[derive(Clone, Debug, Default)]
pub struct DataStore {
    fields: FieldMap,
    restrict_region: Option<String>,
}

impl DataStore {
    /// Creates a store reading the given columns, keeping all regions.
    #[must_use]
    pub fn new(fields: FieldMap) -> Self {
        Self {
            fields,
            restrict_region: None,
        }
    }

    /// Restricts ingestion to one region, or lifts the restriction with `None`.
    #[must_use]
    pub fn with_region_restriction(mut self, region: Option<String>) -> Self {
        self.restrict_region = region.filter(|r| !r.trim().is_empty());
        self
    }

    /// Column names this store reads.
    #[must_use]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// The region rows are restricted to, if any.
    #[must_use]
    pub fn restrict_region(&self) -> Option<&str> {
        self.restrict_region.as_deref()
    }

    /// Validates and folds every row into a dataset.
    pub fn ingest<I>(&self, rows: I) -> Dataset
    where
        I: IntoIterator,
        I::Item: FieldSource,
    {
        let mut builder = DatasetBuilder::new();
        for (row_index, row) in rows.into_iter().enumerate() {
            match self.entity_from_row(&row) {
                Ok(entity) => builder.push(entity),
                Err(reason) => {
                    tracing::trace!(row = row_index, %reason, "skipping row");
                    builder.skip(reason);
                }
            }
        }
        let dataset = builder.finish();
        let stats = dataset.stats();
        tracing::info!(
            rows = stats.rows,
            kept = stats.kept,
            skipped_coordinates = stats.skipped_coordinates,
            skipped_region = stats.skipped_region,
            skipped_year = stats.skipped_year,
            restrict_region = self.restrict_region.as_deref().unwrap_or("none"),
            "ingested dataset"
        );
        if dataset.is_empty() && stats.rows > 0 {
            tracing::warn!("no row survived ingestion; check the configured column names");
        }
        dataset
    }

    /// Validates one row.
    pub fn entity_from_row(&self, row: &impl FieldSource) -> Result<Entity, SkipReason> {
        let f = &self.fields;
        let lat = self.number(row, &f.latitude).ok_or(SkipReason::Coordinates)?;
        let lon = self.number(row, &f.longitude).ok_or(SkipReason::Coordinates)?;

        let region = present(row, &f.region).map(str::to_owned);
        if let Some(wanted) = self.restrict_region.as_deref() {
            let matches = region
                .as_deref()
                .is_some_and(|r| r.trim().eq_ignore_ascii_case(wanted.trim()));
            if !matches {
                return Err(SkipReason::Region);
            }
        }

        let year = parse_year(row.field(&f.year))
            .or_else(|| parse_year(row.field(&f.year_fallback)))
            .ok_or(SkipReason::Year)?;

        let category = present(row, &f.category)
            .or_else(|| present(row, &f.category_fallback))
            .unwrap_or_default()
            .to_owned();

        Ok(Entity {
            name: row.field(&f.name).unwrap_or_default().trim().to_owned(),
            category,
            region,
            year,
            metric_color: self.number(row, &f.metric_color),
            metric_size: self.number(row, &f.metric_size),
            lat,
            lon,
        })
    }

    /// Finite number, or `None` for absent, unavailable or unparsable values.
    fn number(&self, row: &impl FieldSource, name: &str) -> Option<f64> {
        let raw = present(row, name)?;
        if raw == self.fields.unavailable {
            return None;
        }
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Trimmed, non-empty field value.
fn present<'a>(row: &'a impl FieldSource, name: &str) -> Option<&'a str> {
    row.field(name).map(str::trim).filter(|v| !v.is_empty())
}

/// Positive whole number, so `"2022"` and `"2022.0"` both read as 2022.
#[allow(
    clippy::cast_possible_truncation,
    reason = "value is whole and checked to lie within i32"
)]
fn parse_year(raw: Option<&str>) -> Option<i32> {
    let value = raw?.trim().parse::<f64>().ok()?;
    (value.fract() == 0.0 && value > 0.0 && value <= f64::from(i32::MAX)).then(|| value as i32)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn row<'a>(pairs: &[(&'a str, &'a str)]) -> BTreeMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    fn base<'a>() -> Vec<(&'a str, &'a str)> {
        vec![
            ("Property Name", "Tower"),
            ("Borough", "MANHATTAN"),
            ("Primary Property Type - Self Selected", "Office"),
            ("Calendar Year", "2022"),
            ("Weather Normalized Site EUI (kBtu/ft²)", "88.5"),
            ("Total (Location-Based) GHG Emissions (Metric Tons CO2e)", "1200"),
            ("Latitude", "40.75"),
            ("Longitude", "-73.99"),
        ]
    }

    fn with<'a>(overrides: &[(&'a str, &'a str)]) -> BTreeMap<&'a str, &'a str> {
        let mut pairs = row(&base());
        for &(k, v) in overrides {
            pairs.insert(k, v);
        }
        pairs
    }

    #[test]
    fn valid_row_becomes_entity() {
        let store = DataStore::default();
        let entity = store.entity_from_row(&row(&base())).unwrap();
        assert_eq!(entity.name, "Tower");
        assert_eq!(entity.region.as_deref(), Some("MANHATTAN"));
        assert_eq!(entity.category, "Office");
        assert_eq!(entity.year, 2022);
        assert_eq!(entity.metric_color, Some(88.5));
        assert_eq!(entity.metric_size, Some(1200.0));
        assert_eq!((entity.lat, entity.lon), (40.75, -73.99));
    }

    #[test]
    fn bad_coordinates_are_rejected() {
        let store = DataStore::default();
        for bad in ["", "  ", "Not Available", "north", "NaN", "inf"] {
            let result = store.entity_from_row(&with(&[("Latitude", bad)]));
            assert_eq!(result, Err(SkipReason::Coordinates), "latitude {bad:?}");
            let result = store.entity_from_row(&with(&[("Longitude", bad)]));
            assert_eq!(result, Err(SkipReason::Coordinates), "longitude {bad:?}");
        }
        let mut missing = row(&base());
        missing.remove("Latitude");
        assert_eq!(store.entity_from_row(&missing), Err(SkipReason::Coordinates));
    }

    #[test]
    fn year_falls_back_to_second_field() {
        let store = DataStore::default();
        let entity = store
            .entity_from_row(&with(&[("Calendar Year", ""), ("Year Ending", "2021")]))
            .unwrap();
        assert_eq!(entity.year, 2021);

        let entity = store
            .entity_from_row(&with(&[("Calendar Year", "0"), ("Year Ending", " 2020 ")]))
            .unwrap();
        assert_eq!(entity.year, 2020);
    }

    #[test]
    fn unparsable_years_are_rejected() {
        let store = DataStore::default();
        let result = store.entity_from_row(&with(&[
            ("Calendar Year", "Not Available"),
            ("Year Ending", "12/31/2022"),
        ]));
        assert_eq!(result, Err(SkipReason::Year));

        for bad in ["-2022", "2021.5", "inf", "1e12"] {
            let result = store.entity_from_row(&with(&[("Calendar Year", bad)]));
            assert_eq!(result, Err(SkipReason::Year), "year {bad:?}");
        }
    }

    #[test]
    fn whole_decimal_years_are_accepted() {
        let store = DataStore::default();
        let entity = store
            .entity_from_row(&with(&[("Calendar Year", "2022.0")]))
            .unwrap();
        assert_eq!(entity.year, 2022);
    }

    #[test]
    fn category_falls_back_then_defaults_to_empty() {
        let store = DataStore::default();
        let entity = store
            .entity_from_row(&with(&[
                ("Primary Property Type - Self Selected", ""),
                ("Primary Property Type - Portfolio Manager-Calculated", "Hotel"),
            ]))
            .unwrap();
        assert_eq!(entity.category, "Hotel");

        let entity = store
            .entity_from_row(&with(&[("Primary Property Type - Self Selected", " ")]))
            .unwrap();
        assert_eq!(entity.category, "");
    }

    #[test]
    fn missing_metrics_stay_missing() {
        let store = DataStore::default();
        let entity = store
            .entity_from_row(&with(&[
                ("Weather Normalized Site EUI (kBtu/ft²)", "Not Available"),
                ("Total (Location-Based) GHG Emissions (Metric Tons CO2e)", ""),
            ]))
            .unwrap();
        assert_eq!(entity.metric_color, None);
        assert_eq!(entity.metric_size, None);
    }

    #[test]
    fn region_restriction_is_case_insensitive() {
        let store = DataStore::default().with_region_restriction(Some("manhattan".to_owned()));
        assert!(store.entity_from_row(&row(&base())).is_ok());
        assert_eq!(
            store.entity_from_row(&with(&[("Borough", "Brooklyn")])),
            Err(SkipReason::Region)
        );
        let mut no_region = row(&base());
        no_region.remove("Borough");
        assert_eq!(store.entity_from_row(&no_region), Err(SkipReason::Region));
    }

    #[test]
    fn blank_restriction_means_none() {
        let store = DataStore::default().with_region_restriction(Some("  ".to_owned()));
        assert_eq!(store.restrict_region(), None);
    }

    #[test]
    fn ingest_skips_and_counts() {
        let store = DataStore::default();
        let rows = vec![
            row(&base()),
            with(&[("Latitude", "Not Available")]),
            with(&[("Calendar Year", "")]),
            with(&[("Latitude", "40.70"), ("Calendar Year", "2019")]),
        ];
        let dataset = store.ingest(&rows);

        assert_eq!(dataset.len(), 2);
        let stats = dataset.stats();
        assert_eq!(stats.rows, 4);
        assert_eq!(stats.skipped_coordinates, 1);
        assert_eq!(stats.skipped_year, 1);
        let bounds = dataset.geo_bounds().unwrap();
        assert_eq!(bounds.lat.min, 40.70);
        assert_eq!(bounds.lat.max, 40.75);
        assert_eq!(dataset.year_range().min, 2019);
    }
}
