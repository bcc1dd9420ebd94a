// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The loaded dataset and the ranges derived from it.

use core::fmt;
use core::ops::Index;

use hashbrown::HashSet;

use crate::entity::{Entity, EntityId};
use crate::filter::ALL;

/// Year range reported when no row survives ingestion, so that year pickers
/// still have usable bounds.
pub const DEFAULT_YEAR_RANGE: Span<i32> = Span {
    min: 2018,
    max: 2023,
};

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<T> {
    /// Lower bound.
    pub min: T,
    /// Upper bound.
    pub max: T,
}

impl<T: Copy + PartialOrd> Span<T> {
    /// A span containing only `v`.
    #[must_use]
    pub fn point(v: T) -> Self {
        Self { min: v, max: v }
    }

    /// Grows the span to contain `v`.
    pub fn include(&mut self, v: T) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }

    /// Returns `true` if `v` lies within the span.
    #[must_use]
    pub fn contains(&self, v: T) -> bool {
        self.min <= v && v <= self.max
    }

    /// Returns `true` if the span has zero width.
    ///
    /// Projection across a degenerate span would divide by zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min >= self.max
    }
}

/// Latitude and longitude extent of a dataset, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    /// Latitude extent.
    pub lat: Span<f64>,
    /// Longitude extent.
    pub lon: Span<f64>,
}

impl GeoBounds {
    /// Returns `true` if either axis has zero width.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lat.is_degenerate() || self.lon.is_degenerate()
    }
}

/// Why a row did not become an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Latitude or longitude missing, unavailable, non-numeric or non-finite.
    Coordinates,
    /// Row belongs to a region other than the configured restriction.
    Region,
    /// Neither year field holds a positive whole number.
    Year,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Coordinates => "invalid coordinates",
            Self::Region => "outside restricted region",
            Self::Year => "no valid year",
        })
    }
}

/// Row accounting for one ingestion pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Rows offered to ingestion.
    pub rows: usize,
    /// Rows that became entities.
    pub kept: usize,
    /// Rows dropped for bad coordinates.
    pub skipped_coordinates: usize,
    /// Rows dropped by the region restriction.
    pub skipped_region: usize,
    /// Rows dropped for a missing or invalid year.
    pub skipped_year: usize,
}

impl IngestStats {
    /// Total number of dropped rows.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped_coordinates + self.skipped_region + self.skipped_year
    }
}

/// Immutable set of entities plus the invariants derived from them at load.
#[derive(Clone, Debug)]
pub struct Dataset {
    entities: Vec<Entity>,
    geo_bounds: Option<GeoBounds>,
    year_range: Span<i32>,
    categories: Vec<String>,
    regions: Vec<String>,
    stats: IngestStats,
}

impl Dataset {
    /// All entities in ingestion order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no row survived ingestion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Looks up an entity.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Iterates entities with their ids, in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter().enumerate().map(|(i, e)| (id_for(i), e))
    }

    /// Coordinate extent, or `None` for an empty dataset.
    #[must_use]
    pub fn geo_bounds(&self) -> Option<GeoBounds> {
        self.geo_bounds
    }

    /// Extent of entity years, or [`DEFAULT_YEAR_RANGE`] for an empty dataset.
    #[must_use]
    pub fn year_range(&self) -> Span<i32> {
        self.year_range
    }

    /// Category vocabulary: [`ALL`] followed by the distinct non-empty
    /// categories in sorted order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Region vocabulary: [`ALL`] followed by the distinct regions in sorted order.
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// What ingestion kept and dropped.
    #[must_use]
    pub fn stats(&self) -> IngestStats {
        self.stats
    }
}

impl Index<EntityId> for Dataset {
    type Output = Entity;

    fn index(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "datasets are bounded far below u32::MAX entities"
)]
fn id_for(index: usize) -> EntityId {
    EntityId(index as u32)
}

/// Folds entities into a [`Dataset`].
///
/// [`crate::DataStore`] drives this; it is public so that loaders with their
/// own row format can build datasets with the same derived invariants. Every
/// pushed entity is checked with [`validate_entity`]; rejected ones are
/// counted as skipped and never enter the dataset.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    entities: Vec<Entity>,
    lat: Option<Span<f64>>,
    lon: Option<Span<f64>>,
    years: Option<Span<i32>>,
    categories: HashSet<String>,
    regions: HashSet<String>,
    stats: IngestStats,
}

impl DatasetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity and folds it into the ranges and vocabularies.
    ///
    /// An entity failing [`validate_entity`] is recorded with [`Self::skip`]
    /// instead; use [`Self::try_push`] to learn which.
    pub fn push(&mut self, entity: Entity) {
        let _ = self.try_push(entity);
    }

    /// Like [`Self::push`], returning the new id or the rejection reason.
    pub fn try_push(&mut self, entity: Entity) -> Result<EntityId, SkipReason> {
        if let Err(reason) = validate_entity(&entity) {
            tracing::debug!(name = %entity.name, %reason, "rejected entity");
            self.skip(reason);
            return Err(reason);
        }
        let id = id_for(self.entities.len());
        grow(&mut self.lat, entity.lat);
        grow(&mut self.lon, entity.lon);
        grow(&mut self.years, entity.year);
        if !entity.category.is_empty() && !self.categories.contains(&entity.category) {
            self.categories.insert(entity.category.clone());
        }
        if let Some(region) = entity.region.as_ref().filter(|r| !self.regions.contains(*r)) {
            self.regions.insert(region.clone());
        }
        self.stats.rows += 1;
        self.stats.kept += 1;
        self.entities.push(entity);
        Ok(id)
    }

    /// Records a dropped row.
    pub fn skip(&mut self, reason: SkipReason) {
        self.stats.rows += 1;
        match reason {
            SkipReason::Coordinates => self.stats.skipped_coordinates += 1,
            SkipReason::Region => self.stats.skipped_region += 1,
            SkipReason::Year => self.stats.skipped_year += 1,
        }
    }

    /// Finishes the dataset.
    #[must_use]
    pub fn finish(self) -> Dataset {
        let geo_bounds = match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoBounds { lat, lon }),
            _ => None,
        };
        Dataset {
            entities: self.entities,
            geo_bounds,
            year_range: self.years.unwrap_or(DEFAULT_YEAR_RANGE),
            categories: vocabulary(self.categories),
            regions: vocabulary(self.regions),
            stats: self.stats,
        }
    }
}

/// Checks the fields every entity must carry: finite coordinates and a
/// positive year.
pub fn validate_entity(entity: &Entity) -> Result<(), SkipReason> {
    if !(entity.lat.is_finite() && entity.lon.is_finite()) {
        return Err(SkipReason::Coordinates);
    }
    if entity.year <= 0 {
        return Err(SkipReason::Year);
    }
    Ok(())
}

fn grow<T: Copy + PartialOrd>(span: &mut Option<Span<T>>, v: T) {
    match span {
        Some(span) => span.include(v),
        None => *span = Some(Span::point(v)),
    }
}

fn vocabulary(values: HashSet<String>) -> Vec<String> {
    let mut sorted: Vec<String> = values.into_iter().filter(|v| v != ALL).collect();
    sorted.sort_unstable();
    let mut out = Vec::with_capacity(sorted.len() + 1);
    out.push(ALL.to_owned());
    out.extend(sorted);
    out
}
