// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible-subset filter.

use crate::dataset::Dataset;
use crate::entity::{Entity, EntityId};

/// Wildcard selector value meaning "no constraint".
pub const ALL: &str = "All";

/// Current selection from the filter controls.
///
/// Region and category are unconstrained when `None` or [`ALL`]. The year is
/// always one concrete value: the map shows a single reporting year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Region to show, or `None` / [`ALL`] for every region.
    pub region: Option<String>,
    /// Category to show, or `None` / [`ALL`] for every category.
    pub category: Option<String>,
    /// Year to show.
    pub year: i32,
}

impl FilterCriteria {
    /// Criteria matching every region and category in `year`.
    #[must_use]
    pub fn year(year: i32) -> Self {
        Self {
            region: None,
            category: None,
            year,
        }
    }

    /// Start-up criteria for a dataset: everything, in the latest year.
    #[must_use]
    pub fn initial(dataset: &Dataset) -> Self {
        Self::year(dataset.year_range().max)
    }

    /// Returns `true` if `entity` passes every constraint.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        entity.year == self.year
            && wildcard_matches(self.region.as_deref(), entity.region.as_deref())
            && wildcard_matches(self.category.as_deref(), Some(&entity.category))
    }
}

fn wildcard_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None | Some(ALL) => true,
        Some(wanted) => actual == Some(wanted),
    }
}

/// Ids of the entities passing `criteria`, in dataset order.
///
/// This is a pure function of its inputs: the same dataset and criteria
/// always produce the same sequence.
#[must_use]
pub fn compute_visible(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<EntityId> {
    dataset
        .iter()
        .filter(|(_, entity)| criteria.matches(entity))
        .map(|(id, _)| id)
        .collect()
}
