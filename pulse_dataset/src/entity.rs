// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifier for an entity within its [`crate::Dataset`].
///
/// This is the entity's position in ingestion order. It is stable for the
/// lifetime of the dataset, which never changes after load.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Index into [`crate::Dataset::entities`].
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One normalized building record.
///
/// Entities only exist for rows that passed validation: coordinates are
/// finite and `year` is positive. Metrics stay optional; encoders substitute
/// zero and display code prints a placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Property name. May be empty.
    pub name: String,
    /// Property type. Empty when neither category field had a value.
    pub category: String,
    /// Administrative grouping (borough), when the source provides one.
    pub region: Option<String>,
    /// Reporting year.
    pub year: i32,
    /// Intensity metric driving marker color (site EUI).
    pub metric_color: Option<f64>,
    /// Magnitude metric driving marker size (GHG emissions).
    pub metric_size: Option<f64>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}
