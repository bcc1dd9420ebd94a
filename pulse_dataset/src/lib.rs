// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Energy Pulse Dataset: building records from raw tables, and the filter
//! that picks which of them are on the map.
//!
//! The crate covers the data side of the scatter plot:
//!
//! - [`Table`]: a header-indexed table read from CSV. Rows are looked up by
//!   field name through the [`FieldSource`] trait, which string maps also
//!   implement, so any loader can feed ingestion.
//! - [`DataStore`]: validates and normalizes rows into [`Entity`] records and
//!   folds them into a [`Dataset`] with coordinate bounds, a year range and
//!   category / region vocabularies. Bad rows are skipped, never fatal.
//! - [`FilterCriteria`] and [`compute_visible`]: the pure filter producing the
//!   visible subset for the current region / category / year selection.
//!
//! ## Example
//!
//! ```rust
//! use pulse_dataset::{compute_visible, DataStore, FieldMap, FilterCriteria, Table};
//!
//! let csv = "\
//! Property Name,Borough,Primary Property Type - Self Selected,Calendar Year,Latitude,Longitude
//! Tower A,MANHATTAN,Office,2022,40.75,-73.99
//! Tower B,MANHATTAN,Office,2021,40.76,-73.98
//! Lot C,BROOKLYN,Hotel,2022,Not Available,-73.95
//! ";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//! let dataset = DataStore::new(FieldMap::default()).ingest(table.rows());
//!
//! // The row with an unavailable latitude never becomes an entity.
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.year_range().max, 2022);
//!
//! let criteria = FilterCriteria::initial(&dataset);
//! let visible = compute_visible(&dataset, &criteria);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(dataset[visible[0]].name, "Tower A");
//! ```
//!
//! Ingestion reports what it kept and skipped through `tracing`.

mod dataset;
mod entity;
mod fields;
mod filter;
mod ingest;
mod table;

pub use dataset::{
    DEFAULT_YEAR_RANGE, Dataset, DatasetBuilder, GeoBounds, IngestStats, SkipReason, Span,
    validate_entity,
};
pub use entity::{Entity, EntityId};
pub use fields::{FieldMap, FieldSource, UNAVAILABLE};
pub use filter::{ALL, FilterCriteria, compute_visible};
pub use ingest::DataStore;
pub use table::{LoadError, Row, Table};
