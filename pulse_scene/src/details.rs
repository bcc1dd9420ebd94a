// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text shown for hovered and selected entities.
//!
//! Missing metrics print as [`NOT_AVAILABLE`]; this is deliberately different
//! from the `0` the encodings substitute.

use core::fmt;

use kurbo::{Point, Vec2};
use pulse_dataset::{Entity, EntityId};

/// Placeholder for missing metric values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Offset of the tooltip's top-left corner from the pointer.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(12.0, 12.0);

/// Unit of the color metric.
pub const COLOR_METRIC_UNIT: &str = "kBtu/ft²";

/// Unit of the size metric.
pub const SIZE_METRIC_UNIT: &str = "tCO₂e";

/// A block of text: a bold title and plain lines under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoText {
    /// First line, typically the property name.
    pub title: String,
    /// Remaining lines.
    pub lines: Vec<String>,
}

impl fmt::Display for InfoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Tooltip for the hovered entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Hovered entity.
    pub id: EntityId,
    /// Top-left corner, in screen units.
    pub position: Point,
    /// Content.
    pub text: InfoText,
}

impl Tooltip {
    /// Builds the tooltip for `entity` hovered with the pointer at `pointer`.
    #[must_use]
    pub fn new(id: EntityId, entity: &Entity, pointer: Point) -> Self {
        Self {
            id,
            position: pointer + TOOLTIP_OFFSET,
            text: tooltip_text(entity),
        }
    }
}

/// Short hover text: name, category, year, metrics.
#[must_use]
pub fn tooltip_text(entity: &Entity) -> InfoText {
    InfoText {
        title: entity.name.clone(),
        lines: vec![
            entity.category.clone(),
            format!("Year: {}", entity.year),
            format!(
                "EUI: {} {COLOR_METRIC_UNIT}",
                metric(entity.metric_color, 1)
            ),
            format!("GHG: {} {SIZE_METRIC_UNIT}", metric(entity.metric_size, 2)),
        ],
    }
}

/// Details panel text for the selected entity.
#[must_use]
pub fn detail_text(entity: &Entity) -> InfoText {
    let mut lines = Vec::with_capacity(5);
    if let Some(region) = &entity.region {
        lines.push(format!("Region: {region}"));
    }
    lines.push(format!("Type: {}", entity.category));
    lines.push(format!("Year: {}", entity.year));
    lines.push(format!(
        "EUI: {} {COLOR_METRIC_UNIT}",
        metric(entity.metric_color, 2)
    ));
    lines.push(format!(
        "GHG: {} {SIZE_METRIC_UNIT}",
        metric(entity.metric_size, 2)
    ));
    InfoText {
        title: entity.name.clone(),
        lines,
    }
}

/// Legend explaining the encodings, naming the region restriction if any.
#[must_use]
pub fn legend_text(restrict_region: Option<&str>) -> InfoText {
    let mut lines = vec![
        format!("Color → EUI ({COLOR_METRIC_UNIT})"),
        "Size → Total GHG (Metric Tons CO₂e)".to_owned(),
    ];
    if let Some(region) = restrict_region {
        lines.push(format!("Region: {region}"));
    }
    InfoText {
        title: "Legend".to_owned(),
        lines,
    }
}

fn metric(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => NOT_AVAILABLE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower() -> Entity {
        Entity {
            name: "Tower".to_owned(),
            category: "Office".to_owned(),
            region: Some("MANHATTAN".to_owned()),
            year: 2022,
            metric_color: Some(88.456),
            metric_size: Some(1200.0),
            lat: 40.75,
            lon: -73.99,
        }
    }

    #[test]
    fn tooltip_formats_metrics() {
        let text = tooltip_text(&tower()).to_string();
        assert_eq!(
            text,
            "Tower\nOffice\nYear: 2022\nEUI: 88.5 kBtu/ft²\nGHG: 1200.00 tCO₂e"
        );
    }

    #[test]
    fn details_use_two_decimals_and_region() {
        let text = detail_text(&tower());
        assert_eq!(text.title, "Tower");
        assert_eq!(
            text.lines,
            [
                "Region: MANHATTAN",
                "Type: Office",
                "Year: 2022",
                "EUI: 88.46 kBtu/ft²",
                "GHG: 1200.00 tCO₂e",
            ]
        );
    }

    #[test]
    fn missing_metrics_print_placeholder() {
        let entity = Entity {
            metric_color: None,
            metric_size: None,
            region: None,
            ..tower()
        };
        let tip = tooltip_text(&entity);
        assert_eq!(tip.lines[2], "EUI: N/A kBtu/ft²");
        assert_eq!(tip.lines[3], "GHG: N/A tCO₂e");
        let details = detail_text(&entity);
        assert_eq!(details.lines[0], "Type: Office");
        assert!(details.lines.iter().all(|l| !l.contains("0.00")));
    }

    #[test]
    fn tooltip_sits_below_right_of_pointer() {
        let tip = Tooltip::new(EntityId(3), &tower(), Point::new(100.0, 50.0));
        assert_eq!(tip.position, Point::new(112.0, 62.0));
        assert_eq!(tip.id, EntityId(3));
    }

    #[test]
    fn legend_mentions_restriction() {
        assert_eq!(legend_text(None).lines.len(), 2);
        let restricted = legend_text(Some("MANHATTAN"));
        assert_eq!(restricted.lines.last().unwrap(), "Region: MANHATTAN");
    }
}
