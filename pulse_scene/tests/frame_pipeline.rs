// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV rows through ingestion, the explorer and SVG export.

use kurbo::{Point, Size};
use pulse_dataset::{DataStore, EntityId, FieldMap, Table};
use pulse_imaging_svg::SvgBackend;
use pulse_scene::{EventOutcome, Explorer, InputEvent, RenderStyle};

const SAMPLE: &str = "\
Property Name,Borough,Primary Property Type - Self Selected,Calendar Year,Weather Normalized Site EUI (kBtu/ft²),Total (Location-Based) GHG Emissions (Metric Tons CO2e),Latitude,Longitude
Low Rise,MANHATTAN,Office,2022,0,0,40.70,-74.02
High Rise,MANHATTAN,Office,2022,300,2000,40.80,-73.92
Midtown,MANHATTAN,Hotel,2022,Not Available,Not Available,40.75,-73.97
Archive,MANHATTAN,Office,2021,150,1000,40.75,-73.97
";

fn explorer() -> Explorer {
    let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
    let dataset = DataStore::new(FieldMap::default()).ingest(table.rows());
    Explorer::new(dataset, Size::new(600.0, 400.0))
}

#[test]
fn svg_frame_contains_one_circle_per_visible_marker() {
    let ex = explorer();
    assert_eq!(ex.visible().len(), 3);

    let mut svg = SvgBackend::default();
    let stats = ex.render(&RenderStyle::default(), &mut svg);
    assert_eq!(stats.drawn, 3);

    let doc = svg.to_svg(600, 400);
    assert_eq!(doc.matches("<circle").count(), 3);
    assert!(doc.contains("fill=\"#071427\""));
    // Low end of the color ramp, then the high end.
    assert!(doc.contains("fill=\"#3cb4c8\""));
    assert!(doc.contains("fill=\"#dc281e\""));
}

#[test]
fn changing_year_changes_frame() {
    let mut ex = explorer();
    ex.set_year(2021);
    let mut svg = SvgBackend::default();
    ex.render(&RenderStyle::default(), &mut svg);
    assert_eq!(svg.to_svg(600, 400).matches("<circle").count(), 1);
}

#[test]
fn hovering_and_clicking_through_events() {
    let mut ex = explorer();
    let midtown = ex.projector().project(40.75, -73.97).unwrap();
    assert!((midtown - Point::new(300.0, 200.0)).hypot() < 1e-6);

    assert_eq!(
        ex.on_event(InputEvent::Move(midtown)),
        EventOutcome::HoverChanged(Some(EntityId(2)))
    );
    let tip = ex.tooltip().unwrap().text.to_string();
    assert!(tip.contains("EUI: N/A kBtu/ft²"), "{tip}");

    ex.on_event(InputEvent::Down(midtown));
    assert_eq!(
        ex.on_event(InputEvent::Up(midtown)),
        EventOutcome::Selected(EntityId(2))
    );
    let details = ex.details().unwrap();
    assert_eq!(details.title, "Midtown");
    assert!(details.lines.contains(&"GHG: N/A tCO₂e".to_owned()));
}
