//! Integration tests for the generic series container and its metadata.

use std::rc::Rc;

use plotbuf::{
    AttributeValue, Attributes, PlotAttribute, PlotGroup, PlotSeries, Point, Range, Rgba,
};

#[test]
fn constant_run_materializes_transparently() {
    let mut series: PlotSeries<f64, f64> = PlotSeries::new("brake/pressure", None);

    // A long flat run stays in constant storage.
    for i in 0..1000 {
        series.push_back(Point::new(f64::from(i) * 0.01, 3.0));
    }
    assert_eq!(series.len(), 1000);
    assert_eq!(series.range_y(), Some(Range::new(3.0, 3.0)));

    // The first differing value backfills every earlier point.
    series.push_back(Point::new(10.0, 4.0));
    assert_eq!(series.range_y(), Some(Range::new(3.0, 4.0)));
    assert_eq!(series.at(0).unwrap().y, 3.0);
    assert_eq!(series.at(999).unwrap().y, 3.0);
    assert_eq!(series.back().unwrap().y, 4.0);

    // Iteration agrees with indexed access on both sides of the transition.
    let seen: Vec<f64> = series.iter().map(|p| p.y).collect();
    assert_eq!(seen.len(), 1001);
    assert!(seen[..1000].iter().all(|&y| y == 3.0));
    assert_eq!(seen[1000], 4.0);
}

#[test]
fn range_caches_survive_mixed_mutation() {
    let mut series: PlotSeries<f64, f64> = PlotSeries::new("imu/accel_z", None);
    series.push_back(Point::new(0.0, -9.8));
    series.push_back(Point::new(1.0, -9.6));
    series.push_back(Point::new(2.0, -10.1));
    series.push_back(Point::new(3.0, -9.7));

    assert_eq!(series.range_y(), Some(Range::new(-10.1, -9.6)));

    // Replacing the minimum forces the next read to rescan.
    series.set_point(2, Point::new(2.0, -9.9)).unwrap();
    assert_eq!(series.range_y(), Some(Range::new(-9.9, -9.6)));

    // Removing the front (an x extremum by definition) rescans x too.
    series.pop_front();
    assert_eq!(series.range_x(), Some(Range::new(1.0, 3.0)));
    assert_eq!(series.len(), 3);
}

#[test]
fn groups_are_shared_across_series_and_outlive_them() {
    let group = PlotGroup::shared("can_bus");
    group
        .borrow_mut()
        .set_attribute(
            PlotAttribute::ToolTip,
            AttributeValue::Text("decoded from CAN frame 0x1A2".to_string()),
        )
        .unwrap();

    let rpm: PlotSeries<f64, f64> = PlotSeries::new("engine/rpm", Some(Rc::clone(&group)));
    let temp: PlotSeries<f64, f64> = PlotSeries::new("engine/temp", Some(Rc::clone(&group)));

    assert_eq!(rpm.group().unwrap().borrow().name(), "can_bus");
    assert_eq!(temp.group().unwrap().borrow().name(), "can_bus");

    // Dropping one sibling (and the original handle) leaves the group alive.
    drop(rpm);
    drop(group);
    assert_eq!(
        temp.group()
            .unwrap()
            .borrow()
            .attribute(PlotAttribute::ToolTip),
        Some(AttributeValue::Text(
            "decoded from CAN frame 0x1A2".to_string()
        ))
    );
}

#[test]
fn series_attributes_validate_and_report_kind_mismatches() {
    let mut series: PlotSeries<f64, f64> = PlotSeries::new("engine/rpm", None);

    series
        .set_attribute(
            PlotAttribute::ColorHint,
            AttributeValue::Color(Rgba::opaque(220, 60, 30)),
        )
        .unwrap();
    series
        .set_attribute(PlotAttribute::ItalicFonts, AttributeValue::Bool(true))
        .unwrap();

    let err = series
        .set_attribute(
            PlotAttribute::ColorHint,
            AttributeValue::Text("red".to_string()),
        )
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("ColorHint"), "unexpected message: {message}");

    // The failed assignment did not clobber the stored color.
    assert_eq!(
        series.attribute(PlotAttribute::ColorHint),
        Some(AttributeValue::Color(Rgba::opaque(220, 60, 30)))
    );
}

#[test]
fn display_metadata_round_trips_through_json() {
    // The embedding application saves display metadata with its session
    // file; the attribute types must survive serde.
    let mut attributes = Attributes::new();
    attributes.insert(
        PlotAttribute::TextColor,
        AttributeValue::Color(Rgba::opaque(10, 20, 30)),
    );
    attributes.insert(PlotAttribute::ItalicFonts, AttributeValue::Bool(true));
    attributes.insert(
        PlotAttribute::ToolTip,
        AttributeValue::Text("cabin temperature".to_string()),
    );

    let json = serde_json::to_string(&attributes).unwrap();
    let restored: Attributes = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, attributes);
}

#[test]
fn opaque_samples_force_variable_storage_and_no_ranges() {
    // A payload type with no equality and no scalar view: the series must
    // store every value individually and answer no range.
    #[derive(Debug, Clone, PartialEq)]
    struct Blob(Vec<u8>);

    impl plotbuf::Sample for Blob {}

    let mut series: PlotSeries<f64, Blob> = PlotSeries::new("raw/frames", None);
    series.push_back(Point::new(0.0, Blob(vec![1, 2])));
    series.push_back(Point::new(1.0, Blob(vec![1, 2])));

    assert_eq!(series.len(), 2);
    assert_eq!(series.range_y(), None);
    assert_eq!(series.at(0).unwrap().y, Blob(vec![1, 2]));
    assert_eq!(series.at(1).unwrap().y, Blob(vec![1, 2]));
}
