//! Integration tests for the time-series specialization: ordering,
//! nearest-timestamp lookup, and window eviction under streaming load.

use plotbuf::{PlotData, Point, Range, StringSeries, TimeSeries};

/// Deterministic pseudo-random jitter, enough to scramble arrival order.
fn jitter(seed: u64) -> f64 {
    let mixed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    #[allow(clippy::cast_precision_loss)]
    let unit = (mixed >> 33) as f64 / f64::from(u32::MAX);
    (unit - 0.5) * 2.0
}

#[test]
fn out_of_order_arrival_always_yields_sorted_storage() {
    let mut series = PlotData::new("radio/rssi", None);

    for i in 0..500_u64 {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 * 0.1 + jitter(i) * 0.3;
        series.push_back(Point::new(t, jitter(i.wrapping_add(7))));
    }

    assert_eq!(series.len(), 500);
    let stamps: Vec<f64> = series.iter().map(|p| p.x).collect();
    assert!(
        stamps.windows(2).all(|w| w[0] <= w[1]),
        "timestamps must be non-decreasing"
    );
}

#[test]
fn nearest_lookup_matches_a_linear_scan() {
    let mut series = PlotData::new("gps/speed", None);
    let stamps = [0.0, 0.4, 1.1, 1.15, 2.9, 3.0, 7.5];
    for (i, &t) in stamps.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        series.push_back(Point::new(t, i as f64));
    }

    for query in [-1.0, 0.0, 0.2, 0.21, 1.12, 2.0, 2.95, 5.0, 7.5, 100.0] {
        let found = series.get_index_from_x(query).unwrap();
        let best_distance = stamps
            .iter()
            .map(|t| (t - query).abs())
            .fold(f64::INFINITY, f64::min);
        let found_distance = (stamps[found] - query).abs();
        assert!(
            (found_distance - best_distance).abs() < 1e-12,
            "query {query}: index {found} is not nearest"
        );
    }
}

#[test]
fn streaming_with_a_window_keeps_the_span_bounded() {
    let mut series = PlotData::new("cpu/load", None);
    series.set_maximum_range_x(30.0);

    for i in 0..10_000_u32 {
        let t = f64::from(i) * 0.05;
        series.push_back(Point::new(t, f64::from(i % 100)));
    }

    assert!(series.len() >= 2);
    let span = series.back().unwrap().x - series.front().unwrap().x;
    assert!(span <= 30.0, "span {span} exceeds the window");

    // The range cache reflects only what is retained.
    let range_x = series.range_x().unwrap();
    assert_eq!(range_x.min, series.front().unwrap().x);
    assert_eq!(range_x.max, series.back().unwrap().x);
}

#[test]
fn constant_telemetry_stays_cheap_under_eviction() {
    let mut series = PlotData::new("relay/state", None);
    series.set_maximum_range_x(5.0);

    // A boolean-like channel that never changes: constant mode must hold
    // across thousands of pushes and evictions.
    for i in 0..5_000_u32 {
        series.push_back(Point::new(f64::from(i) * 0.01, 1.0));
    }

    assert_eq!(series.range_y(), Some(Range::new(1.0, 1.0)));
    assert!(series.iter().all(|p| p.y == 1.0));
}

#[test]
fn spec_example_push_and_lookup() {
    let mut series: TimeSeries<f64> = TimeSeries::new("example", None);
    series.push_back(Point::new(0.0, 1.0));
    series.push_back(Point::new(1.0, 1.0));
    series.push_back(Point::new(2.0, 5.0));

    assert_eq!(series.range_y(), Some(Range::new(1.0, 5.0)));
    assert_eq!(series.get_index_from_x(1.4), Some(1));
    assert_eq!(series.get_y_from_x(1.4), Some(1.0));
}

#[test]
fn state_channel_reports_the_active_label() {
    let mut gear = StringSeries::new("transmission/gear", None);
    gear.push_back(Point::new(0.0, "P".to_string()));
    gear.push_back(Point::new(2.0, "R".to_string()));
    gear.push_back(Point::new(4.0, "D".to_string()));

    assert_eq!(gear.get_y_from_x(0.5), Some("P".to_string()));
    assert_eq!(gear.get_y_from_x(3.9), Some("D".to_string()));
    assert_eq!(gear.range_y(), None);
    assert_eq!(gear.range_x(), Some(Range::new(0.0, 4.0)));
}
