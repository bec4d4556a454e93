use pretty_assertions::assert_eq;
use shared_ui::chart::{area_path, donut_arcs, format_tick, BandScale, LinearScale, Point};
use std::f64::consts::TAU;

use crate::common::*;

#[test]
fn linear_scale_maps_domain_ends_to_range_ends() {
    let scale = LinearScale::new((20.0, 45.0), (260.0, 20.0));
    assert_close(scale.map(20.0), 260.0);
    assert_close(scale.map(45.0), 20.0);
    assert_close(scale.map(32.5), 140.0);
}

#[test]
fn nice_domain_covers_the_data() {
    let scale = LinearScale::new((20.0, 45.0), (0.0, 100.0)).nice(5);
    assert!(scale.domain.0 <= 20.0);
    assert!(scale.domain.1 >= 45.0);
    let labels: Vec<String> = scale.ticks(5).into_iter().map(format_tick).collect();
    assert_eq!(labels, vec!["20", "25", "30", "35", "40", "45"]);
}

#[test]
fn donut_arcs_cover_the_full_circle() {
    let arcs = donut_arcs(&[120.0, 80.0, 48.0], 60.0, 100.0);
    assert_eq!(arcs.len(), 3);
    assert_close(arcs[0].start_angle, 0.0);
    assert_close(arcs[2].end_angle, TAU);
    for pair in arcs.windows(2) {
        assert_close(pair[0].end_angle, pair[1].start_angle);
    }
}

#[test]
fn area_path_closes_on_the_baseline() {
    let points = [Point::new(0.0, 50.0), Point::new(10.0, 20.0), Point::new(20.0, 35.0)];
    let path = area_path(&points, 100.0);
    assert!(path.starts_with("M0.00,50.00"));
    assert!(path.ends_with("L20.00,100.00 L0.00,100.00 Z"));
}

#[test]
fn bands_fit_inside_the_range() {
    let bands = BandScale::new(5, (0.0, 200.0), 0.2);
    let last = bands.position(4) + bands.bandwidth();
    assert!(bands.position(0) > 0.0);
    assert!(last < 200.0);
    assert_close(200.0 - last, bands.position(0));
}
