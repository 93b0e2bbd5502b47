#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn layout() -> Layout {
    Layout::compute(840.0, 600.0)
}

// =============================================================
// to_pane_local
// =============================================================

#[test]
fn left_pane_passes_x_through() {
    let hit = to_pane_local(Point::new(100.0, 50.0), &layout());
    assert_eq!(hit, PaneHit::Pane(PanePoint::new(100.0, 50.0, Pane::Left)));
}

#[test]
fn right_pane_subtracts_offset() {
    let hit = to_pane_local(Point::new(440.5, 60.0), &layout());
    let p = hit.point().unwrap();
    assert_eq!(p.pane, Pane::Right);
    assert!(approx_eq(p.x, 0.5));
    assert_eq!(p.y, 60.0);
}

#[test]
fn gap_band_is_gap() {
    for x in [400.0, 401.0, 420.0, 439.9] {
        assert_eq!(to_pane_local(Point::new(x, 10.0), &layout()), PaneHit::Gap, "x = {x}");
    }
}

#[test]
fn right_pane_origin_maps_to_local_zero() {
    let hit = to_pane_local(Point::new(440.0, 60.0), &layout());
    assert_eq!(hit, PaneHit::Pane(PanePoint::new(0.0, 60.0, Pane::Right)));
}

#[test]
fn just_left_of_gap_is_left_pane() {
    let p = to_pane_local(Point::new(399.9, 10.0), &layout()).point().unwrap();
    assert_eq!(p.pane, Pane::Left);
}

#[test]
fn y_passes_through_unchanged() {
    let p = to_pane_local(Point::new(700.0, 123.25), &layout()).point().unwrap();
    assert_eq!(p.y, 123.25);
}

#[test]
fn out_of_surface_positions_are_clamped() {
    let p = to_pane_local(Point::new(-5.0, -3.0), &layout()).point().unwrap();
    assert_eq!(p, PanePoint::new(0.0, 0.0, Pane::Left));

    let q = to_pane_local(Point::new(900.0, 700.0), &layout()).point().unwrap();
    assert_eq!(q, PanePoint::new(400.0, 600.0, Pane::Right));
}

#[test]
fn nan_x_maps_to_gap() {
    assert_eq!(to_pane_local(Point::new(f64::NAN, 0.0), &layout()), PaneHit::Gap);
}

#[test]
fn nan_y_maps_to_gap() {
    assert_eq!(to_pane_local(Point::new(100.0, f64::NAN), &layout()), PaneHit::Gap);
    assert_eq!(to_pane_local(Point::new(500.0, f64::NAN), &layout()), PaneHit::Gap);
}

#[test]
fn infinite_coordinates_map_to_gap() {
    assert_eq!(to_pane_local(Point::new(f64::INFINITY, 10.0), &layout()), PaneHit::Gap);
    assert_eq!(to_pane_local(Point::new(100.0, f64::NEG_INFINITY), &layout()), PaneHit::Gap);
}

#[test]
fn empty_layout_has_no_panes() {
    let empty = Layout::default();
    for x in [-1.0, 0.0, 10.0, 50.0, 1000.0] {
        assert_eq!(to_pane_local(Point::new(x, 20.0), &empty), PaneHit::Gap, "x = {x}");
    }
    // Narrower than the gap.
    let narrow = Layout::compute(30.0, 100.0);
    assert_eq!(to_pane_local(Point::new(35.0, 20.0), &narrow), PaneHit::Gap);
}

#[test]
fn gap_has_no_point() {
    assert!(PaneHit::Gap.point().is_none());
}

// =============================================================
// to_surface
// =============================================================

#[test]
fn to_surface_left_is_identity() {
    let s = to_surface(PanePoint::new(12.0, 34.0, Pane::Left), &layout());
    assert_eq!(s, Point::new(12.0, 34.0));
}

#[test]
fn to_surface_right_adds_pane_and_gap() {
    let s = to_surface(PanePoint::new(0.0, 60.0, Pane::Right), &layout());
    assert_eq!(s, Point::new(440.0, 60.0));
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn round_trip_outside_gap_for_many_widths() {
    for width in [41.0, 100.0, 840.0, 1234.5] {
        let layout = Layout::compute(width, 500.0);
        let (gap_start, gap_end) = layout.gap_band();
        let steps = 200;
        for i in 0..=steps {
            let x = layout.container_width * f64::from(i) / f64::from(steps);
            if x >= gap_start && x < gap_end {
                continue;
            }
            let hit = to_pane_local(Point::new(x, 250.0), &layout);
            let local = hit.point().unwrap();
            let back = to_surface(local, &layout);
            assert!(approx_eq(back.x, x), "width {width}: {x} -> {back:?}");
            assert_eq!(back.y, 250.0);
        }
    }
}
