use dotplot::mapper::ticks;
use dotplot::{CoordinateMapper, Margins};

const TOL: f64 = 1e-9;

fn samples() -> impl Iterator<Item = f64> {
    (0..=1000).map(|i| i as f64 / 1000.0)
}

#[test]
fn x_round_trip_is_identity() {
    let m = CoordinateMapper::new(938.0, 358.0).unwrap();
    for v in samples() {
        assert!((m.to_data_x(m.to_pixel_x(v)) - v).abs() < TOL, "x round trip failed at {v}");
    }
}

#[test]
fn y_round_trip_is_identity() {
    let m = CoordinateMapper::new(938.0, 358.0).unwrap();
    for v in samples() {
        assert!((m.to_data_y(m.to_pixel_y(v)) - v).abs() < TOL, "y round trip failed at {v}");
    }
}

#[test]
fn endpoints_map_to_surface_corners() {
    let m = CoordinateMapper::new(200.0, 100.0).unwrap();
    assert_eq!(m.to_pixel([0.0, 0.0]), [0.0, 100.0]);
    assert_eq!(m.to_pixel([1.0, 1.0]), [200.0, 0.0]);
    assert_eq!(m.to_data([100.0, 50.0]), [0.5, 0.5]);
}

#[test]
fn viewport_minus_margins_gives_surface() {
    let m = CoordinateMapper::from_viewport(1000.0, 800.0, &Margins::default()).unwrap();
    assert_eq!(m.width(), 1000.0 - 31.0 - 31.0);
    assert_eq!(m.height(), 400.0 - 11.0 - 31.0);
}

#[test]
fn tiny_viewport_is_rejected() {
    assert!(CoordinateMapper::from_viewport(50.0, 60.0, &Margins::default()).is_err());
}

#[test]
fn clamp_and_contains_agree() {
    let m = CoordinateMapper::new(100.0, 100.0).unwrap();
    assert!(!m.contains_pixel([-5.0, 120.0]));
    let c = m.clamp_pixel([-5.0, 120.0]);
    assert_eq!(c, [0.0, 100.0]);
    assert!(m.contains_pixel(c));
}

#[test]
fn ten_ticks_are_evenly_spaced() {
    let t = ticks(10);
    for (i, v) in t.iter().enumerate() {
        assert!((v - i as f64 / 10.0).abs() < TOL);
    }
}
