use crate::geom::{ParametricCurve, Point3, RailSpline, Tolerance, Vec3};

#[test]
fn empty_spline_is_degenerate() {
    let spline = RailSpline::new();
    assert_eq!(spline.arc_length(), 0.0);
    assert_eq!(spline.position_at(0.5), Point3::ORIGIN);
    assert!(spline.tangent_at(0.5).is_none());
    assert_eq!(spline.key_at_distance(10.0), 0.0);
}

#[test]
fn single_point_spline_evaluates_to_that_point() {
    let spline = RailSpline::with_points(vec![Point3::new(3.0, 4.0, 5.0)], false);
    assert_eq!(spline.arc_length(), 0.0);
    assert_eq!(spline.position_at(0.0), Point3::new(3.0, 4.0, 5.0));
    assert_eq!(spline.position_at(1.0), Point3::new(3.0, 4.0, 5.0));
}

#[test]
fn straight_spline_arc_length_matches_chord() {
    let spline = RailSpline::with_points(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ],
        false,
    );
    assert!((spline.arc_length() - 10.0).abs() < 1e-9);
    assert!(Tolerance::LOOSE.approx_eq_point3(spline.position_at(0.0), Point3::ORIGIN));
    assert!(Tolerance::LOOSE.approx_eq_point3(spline.position_at(1.0), Point3::new(10.0, 0.0, 0.0)));
}

#[test]
fn key_at_distance_lands_near_midpoint() {
    let spline = RailSpline::with_points(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        ],
        false,
    );
    let key = spline.key_at_distance(spline.arc_length() * 0.5);
    let midpoint = spline.position_at(key);
    assert!((midpoint.x - 5.0).abs() < 0.05);
    assert!(midpoint.y.abs() < 1e-9);
    assert!(midpoint.z.abs() < 1e-9);
}

#[test]
fn key_at_distance_saturates_at_domain_ends() {
    let spline = RailSpline::with_points(
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)],
        false,
    );
    assert_eq!(spline.key_at_distance(-5.0), 0.0);
    assert_eq!(spline.key_at_distance(1e6), 1.0);
}

#[test]
fn straight_spline_orientation_has_forward_x_up_z() {
    let spline = RailSpline::with_points(
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0)],
        false,
    );
    let rotation = spline.orientation_at(0.5);
    assert!(Tolerance::LOOSE.approx_eq_vec3(rotation.forward_vector(), Vec3::X));
    assert!(Tolerance::LOOSE.approx_eq_vec3(rotation.up_vector(), Vec3::Z));
}

#[test]
fn vertical_spline_orientation_stays_orthonormal() {
    let spline = RailSpline::with_points(
        vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)],
        false,
    );
    let rotation = spline.orientation_at(0.5);
    let forward = rotation.forward_vector();
    let up = rotation.up_vector();
    assert!((forward.length() - 1.0).abs() < 1e-9);
    assert!((up.length() - 1.0).abs() < 1e-9);
    assert!(forward.dot(up).abs() < 1e-9);
    assert!(Tolerance::LOOSE.approx_eq_vec3(forward, Vec3::Z));
}

#[test]
fn closed_spline_wraps_around() {
    let spline = RailSpline::with_points(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        ],
        true,
    );
    assert!(spline.is_closed());
    assert!(
        Tolerance::LOOSE.approx_eq_point3(spline.position_at(0.0), spline.position_at(1.0)),
        "closed spline should return to its start"
    );
    // The loop is longer than any single side.
    assert!(spline.arc_length() > 30.0);
}

#[test]
fn interpolates_through_control_points() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 5.0, 0.0),
        Point3::new(20.0, 0.0, 3.0),
        Point3::new(30.0, -5.0, 0.0),
    ];
    let spline = RailSpline::with_points(points.clone(), false);
    let segments = points.len() - 1;
    for (i, expected) in points.iter().enumerate() {
        let key = i as f64 / segments as f64;
        assert!(
            Tolerance::LOOSE.approx_eq_point3(spline.position_at(key), *expected),
            "control point {i} not interpolated"
        );
    }
}

#[test]
fn rebuild_after_point_edits_updates_length() {
    let mut spline = RailSpline::new();
    spline.add_point(Point3::new(0.0, 0.0, 0.0));
    spline.add_point(Point3::new(10.0, 0.0, 0.0));
    spline.rebuild();
    let before = spline.arc_length();

    spline.add_point(Point3::new(20.0, 0.0, 0.0));
    spline.rebuild();
    assert!(spline.arc_length() > before);

    spline.clear_points();
    assert_eq!(spline.arc_length(), 0.0);
    assert_eq!(spline.point_count(), 0);
}
