use bezier_beauty::{
    assert_fuzzy_eq,
    bezier::{curve_point, handle_cascade},
    core::math::Vector2,
    points,
};

#[test]
fn empty_input() {
    let cascade = handle_cascade::<f64>(&[], 0.5);
    assert!(cascade.is_empty());
    assert_eq!(cascade.level_count(), 0);
    assert_eq!(cascade.curve_point(), None);
}

#[test]
fn single_point_input() {
    let pts = points![(3.0, 4.0)];
    let cascade = handle_cascade(&pts, 0.5);
    assert_eq!(cascade.level_count(), 1);
    assert_eq!(cascade.levels()[0], pts);
    assert_eq!(cascade.curve_point(), None);
}

#[test]
fn two_points_at_zero_is_first_point() {
    let pts = points![(2.0, 7.0), (9.0, -3.0)];
    let cascade = handle_cascade(&pts, 0.0);
    assert_eq!(cascade.curve_point(), Some(Vector2::new(2.0, 7.0)));
}

#[test]
fn two_points_at_half() {
    let pts = points![(0.0, 0.0), (10.0, 0.0)];
    let cascade = handle_cascade(&pts, 0.5);
    assert_eq!(cascade.level_count(), 1);
    assert_eq!(cascade.levels()[0], pts);
    assert_eq!(cascade.curve_point(), Some(Vector2::new(5.0, 0.0)));
}

#[test]
fn level_lengths_shrink_by_one() {
    for n in 1..=10 {
        let pts: Vec<_> = (0..n)
            .map(|i| Vector2::new(i as f64, (i * i) as f64))
            .collect();
        let cascade = handle_cascade(&pts, 0.37);
        assert_eq!(cascade.level_count(), (n - 1).max(1), "input length {n}");
        for (i, level) in cascade.iter() {
            assert_eq!(level.len(), n - i, "input length {n}, level {i}");
        }
        assert_eq!(cascade.curve_point().is_some(), n >= 2);
    }
}

#[test]
fn quadratic_matches_bernstein_form() {
    let p0 = Vector2::new(0.0, 0.0);
    let p1 = Vector2::new(4.0, 8.0);
    let p2 = Vector2::new(8.0, 0.0);
    let t = 0.3;
    let cascade = handle_cascade(&[p0, p1, p2], t);

    let mt = 1.0 - t;
    let expected = Vector2::new(
        mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x,
        mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y,
    );
    assert_fuzzy_eq!(cascade.curve_point().unwrap(), expected);
    // intermediate level is the two lerped handle points
    assert_fuzzy_eq!(cascade.levels()[1][0], Vector2::new(1.2, 2.4));
    assert_fuzzy_eq!(cascade.levels()[1][1], Vector2::new(5.2, 5.6));
}

#[test]
fn curve_point_interpolates_last_level() {
    let pts = points![(0.0, 300.0), (-260.0, -150.0), (260.0, -150.0), (0.0, 300.0)];
    for &t in &[0.0, 0.25, 0.5, 0.9, 1.0] {
        let cascade = handle_cascade(&pts, t);
        let last = cascade.levels().last().unwrap();
        assert_eq!(last.len(), 2);
        assert_eq!(cascade.curve_point(), Some(last[0].lerp(last[1], t)));
    }
}

#[test]
fn cascade_stops_at_two_point_level() {
    let pts = points![(0.0, 0.0), (4.0, 8.0), (8.0, 0.0)];
    let cascade = handle_cascade(&pts, 0.5);
    assert_eq!(cascade.level_count(), 2);
    assert_eq!(cascade.levels()[1].len(), 2);
    assert!(cascade.levels().iter().all(|level| level.len() >= 2));

    // closed 9 sided polygon has 10 points, levels run 10 down to 2
    let pts: Vec<_> = (0..10).map(|i| Vector2::new(i as f64, 0.0)).collect();
    let cascade = handle_cascade(&pts, 0.5);
    assert_eq!(cascade.level_count(), 9);
    assert_eq!(cascade.levels().last().unwrap().len(), 2);
}

#[test]
fn t_is_not_clamped() {
    let pts = points![(0.0, 0.0), (10.0, 0.0)];
    let cascade = handle_cascade(&pts, 1.5);
    assert_fuzzy_eq!(cascade.curve_point().unwrap(), Vector2::new(15.0, 0.0));
    let cascade = handle_cascade(&pts, -0.5);
    assert_fuzzy_eq!(cascade.curve_point().unwrap(), Vector2::new(-5.0, 0.0));
}

#[test]
fn closed_loop_endpoints() {
    // closed control polygon starts and ends the curve at the same vertex
    let pts = points![(0.0, 1.0), (-1.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    assert_fuzzy_eq!(handle_cascade(&pts, 0.0).curve_point().unwrap(), pts[0]);
    assert_fuzzy_eq!(handle_cascade(&pts, 1.0).curve_point().unwrap(), pts[0]);
}

#[test]
fn curve_point_only_matches_cascade() {
    let pts = points![(1.0, 2.0), (5.0, 9.0), (7.0, -4.0), (12.0, 3.0), (1.0, 2.0)];
    for &t in &[0.0, 0.1, 0.5, 0.77, 1.0, 1.01] {
        let expected = handle_cascade(&pts, t).curve_point().unwrap();
        assert_fuzzy_eq!(curve_point(&pts, t).unwrap(), expected);
    }
    assert_eq!(curve_point(&pts[..1], 0.5), None);
}

#[test]
fn input_level_is_copied_unchanged() {
    let pts = points![(1.0, 1.0), (2.0, 3.0), (4.0, 1.0)];
    let cascade = handle_cascade(&pts, 0.6);
    assert_eq!(cascade.levels()[0], pts);
    let (levels, point) = cascade.into_parts();
    assert_eq!(levels.len(), 2);
    assert!(point.is_some());
}
