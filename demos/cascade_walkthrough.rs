use bezier_beauty::{
    bezier::{curve_point, handle_cascade},
    core::{math::Vector2, traits::FuzzyEq},
    points,
    polygon::regular_polygon,
};

fn main() {
    two_point_line();
    triangle_cascade();
    extrapolation();
}

fn two_point_line() {
    println!("Interpolating a single segment...");

    let pts = points![(0.0, 0.0), (10.0, 0.0)];
    for t in [0.0, 0.25, 0.5, 1.0] {
        let cascade = handle_cascade(&pts, t);
        let p = cascade.curve_point().expect("two points always produce a curve point");
        println!("  t = {t:.2}: ({:.2}, {:.2})", p.x, p.y);
    }

    let mid = handle_cascade(&pts, 0.5).curve_point().unwrap();
    assert!(mid.fuzzy_eq(Vector2::new(5.0, 0.0)));
}

fn triangle_cascade() {
    println!("Handle levels for a closed triangle at t = 0.3...");

    let triangle = regular_polygon(3, Vector2::new(0.0, 0.0), 1.0);
    let cascade = handle_cascade(&triangle, 0.3);
    for (i, level) in cascade.iter() {
        let formatted: Vec<_> = level
            .iter()
            .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
            .collect();
        println!("  level {i} ({} points): {}", level.len(), formatted.join(" "));
    }

    assert_eq!(cascade.level_count(), 3);
    let p = cascade.curve_point().unwrap();
    assert!(p.fuzzy_eq(curve_point(&triangle, 0.3).unwrap()));
    println!("  curve point: ({:.3}, {:.3})", p.x, p.y);

    // fewer than 2 points has nothing to interpolate
    assert!(handle_cascade(&triangle[..1], 0.3).curve_point().is_none());
    println!("  single point input: no curve point");
}

fn extrapolation() {
    println!("Parameter outside of [0, 1] extrapolates...");

    let pts = points![(0.0, 0.0), (10.0, 0.0)];
    let p = handle_cascade(&pts, 1.5).curve_point().unwrap();
    assert!(p.fuzzy_eq(Vector2::new(15.0, 0.0)));
    println!("  t = 1.50: ({:.2}, {:.2})", p.x, p.y);
}
