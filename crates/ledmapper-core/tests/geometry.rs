use ledmapper_core::{
    clockwise_ordering, distance, fill_gaps, perimeter_length, resample_to_count, sort_clockwise,
    unique_vertices, Vertex,
};
use std::cmp::Ordering;

#[test]
fn test_distance() {
    assert_eq!(distance(Vertex::new(0.0, 0.0), Vertex::new(3.0, 4.0)), 5.0);
    assert_eq!(Vertex::new(1.0, 1.0).distance_to(&Vertex::new(1.0, 1.0)), 0.0);
}

#[test]
fn test_clockwise_starts_on_right_ray() {
    let center = Vertex::new(0.0, 0.0);
    let mut points = vec![
        Vertex::new(0.0, -1.0), // up
        Vertex::new(-1.0, 0.0), // left
        Vertex::new(0.0, 1.0),  // down
        Vertex::new(1.0, 0.0),  // right
    ];
    sort_clockwise(&mut points, center, |v| *v);

    assert_eq!(
        points,
        vec![
            Vertex::new(1.0, 0.0),
            Vertex::new(0.0, 1.0),
            Vertex::new(-1.0, 0.0),
            Vertex::new(0.0, -1.0),
        ]
    );
}

#[test]
fn test_clockwise_collinear_closer_first() {
    let center = Vertex::new(0.0, 0.0);
    let near = Vertex::new(1.0, 1.0);
    let far = Vertex::new(2.0, 2.0);
    assert_eq!(clockwise_ordering(near, far, center), Ordering::Less);
    assert_eq!(clockwise_ordering(far, near, center), Ordering::Greater);
}

#[test]
fn test_perimeter_length() {
    let square = vec![
        Vertex::new(0.0, 0.0),
        Vertex::new(2.0, 0.0),
        Vertex::new(2.0, 2.0),
        Vertex::new(0.0, 2.0),
    ];
    assert_eq!(perimeter_length(&square, false), 6.0);
    assert_eq!(perimeter_length(&square, true), 8.0);
    assert_eq!(perimeter_length(&[], true), 0.0);
}

#[test]
fn test_fill_gaps_limits_step() {
    let raw = vec![Vertex::new(0.0, 0.0), Vertex::new(4.0, 0.0)];
    let filled = fill_gaps(&raw, 1.0);

    assert_eq!(filled.len(), 5);
    assert!(filled.windows(2).all(|w| distance(w[0], w[1]) <= 1.0 + 1e-9));
    assert_eq!(filled.last(), Some(&Vertex::new(4.0, 0.0)));
}

#[test]
fn test_fill_gaps_leaves_close_points() {
    let raw = vec![Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0), Vertex::new(1.0, 1.0)];
    assert_eq!(fill_gaps(&raw, 1.0), raw);
    assert_eq!(fill_gaps(&raw, 0.0), raw);
}

#[test]
fn test_unique_vertices_keeps_first_seen_order() {
    let raw = vec![
        Vertex::new(1.0, 1.0),
        Vertex::new(0.0, 0.0),
        Vertex::new(1.0, 1.0),
        Vertex::new(2.0, 0.0),
        Vertex::new(0.0, 0.0),
    ];
    assert_eq!(
        unique_vertices(&raw),
        vec![Vertex::new(1.0, 1.0), Vertex::new(0.0, 0.0), Vertex::new(2.0, 0.0)]
    );
}

#[test]
fn test_resample_to_count_returns_distinct_vertices() {
    let ring: Vec<Vertex> = (0..40)
        .map(|i| {
            let angle = i as f64 / 40.0 * std::f64::consts::TAU;
            Vertex::new(angle.cos() * 10.0, angle.sin() * 10.0)
        })
        .collect();

    let picked = resample_to_count(&ring, 8);
    assert_eq!(picked.len(), 8);
    assert_eq!(unique_vertices(&picked).len(), 8);
    assert_eq!(resample_to_count(&ring, 100).len(), 40);
}
