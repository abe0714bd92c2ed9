//! Vertex geometry helpers.
//!
//! Screen convention throughout: `x` grows to the right and `y` grows
//! downward, so "clockwise" means clockwise as seen on screen.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A 2D point, either in image pixel space or in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// Creates a new vertex with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another vertex.
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        distance(*self, *other)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Integer cell this vertex falls into.
    pub fn floor_cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two vertices.
pub fn distance(a: Vertex, b: Vertex) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Clockwise comparator around `center`, starting on the ray pointing right.
///
/// 1. Half-plane: points below the horizontal through `center`, plus the
///    rightward ray itself, come before points above it.
/// 2. Within a half-plane, the sign of the cross product
///    `(center→a) × (center→b)` decides; positive means `a` comes first.
/// 3. Collinear points: closer to `center` comes first.
pub fn clockwise_ordering(a: Vertex, b: Vertex, center: Vertex) -> Ordering {
    let (ax, ay) = (a.x - center.x, a.y - center.y);
    let (bx, by) = (b.x - center.x, b.y - center.y);

    let half = |dx: f64, dy: f64| -> u8 {
        if dy > 0.0 || (dy == 0.0 && dx >= 0.0) {
            0
        } else {
            1
        }
    };

    half(ax, ay)
        .cmp(&half(bx, by))
        .then_with(|| {
            let cross = ax * by - bx * ay;
            if cross > 0.0 {
                Ordering::Less
            } else if cross < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| {
            let da = ax * ax + ay * ay;
            let db = bx * bx + by * by;
            da.partial_cmp(&db).unwrap_or(Ordering::Equal)
        })
}

/// Sorts `items` clockwise around `center` using [`clockwise_ordering`].
///
/// The sort is stable, so items at identical positions keep their order.
pub fn sort_clockwise<T, F>(items: &mut [T], center: Vertex, position: F)
where
    F: Fn(&T) -> Vertex,
{
    items.sort_by(|a, b| clockwise_ordering(position(a), position(b), center));
}

/// Total length of the polyline, including the closing edge when `closed`.
pub fn perimeter_length(vertices: &[Vertex], closed: bool) -> f64 {
    let open: f64 = vertices.windows(2).map(|w| distance(w[0], w[1])).sum();
    match (closed, vertices.first(), vertices.last()) {
        (true, Some(first), Some(last)) if vertices.len() > 2 => open + distance(*last, *first),
        _ => open,
    }
}

/// Inserts evenly spaced points so consecutive vertices are never farther
/// apart than `max_step`.
///
/// A non-positive or non-finite `max_step` leaves the input untouched.
pub fn fill_gaps(vertices: &[Vertex], max_step: f64) -> Vec<Vertex> {
    if !(max_step.is_finite() && max_step > 0.0) {
        return vertices.to_vec();
    }

    let mut filled = Vec::with_capacity(vertices.len());
    for pair in vertices.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        filled.push(a);

        let gap = distance(a, b);
        if gap > max_step {
            let steps = (gap / max_step).ceil() as usize;
            for i in 1..steps {
                filled.push(a.lerp(&b, i as f64 / steps as f64));
            }
        }
    }
    if let Some(last) = vertices.last() {
        filled.push(*last);
    }
    filled
}

/// Drops repeated vertices, keeping the first occurrence of each.
pub fn unique_vertices(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut seen = std::collections::HashSet::new();
    vertices
        .iter()
        .filter(|v| seen.insert((v.x.to_bits(), v.y.to_bits())))
        .copied()
        .collect()
}

/// Picks `count` vertices spread evenly by arc length along the polyline.
///
/// The picks are distinct input vertices in their original order, so a
/// duplicate-free input stays duplicate-free. When `count` is not smaller
/// than the input length the input is returned as is.
pub fn resample_to_count(vertices: &[Vertex], count: usize) -> Vec<Vertex> {
    if count >= vertices.len() {
        return vertices.to_vec();
    }
    if count == 0 {
        return Vec::new();
    }

    let mut cumulative = Vec::with_capacity(vertices.len());
    let mut travelled = 0.0;
    cumulative.push(0.0);
    for pair in vertices.windows(2) {
        travelled += distance(pair[0], pair[1]);
        cumulative.push(travelled);
    }

    let mut picked = Vec::with_capacity(count);
    let mut next_free = 0;
    for i in 0..count {
        let target = travelled * i as f64 / count as f64;
        let along = cumulative.partition_point(|&d| d < target);
        // Leave room for the remaining picks.
        let index = along.max(next_free).min(vertices.len() - (count - i));
        picked.push(vertices[index]);
        next_free = index + 1;
    }
    picked
}
