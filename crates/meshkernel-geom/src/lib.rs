//! Scalar geometry predicates shared by the mesh generator.
//!
//! Every predicate here is a pure function over `geo::Coord<f64>` pairs.
//! All of them share one tolerance, [`EPS`]; callers never re-derive their
//! own epsilon, so that orientation and intersection tests stay mutually
//! consistent (`orientation(a, b, c) == LEFT` iff `orientation(c, b, a) ==
//! RIGHT`, etc).

use geo::Coord;

/// Shared tolerance for all sign-of-zero decisions in this crate.
pub const EPS: f64 = 1e-10;

/// The three outcomes of [`orientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `a, b, c` turn counter-clockwise, negative when clockwise,
/// zero (within [`EPS`], scaled by the triangle's extent) when collinear.
pub fn cross2(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Orientation of the turn `a -> b -> c`.
///
/// Uses a tolerance scaled by the magnitude of the operands so that the
/// test remains meaningful across the full range of mesh coordinates, not
/// just near the origin.
pub fn orientation(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Orientation {
    let cross = cross2(a, b, c);
    let scale = (b.x - a.x).abs().max((b.y - a.y).abs())
        .max((c.x - a.x).abs())
        .max((c.y - a.y).abs())
        .max(1.0);
    let tol = EPS * scale * scale;
    if cross > tol {
        Orientation::Left
    } else if cross < -tol {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}

/// Signed area of a triangle (positive iff CCW).
pub fn triangle_signed_area(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    0.5 * cross2(a, b, c)
}

fn on_segment(a: Coord<f64>, b: Coord<f64>, p: Coord<f64>) -> bool {
    p.x <= a.x.max(b.x) + EPS && p.x >= a.x.min(b.x) - EPS
        && p.y <= a.y.max(b.y) + EPS && p.y >= a.y.min(b.y) - EPS
}

/// Do open segments `(a, b)` and `(c, d)` intersect?
///
/// Uses the classic four-orientation test; collinear overlaps (one
/// endpoint lying on the other segment) count as an intersection, per
/// spec.md §4.A.
pub fn segments_intersect(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>, d: Coord<f64>) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(a, b, c))
        || (o2 == Orientation::Collinear && on_segment(a, b, d))
        || (o3 == Orientation::Collinear && on_segment(c, d, a))
        || (o4 == Orientation::Collinear && on_segment(c, d, b))
}

/// Result of a point-in-polygon test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    On,
}

/// Ray-casting point-in-polygon test over a single closed ring (the last
/// point need not repeat the first).
///
/// Detects on-edge points explicitly rather than letting them fall out
/// unpredictably from the parity count.
pub fn in_on_polygon(p: Coord<f64>, poly: &[Coord<f64>]) -> Containment {
    let n = poly.len();
    if n < 3 {
        return Containment::Outside;
    }

    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        if on_segment(a, b, p) && orientation(a, b, p) == Orientation::Collinear {
            return Containment::On;
        }
    }

    let mut inside = false;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        let straddles = (a.y > p.y) != (b.y > p.y);
        if straddles {
            let x_at_y = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_at_y {
                inside = !inside;
            }
        }
    }

    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Signed area of a closed polygon ring via the shoelace formula.
///
/// Positive for CCW rings, negative for CW; `poly` need not repeat its
/// first point as its last.
pub fn signed_area(poly: &[Coord<f64>]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let sum: f64 = (0..n)
        .map(|i| {
            let a = poly[i];
            let b = poly[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * sum
}

/// Angle between vectors `u` and `v`, in `[0, 2*pi)`, measured CCW from `u`
/// to `v`.
pub fn angle_between(u: Coord<f64>, v: Coord<f64>) -> f64 {
    let cross = u.x * v.y - u.y * v.x;
    let dot = u.x * v.x + u.y * v.y;
    let a = cross.atan2(dot);
    if a < 0.0 {
        a + 2.0 * std::f64::consts::PI
    } else {
        a
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Squared euclidean distance — avoids the `sqrt` when only comparing
/// distances (dedup lookups, nearest-candidate ranking).
pub fn distance_sq(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}
