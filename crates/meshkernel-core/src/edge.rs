use std::fmt;

use geo::Coord;

use crate::FacetId;

/// Stable handle to an [`Edge`] in a [`crate::Mesh`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

/// An oriented edge `v1 -> v2`.
///
/// Orientation carries meaning: for a front edge, the unmeshed side of the
/// domain lies to the left of `v1 -> v2` (spec.md §3, invariant 1). `normal`
/// is cached perpendicular to `v1 -> v2`, rotated to point left (into the
/// unmeshed side for front/boundary edges).
#[derive(Clone, Debug)]
pub struct Edge {
    pub v1: crate::VertexId,
    pub v2: crate::VertexId,
    /// Boundary marker: `> 0` on a boundary edge, `0` on an interior edge.
    pub marker: i32,
    pub midpoint: Coord<f64>,
    pub normal: Coord<f64>,
    pub length: f64,
    /// Facet to the left of `v1 -> v2`, if meshed.
    pub left: Option<FacetId>,
    /// Facet to the left of `v2 -> v1` (i.e. right of `v1 -> v2`), if meshed.
    pub right: Option<FacetId>,
}

impl Edge {
    pub fn new(v1: crate::VertexId, v2: crate::VertexId, marker: i32, p1: Coord<f64>, p2: Coord<f64>) -> Self {
        let d = Coord { x: p2.x - p1.x, y: p2.y - p1.y };
        let length = (d.x * d.x + d.y * d.y).sqrt();
        let normal = if length > 0.0 {
            Coord { x: -d.y / length, y: d.x / length }
        } else {
            Coord { x: 0.0, y: 0.0 }
        };
        Edge {
            v1,
            v2,
            marker,
            midpoint: Coord { x: 0.5 * (p1.x + p2.x), y: 0.5 * (p1.y + p2.y) },
            normal,
            length,
            left: None,
            right: None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.marker > 0
    }

    /// The other endpoint of this edge, given one of its endpoints.
    ///
    /// Panics if `v` is neither endpoint — a caller bug.
    pub fn other(&self, v: crate::VertexId) -> crate::VertexId {
        if v == self.v1 {
            self.v2
        } else if v == self.v2 {
            self.v1
        } else {
            panic!("{v} is not an endpoint of this edge");
        }
    }

    /// `true` once both facet neighbor slots are filled (spec.md §3,
    /// invariant 5: interior edges have exactly two neighbors).
    pub fn is_interior_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VertexId;

    fn pt(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn length_of_unit_edge_is_one() {
        let e = Edge::new(VertexId(0), VertexId(1), 1, pt(0.0, 0.0), pt(1.0, 0.0));
        assert!((e.length - 1.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_is_average_of_endpoints() {
        let e = Edge::new(VertexId(0), VertexId(1), 1, pt(0.0, 0.0), pt(2.0, 4.0));
        assert_eq!(e.midpoint, pt(1.0, 2.0));
    }

    #[test]
    fn normal_points_left_of_v1_to_v2() {
        // v1 -> v2 along +x; left-pointing normal is +y.
        let e = Edge::new(VertexId(0), VertexId(1), 1, pt(0.0, 0.0), pt(1.0, 0.0));
        assert!((e.normal.x).abs() < 1e-12);
        assert!((e.normal.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normal_is_unit_length() {
        let e = Edge::new(VertexId(0), VertexId(1), 1, pt(0.0, 0.0), pt(3.0, 4.0));
        let n = (e.normal.x.powi(2) + e.normal.y.powi(2)).sqrt();
        assert!((n - 1.0).abs() < 1e-9);
    }

    #[test]
    fn marker_zero_is_interior() {
        let e = Edge::new(VertexId(0), VertexId(1), 0, pt(0.0, 0.0), pt(1.0, 0.0));
        assert!(!e.is_boundary());
    }

    #[test]
    fn marker_positive_is_boundary() {
        let e = Edge::new(VertexId(0), VertexId(1), 3, pt(0.0, 0.0), pt(1.0, 0.0));
        assert!(e.is_boundary());
    }

    #[test]
    fn other_returns_opposite_endpoint() {
        let e = Edge::new(VertexId(0), VertexId(1), 1, pt(0.0, 0.0), pt(1.0, 0.0));
        assert_eq!(e.other(VertexId(0)), VertexId(1));
        assert_eq!(e.other(VertexId(1)), VertexId(0));
    }

    #[test]
    fn not_interior_complete_until_both_sides_set() {
        let mut e = Edge::new(VertexId(0), VertexId(1), 1, pt(0.0, 0.0), pt(1.0, 0.0));
        assert!(!e.is_interior_complete());
        e.left = Some(crate::FacetId(0));
        assert!(!e.is_interior_complete());
        e.right = Some(crate::FacetId(1));
        assert!(e.is_interior_complete());
    }
}
