//! Programmatic boundary shape constructors: `square`, `rectangle`,
//! `equilateral_triangle`, `circle`. Grounded on
//! `Boundary::set_shape_{square,rectangle,triangle,circle}`
//! (original_source/src/algorithm/Boundary.h).

use geo::Coord;
use std::f64::consts::PI;

use crate::boundary::BoundaryKind;
use crate::domain::Domain;
use crate::error::DomainError;

/// `true` for an equilateral triangle's height factor, `sqrt(3)/2`.
const SQRT3_OVER_2: f64 = 0.8660254037844386;

impl Domain {
    /// Axis-aligned rectangle of size `w x h` centered at `center`, one
    /// marker and size/range hint shared by all four vertices.
    pub fn set_shape_rectangle(
        &mut self,
        kind: BoundaryKind,
        center: Coord<f64>,
        w: f64,
        h: f64,
        marker: i32,
        size_hint: f64,
        range_hint: f64,
    ) -> Result<usize, DomainError> {
        let (hw, hh) = (0.5 * w, 0.5 * h);
        let coords = vec![
            Coord { x: center.x - hw, y: center.y - hh },
            Coord { x: center.x + hw, y: center.y - hh },
            Coord { x: center.x + hw, y: center.y + hh },
            Coord { x: center.x - hw, y: center.y + hh },
        ];
        self.set_shape_uniform(kind, &coords, marker, size_hint, range_hint)
    }

    /// Square of side `w` centered at `center`.
    pub fn set_shape_square(
        &mut self,
        kind: BoundaryKind,
        center: Coord<f64>,
        w: f64,
        marker: i32,
        size_hint: f64,
        range_hint: f64,
    ) -> Result<usize, DomainError> {
        self.set_shape_rectangle(kind, center, w, w, marker, size_hint, range_hint)
    }

    /// Equilateral triangle with side length `a`, centered at `center`
    /// (built as a 3-point regular polygon of the equivalent circumradius).
    pub fn set_shape_equilateral_triangle(
        &mut self,
        kind: BoundaryKind,
        center: Coord<f64>,
        a: f64,
        marker: i32,
        size_hint: f64,
        range_hint: f64,
    ) -> Result<usize, DomainError> {
        self.set_shape_circle(kind, center, a / 3f64.sqrt(), 3, marker, size_hint, range_hint)
    }

    /// Regular `n`-gon of circumradius `r` centered at `center`
    /// (`n = 30` approximates a circle).
    pub fn set_shape_circle(
        &mut self,
        kind: BoundaryKind,
        center: Coord<f64>,
        r: f64,
        n: usize,
        marker: i32,
        size_hint: f64,
        range_hint: f64,
    ) -> Result<usize, DomainError> {
        if n < 3 {
            return Err(DomainError::TooFewVertices(n));
        }
        let delta = 2.0 * PI / n as f64;
        let coords: Vec<Coord<f64>> = (0..n)
            .map(|i| {
                let a = i as f64 * delta;
                Coord { x: center.x + r * a.cos(), y: center.y + r * a.sin() }
            })
            .collect();
        self.set_shape_uniform(kind, &coords, marker, size_hint, range_hint)
    }

    fn set_shape_uniform(
        &mut self,
        kind: BoundaryKind,
        coords: &[Coord<f64>],
        marker: i32,
        size_hint: f64,
        range_hint: f64,
    ) -> Result<usize, DomainError> {
        let markers = vec![marker; coords.len()];
        let props = vec![(size_hint, range_hint); coords.len()];
        self.set_shape(kind, coords, &markers, &props)
    }
}

/// `sqrt(3)/2`, the height of an equilateral triangle of unit side.
/// Shared with `meshkernel`'s front-update kernel, which scales a base
/// edge's length by this factor to size the proposed new-vertex offset
/// (spec.md §4.F), so the constant lives here once rather than being
/// redefined per crate.
pub fn triangle_height_factor() -> f64 {
    SQRT3_OVER_2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn square_has_four_edges() {
        let mut d = Domain::new(0.1, 10.0);
        d.set_shape_square(BoundaryKind::Exterior, pt(0.0, 0.0), 2.0, 1, -1.0, -1.0).unwrap();
        assert_eq!(d.mesh().num_edges(), 4);
    }

    #[test]
    fn circle_approximates_with_default_resolution() {
        let mut d = Domain::new(0.1, 10.0);
        d.set_shape_circle(BoundaryKind::Exterior, pt(0.0, 0.0), 1.0, 30, 1, -1.0, -1.0).unwrap();
        assert_eq!(d.mesh().num_vertices(), 30);
    }

    #[test]
    fn circle_rejects_fewer_than_three_sides() {
        let mut d = Domain::new(0.1, 10.0);
        let err = d.set_shape_circle(BoundaryKind::Exterior, pt(0.0, 0.0), 1.0, 2, 1, -1.0, -1.0);
        assert!(matches!(err, Err(DomainError::TooFewVertices(2))));
    }

    #[test]
    fn equilateral_triangle_has_three_edges() {
        let mut d = Domain::new(0.1, 10.0);
        d.set_shape_equilateral_triangle(BoundaryKind::Exterior, pt(0.0, 0.0), 1.0, 1, -1.0, -1.0).unwrap();
        assert_eq!(d.mesh().num_edges(), 3);
    }
}
