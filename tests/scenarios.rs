//! End-to-end scenarios from spec.md §8, run against the public
//! `meshkernel` API the way `meshkernel-cli` exercises it.

use geo::Coord;
use meshkernel::{generate_elements, MeshConfig, MeshTables};
use meshkernel_domain::{BoundaryKind, Domain, DomainError};
use meshkernel_geom::triangle_signed_area;

fn pt(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

fn unit_square() -> Vec<Coord<f64>> {
    vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]
}

fn mesh_area(tables: &MeshTables) -> f64 {
    tables
        .triangles
        .iter()
        .map(|tri| {
            let (a, b, c) = (tables.vertices[tri[0]], tables.vertices[tri[1]], tables.vertices[tri[2]]);
            triangle_signed_area(Coord { x: a.0, y: a.1 }, Coord { x: b.0, y: b.1 }, Coord { x: c.0, y: c.1 })
        })
        .sum()
}

#[test]
fn unit_square_with_one_hint_fills_completely() {
    let mut domain = Domain::new(0.1, 10.0);
    domain
        .set_shape(BoundaryKind::Exterior, &unit_square(), &[1, 1, 1, 1], &[(0.5, 1.0); 4])
        .unwrap();

    let config = MeshConfig { size_floor: 0.1, r_max: 10.0, ..MeshConfig::default() };
    let outcome = generate_elements(domain, &config, None).unwrap();
    assert!(outcome.is_success());

    let tables = MeshTables::from_mesh(outcome.mesh());
    assert!(tables.triangles.len() >= 4 && tables.triangles.len() <= 12, "got {} triangles", tables.triangles.len());

    for tri in &tables.triangles {
        let (a, b, c) = (tables.vertices[tri[0]], tables.vertices[tri[1]], tables.vertices[tri[2]]);
        assert!(triangle_signed_area(Coord { x: a.0, y: a.1 }, Coord { x: b.0, y: b.1 }, Coord { x: c.0, y: c.1 }) > 0.0);
    }

    assert!((mesh_area(&tables) - 1.0).abs() < 1e-9);
}

#[test]
fn square_with_square_hole_excludes_the_holes_area() {
    let mut domain = Domain::new(0.08, 10.0);
    domain
        .set_shape(BoundaryKind::Exterior, &unit_square(), &[1, 1, 1, 1], &[(-1.0, -1.0); 4])
        .unwrap();
    let hole = vec![pt(0.4, 0.4), pt(0.6, 0.4), pt(0.6, 0.6), pt(0.4, 0.6)];
    domain.set_shape(BoundaryKind::Interior, &hole, &[2, 2, 2, 2], &[(-1.0, -1.0); 4]).unwrap();

    let config = MeshConfig { size_floor: 0.08, r_max: 10.0, ..MeshConfig::default() };
    let outcome = generate_elements(domain, &config, None).unwrap();
    assert!(outcome.is_success());

    let tables = MeshTables::from_mesh(outcome.mesh());
    assert!((mesh_area(&tables) - 0.96).abs() < 1e-6);

    // No facet contains the hole's centroid.
    for tri in &tables.triangles {
        let (a, b, c) = (tables.vertices[tri[0]], tables.vertices[tri[1]], tables.vertices[tri[2]]);
        let centroid = ((a.0 + b.0 + c.0) / 3.0, (a.1 + b.1 + c.1) / 3.0);
        assert!((centroid.0 - 0.5).abs() > 1e-9 || (centroid.1 - 0.5).abs() > 1e-9);
    }
}

#[test]
fn minimum_triangle_produces_exactly_one_facet() {
    let mut domain = Domain::new(2.0, 10.0);
    domain
        .set_shape_equilateral_triangle(BoundaryKind::Exterior, pt(0.0, 0.0), 1.0, 1, 2.0, 10.0)
        .unwrap();

    let config = MeshConfig { size_floor: 2.0, r_max: 10.0, ..MeshConfig::default() };
    let outcome = generate_elements(domain, &config, None).unwrap();
    assert!(outcome.is_success());

    let tables = MeshTables::from_mesh(outcome.mesh());
    assert_eq!(tables.triangles.len(), 1);
    assert_eq!(tables.vertices.len(), 3);
}

#[test]
fn reversed_orientation_input_still_meshes_successfully() {
    let mut cw = unit_square();
    cw.reverse();

    let mut domain = Domain::new(0.1, 10.0);
    domain.set_shape(BoundaryKind::Exterior, &cw, &[1, 1, 1, 1], &[(0.5, 1.0); 4]).unwrap();

    let config = MeshConfig { size_floor: 0.1, r_max: 10.0, ..MeshConfig::default() };
    let outcome = generate_elements(domain, &config, None).unwrap();
    assert!(outcome.is_success());

    let tables = MeshTables::from_mesh(outcome.mesh());
    assert!((mesh_area(&tables) - 1.0).abs() < 1e-9);
}

#[test]
fn three_collinear_points_are_rejected_as_degenerate() {
    let mut domain = Domain::new(0.1, 10.0);
    let collinear = vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0)];
    let err = domain.set_shape(BoundaryKind::Exterior, &collinear, &[1, 1, 1], &[(-1.0, -1.0); 3]);
    assert!(matches!(err, Err(DomainError::DegenerateLoop)));
}

#[test]
fn bounded_mode_stops_at_exactly_n_elements_with_a_consistent_partial_mesh() {
    let mut domain = Domain::new(0.2, 10.0);
    let coords = vec![pt(0.0, 0.0), pt(6.0, 0.0), pt(6.0, 6.0), pt(0.0, 6.0)];
    domain.set_shape(BoundaryKind::Exterior, &coords, &[1, 1, 1, 1], &[(-1.0, -1.0); 4]).unwrap();

    let config = MeshConfig { size_floor: 0.2, r_max: 10.0, n_elements: 5, ..MeshConfig::default() };
    let outcome = generate_elements(domain, &config, None).unwrap();
    assert!(outcome.is_success());

    let tables = MeshTables::from_mesh(outcome.mesh());
    assert_eq!(tables.triangles.len(), 5);

    // Every vertex referenced by a triangle is in range; no dangling index.
    for tri in &tables.triangles {
        for &v in tri {
            assert!(v < tables.vertices.len());
        }
    }
}

#[test]
fn csv_with_missing_marker_is_rejected() {
    let err = meshkernel::parse_csv("1.0,2.0\n");
    assert!(err.is_err());
}
