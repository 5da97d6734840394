//! Post-generation mesh quality passes, run once triangulation succeeds
//! (spec.md §4.G: "Improve mesh quality"). Named after, but not ported
//! line-for-line from, `TriangulationStrategy::generate_elements`'s
//! `MeshCleanup::*` calls — that header was not present in the retrieved
//! original source, so these are reimplemented from their names and the
//! invariants `meshkernel-core::Mesh` already promises.

use meshkernel_core::{FacetId, Mesh};
use meshkernel_geom::{triangle_signed_area, EPS};

/// Collapse triangles whose three vertices have drifted (numerically)
/// onto a line, i.e. whose signed area has fallen below the noise floor.
///
/// The facet is erased outright; neighboring facets keep whichever
/// neighbor pointer they already had across the collapsed triangle's
/// edges (this pass does not attempt to re-stitch a hole — a triangle
/// this degenerate indicates a construction bug upstream, not a gap a
/// cleanup pass should paper over).
pub fn merge_degenerate_triangles(mesh: &mut Mesh) {
    let degenerate: Vec<FacetId> = mesh
        .iter_facets()
        .filter(|(_, f)| f.is_triangle())
        .filter_map(|(id, f)| {
            let vs = f.vertices();
            let (a, b, c) = (mesh.vertex(vs[0]).xy, mesh.vertex(vs[1]).xy, mesh.vertex(vs[2]).xy);
            (triangle_signed_area(a, b, c).abs() < EPS).then_some(id)
        })
        .collect();

    for id in degenerate {
        erase_facet(mesh, id);
    }
}

/// Two triangles occupying the same three vertices (a duplicate facet,
/// which can arise if a front-closing step runs twice over the same
/// gap) collapse to one; the extra copy is erased.
pub fn clear_double_triangle_edges(mesh: &mut Mesh) {
    let mut seen: std::collections::HashSet<[meshkernel_core::VertexId; 3]> = std::collections::HashSet::new();
    let mut duplicates = Vec::new();

    for (id, f) in mesh.iter_facets() {
        if !f.is_triangle() {
            continue;
        }
        let mut key = [f.vertices()[0], f.vertices()[1], f.vertices()[2]];
        key.sort_by_key(|v| v.0);
        if !seen.insert(key) {
            duplicates.push(id);
        }
    }

    for id in duplicates {
        erase_facet(mesh, id);
    }
}

/// Quad-layer strategies sharing this framework (out of scope here,
/// spec.md §1) can leave doubled quad edges behind; the triangulation
/// engine in this crate never produces quads, so this pass is a no-op.
pub fn clear_double_quad_edges(_mesh: &mut Mesh) {}

fn erase_facet(mesh: &mut Mesh, id: FacetId) {
    let vs = mesh.facet(id).vertices().to_vec();
    for i in 0..vs.len() {
        let (a, b) = (vs[i], vs[(i + 1) % vs.len()]);
        let edge_id = mesh.vertex(a).incident_edges().iter().copied().find(|&e| {
            let edge = mesh.edge(e);
            (edge.v1 == a && edge.v2 == b) || (edge.v1 == b && edge.v2 == a)
        });
        if let Some(edge_id) = edge_id {
            let edge = mesh.edge_mut(edge_id);
            if edge.left == Some(id) {
                edge.left = None;
            }
            if edge.right == Some(id) {
                edge.right = None;
            }
        }
    }
    mesh.erase_facet(id);
}

pub fn run_all(mesh: &mut Mesh) {
    clear_double_quad_edges(mesh);
    clear_double_triangle_edges(mesh);
    merge_degenerate_triangles(mesh);
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    fn pt(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn merge_degenerate_triangles_removes_zero_area_facet() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(pt(0.0, 0.0), -1.0, -1.0);
        let b = mesh.add_vertex(pt(1.0, 0.0), -1.0, -1.0);
        let c = mesh.add_vertex(pt(2.0, 0.0), -1.0, -1.0); // collinear with a, b
        mesh.add_triangle(a, b, c);
        assert_eq!(mesh.num_facets(), 1);
        merge_degenerate_triangles(&mut mesh);
        mesh.clear_waste();
        assert_eq!(mesh.num_facets(), 0);
    }

    #[test]
    fn clear_double_triangle_edges_removes_exact_duplicate() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(pt(0.0, 0.0), -1.0, -1.0);
        let b = mesh.add_vertex(pt(1.0, 0.0), -1.0, -1.0);
        let c = mesh.add_vertex(pt(0.0, 1.0), -1.0, -1.0);
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, b, c);
        assert_eq!(mesh.num_facets(), 2);
        clear_double_triangle_edges(&mut mesh);
        mesh.clear_waste();
        assert_eq!(mesh.num_facets(), 1);
    }

    #[test]
    fn clear_double_quad_edges_is_a_noop_for_triangles() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(pt(0.0, 0.0), -1.0, -1.0);
        let b = mesh.add_vertex(pt(1.0, 0.0), -1.0, -1.0);
        let c = mesh.add_vertex(pt(0.0, 1.0), -1.0, -1.0);
        mesh.add_triangle(a, b, c);
        clear_double_quad_edges(&mut mesh);
        assert_eq!(mesh.num_facets(), 1);
    }
}
