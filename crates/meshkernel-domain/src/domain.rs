use geo::Coord;
use meshkernel_core::{EdgeId, Mesh, SpatialIndex, VertexId};
use meshkernel_geom::{in_on_polygon, segments_intersect, signed_area, Containment, EPS};

use crate::boundary::{Boundary, BoundaryKind};
use crate::error::DomainError;

/// The meshed region: one exterior boundary loop, zero or more interior
/// (hole) loops, and the local size field that governs element size
/// across them (spec.md §4.D).
#[derive(Debug)]
pub struct Domain {
    mesh: Mesh,
    vertex_index: SpatialIndex<VertexId>,
    boundaries: Vec<Boundary>,
    size_floor: f64,
    r_max: f64,
}

impl Domain {
    pub fn new(size_floor: f64, r_max: f64) -> Self {
        Self {
            mesh: Mesh::new(),
            vertex_index: SpatialIndex::new(),
            boundaries: Vec::new(),
            size_floor,
            r_max,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    /// Consume the domain, keeping only its mesh (spec.md §4.G: the
    /// outer loop's terminal outcome carries a `Mesh`, not a `Domain`).
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn num_boundary_edges(&self) -> usize {
        self.boundaries.iter().map(|b| b.edges.len()).sum()
    }

    /// Set a boundary to the closed loop `coords`, with one marker and one
    /// `(size_hint, range_hint)` pair per vertex (spec.md §4.D).
    ///
    /// Validates, fixes orientation to match `kind`, deduplicates against
    /// existing domain vertices within `EPS`, and appends the resulting
    /// edges. Fails with [`DomainError`] on marker ≤ 0, fewer than 3
    /// points, a self-intersecting loop, or a degenerate (zero-area) loop.
    pub fn set_shape(
        &mut self,
        kind: BoundaryKind,
        coords: &[Coord<f64>],
        markers: &[i32],
        props: &[(f64, f64)],
    ) -> Result<usize, DomainError> {
        let n = coords.len();
        if n < 3 {
            return Err(DomainError::TooFewVertices(n));
        }
        if let Some(&bad) = markers.iter().find(|&&m| m <= 0) {
            return Err(DomainError::InvalidMarker(bad));
        }

        let area = signed_area(coords);
        if area.abs() < EPS {
            return Err(DomainError::DegenerateLoop);
        }
        if self_intersects(coords) {
            return Err(DomainError::SelfIntersecting);
        }

        // Resolve orientation: reverse the sequence (in lockstep with its
        // markers/props) if it doesn't already match what `kind` requires.
        let mut coords = coords.to_vec();
        let mut markers = markers.to_vec();
        let mut props = props.to_vec();
        if !kind.matches_orientation(area) {
            coords.reverse();
            markers.reverse();
            props.reverse();
        }

        let verts: Vec<VertexId> = coords
            .iter()
            .zip(props.iter())
            .map(|(&xy, &(size_hint, range_hint))| self.vertex_for(xy, size_hint, range_hint))
            .collect();

        let mut edges = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            edges.push(self.mesh.add_edge(verts[i], verts[j], markers[i]));
        }

        self.boundaries.push(Boundary { kind, edges });
        Ok(self.boundaries.len() - 1)
    }

    /// Reuse the nearest existing vertex within `EPS` of `xy`, or create a
    /// new one and index it (spec.md §4.D dedup rule).
    fn vertex_for(&mut self, xy: Coord<f64>, size_hint: f64, range_hint: f64) -> VertexId {
        if let Some((id, dist)) = self.vertex_index.nearest(xy) {
            if dist < EPS {
                return id;
            }
        }
        let id = self.mesh.add_vertex(xy, size_hint, range_hint);
        self.vertex_index.insert(id, xy);
        id
    }

    /// Add a new vertex at `xy` unconditionally (no dedup lookup) and
    /// index it. Used by the front-update kernel when it places a
    /// genuinely new vertex rather than reusing a candidate (spec.md
    /// §4.F.3); boundary construction uses [`Self::vertex_for`] instead,
    /// which does dedup.
    pub fn register_vertex(&mut self, xy: Coord<f64>, size_hint: f64, range_hint: f64) -> VertexId {
        let id = self.mesh.add_vertex(xy, size_hint, range_hint);
        self.vertex_index.insert(id, xy);
        id
    }

    pub fn vertex_index(&self) -> &SpatialIndex<VertexId> {
        &self.vertex_index
    }

    /// The target local edge length at `p`: the minimum, over hint
    /// vertices within `r_max` of `p`, of `max(v.size_hint, size_floor)`
    /// scaled up with distance from that vertex; falls back to
    /// `size_floor` when no hint vertex is in range (spec.md §4.D).
    pub fn size_function(&self, p: Coord<f64>) -> f64 {
        let mut best = f64::INFINITY;
        for (id, dist) in self.vertex_index.in_radius(p, self.r_max) {
            let v = self.mesh.vertex(id);
            if !v.has_size_hint() {
                continue;
            }
            let base = v.size_hint.max(self.size_floor);
            let smooth = 1.0 + dist / v.range_hint.max(EPS);
            best = best.min(base * smooth);
        }
        if best.is_finite() {
            best.max(self.size_floor)
        } else {
            self.size_floor
        }
    }

    /// `p`'s containment with respect to this domain: inside the exterior
    /// loop and outside every interior (hole) loop, with exact on-edge
    /// detection (spec.md §4.B candidate validation, step d).
    pub fn containment(&self, p: Coord<f64>) -> Containment {
        let Some(exterior) = self.boundaries.iter().find(|b| b.is_exterior()) else {
            return Containment::Outside;
        };
        match in_on_polygon(p, &self.ring(exterior)) {
            Containment::Outside => return Containment::Outside,
            Containment::On => return Containment::On,
            Containment::Inside => {}
        }
        for hole in self.boundaries.iter().filter(|b| b.is_interior()) {
            match in_on_polygon(p, &self.ring(hole)) {
                Containment::Inside => return Containment::Outside,
                Containment::On => return Containment::On,
                Containment::Outside => {}
            }
        }
        Containment::Inside
    }

    fn ring(&self, boundary: &Boundary) -> Vec<Coord<f64>> {
        boundary.edges.iter().map(|&e: &EdgeId| self.mesh.vertex(self.mesh.edge(e).v1).xy).collect()
    }
}

/// `true` if any two non-adjacent edges of the closed loop `coords` cross.
fn self_intersects(coords: &[Coord<f64>]) -> bool {
    let n = coords.len();
    for i in 0..n {
        let (a, b) = (coords[i], coords[(i + 1) % n]);
        for j in (i + 1)..n {
            if j == i || (j + 1) % n == i || j == (i + 1) % n {
                continue;
            }
            let (c, d) = (coords[j], coords[(j + 1) % n]);
            if segments_intersect(a, b, c, d) {
                return true;
            }
        }
    }
    false
}
