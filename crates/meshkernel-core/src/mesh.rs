use geo::Coord;

use crate::edge::{Edge, EdgeId};
use crate::facet::{Facet, FacetId, FacetRef};
use crate::store::Store;
use crate::vertex::{Vertex, VertexId};

/// The entity store for a single triangulation pass: vertices, edges and
/// facets, each a [`Store`] addressed by a stable typed handle.
///
/// `Mesh` owns the data; the [`crate::Front`] and the spatial indices in
/// `meshkernel`'s front-update kernel reference entities by handle, never
/// by borrowed reference, so they can outlive any particular mutation.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Store<Vertex>,
    edges: Store<Edge>,
    facets: Store<Facet>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------
    // Counts
    // -----------------------------------------------------------------

    pub fn num_vertices(&self) -> usize {
        self.vertices.len_live()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len_live()
    }

    pub fn num_facets(&self) -> usize {
        self.facets.len_live()
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.vertices.get(id.0)
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        self.vertices.get_mut(id.0)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.edges.get(id.0)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        self.edges.get_mut(id.0)
    }

    pub fn facet(&self, id: FacetId) -> &Facet {
        self.facets.get(id.0)
    }

    pub fn facet_mut(&mut self, id: FacetId) -> &mut Facet {
        self.facets.get_mut(id.0)
    }

    pub fn vertex_is_live(&self, id: VertexId) -> bool {
        self.vertices.is_live(id.0)
    }

    pub fn edge_is_live(&self, id: EdgeId) -> bool {
        self.edges.is_live(id.0)
    }

    pub fn facet_is_live(&self, id: FacetId) -> bool {
        self.facets.is_live(id.0)
    }

    // -----------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------

    pub fn iter_vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().map(|(i, v)| (VertexId(i), v))
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn iter_facets(&self) -> impl Iterator<Item = (FacetId, &Facet)> {
        self.facets.iter().map(|(i, f)| (FacetId(i), f))
    }

    // -----------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------

    pub fn add_vertex(&mut self, xy: Coord<f64>, size_hint: f64, range_hint: f64) -> VertexId {
        VertexId(self.vertices.append(Vertex::new(xy, size_hint, range_hint)))
    }

    /// Create an edge `v1 -> v2` and register it on both endpoints'
    /// adjacency lists.
    pub fn add_edge(&mut self, v1: VertexId, v2: VertexId, marker: i32) -> EdgeId {
        let p1 = self.vertex(v1).xy;
        let p2 = self.vertex(v2).xy;
        let id = EdgeId(self.edges.append(Edge::new(v1, v2, marker, p1, p2)));
        self.vertex_mut(v1).edges.push(id);
        self.vertex_mut(v2).edges.push(id);
        id
    }

    /// Create a triangle facet over `(a, b, c)` (must already be CCW —
    /// callers validate orientation before calling, spec.md §4.F.2a) and
    /// register it on each vertex's incident-facet list.
    pub fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) -> FacetId {
        let id = FacetId(self.facets.append(Facet::triangle([a, b, c])));
        for v in [a, b, c] {
            self.vertex_mut(v).facets.push(id);
        }
        id
    }

    /// Remove `edge` from both endpoints' adjacency lists and queue it for
    /// waste collection.
    pub fn erase_edge(&mut self, edge: EdgeId) {
        let (v1, v2) = {
            let e = self.edge(edge);
            (e.v1, e.v2)
        };
        self.vertex_mut(v1).edges.retain(|&e| e != edge);
        self.vertex_mut(v2).edges.retain(|&e| e != edge);
        self.edges.erase(edge.0);
    }

    /// Queue an unreferenced vertex for waste collection.
    ///
    /// Caller must ensure `vertex` has no live incident edges or facets;
    /// this is an internal bookkeeping operation, not a public mesh edit
    /// (spec.md §7, `InvalidOperation` would be the right error for a
    /// violation, but the engine never calls this except when it has just
    /// confirmed zero adjacency).
    pub fn erase_vertex(&mut self, vertex: VertexId) {
        self.vertices.erase(vertex.0);
    }

    /// Attach `facet` to whichever of `edge`'s two facet slots (`left`,
    /// then `right`) is still empty.
    ///
    /// Panics if both slots are already filled — a caller bug, since an
    /// edge borders at most two facets (spec.md §3, invariant 5).
    pub fn attach_facet_to_edge(&mut self, edge: EdgeId, facet: FacetId) {
        let e = self.edge_mut(edge);
        if e.left.is_none() {
            e.left = Some(facet);
        } else if e.right.is_none() {
            e.right = Some(facet);
        } else {
            panic!("edge {edge} already has two facet neighbors");
        }
    }

    /// Set the facet across edge `(a, b)` in `facet`'s neighbor list, and
    /// symmetrically set `facet` as the neighbor of whatever sits across
    /// `(a, b)` in `other`, if given.
    pub fn link_neighbors(&mut self, facet: FacetId, other: FacetRef, a: VertexId, b: VertexId) {
        self.facet_mut(facet).set_neighbor_across(a, b, other);
        if let Some(other_id) = other {
            self.facet_mut(other_id).set_neighbor_across(a, b, Some(facet));
        }
    }

    /// Remove `facet` from every incident vertex's adjacency list and
    /// queue it for waste collection.
    ///
    /// Does not touch the `left`/`right` slots of the facet's edges —
    /// callers that need those cleared first (e.g. a cleanup pass
    /// dissolving a facet back into open front) must do so before
    /// calling this.
    pub fn erase_facet(&mut self, facet: FacetId) {
        let vs = self.facet(facet).vertices().to_vec();
        for v in vs {
            self.vertex_mut(v).facets.retain(|&f| f != facet);
        }
        self.facets.erase(facet.0);
    }

    /// Drop all slots queued for removal in every entity store. Called by
    /// the outer loop at each successful front-advance (spec.md §4.G).
    pub fn clear_waste(&mut self) {
        self.vertices.clear_waste();
        self.edges.clear_waste();
        self.facets.clear_waste();
    }
}
