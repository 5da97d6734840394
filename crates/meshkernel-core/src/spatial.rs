//! An R-tree backed index from 2D position to an opaque identifier,
//! used by the front-update kernel to find candidate vertices (component
//! C, spec.md §4.C) and to reject overlapping facets.
//!
//! Grounded on the `RTreeObject`/`AABB` pattern in
//! `src/geometry.rs::PlanarPartition` (bounding-box index over polygons);
//! here the indexed geometry degenerates to a point per entry.

use geo::Coord;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use meshkernel_geom::EPS;

#[derive(Clone, Copy, Debug)]
struct IndexedPoint<K> {
    id: K,
    xy: [f64; 2],
}

impl<K: Copy + PartialEq> PartialEq for IndexedPoint<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: Copy> RTreeObject for IndexedPoint<K> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.xy, self.xy)
    }
}

impl<K: Copy> PointDistance for IndexedPoint<K> {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.xy[0] - point[0];
        let dy = self.xy[1] - point[1];
        dx * dx + dy * dy
    }
}

/// A point index keyed by a caller-chosen identifier `K` (typically
/// `VertexId`). Ties in `nearest` are broken deterministically by the
/// minimum `K`, so results do not depend on `rstar`'s internal tree shape
/// (spec.md §4.C, "ties broken by stable insertion order" — `K` is
/// assigned in insertion order by [`crate::Mesh::add_vertex`], so minimum
/// `K` and earliest insertion coincide).
#[derive(Clone, Debug, Default)]
pub struct SpatialIndex<K: Copy + Ord> {
    tree: RTree<IndexedPoint<K>>,
}

impl<K: Copy + Ord> SpatialIndex<K> {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn insert(&mut self, id: K, xy: Coord<f64>) {
        self.tree.insert(IndexedPoint { id, xy: [xy.x, xy.y] });
    }

    /// Remove the entry for `id` at `xy`. Returns `false` if no such entry
    /// was present (idempotent, mirrors `Store::erase`).
    pub fn remove(&mut self, id: K, xy: Coord<f64>) -> bool {
        self.tree.remove(&IndexedPoint { id, xy: [xy.x, xy.y] }).is_some()
    }

    /// The closest indexed point to `xy`, ties broken by minimum `id`.
    pub fn nearest(&self, xy: Coord<f64>) -> Option<(K, f64)> {
        let query = [xy.x, xy.y];
        let closest = self.tree.nearest_neighbor(&query)?;
        let min_dist2 = closest.distance_2(&query);
        let best = self
            .tree
            .locate_within_distance(query, min_dist2 + EPS)
            .filter(|p| p.distance_2(&query) <= min_dist2 + EPS)
            .min_by_key(|p| p.id)?;
        Some((best.id, best.distance_2(&query).sqrt()))
    }

    /// All indexed points within `radius` of `xy`, sorted by ascending
    /// distance then by `id` (spec.md §4.C candidate-gathering order).
    pub fn in_radius(&self, xy: Coord<f64>, radius: f64) -> Vec<(K, f64)> {
        let query = [xy.x, xy.y];
        let r2 = radius * radius;
        let mut hits: Vec<(K, f64)> = self
            .tree
            .locate_within_distance(query, r2)
            .map(|p| (p.id, p.distance_2(&query).sqrt()))
            .collect();
        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap().then_with(|| a.0.cmp(&b.0)));
        hits
    }
}
