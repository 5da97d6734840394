//! The front-update decision kernel (component F, spec.md §4.F): given a
//! base edge, either commits a new triangle — reusing an existing vertex
//! or creating one — or refuses.

use std::collections::HashSet;

use geo::Coord;
use meshkernel_core::{EdgeId, FacetId, Front, SpatialIndex, VertexId};
use meshkernel_domain::{triangle_height_factor, Domain};
use meshkernel_geom::{angle_between, triangle_signed_area, Containment};

use crate::config::MeshConfig;

/// Weight on the directional term of a candidate's cost, relative to its
/// distance from the proposed ideal position (spec.md §4.F.1).
const ANGLE_PENALTY_WEIGHT: f64 = 0.5;

/// Signed-area floor a candidate triangle must clear, scaled by the base
/// edge's squared length (spec.md §4.F.2a).
const MIN_AREA_FACTOR: f64 = 1e-4;

/// The radius (relative to the base edge length) searched for existing
/// facets that might overlap a candidate triangle (spec.md §4.F.2e).
const OVERLAP_SEARCH_FACTOR: f64 = 2.0;

/// The outcome of one [`advance`] call.
#[derive(Debug)]
pub enum FrontOutcome {
    Committed(FacetId),
    Rejected,
}

/// The proposed new-vertex position and search radius for a base edge,
/// per spec.md §4.F's numeric formula.
pub fn proposal(domain: &Domain, base_edge: &meshkernel_core::Edge, config: &MeshConfig, wide_search: bool) -> (Coord<f64>, f64) {
    let l1 = base_edge.length * triangle_height_factor() * config.base_vertex_factor;
    let l2 = domain.size_function(base_edge.midpoint);
    let len = l1.min(l2);
    let p_star = Coord {
        x: base_edge.midpoint.x + base_edge.normal.x * len,
        y: base_edge.midpoint.y + base_edge.normal.y * len,
    };
    let mut range = config.mesh_range_factor * len;
    if wide_search {
        range *= config.wide_search_factor;
    }
    (p_star, range)
}

struct Candidate {
    vertex: Option<VertexId>,
    xy: Coord<f64>,
}

/// Attempt to advance the front across `base`. On success, mutates
/// `domain`'s mesh and `front`, and indexes the new facet in
/// `facet_index`.
pub fn advance(
    domain: &mut Domain,
    front: &mut Front,
    facet_index: &mut SpatialIndex<FacetId>,
    base: EdgeId,
    config: &MeshConfig,
    wide_search: bool,
) -> FrontOutcome {
    let base_edge = domain.mesh().edge(base).clone();
    let (v1, v2) = (base_edge.v1, base_edge.v2);
    let (p_star, radius) = proposal(domain, &base_edge, config, wide_search);

    let candidates = collect_candidates(domain, v1, v2, p_star, base_edge.midpoint, base_edge.normal, radius);

    for cand in &candidates {
        if validate(domain, front, facet_index, base, v1, v2, cand, config) {
            let facet = commit(domain, front, facet_index, base, v1, v2, cand);
            return FrontOutcome::Committed(facet);
        }
    }
    FrontOutcome::Rejected
}

/// `angle_penalty(e, v)` from spec.md §4.F.1's candidate-cost formula:
/// how far the direction from the base edge's midpoint to `to` deviates
/// from the edge's inward normal, via the shared `angle_between` kernel
/// primitive (component A) rather than an ad hoc dot product.
fn direction_penalty(normal: Coord<f64>, from: Coord<f64>, to: Coord<f64>) -> f64 {
    let dir = Coord { x: to.x - from.x, y: to.y - from.y };
    if dir.x.abs() < f64::EPSILON && dir.y.abs() < f64::EPSILON {
        return 0.0;
    }
    1.0 - angle_between(normal, dir).cos()
}

fn collect_candidates(
    domain: &Domain,
    v1: VertexId,
    v2: VertexId,
    p_star: Coord<f64>,
    mid: Coord<f64>,
    normal: Coord<f64>,
    radius: f64,
) -> Vec<Candidate> {
    let mut seen: HashSet<VertexId> = HashSet::new();
    let mut scored: Vec<(f64, VertexId, Coord<f64>)> = Vec::new();

    let mut consider = |id: VertexId| {
        if seen.insert(id) {
            let xy = domain.mesh().vertex(id).xy;
            let dist = meshkernel_geom::distance(xy, p_star);
            let cost = dist + ANGLE_PENALTY_WEIGHT * direction_penalty(normal, mid, xy);
            scored.push((cost, id, xy));
        }
    };

    consider(v1);
    consider(v2);
    for (id, _) in domain.vertex_index().in_radius(p_star, radius) {
        consider(id);
    }

    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then_with(|| a.1.cmp(&b.1)));

    let mut candidates: Vec<Candidate> = scored.into_iter().map(|(_, id, xy)| Candidate { vertex: Some(id), xy }).collect();
    candidates.push(Candidate { vertex: None, xy: p_star });
    candidates
}

/// The three interior angles of triangle `(a, b, c)`, in radians.
fn interior_angles(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> [f64; 3] {
    let angle_at = |p: Coord<f64>, q: Coord<f64>, r: Coord<f64>| -> f64 {
        let (ux, uy) = (q.x - p.x, q.y - p.y);
        let (vx, vy) = (r.x - p.x, r.y - p.y);
        let (lu, lv) = ((ux * ux + uy * uy).sqrt(), (vx * vx + vy * vy).sqrt());
        if lu < f64::EPSILON || lv < f64::EPSILON {
            return 0.0;
        }
        let cos_t = ((ux * vx + uy * vy) / (lu * lv)).clamp(-1.0, 1.0);
        cos_t.acos()
    };
    [angle_at(a, b, c), angle_at(b, c, a), angle_at(c, a, b)]
}

fn validate(
    domain: &Domain,
    front: &Front,
    facet_index: &SpatialIndex<FacetId>,
    base: EdgeId,
    v1: VertexId,
    v2: VertexId,
    cand: &Candidate,
    config: &MeshConfig,
) -> bool {
    let (p1, p2) = (domain.mesh().vertex(v1).xy, domain.mesh().vertex(v2).xy);
    let c = cand.xy;

    // a. must be CCW with area clearing the noise floor.
    let base_len = meshkernel_geom::distance(p1, p2);
    let area = triangle_signed_area(p1, p2, c);
    if area < MIN_AREA_FACTOR * base_len * base_len {
        return false;
    }

    // b. shape quality: bound the minimum and maximum interior angle.
    let angles = interior_angles(p1, p2, c);
    let (min_angle, max_angle) = (
        angles.iter().cloned().fold(f64::INFINITY, f64::min),
        angles.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );
    if min_angle < config.min_cell_quality || max_angle > config.max_cell_angle {
        return false;
    }

    // c. no crossing with unrelated front edges (edges incident to `v1`,
    // `v2` or the candidate itself share an endpoint by construction and
    // are excluded, not genuine crossings).
    let touches = |id: VertexId| id == v1 || id == v2 || cand.vertex == Some(id);
    for fe in front.iter() {
        if fe == base {
            continue;
        }
        let e = domain.mesh().edge(fe);
        if touches(e.v1) || touches(e.v2) {
            continue;
        }
        let (ev1, ev2) = (domain.mesh().vertex(e.v1).xy, domain.mesh().vertex(e.v2).xy);
        if meshkernel_geom::segments_intersect(p1, c, ev1, ev2) || meshkernel_geom::segments_intersect(p2, c, ev1, ev2) {
            return false;
        }
    }

    // d. must lie within the closed domain (inside or exactly on its
    // boundary — reused boundary vertices legitimately sit on an edge).
    if domain.containment(c) == Containment::Outside {
        return false;
    }

    // e. must not overlap an existing facet.
    let centroid = Coord { x: (p1.x + p2.x + c.x) / 3.0, y: (p1.y + p2.y + c.y) / 3.0 };
    for (facet, _) in facet_index.in_radius(centroid, OVERLAP_SEARCH_FACTOR * base_len) {
        let ring: Vec<Coord<f64>> = domain
            .mesh()
            .facet(facet)
            .vertices()
            .iter()
            .map(|&v| domain.mesh().vertex(v).xy)
            .collect();
        if meshkernel_geom::in_on_polygon(centroid, &ring) == Containment::Inside {
            return false;
        }
    }

    true
}

/// Commit the validated `cand` as the third vertex of a new triangle over
/// `(v1, v2)`.
fn commit(domain: &mut Domain, front: &mut Front, facet_index: &mut SpatialIndex<FacetId>, base: EdgeId, v1: VertexId, v2: VertexId, cand: &Candidate) -> FacetId {
    let c = match cand.vertex {
        Some(id) => id,
        None => domain.register_vertex(cand.xy, -1.0, -1.0),
    };

    let close_or_create = |domain: &mut Domain, front: &mut Front, a: VertexId, b: VertexId| -> EdgeId {
        if let Some(existing) = front.iter().find(|&fe| {
            let e = domain.mesh().edge(fe);
            (e.v1 == a && e.v2 == b) || (e.v1 == b && e.v2 == a)
        }) {
            front.remove(existing);
            existing
        } else {
            let id = domain.mesh_mut().add_edge(a, b, 0);
            let len = domain.mesh().edge(id).length;
            front.push(id, len);
            id
        }
    };

    let e2 = close_or_create(domain, front, v2, c);
    let e3 = close_or_create(domain, front, c, v1);

    let facet = domain.mesh_mut().add_triangle(v1, v2, c);
    let (p1, p2, p3) = (domain.mesh().vertex(v1).xy, domain.mesh().vertex(v2).xy, domain.mesh().vertex(c).xy);
    let centroid = Coord { x: (p1.x + p2.x + p3.x) / 3.0, y: (p1.y + p2.y + p3.y) / 3.0 };
    facet_index.insert(facet, centroid);

    for (edge_id, (a, b)) in [(base, (v1, v2)), (e2, (v2, c)), (e3, (c, v1))] {
        let other = {
            let e = domain.mesh().edge(edge_id);
            e.left.or(e.right)
        };
        domain.mesh_mut().attach_facet_to_edge(edge_id, facet);
        domain.mesh_mut().link_neighbors(facet, other, a, b);
    }

    front.remove(base);
    facet
}
