//! The outer advancing-front loop (component G, spec.md §4.G), ported
//! from `TriangulationStrategy::generate_elements` /
//! `advancing_front_loop` (original_source/src/algorithm/TriangulationStrategy.h).

use meshkernel_core::{EdgeId, FacetId, Front, SpatialIndex};
use meshkernel_domain::Domain;

use crate::cleanup;
use crate::config::MeshConfig;
use crate::error::{MeshError, MeshingOutcome};
use crate::front_update::{advance, FrontOutcome};

/// One outer-loop iteration's progress, handed to an optional caller
/// callback (spec.md's "progress-update callback" collaborator).
#[derive(Clone, Copy, Debug)]
pub struct MeshingProgress {
    pub n_generated: usize,
    pub front_size: usize,
    pub wide_search: bool,
}

/// Seed the front with every boundary edge, oriented so the unmeshed
/// side lies on the left (spec.md §4.E `init_advancing_front`).
///
/// Boundary edges are constructed by [`meshkernel_domain::Domain::set_shape`]
/// already oriented this way (exterior CCW, interior CW), so seeding is a
/// direct transfer with no re-orientation needed here.
fn init_advancing_front(domain: &Domain) -> Front {
    let mut front = Front::new();
    for boundary in domain.boundaries() {
        for &edge in &boundary.edges {
            let len = domain.mesh().edge(edge).length;
            front.push(edge, len);
        }
    }
    front
}

/// Run the advancing-front triangulation to completion.
///
/// `progress` is called once per outer-loop iteration if given (never by
/// the library for logging — see spec.md's ambient-stack note that
/// library crates never print).
pub fn generate_elements(
    mut domain: Domain,
    config: &MeshConfig,
    mut progress: Option<&mut dyn FnMut(MeshingProgress)>,
) -> Result<MeshingOutcome, MeshError> {
    if domain.num_boundary_edges() < 1 {
        return Err(MeshError::EmptyDomain);
    }

    let mut front = init_advancing_front(&domain);
    let mut facet_index: SpatialIndex<FacetId> = SpatialIndex::new();

    let mut base: Option<EdgeId> = front.set_base_first();
    let mut iteration: usize = 0;
    let mut wide_search = false;
    let mut n_generated: usize = 0;

    loop {
        let Some(base_edge) = base else {
            break;
        };

        match advance(&mut domain, &mut front, &mut facet_index, base_edge, config, wide_search) {
            FrontOutcome::Committed(_) => {
                n_generated += 1;
                if wide_search {
                    front.sort();
                }
                iteration = 0;
                wide_search = false;
                base = front.set_base_first();
                domain.mesh_mut().clear_waste();
            }
            FrontOutcome::Rejected => {
                base = front.set_base_next();
                iteration += 1;
            }
        }

        if iteration == front.size() && !wide_search {
            wide_search = true;
            iteration = 0;
        }

        if let Some(cb) = progress.as_deref_mut() {
            cb(MeshingProgress { n_generated, front_size: front.size(), wide_search });
        }

        if front.size() == 0 {
            cleanup::run_all(domain.mesh_mut());
            return Ok(MeshingOutcome::Success(domain.into_mesh()));
        }

        if config.n_elements > 0 && n_generated == config.n_elements {
            cleanup::run_all(domain.mesh_mut());
            return Ok(MeshingOutcome::Success(domain.into_mesh()));
        }

        if iteration == front.size() && wide_search {
            return Ok(MeshingOutcome::Failed { partial: domain.into_mesh(), n_generated });
        }
    }

    // The front was empty from the start (a domain with no interior to fill).
    Ok(MeshingOutcome::Success(domain.into_mesh()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use meshkernel_domain::BoundaryKind;

    fn pt(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn generate_elements_fills_a_square() {
        let mut domain = Domain::new(1.0, 10.0);
        let coords = [pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)];
        domain.set_shape(BoundaryKind::Exterior, &coords, &[1, 1, 1, 1], &[(-1.0, -1.0); 4]).unwrap();

        let config = MeshConfig { size_floor: 1.0, ..MeshConfig::default() };
        let outcome = generate_elements(domain, &config, None).unwrap();
        assert!(outcome.is_success());
        assert!(outcome.mesh().num_facets() > 0);
    }

    #[test]
    fn generate_elements_rejects_an_empty_domain() {
        let domain = Domain::new(1.0, 10.0);
        let config = MeshConfig::default();
        assert!(matches!(generate_elements(domain, &config, None), Err(MeshError::EmptyDomain)));
    }

    #[test]
    fn bounded_mode_stops_at_n_elements() {
        let mut domain = Domain::new(0.3, 10.0);
        let coords = [pt(0.0, 0.0), pt(6.0, 0.0), pt(6.0, 6.0), pt(0.0, 6.0)];
        domain.set_shape(BoundaryKind::Exterior, &coords, &[1, 1, 1, 1], &[(-1.0, -1.0); 4]).unwrap();

        let config = MeshConfig { size_floor: 0.3, n_elements: 1, ..MeshConfig::default() };
        let outcome = generate_elements(domain, &config, None).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.mesh().num_facets(), 1);
    }

    #[test]
    fn progress_callback_runs_at_least_once() {
        let mut domain = Domain::new(1.0, 10.0);
        let coords = [pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0), pt(0.0, 4.0)];
        domain.set_shape(BoundaryKind::Exterior, &coords, &[1, 1, 1, 1], &[(-1.0, -1.0); 4]).unwrap();

        let mut calls = 0;
        let config = MeshConfig { size_floor: 1.0, ..MeshConfig::default() };
        let mut cb = |_p: MeshingProgress| calls += 1;
        generate_elements(domain, &config, Some(&mut cb)).unwrap();
        assert!(calls > 0);
    }
}
