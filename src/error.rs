use std::fmt;

use meshkernel_core::Mesh;
use meshkernel_domain::DomainError;

/// Errors raised while setting up a triangulation (never by the
/// generation loop itself — meshing failure is a structured
/// [`MeshingOutcome`], not a raised error, spec.md §7).
#[derive(Debug)]
pub enum MeshError {
    Domain(DomainError),
    /// The domain has no boundary edges to seed the front with.
    EmptyDomain,
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Domain(e) => write!(f, "{e}"),
            MeshError::EmptyDomain => write!(f, "domain has no boundary edges"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Domain(e) => Some(e),
            MeshError::EmptyDomain => None,
        }
    }
}

impl From<DomainError> for MeshError {
    fn from(e: DomainError) -> Self {
        MeshError::Domain(e)
    }
}

/// The result of a triangulation run.
///
/// Running out of progress (every front edge rejected, even under wide
/// search) is not an error: it is a `Failed` outcome carrying whatever
/// partial mesh was built, so a caller can still inspect or render it
/// (spec.md §4.G, §7).
#[derive(Debug)]
pub enum MeshingOutcome {
    Success(Mesh),
    Failed { partial: Mesh, n_generated: usize },
}

impl MeshingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MeshingOutcome::Success(_))
    }

    pub fn mesh(&self) -> &Mesh {
        match self {
            MeshingOutcome::Success(m) => m,
            MeshingOutcome::Failed { partial, .. } => partial,
        }
    }
}
