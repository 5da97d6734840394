#![doc = "Advancing-front 2D mesh generation"]

mod cleanup;
mod config;
mod error;
mod front_update;
mod output;
mod strategy;

pub use config::MeshConfig;
pub use error::{MeshError, MeshingOutcome};
pub use front_update::FrontOutcome;
pub use output::MeshTables;
pub use strategy::{generate_elements, MeshingProgress};

pub use meshkernel_core::{Edge, EdgeId, Facet, FacetId, FacetRef, Mesh, Vertex, VertexId};
pub use meshkernel_domain::{parse_csv, Boundary, BoundaryKind, CsvBoundary, Domain, DomainError};
