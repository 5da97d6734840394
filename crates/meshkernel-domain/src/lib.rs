//! Boundary and domain definitions (component D): boundary construction
//! with orientation fixing and vertex dedup, the local mesh-size field,
//! CSV ingestion and programmatic shape constructors.

mod boundary;
mod csv;
mod domain;
mod error;
mod shapes;

pub use boundary::{Boundary, BoundaryKind};
pub use csv::{parse_csv, CsvBoundary};
pub use domain::Domain;
pub use error::DomainError;
pub use shapes::triangle_height_factor;
