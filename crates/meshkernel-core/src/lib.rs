//! Entity store, spatial index and advancing front for 2D mesh
//! generation: the structural components (B, C, E) shared by every
//! front-advance strategy in `meshkernel`.

mod edge;
mod facet;
mod front;
mod mesh;
mod spatial;
mod store;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use facet::{Facet, FacetId, FacetRef};
pub use front::Front;
pub use mesh::Mesh;
pub use spatial::SpatialIndex;
pub use store::Store;
pub use vertex::{Vertex, VertexId};
