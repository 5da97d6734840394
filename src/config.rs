/// Tunables for a triangulation run, fixed at construction and never
/// mutated once generation begins (REDESIGN FLAGS: config record instead
/// of fluent setters).
#[derive(Clone, Copy, Debug)]
pub struct MeshConfig {
    /// Stop once this many triangles have been generated. `0` means
    /// unbounded (run until the front empties).
    pub n_elements: usize,
    /// Scales the candidate search radius relative to the proposed new
    /// edge length.
    pub mesh_range_factor: f64,
    /// Multiplies the search radius once wide-search escalation is
    /// active.
    pub wide_search_factor: f64,
    /// Scales the equilateral-triangle height used to compute the
    /// proposed new-vertex position.
    pub base_vertex_factor: f64,
    /// Lower bound on a candidate triangle's minimum interior angle, in
    /// radians.
    pub min_cell_quality: f64,
    /// Upper bound on a candidate triangle's maximum interior angle, in
    /// radians.
    pub max_cell_angle: f64,
    /// Global floor on `Domain::size_function`'s output.
    pub size_floor: f64,
    /// Maximum radius a size-field hint vertex can influence.
    pub r_max: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            n_elements: 0,
            mesh_range_factor: 1.0,
            wide_search_factor: 10.0,
            base_vertex_factor: 1.5,
            min_cell_quality: 0.1,
            max_cell_angle: 2.5,
            size_floor: 0.1,
            r_max: 10.0,
        }
    }
}
