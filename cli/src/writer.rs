//! Mesh file writers: legacy ASCII VTK (`UNSTRUCTURED_GRID`, triangle
//! cells) and a minimal plain-text vertex/facet table, the only two
//! output consumers worth stubbing for this engine.

use std::fs;
use std::path::Path;

use anyhow::Result;
use meshkernel::MeshTables;

/// VTK_TRIANGLE, per the legacy VTK cell-type enumeration.
const VTK_TRIANGLE: u32 = 5;

pub fn write_vtk(path: &Path, tables: &MeshTables) -> Result<()> {
    let mut out = String::new();
    out.push_str("# vtk DataFile Version 3.0\n");
    out.push_str("meshkernel output\n");
    out.push_str("ASCII\n");
    out.push_str("DATASET UNSTRUCTURED_GRID\n");

    out.push_str(&format!("POINTS {} float\n", tables.vertices.len()));
    for &(x, y) in &tables.vertices {
        out.push_str(&format!("{x} {y} 0.0\n"));
    }

    let cell_size: usize = tables.triangles.len() * 4;
    out.push_str(&format!("CELLS {} {}\n", tables.triangles.len(), cell_size));
    for tri in &tables.triangles {
        out.push_str(&format!("3 {} {} {}\n", tri[0], tri[1], tri[2]));
    }

    out.push_str(&format!("CELL_TYPES {}\n", tables.triangles.len()));
    for _ in &tables.triangles {
        out.push_str(&format!("{VTK_TRIANGLE}\n"));
    }

    fs::write(path, out)?;
    Ok(())
}

/// `n_vertices\nindex x y\n...\nn_facets\nindex v0 v1 v2 color n0 n1 n2\n...`
/// (neighbor index `-1` stands in for no neighbor on that edge, spec.md §6).
pub fn write_text(path: &Path, tables: &MeshTables) -> Result<()> {
    let mut out = String::new();
    out.push_str(&format!("{}\n", tables.vertices.len()));
    for (i, &(x, y)) in tables.vertices.iter().enumerate() {
        out.push_str(&format!("{i} {x} {y}\n"));
    }
    out.push_str(&format!("{}\n", tables.facets.len()));
    for row in &tables.facets {
        let verts = row.vertices.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        let neighbors = row.neighbors.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ");
        out.push_str(&format!("{} {verts} {} {neighbors}\n", row.index, row.color));
    }
    fs::write(path, out)?;
    Ok(())
}
