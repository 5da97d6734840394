use std::fs;

use anyhow::{bail, Context, Result};
use meshkernel::{generate_elements, MeshConfig, MeshTables, MeshingProgress};
use meshkernel_domain::{parse_csv, BoundaryKind, Domain};

use crate::cli::{MeshArgs, OutputFormat};
use crate::writer::{write_text, write_vtk};

pub fn run(cli: &crate::cli::Cli, args: &MeshArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| "./mesh.vtk".into());

    if cli.verbose > 0 {
        eprintln!("[mesh] reading boundary from {}", args.boundary.display());
    }
    let data = fs::read_to_string(&args.boundary)
        .with_context(|| format!("failed to read {}", args.boundary.display()))?;
    let boundary = parse_csv(&data)?;

    let mut domain = Domain::new(args.size_floor, args.r_max);
    domain.set_shape(BoundaryKind::Exterior, &boundary.coords, &boundary.markers, &boundary.props)?;

    let config = MeshConfig { n_elements: args.n_elements, size_floor: args.size_floor, r_max: args.r_max, ..MeshConfig::default() };

    let verbose = cli.verbose;
    let mut on_progress = move |p: MeshingProgress| {
        if verbose > 1 {
            eprintln!("[mesh] {} triangles, front size {}, wide_search={}", p.n_generated, p.front_size, p.wide_search);
        }
    };
    let progress: Option<&mut dyn FnMut(MeshingProgress)> = if verbose > 0 { Some(&mut on_progress) } else { None };

    let outcome = generate_elements(domain, &config, progress)?;
    if !outcome.is_success() {
        eprintln!("[mesh] warning: front advance stalled before the domain was fully meshed");
    }

    let tables = MeshTables::from_mesh(outcome.mesh());
    if cli.verbose > 0 {
        eprintln!("[mesh] writing {} vertices, {} triangles to {}", tables.vertices.len(), tables.triangles.len(), out_path.display());
    }

    match args.format {
        OutputFormat::Vtk => write_vtk(&out_path, &tables)?,
        OutputFormat::Text => write_text(&out_path, &tables)?,
    }

    if tables.triangles.is_empty() {
        bail!("no triangles were generated");
    }
    Ok(())
}
