use std::fs;

use anyhow::{Context, Result};
use geo::Coord;
use meshkernel_domain::{BoundaryKind, Domain};

use crate::cli::{Cli, ShapeArgs, ShapeKind};

/// Build the requested built-in shape into a throwaway [`Domain`], then
/// dump its boundary loop back out as the CSV format `mesh` reads
/// (`x,y,marker[,size_hint,range_hint]`), one row per vertex in the
/// loop's stored order.
pub fn run(cli: &Cli, args: &ShapeArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| "./boundary.csv".into());

    let mut domain = Domain::new(0.1, 10.0);
    let center = Coord { x: 0.0, y: 0.0 };
    match args.kind {
        ShapeKind::Square => {
            domain.set_shape_square(BoundaryKind::Exterior, center, args.width, args.marker, -1.0, -1.0)?;
        }
        ShapeKind::Rectangle => {
            domain.set_shape_rectangle(BoundaryKind::Exterior, center, args.width, args.height, args.marker, -1.0, -1.0)?;
        }
        ShapeKind::Triangle => {
            domain.set_shape_equilateral_triangle(BoundaryKind::Exterior, center, args.width, args.marker, -1.0, -1.0)?;
        }
        ShapeKind::Circle => {
            domain.set_shape_circle(BoundaryKind::Exterior, center, args.width, args.sides, args.marker, -1.0, -1.0)?;
        }
    }

    if cli.verbose > 0 {
        eprintln!("[shape] writing boundary to {}", out_path.display());
    }

    let boundary = &domain.boundaries()[0];
    let mut out = String::new();
    for &edge in &boundary.edges {
        let e = domain.mesh().edge(edge);
        let v = domain.mesh().vertex(e.v1);
        out.push_str(&format!("{},{},{}\n", v.xy.x, v.xy.y, e.marker));
    }
    fs::write(&out_path, out).with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(())
}
