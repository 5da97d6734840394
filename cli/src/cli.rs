use std::path::PathBuf;

/// Advancing-front mesh generator CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "meshkernel", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Triangulate a boundary and write the resulting mesh
    Mesh(MeshArgs),

    /// Write a built-in boundary shape as a CSV file
    Shape(ShapeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Vtk,
    Text,
}

#[derive(clap::Args, Debug)]
pub struct MeshArgs {
    /// Input CSV boundary file (columns: x,y,marker[,size_hint,range_hint])
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundary: PathBuf,

    /// Output mesh file, defaults to "./mesh.vtk"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output file format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Vtk)]
    pub format: OutputFormat,

    /// Stop once this many triangles have been generated (0 = unbounded)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub n_elements: usize,

    /// Global floor on the local element size
    #[arg(long, default_value_t = 0.1)]
    pub size_floor: f64,

    /// Maximum radius a size-field hint vertex can influence
    #[arg(long, default_value_t = 10.0)]
    pub r_max: f64,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Triangle,
    Circle,
}

#[derive(clap::Args, Debug)]
pub struct ShapeArgs {
    /// Which built-in boundary to generate
    #[arg(value_enum)]
    pub kind: ShapeKind,

    /// Output CSV file, defaults to "./boundary.csv"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Width (rectangle/square side, triangle/circle characteristic size)
    #[arg(short, long, default_value_t = 1.0)]
    pub width: f64,

    /// Height (rectangle only; ignored otherwise)
    #[arg(long, default_value_t = 1.0)]
    pub height: f64,

    /// Number of sides for `circle` (ignored otherwise)
    #[arg(long, default_value_t = 30)]
    pub sides: usize,

    /// Boundary marker written on every edge
    #[arg(short, long, default_value_t = 1)]
    pub marker: i32,
}
