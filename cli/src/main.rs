
mod cli;
mod commands;
mod writer;

use cli::{Cli, Commands};
use commands::{mesh, shape};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Mesh(args) => mesh::run(&cli, args),
        Commands::Shape(args) => shape::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
