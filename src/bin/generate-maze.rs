//! CLI for maze generation

use clap::Parser;
use gridmaze::carver::MazeCarver;
use gridmaze::graph::ConnectivityGraph;
use gridmaze::template::{self, TemplateMode};
use gridmaze::{render, solver};

/// Generate a maze from a template and solve it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated grid side length
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Template shape: empty, slalom, ess or essthin
    #[arg(long, default_value = "empty")]
    mode: String,

    /// Rejected wall attempts allowed before generation stops
    /// (defaults to the grid side length)
    #[arg(long)]
    max_failures: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the grid as delimited text instead of the solved maze
    #[arg(short, long)]
    csv: bool,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mode: TemplateMode = args.mode.parse()?;

    let mut grid = template::generate(args.size, mode);
    let mut graph = ConnectivityGraph::build(&grid);
    MazeCarver::new(args.seed).carve(&mut grid, &mut graph, args.max_failures)?;

    if args.csv {
        println!("{}", grid.to_delimited());
    } else {
        let path = solver::shortest_path(&graph, grid.entrance(), grid.exit());
        println!("{}", render(&grid.mark_path(&path)));
        println!("The shortest path is {} steps.", path.len() - 1);
    }
    Ok(())
}
