//! CLI for maze solving

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use gridmaze::graph::ConnectivityGraph;
use gridmaze::{render, solver, Grid};

/// Shortest path through a grid maze
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the grid as delimited text instead of symbols
    #[arg(short, long)]
    csv: bool,

    /// File with the maze grid, one comma-separated row of 0/1 per line.
    /// Use `-` for stdin.
    file: PathBuf,
}

/// Read maze from file, solve, print output
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(args.file)?
    };
    let grid = Grid::from_delimited(text.trim())?;
    let graph = ConnectivityGraph::build(&grid);
    let path = solver::shortest_path(&graph, grid.entrance(), grid.exit());

    if args.csv {
        println!("{}", grid.to_delimited());
    } else {
        println!("{}", render(&grid.mark_path(&path)));
    }
    if path.is_empty() {
        println!("The maze has no path from entrance to exit.");
    } else {
        println!("The shortest path is {} steps.", path.len() - 1);
    }
    Ok(())
}
