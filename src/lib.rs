//! Build and solve rectangular grid mazes
//!
//! A maze is a boolean grid where `true` marks a wall and `false` an open
//! cell. The entrance is the top-left cell and the exit the bottom-right
//! cell. An undirected graph over the open cells answers reachability and
//! shortest-path queries; the generator refines a deterministic template
//! by walling off random cells while keeping the maze solvable.
//!
//! # Examples
//! ## Solve a maze loaded from delimited text
//! ```
//! use gridmaze::solver;
//! use gridmaze::graph::ConnectivityGraph;
//! use gridmaze::Grid;
//!
//! let grid = Grid::from_delimited("0,1,0\n0,1,0\n0,0,0").unwrap();
//! let graph = ConnectivityGraph::build(&grid);
//! let path = solver::shortest_path(&graph, grid.entrance(), grid.exit());
//! assert_eq!(path, vec![0, 3, 6, 7, 8]);
//!
//! let annotated = grid.mark_path(&path);
//! println!("{}", gridmaze::render(&annotated));
//! ```
//!
//! ## Generate a maze from a template
//! ```
//! use gridmaze::carver::MazeCarver;
//! use gridmaze::graph::ConnectivityGraph;
//! use gridmaze::solver;
//! use gridmaze::template::{self, TemplateMode};
//!
//! let mut grid = template::generate(9, TemplateMode::EssThin);
//! let mut graph = ConnectivityGraph::build(&grid);
//! MazeCarver::new(Some(7)).carve(&mut grid, &mut graph, None).unwrap();
//! assert!(solver::is_reachable(&graph, grid.entrance(), grid.exit()));
//! ```

use anyhow::bail;
use itertools::Itertools;

#[cfg(feature = "mapgen")]
pub mod carver;
pub mod graph;
pub mod solver;
pub mod template;

/// Boolean wall/open matrix representing the maze
///
/// Cells are stored row-major; cell `(r, c)` has the linear node id
/// `r * width + c`. The grid is always rectangular and non-empty.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major cells, `true` = wall
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-open grid
    ///
    /// Panics if either dimension is zero.
    pub fn open(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be non-zero");
        Grid {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Parse a grid from delimited text
    ///
    /// One row per line, cells separated by commas. `0` or `false` is an
    /// open cell, `1` or `true` a wall. Whitespace around cells is
    /// ignored.
    ///
    /// Returns an error if the input is empty, a row length differs from
    /// the first row, or a cell holds an unrecognized token.
    ///
    /// # Examples
    /// ```
    /// use gridmaze::Grid;
    /// let grid = Grid::from_delimited("0,1\n0,0").unwrap();
    /// assert!(grid.is_wall(0, 1));
    /// ```
    pub fn from_delimited(text: &str) -> anyhow::Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (r, line) in text.lines().enumerate() {
            let row: Vec<&str> = line.split(',').collect();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    bail!("row {} has {} columns, expected {}", r, row.len(), w)
                }
                Some(_) => (),
            }
            for (c, cell) in row.iter().enumerate() {
                match cell.trim() {
                    "0" | "false" => cells.push(false),
                    "1" | "true" => cells.push(true),
                    other => bail!("unrecognized cell `{}` at row {}, column {}", other, r, c),
                }
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Grid {
                height,
                width,
                cells,
            }),
            _ => bail!("empty maze input"),
        }
    }

    /// Write the grid as delimited text, the inverse of [Self::from_delimited]
    pub fn to_delimited(&self) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&wall| u8::from(wall)).join(","))
            .join("\n")
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, which is also the graph node count
    pub fn node_count(&self) -> usize {
        self.height * self.width
    }

    /// Linear node id of cell `(r, c)`
    pub fn node_id(&self, r: usize, c: usize) -> usize {
        r * self.width + c
    }

    /// Cell coordinates `(r, c)` of a linear node id
    pub fn coords(&self, id: usize) -> (usize, usize) {
        (id / self.width, id % self.width)
    }

    pub fn is_wall(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.width + c]
    }

    pub fn set_wall(&mut self, r: usize, c: usize, wall: bool) {
        self.cells[r * self.width + c] = wall;
    }

    /// Node id of the entrance (top-left cell)
    pub fn entrance(&self) -> usize {
        0
    }

    /// Node id of the exit (bottom-right cell)
    pub fn exit(&self) -> usize {
        self.height * self.width - 1
    }

    /// Annotate the grid with a solution path
    ///
    /// Returns a tri-state copy of the grid where the cells on `path` are
    /// relabeled [CellState::Path], so a renderer can discriminate open
    /// cells, walls and the path.
    pub fn mark_path(&self, path: &[usize]) -> Vec<Vec<CellState>> {
        let mut rows: Vec<Vec<CellState>> = self
            .cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&wall| if wall { CellState::Wall } else { CellState::Open })
                    .collect()
            })
            .collect();
        for &id in path {
            let (r, c) = self.coords(id);
            rows[r][c] = CellState::Path;
        }
        rows
    }
}

/// Cell annotation for rendering: open, wall, or on the solution path
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CellState {
    Open,
    Wall,
    Path,
}

impl CellState {
    /// Display symbol; white for open cells, black for walls, red for the path
    pub fn symbol(&self) -> char {
        match self {
            CellState::Open => '⬜',
            CellState::Wall => '⬛',
            CellState::Path => '🟥',
        }
    }
}

/// Render an annotated grid as terminal text, one symbol per cell
pub fn render(rows: &[Vec<CellState>]) -> String {
    rows.iter()
        .map(|row| row.iter().map(CellState::symbol).join(""))
        .join("\n")
}
