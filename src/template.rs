//! Deterministic starting grids for maze generation
//!
//! Templates are fixed geometric shapes; the carver adds the randomness.
//! Each template leaves at least one entrance-to-exit path for any size
//! where its barriers fit.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::Grid;

/// Template shape for [generate]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TemplateMode {
    /// All-open grid
    Empty,
    /// Periodic near-full-width barriers with alternating gaps, forcing
    /// back-and-forth traversal
    Slalom,
    /// Two thick horizontal bands offset against each other, forcing an
    /// S-shaped detour
    Ess,
    /// Two single-row barriers, each missing one edge column
    EssThin,
}

impl FromStr for TemplateMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(TemplateMode::Empty),
            "slalom" => Ok(TemplateMode::Slalom),
            "ess" => Ok(TemplateMode::Ess),
            "essthin" => Ok(TemplateMode::EssThin),
            other => bail!("unknown template mode `{}`, expected one of empty, slalom, ess, essthin", other),
        }
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemplateMode::Empty => "empty",
            TemplateMode::Slalom => "slalom",
            TemplateMode::Ess => "ess",
            TemplateMode::EssThin => "essthin",
        };
        write!(f, "{}", name)
    }
}

/// Generate a square template grid of the given size and mode
pub fn generate(size: usize, mode: TemplateMode) -> Grid {
    let mut grid = Grid::open(size, size);
    match mode {
        TemplateMode::Empty => (),
        TemplateMode::Slalom => {
            for r in 1..size - 1 {
                if r % 10 == 0 {
                    wall_row(&mut grid, r, 0, size - 1);
                } else if r % 5 == 0 {
                    wall_row(&mut grid, r, 1, size);
                }
            }
        }
        TemplateMode::Ess => {
            let fifth = size / 5;
            for r in fifth..2 * fifth {
                wall_row(&mut grid, r, 0, 4 * fifth);
            }
            for r in 3 * fifth..4 * fifth {
                wall_row(&mut grid, r, fifth, size);
            }
        }
        TemplateMode::EssThin => {
            let third = size / 3;
            wall_row(&mut grid, third, 0, size - 1);
            wall_row(&mut grid, 2 * third, 1, size);
        }
    }
    grid
}

/// Wall columns `from..to` of one row
fn wall_row(grid: &mut Grid, r: usize, from: usize, to: usize) {
    for c in from..to {
        grid.set_wall(r, c, true);
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::ConnectivityGraph;
    use crate::solver::is_reachable;
    use crate::template::{generate, TemplateMode};

    #[test]
    fn empty_template_is_all_open() {
        let grid = generate(6, TemplateMode::Empty);
        for r in 0..6 {
            for c in 0..6 {
                assert!(!grid.is_wall(r, c));
            }
        }
    }

    #[test]
    fn essthin_9_walls_rows_3_and_6() {
        let grid = generate(9, TemplateMode::EssThin);

        for c in 0..9 {
            assert_eq!(grid.is_wall(3, c), c != 8, "row 3, column {}", c);
            assert_eq!(grid.is_wall(6, c), c != 0, "row 6, column {}", c);
        }
        for r in [0, 1, 2, 4, 5, 7, 8] {
            for c in 0..9 {
                assert!(!grid.is_wall(r, c));
            }
        }
    }

    #[test]
    fn slalom_alternates_gap_sides() {
        let grid = generate(12, TemplateMode::Slalom);

        // Row 5 leaves the first column open, row 10 the last one
        assert!(!grid.is_wall(5, 0));
        for c in 1..12 {
            assert!(grid.is_wall(5, c));
        }
        assert!(!grid.is_wall(10, 11));
        for c in 0..11 {
            assert!(grid.is_wall(10, c));
        }
        for r in [1, 2, 3, 4, 6, 7, 8, 9, 11] {
            for c in 0..12 {
                assert!(!grid.is_wall(r, c));
            }
        }
    }

    #[test]
    fn ess_offsets_two_bands() {
        let grid = generate(10, TemplateMode::Ess);

        for r in 2..4 {
            for c in 0..10 {
                assert_eq!(grid.is_wall(r, c), c < 8, "row {}, column {}", r, c);
            }
        }
        for r in 6..8 {
            for c in 0..10 {
                assert_eq!(grid.is_wall(r, c), c >= 2, "row {}, column {}", r, c);
            }
        }
    }

    #[test]
    fn templates_stay_solvable() {
        for mode in [
            TemplateMode::Empty,
            TemplateMode::Slalom,
            TemplateMode::Ess,
            TemplateMode::EssThin,
        ] {
            for size in [9, 15, 21] {
                let grid = generate(size, mode);
                let graph = ConnectivityGraph::build(&grid);
                assert!(
                    is_reachable(&graph, grid.entrance(), grid.exit()),
                    "{} template of size {} is not solvable",
                    mode,
                    size
                );
            }
        }
    }

    #[test]
    fn mode_parses_from_str() {
        assert_eq!("essthin".parse::<TemplateMode>().unwrap(), TemplateMode::EssThin);
        assert!("spiral".parse::<TemplateMode>().is_err());
    }
}
