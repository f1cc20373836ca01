//! Maze generation by random wall insertion
//!
//! Starting from a template, repeatedly pick a random open cell and wall
//! it off. Each attempt is committed only if the maze stays solvable;
//! otherwise the cell and its graph edges are restored. Generation stops
//! after `max_failures` rejected attempts or once every candidate has
//! been tried.

use anyhow::ensure;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::graph::ConnectivityGraph;
use crate::solver::is_reachable;
use crate::Grid;

/// Maze generator refining a template grid
pub struct MazeCarver {
    random: StdRng,
}

impl MazeCarver {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Add random walls to the grid while keeping it solvable
    ///
    /// The grid and graph are mutated in lockstep; after the call the
    /// graph still describes exactly the carved grid. Every open cell
    /// except the entrance and the exit is a candidate and is tried at
    /// most once, in shuffled order. A candidate whose wall would
    /// disconnect entrance from exit is rolled back and counted as a
    /// failure; carving stops at `max_failures` of them.
    ///
    /// `max_failures` of `None` defaults to the grid height, which keeps
    /// generation time bounded by the grid's linear dimension. A value of
    /// zero returns the grid unchanged.
    ///
    /// Returns an error if entrance and exit are already disconnected
    /// before carving starts.
    pub fn carve(
        &mut self,
        grid: &mut Grid,
        graph: &mut ConnectivityGraph,
        max_failures: Option<usize>,
    ) -> anyhow::Result<()> {
        let max_failures = max_failures.unwrap_or(grid.height());
        let entrance = grid.entrance();
        let exit = grid.exit();
        ensure!(
            is_reachable(graph, entrance, exit),
            "cannot carve: no path from entrance to exit in the starting grid"
        );

        let mut candidates: Vec<usize> = (0..grid.node_count())
            .filter(|&id| {
                let (r, c) = grid.coords(id);
                id != entrance && id != exit && !grid.is_wall(r, c)
            })
            .collect();
        candidates.shuffle(&mut self.random);

        let mut failures = 0;
        let mut next = 0;
        while failures < max_failures && next < candidates.len() {
            let id = candidates[next];
            let (r, c) = grid.coords(id);

            grid.set_wall(r, c, true);
            let removed = graph.disable_node(id);
            if !is_reachable(graph, entrance, exit) {
                graph.restore_node(id, &removed);
                grid.set_wall(r, c, false);
                failures += 1;
            }
            next += 1;
        }
        Ok(())
    }
}
