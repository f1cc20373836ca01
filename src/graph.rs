//! Connectivity graph over the open cells of a grid

use petgraph::graphmap::UnGraphMap;

use crate::Grid;

/// Undirected 4-connectivity graph over grid cells
///
/// Every cell id `0..height*width` is a node; an edge joins two adjacent
/// ids iff both cells are open, so walled cells are isolated nodes. The
/// edge set is kept in sync with the grid: walling a single cell maps to
/// [Self::disable_node], re-opening it to [Self::restore_node].
#[derive(Clone, Debug)]
pub struct ConnectivityGraph {
    adjacency: UnGraphMap<usize, ()>,
    node_count: usize,
}

impl ConnectivityGraph {
    /// Build the adjacency structure from a grid
    ///
    /// Scans every cell once; each open cell contributes an edge to its
    /// open neighbor below and to the right. Since the graph is
    /// undirected this covers all four directions without processing any
    /// pair twice.
    pub fn build(grid: &Grid) -> Self {
        let mut adjacency = UnGraphMap::new();
        for id in 0..grid.node_count() {
            adjacency.add_node(id);
        }
        for r in 0..grid.height() {
            for c in 0..grid.width() {
                if grid.is_wall(r, c) {
                    continue;
                }
                let id = grid.node_id(r, c);
                if r + 1 < grid.height() && !grid.is_wall(r + 1, c) {
                    adjacency.add_edge(id, grid.node_id(r + 1, c), ());
                }
                if c + 1 < grid.width() && !grid.is_wall(r, c + 1) {
                    adjacency.add_edge(id, grid.node_id(r, c + 1), ());
                }
            }
        }
        ConnectivityGraph {
            adjacency,
            node_count: grid.node_count(),
        }
    }

    /// Number of nodes, equal to the grid cell count
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Neighbors of a node in ascending id order
    ///
    /// The ascending order is the committed exploration order for the
    /// search routines, making path results reproducible across runs.
    pub fn neighbors(&self, id: usize) -> Vec<usize> {
        let mut neighbors: Vec<usize> = self.adjacency.neighbors(id).collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Remove all edges incident to a node, as if the cell were walled
    ///
    /// Returns the removed neighbor set for [Self::restore_node]. Runs in
    /// O(degree); the carving loop calls this once per candidate, so a
    /// full rebuild here would be quadratic over a carve.
    pub fn disable_node(&mut self, id: usize) -> Vec<usize> {
        let removed = self.neighbors(id);
        for &neighbor in &removed {
            self.adjacency.remove_edge(id, neighbor);
        }
        removed
    }

    /// Re-add edges previously removed by [Self::disable_node]
    pub fn restore_node(&mut self, id: usize, neighbors: &[usize]) {
        for &neighbor in neighbors {
            self.adjacency.add_edge(id, neighbor, ());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::ConnectivityGraph;
    use crate::Grid;

    /// All neighbor lists, for whole-graph comparisons
    fn adjacency_lists(graph: &ConnectivityGraph) -> Vec<Vec<usize>> {
        (0..graph.node_count()).map(|id| graph.neighbors(id)).collect()
    }

    #[test]
    fn empty_3x3_grid_has_12_edges() {
        let graph = ConnectivityGraph::build(&Grid::open(3, 3));
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 12);
    }

    #[test]
    fn walls_have_no_edges() {
        let grid = Grid::from_delimited("0,1,0\n0,1,0\n0,0,0").unwrap();
        let graph = ConnectivityGraph::build(&grid);

        assert_eq!(graph.neighbors(1), Vec::<usize>::new());
        assert_eq!(graph.neighbors(4), Vec::<usize>::new());
        assert_eq!(graph.neighbors(0), vec![3]);
        assert_eq!(graph.neighbors(7), vec![6, 8]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let grid = Grid::from_delimited("0,0,1,0\n0,1,0,0\n0,0,0,1").unwrap();
        let graph = ConnectivityGraph::build(&grid);

        for u in 0..graph.node_count() {
            for v in graph.neighbors(u) {
                assert!(graph.neighbors(v).contains(&u), "{} ~ {} not symmetric", u, v);
            }
        }
    }

    #[test]
    fn build_is_idempotent() {
        let grid = Grid::from_delimited("0,0,1,0\n0,1,0,0\n0,0,0,1").unwrap();
        let a = ConnectivityGraph::build(&grid);
        let b = ConnectivityGraph::build(&grid);
        assert_eq!(adjacency_lists(&a), adjacency_lists(&b));
    }

    #[test]
    fn disable_then_restore_round_trips() {
        let mut graph = ConnectivityGraph::build(&Grid::open(3, 3));
        let before = adjacency_lists(&graph);

        let removed = graph.disable_node(4);
        assert_eq!(removed, vec![1, 3, 5, 7]);
        assert_eq!(graph.neighbors(4), Vec::<usize>::new());
        assert_eq!(graph.neighbors(1), vec![0, 2]);

        graph.restore_node(4, &removed);
        assert_eq!(adjacency_lists(&graph), before);
    }

    #[test]
    fn disable_node_removes_exactly_its_edges() {
        let mut graph = ConnectivityGraph::build(&Grid::open(3, 3));
        let removed = graph.disable_node(0);

        assert_eq!(removed, vec![1, 3]);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.neighbors(1), vec![2, 4]);
    }
}
