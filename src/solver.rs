//! Breadth-first search over the connectivity graph
//!
//! Edges are unweighted, so the first path BFS finds is a shortest path
//! by edge count. Neighbors are explored in ascending node id order
//! (see [ConnectivityGraph::neighbors]), which fixes the tie-break among
//! equally short paths: the same graph always yields the same path.

use std::collections::VecDeque;

use crate::graph::ConnectivityGraph;

/// Check whether `end` can be reached from `start`
///
/// Stops as soon as `end` is dequeued or the frontier is exhausted.
pub fn is_reachable(graph: &ConnectivityGraph, start: usize, end: usize) -> bool {
    let mut visited = vec![false; graph.node_count()];
    visited[start] = true;
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }
        for neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }
    false
}

/// Find a shortest path from `start` to `end`
///
/// Returns the node ids along the path, both endpoints included. An
/// empty result means `end` is unreachable; this is a normal outcome,
/// not an error.
pub fn shortest_path(graph: &ConnectivityGraph, start: usize, end: usize) -> Vec<usize> {
    let mut visited = vec![false; graph.node_count()];
    let mut predecessor: Vec<Option<usize>> = vec![None; graph.node_count()];
    visited[start] = true;
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return reconstruct(&predecessor, start, end);
        }
        for neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                predecessor[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }
    Vec::new()
}

/// Walk predecessor pointers back from `end` and reverse
fn reconstruct(predecessor: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        // Every dequeued node except `start` has a predecessor
        match predecessor[current] {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
