use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use tracing::trace;

use crate::error::{GraphError, Result};
use crate::topology::{Adjacency, GraphStore, VertexId};

use super::distance::Distance;

/// Computes single-source shortest-path distances over `adjacency`.
///
/// `cost(a, b)` returns the non-negative cost of moving between adjacent
/// nodes `a` and `b`. Every node of the map appears in the result; nodes with
/// no path from `source` (or all nodes, if `source` is absent) are
/// [`Distance::Unreachable`].
pub fn shortest_distances<K, F>(
    adjacency: &Adjacency<K>,
    source: K,
    cost: F,
) -> HashMap<K, Distance>
where
    K: Copy + Eq + Hash,
    F: Fn(K, K) -> u64,
{
    let nodes = adjacency.nodes();
    let mut dist: HashMap<K, Distance> = nodes
        .iter()
        .map(|&n| (n, Distance::Unreachable))
        .collect();
    let Some(source_idx) = adjacency.index_of(source) else {
        return dist;
    };
    let index: HashMap<K, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

    let mut settled = vec![false; nodes.len()];
    let mut heap = BinaryHeap::new();
    dist.insert(source, Distance::Finite(0));
    heap.push(Reverse((0_u64, source_idx)));

    while let Some(Reverse((d, i))) = heap.pop() {
        if settled[i] {
            continue;
        }
        settled[i] = true;
        let u = nodes[i];
        trace!(index = i, distance = d, "settled node");

        for &y in adjacency.neighbours(u) {
            let Some(&j) = index.get(&y) else { continue };
            if settled[j] {
                continue;
            }
            let candidate = Distance::Finite(d) + cost(u, y);
            if let (Some(current), Some(c)) = (dist.get_mut(&y), candidate.value()) {
                if candidate < *current {
                    *current = candidate;
                    heap.push(Reverse((c, j)));
                }
            }
        }
    }
    dist
}

/// Computes weighted shortest-path distances from a vertex to every vertex.
///
/// Edge weights are read from the store; an `Empty` weight costs 1.
pub struct Dijkstra {
    source: VertexId,
}

impl Dijkstra {
    /// Creates a new `Dijkstra` query from `source`.
    #[must_use]
    pub fn new(source: VertexId) -> Self {
        Self { source }
    }

    /// Executes the query, returning the distance to every vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the source vertex is not found.
    pub fn execute(&self, store: &GraphStore) -> Result<HashMap<VertexId, Distance>> {
        if !store.contains_vertex(self.source) {
            return Err(GraphError::NotFound("vertex").into());
        }
        Ok(shortest_distances(store.adjacency(), self.source, |u, v| {
            store.cost_between(u, v).unwrap_or(1)
        }))
    }
}
