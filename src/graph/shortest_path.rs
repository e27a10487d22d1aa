//! Single-pair shortest path queries.
//!
//! # Algorithm
//!
//! Dijkstra with a binary-heap frontier. The heap has no decrease-key, so
//! relaxation pushes duplicate entries and stale pops (recorded distance
//! larger than the settled distance) are skipped. Predecessors are
//! recorded during relaxation and walked backward for path
//! reconstruction.
//!
//! Tie-breaking between equal-distance candidates follows heap pop order,
//! which depends on insertion order. Which of several equally short paths
//! is returned is therefore unspecified; the distance is not.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 24.3

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Graph, GraphError};

/// Sentinel distance for an unreachable target.
pub const UNREACHABLE: u64 = u64::MAX;

/// Result of a shortest-path query.
///
/// An unreachable target is a normal result, not an error: `distance` is
/// [`UNREACHABLE`] and `path` is empty. Callers must check
/// [`is_reachable`](PathResult::is_reachable) before using the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Sum of traversed edge weights, or [`UNREACHABLE`].
    pub distance: u64,
    /// Locations from source to target inclusive. Empty when unreachable;
    /// a single element when source equals target.
    pub path: Vec<String>,
}

impl PathResult {
    /// Whether the target can be reached from the source.
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

impl Graph {
    /// Computes the shortest weighted path from `source` to `target`.
    ///
    /// Fails with [`GraphError::UnknownLocation`] if either name is not in
    /// the graph. A disconnected pair yields an unreachable [`PathResult`]
    /// rather than an error. `source == target` yields distance 0 and a
    /// one-element path.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_nav::graph::campus_graph;
    ///
    /// let graph = campus_graph();
    /// let result = graph.shortest_path("Pollak", "TSU").unwrap();
    /// assert_eq!(result.distance, 2);
    /// assert_eq!(result.path, vec!["Pollak", "TSU"]);
    /// ```
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<PathResult, GraphError> {
        let src = self
            .index_of(source)
            .ok_or_else(|| GraphError::UnknownLocation(source.to_string()))?;
        let tgt = self
            .index_of(target)
            .ok_or_else(|| GraphError::UnknownLocation(target.to_string()))?;

        let n = self.location_count();
        let mut dist = vec![UNREACHABLE; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        dist[src] = 0;

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((0u64, src)));

        while let Some(Reverse((d, u))) = frontier.pop() {
            if d > dist[u] {
                // Stale duplicate left over from an earlier relaxation.
                continue;
            }
            for &(v, weight) in self.neighbors(u) {
                let candidate = d + u64::from(weight);
                if candidate < dist[v] {
                    dist[v] = candidate;
                    prev[v] = Some(u);
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }

        if prev[tgt].is_none() && tgt != src {
            return Ok(PathResult {
                distance: UNREACHABLE,
                path: Vec::new(),
            });
        }

        let mut path = Vec::new();
        let mut current = Some(tgt);
        while let Some(idx) = current {
            path.push(self.name_of(idx).to_string());
            current = prev[idx];
        }
        path.reverse();

        Ok(PathResult {
            distance: dist[tgt],
            path,
        })
    }
}
