//! Location graph model.
//!
//! An undirected weighted graph over named campus buildings. Built once
//! from a static location and edge list, immutable thereafter. Names are
//! interned to dense indices at construction, and the adjacency list is
//! built exactly once rather than per query.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// An undirected edge between two locations, by index into the graph's
/// location table.
///
/// The edge list may contain parallel edges between the same pair with
/// different weights; each is kept as a distinct traversal option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) a: usize,
    pub(crate) b: usize,
    /// Traversal cost. Always positive.
    pub(crate) weight: u32,
}

/// Errors from graph construction and shortest-path queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a location outside the location set, or has a
    /// zero weight. Fatal to construction.
    InvalidEdge {
        from: String,
        to: String,
        weight: u32,
        reason: InvalidEdgeReason,
    },
    /// A query named a location that is not in the graph. Distinct from
    /// an unreachable target, which is an ordinary result.
    UnknownLocation(String),
}

/// Why an edge was rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEdgeReason {
    UnknownEndpoint,
    NonPositiveWeight,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidEdge {
                from,
                to,
                weight,
                reason,
            } => match reason {
                InvalidEdgeReason::UnknownEndpoint => {
                    write!(f, "edge '{from}' - '{to}' references an unknown location")
                }
                InvalidEdgeReason::NonPositiveWeight => write!(
                    f,
                    "edge '{from}' - '{to}' has non-positive weight {weight}"
                ),
            },
            GraphError::UnknownLocation(name) => {
                write!(f, "unknown location '{name}'")
            }
        }
    }
}

impl Error for GraphError {}

/// An immutable weighted undirected graph of campus locations.
///
/// # Example
///
/// ```
/// use campus_nav::graph::Graph;
///
/// let graph = Graph::build(
///     &["Pollak", "TSU"],
///     &[("Pollak", "TSU", 2)],
/// ).unwrap();
///
/// assert_eq!(graph.location_count(), 2);
/// assert!(graph.contains("TSU"));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// Location names, index-addressed.
    names: Vec<String>,
    /// Name → index lookup.
    index: HashMap<String, usize>,
    /// All edges as given, parallel edges included.
    edges: Vec<Edge>,
    /// Per-location incident (neighbor, weight) pairs, both directions.
    adjacency: Vec<Vec<(usize, u32)>>,
}

impl Graph {
    /// Builds a graph from a location set and a weighted edge list.
    ///
    /// Fails with [`GraphError::InvalidEdge`] if an edge endpoint is not
    /// among `locations` or its weight is zero. Construction is
    /// all-or-nothing: no partially built graph is ever returned.
    /// Isolated locations (no incident edges) are permitted. Duplicate
    /// location names collapse to one entry; parallel edges do not.
    pub fn build(locations: &[&str], edges: &[(&str, &str, u32)]) -> Result<Self, GraphError> {
        let mut names = Vec::with_capacity(locations.len());
        let mut index = HashMap::with_capacity(locations.len());
        for &name in locations {
            if !index.contains_key(name) {
                index.insert(name.to_string(), names.len());
                names.push(name.to_string());
            }
        }

        let mut edge_list = Vec::with_capacity(edges.len());
        let mut adjacency = vec![Vec::new(); names.len()];
        for &(from, to, weight) in edges {
            let (Some(&a), Some(&b)) = (index.get(from), index.get(to)) else {
                return Err(GraphError::InvalidEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                    reason: InvalidEdgeReason::UnknownEndpoint,
                });
            };
            if weight == 0 {
                return Err(GraphError::InvalidEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                    reason: InvalidEdgeReason::NonPositiveWeight,
                });
            }
            edge_list.push(Edge { a, b, weight });
            adjacency[a].push((b, weight));
            adjacency[b].push((a, weight));
        }

        Ok(Self {
            names,
            index,
            edges: edge_list,
            adjacency,
        })
    }

    /// Location names in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` is a location in this graph.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as (location, location, weight) triples in construction
    /// order, parallel edges included. Suited to rendering the campus
    /// map with weight labels.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> {
        self.edges
            .iter()
            .map(|e| (self.name_of(e.a), self.name_of(e.b), e.weight))
    }

    /// Whether at least one edge joins `a` and `b`, in either orientation.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        self.adjacency[ia].iter().any(|&(n, _)| n == ib)
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub(crate) fn name_of(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub(crate) fn neighbors(&self, idx: usize) -> &[(usize, u32)] {
        &self.adjacency[idx]
    }
}
