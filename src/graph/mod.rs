//! Location graph and shortest-path engine.
//!
//! Owns the weighted undirected graph of campus locations and answers
//! single-pair shortest-path queries over it.
//!
//! # Design
//!
//! The graph is built once from a static location and edge list and never
//! mutated afterwards. Name interning and the adjacency list happen at
//! construction, so queries pay no per-call conversion cost. Parallel
//! edges between the same pair of locations are preserved as distinct
//! traversal options; relaxation naturally prefers the cheaper one.
//!
//! Weights are positive `u32` values and accumulated distances are `u64`,
//! so summation cannot overflow at campus scale (a few thousand edges).
//!
//! # Errors
//!
//! - [`GraphError::InvalidEdge`]: construction-time, fatal, all-or-nothing.
//! - [`GraphError::UnknownLocation`]: query names a location outside the
//!   graph. An unreachable target is not an error; see [`PathResult`].

mod campus;
mod model;
mod shortest_path;

pub use campus::{campus_graph, CAMPUS_EDGES, CAMPUS_LOCATIONS};
pub use model::{Graph, GraphError, InvalidEdgeReason};
pub use shortest_path::{PathResult, UNREACHABLE};
