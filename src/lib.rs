//! Navigation and scheduling core for a campus assistant.
//!
//! Provides the three load-bearing algorithms behind a campus navigator:
//! shortest weighted paths between named buildings, substring-based
//! resolution of fuzzy building queries, and greedy selection of a
//! maximal set of non-overlapping activities. Presentation concerns
//! (rendering maps, dialogs, file pickers) live in the consumer.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `Priority`, `TimeOfDay`, `Schedule`
//! - **`graph`**: Immutable location graph + Dijkstra shortest-path queries
//! - **`search`**: KMP substring search and location-name resolution
//! - **`scheduler`**: Greedy maximum-count interval selection
//! - **`validation`**: Ingestion checks for activity records (unknown
//!   locations, inverted time ranges)
//!
//! # Architecture
//!
//! The three query components are independent and side-effect free. The
//! `Graph` is built once at startup from a static edge list and treated as
//! read-only thereafter; `search` and `scheduler` are plain functions over
//! caller-supplied data. Nothing here performs I/O, and nothing holds
//! mutable state between queries.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 24.3 (Dijkstra),
//!   Ch. 32.4 (Knuth-Morris-Pratt)
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (Interval Scheduling)

pub mod graph;
pub mod models;
pub mod scheduler;
pub mod search;
pub mod validation;
