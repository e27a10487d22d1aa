//! Reference campus configuration.
//!
//! The fixed CSUF layout the navigator ships with: 8 buildings and 13
//! weighted walkways. The edge list intentionally carries a parallel
//! KHS/SRC pair with different weights (10 and 11); both are kept as
//! distinct edges and relaxation settles on the cheaper one.

use super::Graph;

/// Buildings of the reference campus.
pub const CAMPUS_LOCATIONS: [&str; 8] = ["Pollak", "TSU", "SGMH", "MH", "ECS", "SRC", "LH", "KHS"];

/// Weighted walkways of the reference campus.
pub const CAMPUS_EDGES: [(&str, &str, u32); 13] = [
    ("Pollak", "TSU", 2),
    ("TSU", "SRC", 3),
    ("TSU", "MH", 4),
    ("MH", "LH", 5),
    ("LH", "SGMH", 6),
    ("SGMH", "Pollak", 7),
    ("Pollak", "ECS", 8),
    ("ECS", "KHS", 9),
    ("KHS", "SRC", 10),
    ("SRC", "KHS", 11),
    ("SRC", "Pollak", 12),
    ("LH", "Pollak", 13),
    ("MH", "Pollak", 14),
];

/// Builds the reference campus graph.
///
/// The static configuration is known-valid, so construction cannot fail.
pub fn campus_graph() -> Graph {
    Graph::build(&CAMPUS_LOCATIONS, &CAMPUS_EDGES)
        .expect("reference campus configuration is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let g = campus_graph();
        assert_eq!(g.location_count(), 8);
        assert_eq!(g.edge_count(), 13);
        for name in CAMPUS_LOCATIONS {
            assert!(g.contains(name));
        }
    }

    #[test]
    fn test_reference_is_connected() {
        let g = campus_graph();
        for name in CAMPUS_LOCATIONS {
            let r = g.shortest_path("Pollak", name).unwrap();
            assert!(r.is_reachable(), "{name} unreachable from Pollak");
        }
    }
}
