//! Recorded horizon updates used by the integration tests and benches.

/// A single junction: the most probable path continues straight ahead
/// while an alternative branches off the first edge.
pub const JUNCTION: &str = "junction.json";

/// A motorway exit with a ramp alternative, a deeper second-level
/// branch, and a tie between two level-0 continuations at the end.
pub const MOTORWAY_EXIT: &str = "motorway_exit.json";

/// A position-only update along [`MOTORWAY_EXIT`].
pub const MOTORWAY_EXIT_PROGRESS: &str = "motorway_exit_progress.json";

/// An update listing the same edge twice.
pub const DUPLICATE_EDGE: &str = "duplicate_edge.json";

/// Absolute path of a fixture shipped with this crate.
pub fn fixture_path(name: &str) -> String {
    format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), name)
}
