//! Network topology module.
//!
//! This module builds the link topology for a scenario: classifying an
//! explicit connection list into direct, LAN, and wireless artifacts, and
//! synthesizing a connection list when none is supplied.

pub mod types;
pub mod classify;
pub mod auto;

// Re-export key types and functions for easier access
pub use types::{ClassifiedTopology, Edge, LanGroup, PointLink};
pub use classify::classify;
pub use auto::synthesize_edges;
