//! Topology type definitions.

/// A requested undirected connection between two element identities.
pub type Edge = (u32, u32);

/// Sorted-pair key used to deduplicate unordered pairs across passes.
pub fn pair_key(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A classified point-to-point link artifact.
///
/// Point links preserve edge-list order, which is the order the address
/// allocator consumes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLink {
    /// Both endpoints are addressable end devices sharing one dedicated
    /// subnet.
    Direct { node1: u32, node2: u32 },
    /// One endpoint is a wireless segment; order is normalized so the
    /// segment is always node1.
    Wireless { wlan: u32, peer: u32 },
}

/// A shared-media star: one switch/hub center and its neighbors, sharing
/// one subnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanGroup {
    pub center: u32,
    /// Neighbors in adjacency insertion order, already deduplicated
    /// against earlier artifacts.
    pub members: Vec<u32>,
}

/// Output of the classification pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassifiedTopology {
    /// Direct and wireless links interleaved in edge-list order.
    pub point_links: Vec<PointLink>,
    /// LAN groups in registry order of their centers.
    pub lan_groups: Vec<LanGroup>,
}
