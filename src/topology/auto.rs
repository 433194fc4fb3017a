//! Automatic topology generation.
//!
//! Used when the spec supplies no explicit connection list: routers are
//! fully meshed, shared-media elements attach round-robin to routers, and
//! end hosts attach round-robin to the concatenation of shared-media and
//! router elements. The round-robin cursor is shared across hosts and
//! advances once per examined candidate; a host whose full candidate
//! cycle yields nothing stays unattached. The whole pass is deterministic
//! and never produces a self-loop or duplicate unordered pair.

use std::collections::HashSet;

use log::{debug, warn};

use crate::registry::{ElementKind, ElementRegistry};

use super::types::{pair_key, Edge};

/// Result of the auto-topology pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AutoTopology {
    pub edges: Vec<Edge>,
    /// PCs for which no unlinked parent candidate remained.
    pub unattached_hosts: Vec<u32>,
}

/// Synthesize an edge list for a registry with no explicit connections.
///
/// Heuristic edges are oriented `(parent, host)` so the parent end takes
/// host `.1` on direct links, matching the gateway-first convention of
/// LAN groups.
pub fn synthesize_edges(registry: &ElementRegistry) -> AutoTopology {
    let routers = registry.ids_where(ElementKind::is_router);
    let shared_media = registry.ids_where(ElementKind::is_shared_media);
    let hosts = registry.ids_where(|kind| kind == ElementKind::Pc);

    let mut edges: Vec<Edge> = Vec::new();
    let mut linked: HashSet<(u32, u32)> = HashSet::new();
    let mut unattached_hosts = Vec::new();

    // (a) Full mesh among routers.
    for (i, &left) in routers.iter().enumerate() {
        for &right in &routers[i + 1..] {
            if linked.insert(pair_key(left, right)) {
                edges.push((left, right));
            }
        }
    }

    // (b) Each switch/hub attaches to one router, round-robin.
    if routers.is_empty() {
        if !shared_media.is_empty() {
            debug!(
                "No routers available; {} shared-media element(s) left unattached",
                shared_media.len()
            );
        }
    } else {
        for (i, &center) in shared_media.iter().enumerate() {
            let router = routers[i % routers.len()];
            if linked.insert(pair_key(center, router)) {
                edges.push((center, router));
            }
        }
    }

    // (c) Each PC attaches to the first unlinked candidate parent. The
    // cursor persists across hosts and advances per examined candidate,
    // bounded to one full cycle per host.
    let parents: Vec<u32> = shared_media.iter().chain(routers.iter()).copied().collect();
    let mut cursor = 0usize;
    for &host in &hosts {
        if parents.is_empty() {
            warn!("Host {} has no parent candidates; leaving unattached", host);
            unattached_hosts.push(host);
            continue;
        }
        let mut attached = false;
        for _ in 0..parents.len() {
            let candidate = parents[cursor % parents.len()];
            cursor += 1;
            if linked.insert(pair_key(candidate, host)) {
                edges.push((candidate, host));
                attached = true;
                break;
            }
        }
        if !attached {
            warn!(
                "Host {} is already linked to every candidate; leaving unattached",
                host
            );
            unattached_hosts.push(host);
        }
    }

    AutoTopology {
        edges,
        unattached_hosts,
    }
}
