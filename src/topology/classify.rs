//! Link classification.
//!
//! Classification is a pure function from a finalized edge list to a set
//! of classified groups: the adjacency map is built once up front and
//! only read afterwards. A sorted-pair seen-set spans every pass, so a
//! given unordered pair produces at most one artifact across the whole
//! run.

use std::collections::{HashMap, HashSet};

use crate::registry::{ElementKind, ElementRegistry, SynthesisError};

use super::types::{pair_key, ClassifiedTopology, Edge, LanGroup, PointLink};

/// Classify an edge list into direct, LAN, and wireless artifacts.
///
/// Per-edge rules, checked in order:
/// 1. Either endpoint is a wireless segment -> wireless (the segment
///    becomes node1). Wireless always wins this tie-break.
/// 2. Both endpoints are addressable end devices -> direct.
/// 3. Otherwise the edge contributes no point artifact; the LAN pass
///    below covers it.
///
/// Every switch/hub with at least one adjacency entry then anchors a
/// single LAN group holding all of its neighbors, regardless of how many
/// edges reference that center.
///
/// Referencing an unregistered identity fails with `UnknownElement`;
/// this aborts the whole synthesis.
pub fn classify(
    registry: &ElementRegistry,
    edges: &[Edge],
) -> Result<ClassifiedTopology, SynthesisError> {
    // Build the adjacency map from all edges, both directions, preserving
    // insertion order. Endpoint integrity is checked here, before any
    // artifact is produced.
    let mut adjacency: HashMap<u32, Vec<u32>> = HashMap::new();
    for &(a, b) in edges {
        registry.lookup(a)?;
        registry.lookup(b)?;
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut point_links = Vec::new();

    for &(a, b) in edges {
        let kind_a = registry.kind_of(a)?;
        let kind_b = registry.kind_of(b)?;

        let artifact = if kind_a == ElementKind::WirelessLan {
            Some(PointLink::Wireless { wlan: a, peer: b })
        } else if kind_b == ElementKind::WirelessLan {
            Some(PointLink::Wireless { wlan: b, peer: a })
        } else if kind_a.is_addressable() && kind_b.is_addressable() {
            Some(PointLink::Direct { node1: a, node2: b })
        } else {
            None
        };

        if let Some(link) = artifact {
            if seen.insert(pair_key(a, b)) {
                point_links.push(link);
            }
        }
    }

    // LAN pass: centers in registry order, neighbors in adjacency
    // insertion order. Pairs claimed by an earlier pass (or an earlier
    // occurrence inside this group) are skipped.
    let mut lan_groups = Vec::new();
    for element in registry.elements() {
        if !element.kind.is_shared_media() {
            continue;
        }
        let Some(neighbors) = adjacency.get(&element.id) else {
            continue;
        };
        let members: Vec<u32> = neighbors
            .iter()
            .copied()
            .filter(|&neighbor| seen.insert(pair_key(element.id, neighbor)))
            .collect();
        if !members.is_empty() {
            lan_groups.push(LanGroup {
                center: element.id,
                members,
            });
        }
    }

    Ok(ClassifiedTopology {
        point_links,
        lan_groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceCounts;

    fn registry(counts: DeviceCounts) -> ElementRegistry {
        ElementRegistry::populate(&counts, 1)
    }

    #[test]
    fn test_direct_links_between_addressable_devices() {
        // router=1, PCs=2,3
        let registry = registry(DeviceCounts {
            router: 1,
            pc: 2,
            ..DeviceCounts::default()
        });
        let topology = classify(&registry, &[(1, 2), (1, 3)]).unwrap();
        assert_eq!(
            topology.point_links,
            vec![
                PointLink::Direct { node1: 1, node2: 2 },
                PointLink::Direct { node1: 1, node2: 3 },
            ]
        );
        assert!(topology.lan_groups.is_empty());
    }

    #[test]
    fn test_switch_edges_become_one_lan_group() {
        // switch=1, router=2, PC=3
        let registry = registry(DeviceCounts {
            switch: 1,
            router: 1,
            pc: 1,
            ..DeviceCounts::default()
        });
        let topology = classify(&registry, &[(1, 2), (1, 3)]).unwrap();
        assert!(topology.point_links.is_empty());
        assert_eq!(
            topology.lan_groups,
            vec![LanGroup {
                center: 1,
                members: vec![2, 3],
            }]
        );
    }

    #[test]
    fn test_wireless_normalized_and_takes_precedence() {
        // wlan=1, router=2
        let registry = registry(DeviceCounts {
            wireless_lan: 1,
            router: 1,
            ..DeviceCounts::default()
        });
        // Peer listed first; the wireless segment is still node1.
        let topology = classify(&registry, &[(2, 1)]).unwrap();
        assert_eq!(
            topology.point_links,
            vec![PointLink::Wireless { wlan: 1, peer: 2 }]
        );
    }

    #[test]
    fn test_duplicate_pairs_produce_one_artifact() {
        let registry = registry(DeviceCounts {
            router: 2,
            ..DeviceCounts::default()
        });
        let topology = classify(&registry, &[(1, 2), (2, 1), (1, 2)]).unwrap();
        assert_eq!(topology.point_links.len(), 1);
    }

    #[test]
    fn test_lan_pass_respects_pairs_seen_earlier() {
        // The wlan-switch edge is classified wireless, so the switch's
        // LAN group must not re-emit that pair.
        let registry = registry(DeviceCounts {
            switch: 1,
            wireless_lan: 1,
            router: 1,
            ..DeviceCounts::default()
        });
        // switch=1, wlan=2, router=3 (registration order: switch, wlan, router)
        let topology = classify(&registry, &[(2, 1), (1, 3)]).unwrap();
        assert_eq!(
            topology.point_links,
            vec![PointLink::Wireless { wlan: 2, peer: 1 }]
        );
        assert_eq!(
            topology.lan_groups,
            vec![LanGroup {
                center: 1,
                members: vec![3],
            }]
        );
    }

    #[test]
    fn test_unknown_endpoint_is_fatal() {
        let registry = registry(DeviceCounts {
            router: 1,
            ..DeviceCounts::default()
        });
        let result = classify(&registry, &[(1, 99)]);
        assert!(matches!(
            result,
            Err(SynthesisError::UnknownElement { id: 99 })
        ));
    }

    #[test]
    fn test_switch_hub_edge_yields_two_lan_memberships() {
        // switch=1, hub=2, router=3, PC=4. The switch-hub edge is neither
        // direct nor wireless; each center claims the pair it reaches
        // first, so it surfaces once, in the switch's group.
        let registry = registry(DeviceCounts {
            switch: 1,
            hub: 1,
            router: 1,
            pc: 1,
            ..DeviceCounts::default()
        });
        let topology = classify(&registry, &[(1, 2), (1, 3), (2, 4)]).unwrap();
        assert_eq!(
            topology.lan_groups,
            vec![
                LanGroup {
                    center: 1,
                    members: vec![2, 3],
                },
                LanGroup {
                    center: 2,
                    members: vec![4],
                },
            ]
        );
    }
}
