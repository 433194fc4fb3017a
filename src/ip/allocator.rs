//! Address allocation logic.
//!
//! The allocator consumes classified groups in a fixed order: point
//! links (direct and wireless) in edge-list order, then LAN groups in
//! registry order. Each consumed group takes exactly one value from the
//! running subnet counter, which starts at 1 and is never reused within
//! a run; the counter value drives the third IPv4 octet and the IPv6
//! segment identifier. A LAN group without a router gateway is dropped,
//! but still consumes its counter value so later host numbering stays
//! stable.

use log::{debug, warn};

use crate::registry::{ElementRegistry, SynthesisError};
use crate::scenario::types::{Iface, Link, LinkOptions};
use crate::topology::types::{ClassifiedTopology, LanGroup, PointLink};

/// Result of the allocation pass.
#[derive(Debug, Default)]
pub struct AllocationOutcome {
    /// Surviving link artifacts, in allocation order.
    pub links: Vec<Link>,
    /// LAN groups dropped for lack of a router gateway.
    pub dropped_groups: Vec<LanGroup>,
}

/// Per-run address allocator holding the segment counter.
#[derive(Debug)]
pub struct AddressAllocator {
    next_subnet: u32,
}

impl Default for AddressAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressAllocator {
    pub fn new() -> Self {
        AddressAllocator { next_subnet: 1 }
    }

    /// Assign addresses and interface names to every classified group.
    ///
    /// Interface counters on the registry are incremented once per
    /// interface actually handed out; LAN centers and wireless segments
    /// receive no interface and are not incremented.
    pub fn allocate(
        &mut self,
        registry: &mut ElementRegistry,
        topology: &ClassifiedTopology,
    ) -> Result<AllocationOutcome, SynthesisError> {
        let mut outcome = AllocationOutcome::default();

        for point_link in &topology.point_links {
            let link = match *point_link {
                PointLink::Direct { node1, node2 } => self.direct_link(registry, node1, node2)?,
                PointLink::Wireless { wlan, peer } => self.wireless_link(registry, wlan, peer)?,
            };
            outcome.links.push(link);
        }

        for group in &topology.lan_groups {
            let subnet = self.consume_subnet();
            match self.lan_links(registry, group, subnet)? {
                Some(mut links) => outcome.links.append(&mut links),
                None => {
                    warn!(
                        "LAN group on element {} has no router gateway; dropping {} member link(s)",
                        group.center,
                        group.members.len()
                    );
                    outcome.dropped_groups.push(group.clone());
                }
            }
        }

        Ok(outcome)
    }

    fn consume_subnet(&mut self) -> u32 {
        let subnet = self.next_subnet;
        self.next_subnet += 1;
        subnet
    }

    /// Dedicated /24 + /64 pair for two addressable endpoints.
    fn direct_link(
        &mut self,
        registry: &mut ElementRegistry,
        node1: u32,
        node2: u32,
    ) -> Result<Link, SynthesisError> {
        let subnet = self.consume_subnet();
        let ip4_prefix = format!("10.0.{}.", subnet);
        let ip6_prefix = format!("2001::{}", subnet);
        debug!(
            "Direct link {}-{} on subnet {}0/24",
            node1, node2, ip4_prefix
        );

        let iface1 = addressed_iface(
            registry,
            node1,
            format!("{}1", ip4_prefix),
            24,
            format!("{}1", ip6_prefix),
            64,
        )?;
        let iface2 = addressed_iface(
            registry,
            node2,
            format!("{}2", ip4_prefix),
            24,
            format!("{}2", ip6_prefix),
            64,
        )?;

        Ok(Link {
            node1,
            node2,
            iface1: Some(iface1),
            iface2: Some(iface2),
            options: LinkOptions::default(),
        })
    }

    /// Wireless link: bridged when the peer is itself a network element,
    /// point-to-point addressed otherwise.
    fn wireless_link(
        &mut self,
        registry: &mut ElementRegistry,
        wlan: u32,
        peer: u32,
    ) -> Result<Link, SynthesisError> {
        let subnet = self.consume_subnet();
        let peer_kind = registry.kind_of(peer)?;

        let iface2 = if peer_kind.is_addressable() {
            addressed_iface(
                registry,
                peer,
                format!("10.0.{}.1", subnet),
                32,
                format!("2001::{}:1", subnet),
                128,
            )?
        } else {
            // Switch/hub peer: a virtual bridge, not a routed interface.
            let index = registry.next_interface_index(peer)?;
            debug!("Bridging wireless segment {} onto element {}", wlan, peer);
            Iface {
                id: index,
                name: format!("veth{}.{}.1", wlan, peer),
                ip4: None,
                ip4_mask: None,
                ip6: None,
                ip6_mask: None,
            }
        };

        Ok(Link {
            node1: wlan,
            node2: peer,
            iface1: None,
            iface2: Some(iface2),
            options: LinkOptions::default(),
        })
    }

    /// Shared /24 + /64 across one LAN group, gateway first.
    ///
    /// Returns `None` when no member is routing-capable; the caller has
    /// already consumed the group's counter value.
    fn lan_links(
        &mut self,
        registry: &mut ElementRegistry,
        group: &LanGroup,
        subnet: u32,
    ) -> Result<Option<Vec<Link>>, SynthesisError> {
        let mut gateway = None;
        for &member in &group.members {
            if registry.kind_of(member)?.is_router() {
                gateway = Some(member);
                break;
            }
        }
        let Some(gateway) = gateway else {
            return Ok(None);
        };

        let ip4_prefix = format!("10.0.{}.", subnet);
        let ip6_prefix = format!("2001::{}", subnet);
        debug!(
            "LAN group on {} (gateway {}) shares subnet {}0/24",
            group.center, gateway, ip4_prefix
        );

        let mut links = Vec::with_capacity(group.members.len());
        let mut host = 1u32;

        // Gateway anchors the numbering at .1.
        links.push(lan_spoke(
            registry,
            group.center,
            gateway,
            &ip4_prefix,
            &ip6_prefix,
            host,
        )?);
        host += 1;

        for &member in &group.members {
            if member == gateway {
                continue;
            }
            links.push(lan_spoke(
                registry,
                group.center,
                member,
                &ip4_prefix,
                &ip6_prefix,
                host,
            )?);
            host += 1;
        }

        Ok(Some(links))
    }
}

/// Build an addressed interface record, reserving the owner's next
/// interface index for its name.
fn addressed_iface(
    registry: &mut ElementRegistry,
    id: u32,
    ip4: String,
    ip4_mask: u32,
    ip6: String,
    ip6_mask: u32,
) -> Result<Iface, SynthesisError> {
    let index = registry.next_interface_index(id)?;
    Ok(Iface {
        id: index,
        name: format!("eth{}", index),
        ip4: Some(ip4),
        ip4_mask: Some(ip4_mask),
        ip6: Some(ip6),
        ip6_mask: Some(ip6_mask),
    })
}

/// One LAN spoke: center as node1, a single member-side interface.
fn lan_spoke(
    registry: &mut ElementRegistry,
    center: u32,
    member: u32,
    ip4_prefix: &str,
    ip6_prefix: &str,
    host: u32,
) -> Result<Link, SynthesisError> {
    let iface2 = addressed_iface(
        registry,
        member,
        format!("{}{}", ip4_prefix, host),
        24,
        format!("{}:{}", ip6_prefix, host),
        64,
    )?;
    Ok(Link {
        node1: center,
        node2: member,
        iface1: None,
        iface2: Some(iface2),
        options: LinkOptions::default(),
    })
}
