//! Static session boilerplate.
//!
//! These blocks do not depend on the synthesized topology; they mirror
//! the fixed sections of a stock CORE session file.

use crate::layout::LayoutParams;
use crate::registry::REGISTRATION_ORDER;

use super::types::{
    ConfigurationEntry, DefaultServices, NodeServices, ServiceRef, SessionMetadata,
    SessionOptions, SessionOrigin,
};

/// Canvas reference scale, meters per 100 pixels.
const SESSION_SCALE: &str = "150.0";

pub fn session_origin(params: &LayoutParams) -> SessionOrigin {
    SessionOrigin {
        lat: format!("{:.12}", params.lat_start),
        lon: format!("{:.12}", params.lon_start),
        alt: format!("{:.1}", params.altitude),
        scale: SESSION_SCALE.to_string(),
    }
}

pub fn session_options() -> SessionOptions {
    let entries = [
        ("controlnet", ""),
        ("controlnet0", ""),
        ("controlnet1", ""),
        ("controlnet2", ""),
        ("controlnet3", ""),
        ("controlnet_updown_script", ""),
        ("enablerj45", "1"),
        ("preservedir", "0"),
        ("enablesdt", "0"),
        ("sdturl", "tcp://127.0.0.1:50000/"),
        ("ovs", "0"),
        ("platform_id_start", "1"),
        ("nem_id_start", "1"),
        ("link_enabled", "1"),
        ("loss_threshold", "30"),
        ("link_interval", "1"),
        ("link_timeout", "4"),
        ("mtu", "0"),
    ];
    SessionOptions {
        entries: entries
            .iter()
            .map(|&(name, value)| ConfigurationEntry {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

pub fn session_metadata() -> SessionMetadata {
    let entries = [
        ("canvas c1", "{name {Canvas1}}"),
        (
            "global_options",
            "interface_names=no ip_addresses=yes ipv6_addresses=yes \
             node_labels=yes link_labels=yes show_api=no \
             background_images=no annotations=yes grid=yes traffic_start=0",
        ),
    ];
    SessionMetadata {
        entries: entries
            .iter()
            .map(|&(name, value)| ConfigurationEntry {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
    }
}

/// Per-node-type service catalog for every kind that carries services.
pub fn default_services() -> DefaultServices {
    let nodes = REGISTRATION_ORDER
        .iter()
        .filter(|kind| !kind.default_services().is_empty())
        .map(|&kind| NodeServices {
            node_type: kind.core_type().to_string(),
            services: kind
                .default_services()
                .iter()
                .map(|&name| ServiceRef {
                    name: name.to_string(),
                })
                .collect(),
        })
        .collect();
    DefaultServices { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementKind;

    #[test]
    fn test_default_services_cover_host_kinds() {
        let catalog = default_services();
        let types: Vec<&str> = catalog
            .nodes
            .iter()
            .map(|node| node.node_type.as_str())
            .collect();
        assert_eq!(types, vec!["router", "mdr", "PC"]);

        let router = &catalog.nodes[0];
        let names: Vec<&str> = router
            .services
            .iter()
            .map(|service| service.name.as_str())
            .collect();
        assert_eq!(names, vec!["OSPFv3", "OSPFv2", "IPForward", "zebra"]);
    }

    #[test]
    fn test_session_origin_matches_layout_reference() {
        let origin = session_origin(&LayoutParams::default());
        assert_eq!(origin.lat, "47.576000000000");
        assert_eq!(origin.lon, "-122.127000000000");
        assert_eq!(origin.alt, "2.0");
    }

    #[test]
    fn test_network_kinds_carry_no_services() {
        assert!(ElementKind::Switch.default_services().is_empty());
        assert!(ElementKind::WirelessLan.default_services().is_empty());
    }
}
