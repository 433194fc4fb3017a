//! Session document assembly and XML serialization.
//!
//! The output tree mirrors CORE's session XML format. Serialization uses
//! quick-xml's serde support with two-space indentation and a prepended
//! XML declaration, matching what CORE itself writes.

pub mod types;
pub mod session;

use serde::Serialize;

// Re-export commonly used types for convenience
pub use types::{
    ConfigServices, DeviceNode, Devices, Iface, Link, LinkOptions, Links,
    MobilityConfigurations, NetworkNode, Networks, PositionAttrs, Scenario, ServiceConfiguration,
    ServiceConfigurations, ServiceRef,
};

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>\n";

/// Serialize a scenario document to indented session XML.
pub fn to_xml(scenario: &Scenario) -> Result<String, quick_xml::SeError> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    scenario.serialize(serializer)?;
    Ok(format!("{}{}\n", XML_DECLARATION, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{position_for, LayoutParams};

    fn minimal_scenario() -> Scenario {
        let params = LayoutParams::default();
        Scenario {
            name: "test".to_string(),
            networks: Networks::default(),
            devices: Devices {
                nodes: vec![DeviceNode {
                    id: 1,
                    name: "n1".to_string(),
                    icon: String::new(),
                    canvas: 1,
                    node_type: "router".to_string(),
                    class: String::new(),
                    image: String::new(),
                    position: position_for(&params, 1).into(),
                    configservices: ConfigServices {
                        services: vec![ServiceRef {
                            name: "zebra".to_string(),
                        }],
                    },
                }],
            },
            links: Links::default(),
            service_configurations: ServiceConfigurations::default(),
            session_origin: session::session_origin(&params),
            session_options: session::session_options(),
            session_metadata: session::session_metadata(),
            default_services: session::default_services(),
            mobility_configurations: None,
        }
    }

    #[test]
    fn test_xml_has_declaration_and_root() {
        let xml = to_xml(&minimal_scenario()).unwrap();
        assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n"));
        assert!(xml.contains("<scenario name=\"test\">"));
        assert!(xml.ends_with("</scenario>\n"));
    }

    #[test]
    fn test_device_serializes_attributes_and_services() {
        let xml = to_xml(&minimal_scenario()).unwrap();
        assert!(xml.contains("<device id=\"1\" name=\"n1\" icon=\"\" canvas=\"1\" type=\"router\" class=\"\" image=\"\">"));
        assert!(xml.contains("<service name=\"zebra\"/>"));
        // Empty sections collapse to self-closing tags.
        assert!(xml.contains("<networks/>"));
        assert!(xml.contains("<links/>"));
    }

    #[test]
    fn test_link_interface_attributes() {
        let mut scenario = minimal_scenario();
        scenario.links.links.push(Link {
            node1: 1,
            node2: 2,
            iface1: Some(Iface {
                id: 0,
                name: "eth0".to_string(),
                ip4: Some("10.0.1.1".to_string()),
                ip4_mask: Some(24),
                ip6: Some("2001::11".to_string()),
                ip6_mask: Some(64),
            }),
            iface2: None,
            options: LinkOptions::default(),
        });
        let xml = to_xml(&scenario).unwrap();
        assert!(xml.contains("<link node1=\"1\" node2=\"2\">"));
        assert!(xml.contains(
            "<iface1 id=\"0\" name=\"eth0\" ip4=\"10.0.1.1\" ip4_mask=\"24\" ip6=\"2001::11\" ip6_mask=\"64\"/>"
        ));
        assert!(xml.contains(
            "<options delay=\"0\" bandwidth=\"0\" loss=\"0.0\" dup=\"0\" jitter=\"0\" unidirectional=\"0\" buffer=\"0\"/>"
        ));
    }
}
