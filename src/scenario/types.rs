//! CORE session document types.
//!
//! This module contains the serde structures that mirror the CORE session
//! XML format: the `<networks>`, `<devices>`, `<links>` and service
//! configuration sections, plus the static session blocks. Fields renamed
//! with an `@` prefix serialize as XML attributes; attribute fields must
//! precede element fields within each struct.

use serde::Serialize;

use crate::layout::Position;

/// Root session document.
#[derive(Debug, Serialize)]
#[serde(rename = "scenario")]
pub struct Scenario {
    #[serde(rename = "@name")]
    pub name: String,
    pub networks: Networks,
    pub devices: Devices,
    pub links: Links,
    #[serde(rename = "configservice_configurations")]
    pub service_configurations: ServiceConfigurations,
    pub session_origin: SessionOrigin,
    pub session_options: SessionOptions,
    pub session_metadata: SessionMetadata,
    pub default_services: DefaultServices,
    /// Present only when the scenario contains wireless segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobility_configurations: Option<MobilityConfigurations>,
}

/// `<networks>` section: switches, hubs, wireless segments.
#[derive(Debug, Default, Serialize)]
pub struct Networks {
    #[serde(rename = "network")]
    pub nodes: Vec<NetworkNode>,
}

#[derive(Debug, Serialize)]
pub struct NetworkNode {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@icon")]
    pub icon: String,
    #[serde(rename = "@canvas")]
    pub canvas: u32,
    #[serde(rename = "@type")]
    pub node_type: String,
    pub position: PositionAttrs,
}

/// `<devices>` section: PCs, routers, mobile routers.
#[derive(Debug, Default, Serialize)]
pub struct Devices {
    #[serde(rename = "device")]
    pub nodes: Vec<DeviceNode>,
}

#[derive(Debug, Serialize)]
pub struct DeviceNode {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@icon")]
    pub icon: String,
    #[serde(rename = "@canvas")]
    pub canvas: u32,
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "@class")]
    pub class: String,
    #[serde(rename = "@image")]
    pub image: String,
    pub position: PositionAttrs,
    pub configservices: ConfigServices,
}

/// Position attributes shared by networks and devices. Coordinates are
/// pre-rendered strings; latitude and longitude carry 12 decimal places.
#[derive(Debug, Clone, Serialize)]
pub struct PositionAttrs {
    #[serde(rename = "@x")]
    pub x: u32,
    #[serde(rename = "@y")]
    pub y: u32,
    #[serde(rename = "@lat")]
    pub lat: String,
    #[serde(rename = "@lon")]
    pub lon: String,
    #[serde(rename = "@alt")]
    pub alt: String,
}

impl From<Position> for PositionAttrs {
    fn from(position: Position) -> Self {
        PositionAttrs {
            x: position.x,
            y: position.y,
            lat: format!("{:.12}", position.lat),
            lon: format!("{:.12}", position.lon),
            alt: format!("{:.1}", position.alt),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct ConfigServices {
    #[serde(rename = "service")]
    pub services: Vec<ServiceRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceRef {
    #[serde(rename = "@name")]
    pub name: String,
}

/// `<links>` section.
#[derive(Debug, Default, Serialize)]
pub struct Links {
    #[serde(rename = "link")]
    pub links: Vec<Link>,
}

/// One surviving link artifact.
///
/// Direct links carry both interface records; LAN spokes and wireless
/// links carry only the device-side `iface2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    #[serde(rename = "@node1")]
    pub node1: u32,
    #[serde(rename = "@node2")]
    pub node2: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iface1: Option<Iface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iface2: Option<Iface>,
    pub options: LinkOptions,
}

/// An interface descriptor. Bridged interfaces carry no addresses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Iface {
    #[serde(rename = "@id")]
    pub id: u32,
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@ip4", skip_serializing_if = "Option::is_none")]
    pub ip4: Option<String>,
    #[serde(rename = "@ip4_mask", skip_serializing_if = "Option::is_none")]
    pub ip4_mask: Option<u32>,
    #[serde(rename = "@ip6", skip_serializing_if = "Option::is_none")]
    pub ip6: Option<String>,
    #[serde(rename = "@ip6_mask", skip_serializing_if = "Option::is_none")]
    pub ip6_mask: Option<u32>,
}

/// Fixed per-link options record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkOptions {
    #[serde(rename = "@delay")]
    pub delay: String,
    #[serde(rename = "@bandwidth")]
    pub bandwidth: String,
    #[serde(rename = "@loss")]
    pub loss: String,
    #[serde(rename = "@dup")]
    pub dup: String,
    #[serde(rename = "@jitter")]
    pub jitter: String,
    #[serde(rename = "@unidirectional")]
    pub unidirectional: String,
    #[serde(rename = "@buffer")]
    pub buffer: String,
}

impl Default for LinkOptions {
    fn default() -> Self {
        LinkOptions {
            delay: "0".to_string(),
            bandwidth: "0".to_string(),
            loss: "0.0".to_string(),
            dup: "0".to_string(),
            jitter: "0".to_string(),
            unidirectional: "0".to_string(),
            buffer: "0".to_string(),
        }
    }
}

/// `<configservice_configurations>`: per-device service assignment,
/// indexed by element identity.
#[derive(Debug, Default, Serialize)]
pub struct ServiceConfigurations {
    #[serde(rename = "service")]
    pub services: Vec<ServiceConfiguration>,
}

#[derive(Debug, Serialize)]
pub struct ServiceConfiguration {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@node")]
    pub node: u32,
}

/// `<session_origin>`: geographic reference point of the canvas.
#[derive(Debug, Serialize)]
pub struct SessionOrigin {
    #[serde(rename = "@lat")]
    pub lat: String,
    #[serde(rename = "@lon")]
    pub lon: String,
    #[serde(rename = "@alt")]
    pub alt: String,
    #[serde(rename = "@scale")]
    pub scale: String,
}

/// Generic name/value configuration entry used by the session blocks.
#[derive(Debug, Serialize)]
pub struct ConfigurationEntry {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@value")]
    pub value: String,
}

#[derive(Debug, Default, Serialize)]
pub struct SessionOptions {
    #[serde(rename = "configuration")]
    pub entries: Vec<ConfigurationEntry>,
}

#[derive(Debug, Default, Serialize)]
pub struct SessionMetadata {
    #[serde(rename = "configuration")]
    pub entries: Vec<ConfigurationEntry>,
}

/// `<default_services>`: per-node-type service catalog.
#[derive(Debug, Default, Serialize)]
pub struct DefaultServices {
    #[serde(rename = "node")]
    pub nodes: Vec<NodeServices>,
}

#[derive(Debug, Serialize)]
pub struct NodeServices {
    #[serde(rename = "@type")]
    pub node_type: String,
    #[serde(rename = "service")]
    pub services: Vec<ServiceRef>,
}

/// Placeholder block emitted when wireless segments exist; mobility
/// scripts are configured interactively in CORE.
#[derive(Debug, Default, Serialize)]
pub struct MobilityConfigurations {}
