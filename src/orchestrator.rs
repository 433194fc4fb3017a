//! High-level orchestration of scenario synthesis.
//!
//! The pipeline is strictly staged: the registry is fully populated
//! before layout or classification read it, and classification finishes
//! before allocation runs, because gateway selection and interface
//! indices depend on the final adjacency. The entire transformation is
//! in-memory and deterministic for identical inputs.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::Path;

use crate::config::ScenarioSpec;
use crate::ip::AddressAllocator;
use crate::layout::{position_for, LayoutParams};
use crate::registry::{Element, ElementKind, ElementRegistry, SynthesisError};
use crate::scenario::types::{
    ConfigServices, DeviceNode, Devices, MobilityConfigurations, NetworkNode, Networks, Scenario,
    ServiceConfiguration, ServiceConfigurations, ServiceRef,
};
use crate::scenario::{self, session, Link, Links};
use crate::topology::{self, classify, LanGroup};

/// Identity assigned to the first registered element.
pub const START_ID: u32 = 1;

/// Session name used when neither the spec nor the CLI provides one.
pub const DEFAULT_SESSION_NAME: &str = "scenario";

/// Everything a synthesis run produces: the session document plus
/// diagnostics a caller may want to surface.
#[derive(Debug)]
pub struct SynthesisReport {
    pub scenario: Scenario,
    /// Final element states, including interface counts.
    pub elements: Vec<Element>,
    /// LAN groups dropped for lack of a router gateway.
    pub dropped_lan_groups: Vec<LanGroup>,
    /// Hosts the auto-topology heuristic could not attach.
    pub unattached_hosts: Vec<u32>,
}

/// Run the full synthesis pipeline over a validated spec.
pub fn synthesize(spec: &ScenarioSpec) -> Result<SynthesisReport, SynthesisError> {
    let layout = LayoutParams::default();
    let mut registry = ElementRegistry::populate(&spec.devices, START_ID);
    info!("Registered {} element(s)", registry.len());

    let (edges, unattached_hosts) = if spec.wants_autogenerated_links() {
        let auto = topology::synthesize_edges(&registry);
        info!("Auto-generated {} link(s)", auto.edges.len());
        (auto.edges, auto.unattached_hosts)
    } else {
        (spec.links.clone().unwrap_or_default(), Vec::new())
    };

    let classified = classify(&registry, &edges)?;
    info!(
        "Classified {} point link(s) and {} LAN group(s)",
        classified.point_links.len(),
        classified.lan_groups.len()
    );

    let outcome = AddressAllocator::new().allocate(&mut registry, &classified)?;

    let scenario = build_scenario(spec, &registry, &layout, outcome.links);
    Ok(SynthesisReport {
        scenario,
        elements: registry.into_elements(),
        dropped_lan_groups: outcome.dropped_groups,
        unattached_hosts,
    })
}

/// Synthesize a spec and write the session XML to `output`.
pub fn generate_scenario_file(spec: &ScenarioSpec, output: &Path) -> Result<SynthesisReport> {
    let report = synthesize(spec)?;

    let xml =
        scenario::to_xml(&report.scenario).wrap_err("failed to serialize the scenario document")?;
    fs::write(output, xml)
        .wrap_err_with(|| format!("failed to write scenario file '{}'", output.display()))?;

    info!(
        "Wrote scenario '{}' with {} link(s) to {:?}",
        report.scenario.name,
        report.scenario.links.links.len(),
        output
    );
    Ok(report)
}

/// Assemble the session document from registered elements and allocated
/// links.
fn build_scenario(
    spec: &ScenarioSpec,
    registry: &ElementRegistry,
    layout: &LayoutParams,
    links: Vec<Link>,
) -> Scenario {
    let name = spec
        .session_name
        .clone()
        .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string());

    let mut networks = Networks::default();
    let mut devices = Devices::default();
    let mut service_configurations = ServiceConfigurations::default();
    let mut has_wireless = false;

    for element in registry.elements() {
        let position = position_for(layout, element.id);
        if element.kind.is_network() {
            has_wireless |= element.kind == ElementKind::WirelessLan;
            networks.nodes.push(NetworkNode {
                id: element.id,
                name: element.name.clone(),
                icon: String::new(),
                canvas: 1,
                node_type: element.kind.core_type().to_string(),
                position: position.into(),
            });
        } else {
            let services = element.kind.default_services();
            devices.nodes.push(DeviceNode {
                id: element.id,
                name: element.name.clone(),
                icon: String::new(),
                canvas: 1,
                node_type: element.kind.core_type().to_string(),
                class: String::new(),
                image: String::new(),
                position: position.into(),
                configservices: ConfigServices {
                    services: services
                        .iter()
                        .map(|&service| ServiceRef {
                            name: service.to_string(),
                        })
                        .collect(),
                },
            });
            for &service in services {
                service_configurations.services.push(ServiceConfiguration {
                    name: service.to_string(),
                    node: element.id,
                });
            }
        }
    }

    Scenario {
        name,
        networks,
        devices,
        links: Links { links },
        service_configurations,
        session_origin: session::session_origin(layout),
        session_options: session::session_options(),
        session_metadata: session::session_metadata(),
        default_services: session::default_services(),
        mobility_configurations: has_wireless.then(MobilityConfigurations::default),
    }
}
