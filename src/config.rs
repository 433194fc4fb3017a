use serde::{Deserialize, Serialize};

use crate::registry::ElementKind;

/// Upper bound on total registered elements; keeps subnet counters and
/// canvas wrap behavior inside sane ranges.
pub const MAX_ELEMENTS: u32 = 4096;

/// Requested element counts per kind.
///
/// Field names match the kind names used in spec files; aliases cover the
/// spellings found in existing CORE scenario configs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DeviceCounts {
    #[serde(default, alias = "SWITCH")]
    pub switch: u32,
    #[serde(default, alias = "HUB")]
    pub hub: u32,
    #[serde(default, alias = "WIRELESS_LAN", alias = "wlan")]
    pub wireless_lan: u32,
    #[serde(default, alias = "PC")]
    pub pc: u32,
    #[serde(default, alias = "ROUTER")]
    pub router: u32,
    #[serde(default, alias = "mobile_router", alias = "MDR")]
    pub mdr: u32,
}

impl DeviceCounts {
    /// Requested count for a single kind.
    pub fn count_for(&self, kind: ElementKind) -> u32 {
        match kind {
            ElementKind::Switch => self.switch,
            ElementKind::Hub => self.hub,
            ElementKind::WirelessLan => self.wireless_lan,
            ElementKind::Pc => self.pc,
            ElementKind::Router => self.router,
            ElementKind::MobileRouter => self.mdr,
        }
    }

    /// Total number of elements the spec asks for.
    pub fn total(&self) -> u32 {
        ElementKind::ALL
            .iter()
            .map(|&kind| self.count_for(kind))
            .sum()
    }
}

/// Declarative scenario specification consumed by the synthesizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub devices: DeviceCounts,
    /// Explicit undirected connections between element identities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<(u32, u32)>>,
    /// Forces heuristic link generation even if `links` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autogenerate_links: Option<bool>,
    /// Session name recorded in the output document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
}

impl ScenarioSpec {
    /// Validate the specification.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let total = self.devices.total();
        if total == 0 {
            return Err(ValidationError::InvalidDevices(
                "spec must request at least one element".to_string(),
            ));
        }
        if total > MAX_ELEMENTS {
            return Err(ValidationError::InvalidDevices(format!(
                "spec requests {} elements, maximum is {}",
                total, MAX_ELEMENTS
            )));
        }

        if let Some(links) = &self.links {
            for &(a, b) in links {
                if a == b {
                    return Err(ValidationError::InvalidLinks(format!(
                        "self-loop link ({}, {}) is not allowed",
                        a, b
                    )));
                }
            }
        }

        Ok(())
    }

    /// Whether the auto-topology heuristic should produce the link list.
    ///
    /// An explicitly empty `links` list means "no links", not "generate
    /// for me"; only an absent list or the `autogenerate_links` flag
    /// triggers the heuristic.
    pub fn wants_autogenerated_links(&self) -> bool {
        self.autogenerate_links.unwrap_or(false) || self.links.is_none()
    }
}

/// Specification validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid device section: {0}")]
    InvalidDevices(String),
    #[error("Invalid link section: {0}")]
    InvalidLinks(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_parsing_json() {
        let json = r#"
{
  "devices": { "switch": 1, "router": 2, "PC": 2 },
  "links": [[1, 2], [1, 3]]
}
"#;
        let spec: ScenarioSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.devices.switch, 1);
        assert_eq!(spec.devices.router, 2);
        assert_eq!(spec.devices.pc, 2);
        assert_eq!(spec.devices.total(), 5);
        assert_eq!(spec.links.as_deref(), Some(&[(1, 2), (1, 3)][..]));
        assert!(spec.validate().is_ok());
        assert!(!spec.wants_autogenerated_links());
    }

    #[test]
    fn test_spec_parsing_yaml_aliases() {
        let yaml = r#"
devices:
  SWITCH: 1
  wlan: 1
  mobile_router: 1
autogenerate_links: true
"#;
        let spec: ScenarioSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.devices.switch, 1);
        assert_eq!(spec.devices.wireless_lan, 1);
        assert_eq!(spec.devices.mdr, 1);
        assert!(spec.validate().is_ok());
        assert!(spec.wants_autogenerated_links());
    }

    #[test]
    fn test_missing_links_triggers_autogeneration() {
        let json = r#"{ "devices": { "router": 2 } }"#;
        let spec: ScenarioSpec = serde_json::from_str(json).unwrap();
        assert!(spec.wants_autogenerated_links());

        // An explicitly empty list does not.
        let json = r#"{ "devices": { "router": 2 }, "links": [] }"#;
        let spec: ScenarioSpec = serde_json::from_str(json).unwrap();
        assert!(!spec.wants_autogenerated_links());
    }

    #[test]
    fn test_validation_rejects_empty_spec() {
        let spec: ScenarioSpec = serde_json::from_str(r#"{ "devices": {} }"#).unwrap();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_self_loop() {
        let json = r#"{ "devices": { "router": 2 }, "links": [[1, 1]] }"#;
        let spec: ScenarioSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(
            spec.validate(),
            Err(ValidationError::InvalidLinks(_))
        ));
    }
}
