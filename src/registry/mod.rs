//! Element identity registry.
//!
//! The registry is an explicitly owned arena of network elements, indexed
//! by identity. Identities are assigned in strictly increasing order from
//! a configurable base, with no gaps and no reuse; every downstream
//! component receives the registry by reference rather than reaching into
//! ambient state.

use crate::config::DeviceCounts;

/// Errors raised while synthesizing a scenario.
///
/// An unknown element reference is fatal to the whole synthesis; no
/// partial document is produced once it occurs.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("link references element {id}, which was never registered")]
    UnknownElement { id: u32 },
}

/// Closed set of element kinds.
///
/// Classification and allocation match on this exhaustively, so a new
/// kind cannot silently fall through as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Switch,
    Hub,
    WirelessLan,
    Pc,
    Router,
    MobileRouter,
}

/// Fixed registration order: networks before end hosts, routers before
/// PCs. Later pipeline stages rely on identity magnitude correlating with
/// this creation order.
pub const REGISTRATION_ORDER: [ElementKind; 6] = [
    ElementKind::Switch,
    ElementKind::Hub,
    ElementKind::WirelessLan,
    ElementKind::Router,
    ElementKind::MobileRouter,
    ElementKind::Pc,
];

impl ElementKind {
    /// Every kind, in registration order.
    pub const ALL: [ElementKind; 6] = REGISTRATION_ORDER;

    /// Network-canvas elements (emitted under `<networks>`).
    pub fn is_network(self) -> bool {
        match self {
            ElementKind::Switch | ElementKind::Hub | ElementKind::WirelessLan => true,
            ElementKind::Pc | ElementKind::Router | ElementKind::MobileRouter => false,
        }
    }

    /// Kinds that can carry routed interface addresses.
    pub fn is_addressable(self) -> bool {
        match self {
            ElementKind::Pc | ElementKind::Router | ElementKind::MobileRouter => true,
            ElementKind::Switch | ElementKind::Hub | ElementKind::WirelessLan => false,
        }
    }

    /// Shared-media centers (LAN group anchors).
    pub fn is_shared_media(self) -> bool {
        matches!(self, ElementKind::Switch | ElementKind::Hub)
    }

    /// Routing-capable kinds; eligible as LAN gateways and mesh members.
    pub fn is_router(self) -> bool {
        matches!(self, ElementKind::Router | ElementKind::MobileRouter)
    }

    /// Type label used in the CORE session document.
    pub fn core_type(self) -> &'static str {
        match self {
            ElementKind::Switch => "SWITCH",
            ElementKind::Hub => "HUB",
            ElementKind::WirelessLan => "WIRELESS_LAN",
            ElementKind::Pc => "PC",
            ElementKind::Router => "router",
            ElementKind::MobileRouter => "mdr",
        }
    }

    /// Prefix used when naming elements of this kind.
    pub fn name_prefix(self) -> &'static str {
        match self {
            ElementKind::WirelessLan => "wlan",
            _ => "n",
        }
    }

    /// Default services assigned to end-host kinds.
    pub fn default_services(self) -> &'static [&'static str] {
        match self {
            ElementKind::Pc => &["DefaultRoute"],
            ElementKind::Router => &["OSPFv3", "OSPFv2", "IPForward", "zebra"],
            ElementKind::MobileRouter => &["zebra", "IPForward", "OSPFv3MDR"],
            ElementKind::Switch | ElementKind::Hub | ElementKind::WirelessLan => &[],
        }
    }
}

/// A registered network element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: u32,
    pub name: String,
    pub kind: ElementKind,
    /// Number of interfaces handed out so far; drives `ethN` naming.
    pub interface_count: u32,
}

/// Arena of elements indexed by identity.
#[derive(Debug)]
pub struct ElementRegistry {
    start_id: u32,
    elements: Vec<Element>,
}

impl ElementRegistry {
    pub fn new(start_id: u32) -> Self {
        ElementRegistry {
            start_id,
            elements: Vec::new(),
        }
    }

    /// Create a registry with every element the spec requests, in the
    /// fixed registration order.
    pub fn populate(counts: &DeviceCounts, start_id: u32) -> Self {
        let mut registry = Self::new(start_id);
        for kind in REGISTRATION_ORDER {
            registry.register(kind, counts.count_for(kind));
        }
        registry
    }

    /// Create `count` new elements of `kind`, assigning each the next
    /// unused identity.
    pub fn register(&mut self, kind: ElementKind, count: u32) {
        for _ in 0..count {
            let id = self.start_id + self.elements.len() as u32;
            self.elements.push(Element {
                id,
                name: format!("{}{}", kind.name_prefix(), id),
                kind,
                interface_count: 0,
            });
        }
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        // Identities are contiguous from start_id, so lookup is direct.
        id.checked_sub(self.start_id)
            .map(|offset| offset as usize)
            .filter(|&index| index < self.elements.len())
    }

    /// The single reference-integrity check in the system.
    pub fn lookup(&self, id: u32) -> Result<&Element, SynthesisError> {
        self.index_of(id)
            .map(|index| &self.elements[index])
            .ok_or(SynthesisError::UnknownElement { id })
    }

    pub fn lookup_mut(&mut self, id: u32) -> Result<&mut Element, SynthesisError> {
        let index = self
            .index_of(id)
            .ok_or(SynthesisError::UnknownElement { id })?;
        Ok(&mut self.elements[index])
    }

    /// Kind of an element, or `UnknownElement`.
    pub fn kind_of(&self, id: u32) -> Result<ElementKind, SynthesisError> {
        self.lookup(id).map(|element| element.kind)
    }

    /// Reserve the next interface index for an element: reads the current
    /// count, then increments it. The returned index is embedded in the
    /// new interface's name.
    pub fn next_interface_index(&mut self, id: u32) -> Result<u32, SynthesisError> {
        let element = self.lookup_mut(id)?;
        let index = element.interface_count;
        element.interface_count += 1;
        Ok(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Identities of all elements matching a predicate, in registry order.
    pub fn ids_where(&self, predicate: impl Fn(ElementKind) -> bool) -> Vec<u32> {
        self.elements
            .iter()
            .filter(|element| predicate(element.kind))
            .map(|element| element.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume the registry, yielding its elements.
    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(switch: u32, router: u32, pc: u32) -> DeviceCounts {
        DeviceCounts {
            switch,
            router,
            pc,
            ..DeviceCounts::default()
        }
    }

    #[test]
    fn test_ids_are_strictly_increasing_from_base() {
        let registry = ElementRegistry::populate(&counts(1, 2, 2), 1);
        let ids: Vec<u32> = registry.elements().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_registration_order_networks_then_routers_then_pcs() {
        let registry = ElementRegistry::populate(&counts(1, 1, 1), 1);
        let kinds: Vec<ElementKind> = registry.elements().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Switch, ElementKind::Router, ElementKind::Pc]
        );
    }

    #[test]
    fn test_names_use_kind_prefix() {
        let mut registry = ElementRegistry::new(1);
        registry.register(ElementKind::WirelessLan, 1);
        registry.register(ElementKind::Router, 1);
        assert_eq!(registry.lookup(1).unwrap().name, "wlan1");
        assert_eq!(registry.lookup(2).unwrap().name, "n2");
    }

    #[test]
    fn test_lookup_unknown_id() {
        let registry = ElementRegistry::populate(&counts(0, 1, 0), 1);
        assert!(registry.lookup(1).is_ok());
        assert!(matches!(
            registry.lookup(2),
            Err(SynthesisError::UnknownElement { id: 2 })
        ));
        assert!(matches!(
            registry.lookup(0),
            Err(SynthesisError::UnknownElement { id: 0 })
        ));
    }

    #[test]
    fn test_interface_index_reads_before_increment() {
        let mut registry = ElementRegistry::populate(&counts(0, 1, 0), 1);
        assert_eq!(registry.next_interface_index(1).unwrap(), 0);
        assert_eq!(registry.next_interface_index(1).unwrap(), 1);
        assert_eq!(registry.lookup(1).unwrap().interface_count, 2);
    }

    #[test]
    fn test_custom_start_id() {
        let registry = ElementRegistry::populate(&counts(0, 2, 0), 10);
        let ids: Vec<u32> = registry.elements().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![10, 11]);
        assert!(registry.lookup(1).is_err());
    }
}
