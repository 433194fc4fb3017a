//! # CoreGen - Scenario generation utility for the CORE network emulator
//!
//! This library synthesizes CORE session XML documents from a small
//! declarative device/link specification.
//!
//! ## Overview
//!
//! CoreGen assigns identity and canvas position to every network element,
//! derives physical link topology (direct, LAN, wireless) from a
//! connectivity list (or synthesizes one automatically), and allocates
//! non-overlapping IPv4/IPv6 addressing per link or shared segment. The
//! result is a session document the CORE emulator can open directly.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: Type-safe scenario spec structures and validation
//! - `config_loader`: Spec file loading (JSON or YAML)
//! - `registry`: Element arena with identity assignment and kind tracking
//! - `layout`: Deterministic grid-based canvas and geographic placement
//! - `topology`: Link classification and automatic topology generation
//! - `ip`: Per-link and per-segment address allocation
//! - `scenario`: Session XML document structures and serialization
//! - `orchestrator`: High-level orchestration of scenario synthesis
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coregen::{config_loader, orchestrator};
//! use std::path::Path;
//!
//! // Load the scenario spec from a JSON or YAML file
//! let spec = config_loader::load_spec(Path::new("scenario_config.json"))?;
//!
//! // Synthesize and write the CORE session XML
//! orchestrator::generate_scenario_file(&spec, Path::new("scenario.xml"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Spec Format
//!
//! Specs map element kinds to requested counts, with an optional explicit
//! link list:
//!
//! ```json
//! {
//!   "devices": { "switch": 1, "router": 2, "PC": 2 },
//!   "links": [[1, 2], [1, 3]],
//!   "autogenerate_links": false
//! }
//! ```
//!
//! When no link list is supplied (or `autogenerate_links` is set), a
//! deterministic heuristic meshes the routers, attaches switches and hubs
//! round-robin to routers, and attaches PCs round-robin to the available
//! parents.
//!
//! ## Error Handling
//!
//! The synthesis core returns typed errors (`SynthesisError`); referencing
//! an element identity that was never registered aborts the whole run. The
//! binary boundary uses `color_eyre` for error reporting with context.

pub mod config;
pub mod config_loader;
pub mod registry;
pub mod layout;
pub mod topology;
pub mod ip;
pub mod scenario;
pub mod orchestrator;
