use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use coregen::{config_loader, orchestrator};

/// Scenario generation utility for the CORE network emulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the scenario specification file (JSON or YAML)
    #[arg(short, long)]
    spec: PathBuf,

    /// Output path for the generated session XML
    #[arg(short, long, default_value = "scenario.xml")]
    output: PathBuf,

    /// Session name recorded in the scenario document
    #[arg(long)]
    session_name: Option<String>,

    /// Force link auto-generation even if the spec lists links
    #[arg(long)]
    autogenerate_links: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting CoreGen scenario generator");
    info!("Spec file: {:?}", args.spec);
    info!("Output file: {:?}", args.output);

    let mut spec = config_loader::load_spec(&args.spec)?;

    // CLI overrides take precedence over the spec file
    if args.autogenerate_links {
        spec.autogenerate_links = Some(true);
    }
    if let Some(name) = args.session_name {
        spec.session_name = Some(name);
    }

    let report = orchestrator::generate_scenario_file(&spec, &args.output)?;

    if !report.dropped_lan_groups.is_empty() {
        info!(
            "{} LAN group(s) were dropped for lack of a router gateway",
            report.dropped_lan_groups.len()
        );
    }
    if !report.unattached_hosts.is_empty() {
        info!(
            "{} host(s) could not be attached by the topology heuristic",
            report.unattached_hosts.len()
        );
    }

    info!("Scenario generation completed successfully");
    Ok(())
}
