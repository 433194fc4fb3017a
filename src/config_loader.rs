use crate::config::ScenarioSpec;
use color_eyre::eyre::{bail, WrapErr};
use color_eyre::Result;
use log::info;
use std::fs::File;
use std::path::Path;

/// Load and parse a scenario spec from a JSON or YAML file.
///
/// The parser is selected by file extension: `.json` uses serde_json,
/// `.yaml`/`.yml` use serde_yaml.
pub fn load_spec(spec_path: &Path) -> Result<ScenarioSpec> {
    info!("Loading scenario spec from: {:?}", spec_path);

    let file = File::open(spec_path)
        .wrap_err_with(|| format!("failed to open spec file '{}'", spec_path.display()))?;

    let extension = spec_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let spec: ScenarioSpec = match extension.as_deref() {
        Some("json") => serde_json::from_reader(file)
            .wrap_err_with(|| format!("failed to parse JSON spec '{}'", spec_path.display()))?,
        Some("yaml") | Some("yml") => serde_yaml::from_reader(file)
            .wrap_err_with(|| format!("failed to parse YAML spec '{}'", spec_path.display()))?,
        _ => bail!(
            "unsupported spec file extension for '{}' (expected .json, .yaml or .yml)",
            spec_path.display()
        ),
    };

    // Validate before handing the spec to the synthesizer
    spec.validate()?;

    info!(
        "Spec requests {} element(s), {}",
        spec.devices.total(),
        if spec.wants_autogenerated_links() {
            "links will be auto-generated"
        } else {
            "links are explicit"
        }
    );

    Ok(spec)
}
