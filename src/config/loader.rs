//! Loading evaluation specifications from YAML

use super::schema::EvalSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Parse and validate a specification from YAML text
pub fn parse_config(yaml: &str) -> Result<EvalSpec> {
    let spec: EvalSpec = serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&spec).map_err(|e| Error::InvalidConfig(e.to_string()))?;

    Ok(spec)
}

/// Load an evaluation specification from a YAML file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<EvalSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    parse_config(&yaml_content)
}
