//! Scenario file loading.

use std::path::Path;

use anyhow::{Context, Result};
use menagerie::prelude::Scenario;

/// Load a head-count scenario from a TOML file.
///
/// Missing keys default to zero, so a file listing only the kinds it
/// wants is enough.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario: {}", path.display()))
}
