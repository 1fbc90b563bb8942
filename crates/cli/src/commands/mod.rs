//! Subcommand implementations

pub mod generate;
pub mod recommend;
pub mod summary;
pub mod templates;
pub mod validate;

use anyhow::{Context, Result};
use profile_lib::{HardwareTopology, StructuredLogger};
use std::path::Path;

/// Read a topology file, either a summary object or a list of node records
pub fn load_topology(path: &Path) -> Result<HardwareTopology> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read topology file {}", path.display()))?;
    let topology = HardwareTopology::from_json(&content)
        .with_context(|| format!("Failed to parse topology file {}", path.display()))?;

    StructuredLogger::new(path.display().to_string()).log_topology_loaded(&topology);
    Ok(topology)
}
