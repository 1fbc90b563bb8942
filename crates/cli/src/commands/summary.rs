//! Hardware summary command

use anyhow::Result;
use std::path::Path;

use super::load_topology;
use crate::output::{print_json, print_warning, OutputFormat};

/// Print the cluster hardware summary from a topology file
pub fn show_summary(path: &Path, format: OutputFormat) -> Result<()> {
    let topology = load_topology(path)?;

    match format {
        OutputFormat::Json => print_json(&topology)?,
        OutputFormat::Table => {
            if !topology.has_data() {
                print_warning("Topology contains no node data, validation will use conservative defaults");
            }
            println!("{}", topology);
        }
    }
    Ok(())
}
