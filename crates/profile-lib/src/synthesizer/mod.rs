//! Parameter synthesis
//!
//! Merges template defaults, hardware-aware defaults and explicit user
//! overrides into one `ResolvedParameters`, then repairs conflicts between
//! mutually exclusive options.

mod conflicts;
mod heuristics;

pub use conflicts::resolve_conflicts;
pub use heuristics::reserved_cpu_heuristic;

use crate::error::{ProfileError, Result};
use crate::models::{ParameterOverrides, ProfileOptions, ResolvedParameters};
use crate::templates::WorkloadTemplate;
use crate::topology::HardwareTopology;
use tracing::debug;

/// Profile name used when the caller does not supply one
pub const DEFAULT_PROFILE_NAME: &str = "performance";

/// Resolve the full parameter set for a performance profile.
///
/// # Arguments
/// * `topology` - Discovered cluster hardware
/// * `workload_type` - Workload tag, used by the reserved CPU heuristic
/// * `template` - Catalog entry for the workload, `None` for custom workloads
/// * `mcp_name` - Target MachineConfigPool (required)
/// * `profile_name` - Profile name, defaults to `performance` when empty
/// * `overrides` - Explicit user choices; supplied values always win
pub fn synthesize(
    topology: &HardwareTopology,
    workload_type: &str,
    template: Option<&WorkloadTemplate>,
    mcp_name: &str,
    profile_name: &str,
    overrides: &ParameterOverrides,
) -> Result<ResolvedParameters> {
    let mcp_name = mcp_name.trim();
    if mcp_name.is_empty() {
        return Err(ProfileError::MissingArgument("mcp_name"));
    }

    let profile_name = match profile_name.trim() {
        "" => DEFAULT_PROFILE_NAME,
        name => name,
    };

    let mut options = template
        .map(|t| t.default_config)
        .unwrap_or_else(ProfileOptions::default);

    let reserved_cpu_count = match overrides.reserved_cpu_count {
        Some(count) => count,
        None => reserved_cpu_heuristic(topology, workload_type),
    };

    overrides.apply_to(&mut options);

    let mut params = ResolvedParameters {
        mcp_name: mcp_name.to_string(),
        profile_name: profile_name.to_string(),
        options,
        reserved_cpu_count,
        isolated_cpu_count: overrides.isolated_cpu_count,
    };

    resolve_conflicts(topology, &mut params);

    debug!(
        workload_type,
        template = template.map(|t| t.type_id.as_str()).unwrap_or("custom"),
        mcp_name = %params.mcp_name,
        reserved_cpu_count = params.reserved_cpu_count,
        "Synthesized profile parameters"
    );

    Ok(params)
}
