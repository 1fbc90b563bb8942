//! performance-profile-creator command rendering
//!
//! Turns resolved parameters into the container invocation of the
//! performance-profile-creator tool plus a human-readable explanation.
//! Nothing here executes the command.

mod explain;

use crate::error::Result;
use crate::models::{ParameterOverrides, ResolvedParameters};
use crate::observability::StructuredLogger;
use crate::synthesizer::synthesize;
use crate::templates::TemplateCatalog;
use crate::topology::HardwareTopology;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTAINER_RUNTIME: &str = "podman";
pub const DEFAULT_ENTRYPOINT: &str = "performance-profile-creator";
pub const DEFAULT_IMAGE: &str = "quay.io/openshift/origin-cluster-node-tuning-operator";
pub const DEFAULT_IMAGE_TAG: &str = "4.11";
pub const DEFAULT_MUST_GATHER_MOUNT: &str = "/must-gather";
pub const DEFAULT_OUTPUT_FILE: &str = "performance-profile.yaml";

/// Separator between command parts
const PART_SEPARATOR: &str = " \\\n  ";

/// How the tool container is launched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub container_runtime: String,
    pub entrypoint: String,
    pub image: String,
    pub image_tag: String,
    pub must_gather_mount: String,
    pub output_file: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            container_runtime: DEFAULT_CONTAINER_RUNTIME.to_string(),
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            image_tag: DEFAULT_IMAGE_TAG.to_string(),
            must_gather_mount: DEFAULT_MUST_GATHER_MOUNT.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl CommandConfig {
    pub fn image_reference(&self) -> String {
        format!("{}:{}", self.image, self.image_tag)
    }
}

/// Renders resolved parameters into a command line and an explanation
pub struct CommandAssembler<'a> {
    topology: &'a HardwareTopology,
    config: CommandConfig,
}

impl<'a> CommandAssembler<'a> {
    pub fn new(topology: &'a HardwareTopology) -> Self {
        Self::with_config(topology, CommandConfig::default())
    }

    pub fn with_config(topology: &'a HardwareTopology, config: CommandConfig) -> Self {
        Self { topology, config }
    }

    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    /// Build the full command string for `bundle_path`
    pub fn build(&self, bundle_path: &str, params: &ResolvedParameters) -> String {
        let config = &self.config;
        let options = &params.options;

        let mut parts = vec![
            format!("{} run --entrypoint {}", config.container_runtime, config.entrypoint),
            format!("-v {}:{}:z", bundle_path, config.must_gather_mount),
            config.image_reference(),
            format!("--must-gather-dir-path {}", config.must_gather_mount),
            format!("--mcp-name {}", params.mcp_name),
            format!("--profile-name {}", params.profile_name),
            format!("--reserved-cpu-count {}", params.reserved_cpu_count),
            format!("--rt-kernel {}", options.enable_rt_kernel),
        ];

        if options.disable_ht {
            parts.push("--disable-ht".to_string());
        }
        if options.enable_dpdk {
            parts.push("--user-level-networking".to_string());
        }
        if options.split_reserved_across_numa {
            parts.push("--split-reserved-cpus-across-numa".to_string());
        }
        if options.per_pod_power_management {
            parts.push("--per-pod-power-management".to_string());
        }
        if options.power_mode.is_high_power() {
            parts.push(format!("--power-consumption-mode {}", options.power_mode));
        }
        parts.push(format!("--topology-manager-policy {}", options.topology_policy));
        parts.push(format!("> {}", config.output_file));

        parts.join(PART_SEPARATOR)
    }

    /// Human-readable explanation of every resolved option
    pub fn explain(&self, params: &ResolvedParameters) -> String {
        explain::explain(self.topology, params)
    }
}

/// Generated command together with the parameters it was built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCommand {
    pub command: String,
    pub parameters: ResolvedParameters,
    pub explanation: String,
    pub workload_template: Option<String>,
    pub generated_at: i64,
}

/// Look up the workload template, synthesize parameters and render the command
#[allow(clippy::too_many_arguments)]
pub fn generate_profile_command(
    topology: &HardwareTopology,
    catalog: &TemplateCatalog,
    config: CommandConfig,
    bundle_path: &str,
    workload_type: &str,
    mcp_name: &str,
    profile_name: &str,
    overrides: &ParameterOverrides,
) -> Result<ProfileCommand> {
    let template = catalog.get(workload_type);
    let parameters = synthesize(
        topology,
        workload_type,
        template,
        mcp_name,
        profile_name,
        overrides,
    )?;

    let assembler = CommandAssembler::with_config(topology, config);
    let command = assembler.build(bundle_path, &parameters);
    let explanation = assembler.explain(&parameters);

    StructuredLogger::new(bundle_path).log_generation(workload_type, template.is_some(), &parameters);

    Ok(ProfileCommand {
        command,
        parameters,
        explanation,
        workload_template: template.map(|t| t.display_name.clone()),
        generated_at: chrono::Utc::now().timestamp(),
    })
}
