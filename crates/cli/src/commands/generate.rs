//! Command generation

use anyhow::{Context, Result};
use clap::Args;
use profile_lib::{
    generate_profile_command, ParameterOverrides, PowerMode, TemplateCatalog, TopologyPolicy,
};
use std::path::PathBuf;

use super::load_topology;
use crate::config::CliConfig;
use crate::output::{print_heading, print_info, print_json, print_success, print_warning, OutputFormat};

/// Option overrides; omitted flags keep the template default
#[derive(Debug, Default, Args)]
pub struct OverrideArgs {
    /// CPUs reserved for housekeeping (heuristic if omitted)
    #[arg(long)]
    pub reserved_cpu_count: Option<u32>,

    /// CPUs isolated for workloads
    #[arg(long)]
    pub isolated_cpu_count: Option<u32>,

    /// Real-time kernel
    #[arg(long, value_name = "BOOL")]
    pub rt_kernel: Option<bool>,

    /// Disable hyperthreading
    #[arg(long, value_name = "BOOL")]
    pub disable_ht: Option<bool>,

    /// User-level networking (DPDK)
    #[arg(long, value_name = "BOOL")]
    pub dpdk: Option<bool>,

    /// Power consumption mode
    #[arg(long)]
    pub power_mode: Option<PowerMode>,

    /// Topology manager policy
    #[arg(long)]
    pub topology_policy: Option<TopologyPolicy>,

    /// Split reserved CPUs across NUMA nodes
    #[arg(long, value_name = "BOOL")]
    pub split_reserved_cpus_across_numa: Option<bool>,

    /// Per-pod power management
    #[arg(long, value_name = "BOOL")]
    pub per_pod_power_management: Option<bool>,
}

impl From<&OverrideArgs> for ParameterOverrides {
    fn from(args: &OverrideArgs) -> Self {
        Self {
            isolated_cpu_count: args.isolated_cpu_count,
            reserved_cpu_count: args.reserved_cpu_count,
            enable_rt_kernel: args.rt_kernel,
            disable_ht: args.disable_ht,
            enable_dpdk: args.dpdk,
            power_mode: args.power_mode,
            topology_policy: args.topology_policy,
            split_reserved_across_numa: args.split_reserved_cpus_across_numa,
            per_pod_power_management: args.per_pod_power_management,
        }
    }
}

/// Arguments for `ppa generate`
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Topology file (summary object or list of node records)
    #[arg(long)]
    pub topology: PathBuf,

    /// Path of the must-gather bundle on the host
    #[arg(long)]
    pub bundle: String,

    /// Workload type; unknown types fall back to defaults
    #[arg(long)]
    pub workload_type: String,

    /// MachineConfigPool the profile targets
    #[arg(long)]
    pub mcp_name: String,

    /// Profile name (defaults to the configured name, then "performance")
    #[arg(long)]
    pub profile_name: Option<String>,

    /// Tool image tag
    #[arg(long)]
    pub image_tag: Option<String>,

    /// File the generated profile is redirected to
    #[arg(long)]
    pub output_file: Option<String>,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Generate the performance-profile-creator command
pub fn generate_command(
    catalog: &TemplateCatalog,
    config: &CliConfig,
    args: &GenerateArgs,
    format: OutputFormat,
) -> Result<()> {
    let topology = load_topology(&args.topology)?;
    let command_config = config.command_config(args.image_tag.as_deref(), args.output_file.as_deref());
    let output_file = command_config.output_file.clone();

    let profile_name = args
        .profile_name
        .as_deref()
        .or(config.default_profile_name.as_deref())
        .unwrap_or_default();

    let generated = generate_profile_command(
        &topology,
        catalog,
        command_config,
        &args.bundle,
        &args.workload_type,
        &args.mcp_name,
        profile_name,
        &ParameterOverrides::from(&args.overrides),
    )
    .context("Failed to generate command")?;

    match format {
        OutputFormat::Json => print_json(&generated)?,
        OutputFormat::Table => {
            match &generated.workload_template {
                Some(name) => print_success(&format!("Using workload template: {}", name)),
                None => print_warning(&format!(
                    "No template for '{}', using default options",
                    args.workload_type
                )),
            }

            print_heading("Command:");
            println!("{}", generated.command);

            println!("\n{}", generated.explanation);

            println!();
            print_info(&format!("The generated profile will be written to {}", output_file));
        }
    }
    Ok(())
}
