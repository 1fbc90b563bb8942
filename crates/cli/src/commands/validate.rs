//! Requirements validation command

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use profile_lib::{PowerMode, RequirementsRequest, RequirementsValidator, StructuredLogger};
use std::path::PathBuf;
use tabled::Tabled;

use super::load_topology;
use crate::output::{
    color_validity, print_failure, print_heading, print_info, print_json, print_table,
    print_warning, OutputFormat,
};

/// Arguments for `ppa validate`
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Topology file (summary object or list of node records)
    #[arg(long)]
    pub topology: PathBuf,

    /// Workload type the requirements are for
    #[arg(long)]
    pub workload_type: String,

    /// CPUs reserved for housekeeping
    #[arg(long)]
    pub reserved_cpu_count: Option<u32>,

    /// CPUs isolated for workloads (derived from the node size if omitted)
    #[arg(long)]
    pub isolated_cpu_count: Option<u32>,

    /// Require the real-time kernel
    #[arg(long)]
    pub rt_kernel: bool,

    /// Require user-level networking (DPDK)
    #[arg(long)]
    pub dpdk: bool,

    /// Huge page size, e.g. 1G or 2M
    #[arg(long)]
    pub hugepages_size: Option<String>,

    /// Number of huge pages
    #[arg(long)]
    pub hugepages_count: Option<u32>,

    /// Power consumption mode
    #[arg(long, default_value_t = PowerMode::Default)]
    pub power_mode: PowerMode,

    /// Require per-pod power management
    #[arg(long)]
    pub per_pod_power_management: bool,
}

impl ValidateArgs {
    fn to_request(&self) -> RequirementsRequest {
        RequirementsRequest {
            workload_type: self.workload_type.clone(),
            isolated_cpu_count: self.isolated_cpu_count,
            reserved_cpu_count: self.reserved_cpu_count,
            enable_rt_kernel: self.rt_kernel,
            enable_dpdk: self.dpdk,
            hugepages_size: self.hugepages_size.clone(),
            hugepages_count: self.hugepages_count,
            power_mode: self.power_mode,
            per_pod_power_management: self.per_pod_power_management,
        }
    }
}

/// Row for per-check results
#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Check")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Errors")]
    errors: usize,
    #[tabled(rename = "Warnings")]
    warnings: usize,
    #[tabled(rename = "Recommendations")]
    recommendations: usize,
}

/// Validate requirements against a topology file; returns whether they are feasible
pub fn validate_requirements(args: &ValidateArgs, format: OutputFormat) -> Result<bool> {
    let topology = load_topology(&args.topology)?;
    let request = args.to_request();
    let report = RequirementsValidator::new(&topology).validate(&request);

    StructuredLogger::new(args.topology.display().to_string()).log_validation(&request, &report);

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            // The status line carries its own glyph
            if report.is_valid {
                println!("{}", report.overall_status.green().bold());
            } else {
                println!("{}", report.overall_status.red().bold());
            }

            if !report.errors.is_empty() {
                print_heading("Errors:");
                report.errors.iter().for_each(|e| print_failure(e));
            }
            if !report.warnings.is_empty() {
                print_heading("Warnings:");
                report.warnings.iter().for_each(|w| print_warning(w));
            }
            if !report.recommendations.is_empty() {
                print_heading("Recommendations:");
                report.recommendations.iter().for_each(|r| print_info(r));
            }

            print_heading("Checks:");
            let rows = report
                .detailed_checks
                .iter()
                .map(|(name, check)| CheckRow {
                    name: name.clone(),
                    status: color_validity(check.is_valid),
                    errors: check.errors.len(),
                    warnings: check.warnings.len(),
                    recommendations: check.recommendations.len(),
                })
                .collect();
            print_table::<CheckRow>(rows);
        }
    }

    Ok(report.is_valid)
}
