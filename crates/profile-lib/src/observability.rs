//! Structured logging for advisor events
//!
//! Every helper emits a `tracing` event with an `event` field so that JSON
//! log output can be filtered by event type.

use crate::classifier::WorkloadRecommendation;
use crate::models::{RequirementsRequest, ResolvedParameters};
use crate::topology::HardwareTopology;
use crate::validator::ValidationReport;
use tracing::{info, warn};

/// Structured logger for validation and generation events
#[derive(Clone)]
pub struct StructuredLogger {
    bundle: String,
}

impl StructuredLogger {
    /// `bundle` identifies the must-gather bundle the events relate to
    pub fn new(bundle: impl Into<String>) -> Self {
        Self {
            bundle: bundle.into(),
        }
    }

    /// Log a loaded topology
    pub fn log_topology_loaded(&self, topology: &HardwareTopology) {
        match topology.summary() {
            Some(summary) => info!(
                event = "topology_loaded",
                bundle = %self.bundle,
                total_nodes = summary.total_nodes,
                worker_nodes = summary.worker_nodes,
                cpus_per_node = summary.cpus_per_node,
                numa_nodes_per_node = summary.numa_nodes_per_node,
                hyperthreading_enabled = summary.hyperthreading_enabled,
                architectures = ?summary.architectures,
                "Loaded cluster hardware topology"
            ),
            None => warn!(
                event = "topology_loaded",
                bundle = %self.bundle,
                "Topology carries no node data"
            ),
        }
    }

    /// Log a validation outcome
    pub fn log_validation(&self, request: &RequirementsRequest, report: &ValidationReport) {
        if report.is_valid {
            info!(
                event = "requirements_validated",
                bundle = %self.bundle,
                workload_type = %request.workload_type,
                reserved_cpu_count = ?request.reserved_cpu_count,
                is_valid = true,
                warnings = report.warnings.len(),
                recommendations = report.recommendations.len(),
                "Requirements are feasible"
            );
        } else {
            warn!(
                event = "requirements_validated",
                bundle = %self.bundle,
                workload_type = %request.workload_type,
                reserved_cpu_count = ?request.reserved_cpu_count,
                is_valid = false,
                errors = ?report.errors,
                "Requirements are not feasible"
            );
        }
    }

    /// Log a generated parameter set
    pub fn log_generation(
        &self,
        workload_type: &str,
        template_found: bool,
        params: &ResolvedParameters,
    ) {
        info!(
            event = "command_generated",
            bundle = %self.bundle,
            workload_type = %workload_type,
            template_found = template_found,
            mcp_name = %params.mcp_name,
            profile_name = %params.profile_name,
            reserved_cpu_count = params.reserved_cpu_count,
            rt_kernel = params.options.enable_rt_kernel,
            power_mode = %params.options.power_mode,
            topology_policy = %params.options.topology_policy,
            "Generated performance-profile-creator command"
        );
    }

    /// Log a workload classification
    pub fn log_classification(&self, recommendation: &WorkloadRecommendation) {
        info!(
            event = "workload_classified",
            bundle = %self.bundle,
            workload_type = %recommendation.workload_type,
            template_found = recommendation.template.is_some(),
            reasons = recommendation.reasoning.len(),
            "Classified workload description"
        );
    }
}
