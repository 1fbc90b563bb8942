//! Requirements validation against cluster hardware
//!
//! Four independent sub-checks run on every request, in order:
//! - CPU allocation (can invalidate the request)
//! - Real-time kernel suitability (advisory only)
//! - Huge pages (invalid sizes are reported as aggregate warnings)
//! - Power mode (advisory only)

mod cpu;
mod hugepages;
mod power;
mod rt_kernel;

#[cfg(test)]
mod tests;

pub use cpu::check_cpu;
pub use hugepages::{check_hugepages, hugepage_size_to_gb, valid_hugepage_sizes};
pub use power::check_power_mode;
pub use rt_kernel::check_rt_kernel;

use crate::models::RequirementsRequest;
use crate::topology::HardwareTopology;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const STATUS_VALID: &str = "✓ Configuration is valid and feasible";
pub const STATUS_INVALID: &str = "✗ Configuration has issues that must be addressed";

/// Check names used as keys in `ValidationReport::detailed_checks`
pub mod checks {
    pub const CPU: &str = "cpu";
    pub const RT_KERNEL: &str = "rt_kernel";
    pub const HUGEPAGES: &str = "hugepages";
    pub const POWER_MODE: &str = "power_mode";
}

/// Result of a single sub-check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Record an error and mark the check invalid
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn recommend(&mut self, message: impl Into<String>) {
        self.recommendations.push(message.into());
    }
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub detailed_checks: BTreeMap<String, CheckReport>,
    pub overall_status: String,
}

/// Validates performance requirements against a hardware topology
pub struct RequirementsValidator<'a> {
    topology: &'a HardwareTopology,
}

impl<'a> RequirementsValidator<'a> {
    pub fn new(topology: &'a HardwareTopology) -> Self {
        Self { topology }
    }

    /// Run every sub-check and fold the results into one report
    pub fn validate(&self, request: &RequirementsRequest) -> ValidationReport {
        let mut is_valid = true;
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut recommendations = Vec::new();
        let mut detailed_checks = BTreeMap::new();

        let cpu = check_cpu(self.topology, request);
        if !cpu.is_valid {
            is_valid = false;
            errors.extend(cpu.errors.iter().cloned());
        }
        warnings.extend(cpu.warnings.iter().cloned());
        recommendations.extend(cpu.recommendations.iter().cloned());
        detailed_checks.insert(checks::CPU.to_string(), cpu);

        let rt = check_rt_kernel(self.topology, request);
        warnings.extend(rt.warnings.iter().cloned());
        recommendations.extend(rt.recommendations.iter().cloned());
        detailed_checks.insert(checks::RT_KERNEL.to_string(), rt);

        let hugepages = check_hugepages(self.topology, request);
        // Huge page errors only ever surface as aggregate warnings.
        if !hugepages.is_valid {
            warnings.extend(hugepages.errors.iter().cloned());
        }
        recommendations.extend(hugepages.recommendations.iter().cloned());
        detailed_checks.insert(checks::HUGEPAGES.to_string(), hugepages);

        let power = check_power_mode(self.topology, request);
        warnings.extend(power.warnings.iter().cloned());
        detailed_checks.insert(checks::POWER_MODE.to_string(), power);

        let overall_status = if is_valid { STATUS_VALID } else { STATUS_INVALID };

        debug!(
            workload_type = %request.workload_type,
            is_valid,
            errors = errors.len(),
            warnings = warnings.len(),
            recommendations = recommendations.len(),
            "Validated performance requirements"
        );

        ValidationReport {
            is_valid,
            errors,
            warnings,
            recommendations,
            detailed_checks,
            overall_status: overall_status.to_string(),
        }
    }
}

/// Validate `request` against `topology`
pub fn validate(topology: &HardwareTopology, request: &RequirementsRequest) -> ValidationReport {
    RequirementsValidator::new(topology).validate(request)
}
