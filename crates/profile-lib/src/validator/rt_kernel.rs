//! Real-time kernel suitability checks

use super::CheckReport;
use crate::models::RequirementsRequest;
use crate::topology::HardwareTopology;

/// Workloads that rarely benefit from a real-time kernel
const RT_UNNECESSARY_WORKLOADS: &[&str] = &["database", "ai-inference"];

/// Workloads for which a real-time kernel is strongly advised
const RT_ADVISED_WORKLOADS: &[&str] = &["5g-ran", "telco-vnf"];

pub(crate) fn is_arm(architecture: &str) -> bool {
    architecture.contains("aarch64") || architecture.contains("arm64")
}

/// Advisory checks for the real-time kernel setting. Never invalidates.
pub fn check_rt_kernel(topology: &HardwareTopology, request: &RequirementsRequest) -> CheckReport {
    let mut result = CheckReport::new();
    let architecture = topology.primary_architecture().unwrap_or("unknown");
    let workload_type = request.workload_type.as_str();

    if request.enable_rt_kernel {
        result.recommend(
            "Real-time kernel will be enabled. This provides deterministic latency \
             but requires node reboot during profile application.",
        );

        if is_arm(architecture) {
            result.warn(
                "Real-time kernel on ARM architecture may have limited support. \
                 Verify RT kernel availability for your specific hardware.",
            );
        }

        if RT_UNNECESSARY_WORKLOADS.contains(&workload_type) {
            result.warn(format!(
                "RT kernel typically not required for {} workloads. \
                 Consider disabling RT kernel to reduce complexity.",
                workload_type
            ));
        }
    } else if RT_ADVISED_WORKLOADS.contains(&workload_type) {
        result.recommend(format!(
            "RT kernel is highly recommended for {} workloads \
             to achieve deterministic low latency.",
            workload_type
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rt_requires_reboot_notice() {
        let topology = HardwareTopology::discovered(48, 2, true, &["amd64"]);
        let request = RequirementsRequest {
            enable_rt_kernel: true,
            ..RequirementsRequest::new("5g-ran")
        };
        let result = check_rt_kernel(&topology, &request);

        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
        assert!(result.recommendations[0].contains("reboot"));
    }

    #[test]
    fn test_rt_on_arm_warns() {
        let topology = HardwareTopology::discovered(64, 1, false, &["arm64"]);
        let request = RequirementsRequest {
            enable_rt_kernel: true,
            ..RequirementsRequest::new("5g-ran")
        };
        let result = check_rt_kernel(&topology, &request);
        assert!(result.warnings.iter().any(|w| w.contains("ARM")));
    }

    #[test]
    fn test_rt_unnecessary_for_database() {
        let topology = HardwareTopology::discovered(48, 2, true, &["amd64"]);
        let request = RequirementsRequest {
            enable_rt_kernel: true,
            ..RequirementsRequest::new("database")
        };
        let result = check_rt_kernel(&topology, &request);

        assert!(result.is_valid);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("not required for database")));
    }

    #[test]
    fn test_rt_advised_for_telco() {
        let topology = HardwareTopology::discovered(48, 2, true, &["amd64"]);
        let result = check_rt_kernel(&topology, &RequirementsRequest::new("telco-vnf"));

        assert!(result.warnings.is_empty());
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("highly recommended for telco-vnf")));
    }

    #[test]
    fn test_rt_off_for_other_workloads_is_silent() {
        let topology = HardwareTopology::no_data();
        let result = check_rt_kernel(&topology, &RequirementsRequest::new("hpc"));
        assert!(result.recommendations.is_empty());
        assert!(result.warnings.is_empty());
    }
}
