//! Power mode checks

use super::CheckReport;
use crate::models::RequirementsRequest;
use crate::topology::HardwareTopology;

/// Warn about power draw and per-pod power management conflicts
pub fn check_power_mode(_topology: &HardwareTopology, request: &RequirementsRequest) -> CheckReport {
    let mut result = CheckReport::new();
    let power_mode = request.power_mode;

    if power_mode.is_high_power() {
        result.warn(format!(
            "Power mode '{}' will increase power consumption significantly. \
             Ensure adequate cooling and power capacity.",
            power_mode
        ));
    }

    if request.per_pod_power_management && power_mode.is_high_power() {
        result.warn(
            "Per-pod power management and high power consumption mode are mutually exclusive. \
             Per-pod power management will be disabled.",
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PowerMode;

    #[test]
    fn test_default_mode_is_silent() {
        let request = RequirementsRequest {
            per_pod_power_management: true,
            ..RequirementsRequest::new("media-processing")
        };
        let result = check_power_mode(&HardwareTopology::no_data(), &request);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_high_power_with_per_pod() {
        let request = RequirementsRequest {
            power_mode: PowerMode::LowLatency,
            per_pod_power_management: true,
            ..RequirementsRequest::new("media-processing")
        };
        let result = check_power_mode(&HardwareTopology::no_data(), &request);

        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("'low-latency'"));
        assert!(result.warnings[1].contains("mutually exclusive"));
    }
}
