//! Huge page checks

use super::rt_kernel::is_arm;
use super::CheckReport;
use crate::models::RequirementsRequest;
use crate::topology::HardwareTopology;

const VALID_SIZES_X86: &[&str] = &["2M", "1G"];
const VALID_SIZES_ARM: &[&str] = &["64K", "2M", "32M", "512M", "1G"];

/// Supported huge page sizes for an architecture, `None` when unknown
pub fn valid_hugepage_sizes(architecture: &str) -> Option<(&'static str, &'static [&'static str])> {
    if architecture.contains("x86") || architecture.contains("amd64") {
        Some(("x86_64", VALID_SIZES_X86))
    } else if is_arm(architecture) {
        Some(("aarch64", VALID_SIZES_ARM))
    } else {
        None
    }
}

/// Convert a huge page size string (`1G`, `2M`, `64K`) to GiB.
/// Unknown suffixes and unparsable numbers convert to 0.
pub fn hugepage_size_to_gb(size: &str) -> f64 {
    let size = size.trim().to_uppercase();
    let (number, divisor) = if let Some(n) = size.strip_suffix('G') {
        (n, 1.0)
    } else if let Some(n) = size.strip_suffix('M') {
        (n, 1024.0)
    } else if let Some(n) = size.strip_suffix('K') {
        (n, 1024.0 * 1024.0)
    } else {
        return 0.0;
    };

    number.parse::<f64>().map(|n| n / divisor).unwrap_or(0.0)
}

/// Validate huge page size and count.
///
/// An invalid size marks this check invalid; the aggregate validator
/// reports those errors as warnings.
pub fn check_hugepages(topology: &HardwareTopology, request: &RequirementsRequest) -> CheckReport {
    let mut result = CheckReport::new();
    let architecture = topology.primary_architecture().unwrap_or("unknown");
    let size = request.hugepages_size.as_deref().filter(|s| !s.is_empty());

    if let Some(size) = size {
        if let Some((arch_name, valid)) = valid_hugepage_sizes(architecture) {
            if !valid.contains(&size) {
                result.error(format!(
                    "Invalid hugepage size '{}' for {}. Valid sizes: {}",
                    size,
                    arch_name,
                    valid.join(", ")
                ));
            }
        }

        match request.hugepages_count.filter(|c| *c > 0) {
            Some(count) => {
                let total_gb = hugepage_size_to_gb(size) * count as f64;
                result.recommend(format!(
                    "Hugepages will reserve {:.2} GB of memory. Ensure sufficient memory is available.",
                    total_gb
                ));
            }
            None => result.recommend(
                "Hugepage count not specified. Define the number of hugepages needed for your workload.",
            ),
        }
    }

    if request.enable_dpdk && size.is_none() {
        result.recommend(
            "DPDK workloads typically require hugepages (1G recommended). \
             Consider configuring hugepages for optimal performance.",
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x86() -> HardwareTopology {
        HardwareTopology::discovered(48, 2, true, &["x86_64"])
    }

    #[test]
    fn test_size_conversion() {
        assert_eq!(hugepage_size_to_gb("1G"), 1.0);
        assert_eq!(hugepage_size_to_gb("2M"), 2.0 / 1024.0);
        assert_eq!(hugepage_size_to_gb("64k"), 64.0 / (1024.0 * 1024.0));
        assert_eq!(hugepage_size_to_gb("3T"), 0.0);
        assert_eq!(hugepage_size_to_gb("xG"), 0.0);
    }

    #[test]
    fn test_invalid_size_for_x86() {
        let request = RequirementsRequest::new("database").with_hugepages("3M", Some(10));
        let result = check_hugepages(&x86(), &request);

        assert!(!result.is_valid);
        assert!(result.errors[0].contains("'3M'"));
        assert!(result.errors[0].contains("2M, 1G"));
    }

    #[test]
    fn test_arm_accepts_64k() {
        let topology = HardwareTopology::discovered(64, 1, false, &["aarch64"]);
        let request = RequirementsRequest::new("database").with_hugepages("64K", Some(4));
        assert!(check_hugepages(&topology, &request).is_valid);

        let request = RequirementsRequest::new("database").with_hugepages("64K", None);
        assert!(!check_hugepages(&x86(), &request).is_valid);
    }

    #[test]
    fn test_unknown_architecture_skips_whitelist() {
        let topology = HardwareTopology::discovered(8, 1, false, &["s390x"]);
        let request = RequirementsRequest::new("database").with_hugepages("3M", Some(1));
        assert!(check_hugepages(&topology, &request).is_valid);
        assert!(check_hugepages(&HardwareTopology::no_data(), &request).is_valid);
    }

    #[test]
    fn test_total_memory_recommendation() {
        let request = RequirementsRequest::new("telco-vnf").with_hugepages("1G", Some(16));
        let result = check_hugepages(&x86(), &request);
        assert_eq!(
            result.recommendations,
            vec!["Hugepages will reserve 16.00 GB of memory. Ensure sufficient memory is available."
                .to_string()]
        );

        let request = RequirementsRequest::new("database").with_hugepages("2M", Some(1000));
        let result = check_hugepages(&x86(), &request);
        assert!(result.recommendations[0].contains("1.95 GB"));
    }

    #[test]
    fn test_missing_count_recommendation() {
        let request = RequirementsRequest::new("database").with_hugepages("2M", None);
        let result = check_hugepages(&x86(), &request);
        assert!(result.recommendations[0].contains("count not specified"));
    }

    #[test]
    fn test_dpdk_without_hugepages() {
        let request = RequirementsRequest {
            enable_dpdk: true,
            ..RequirementsRequest::new("telco-vnf")
        };
        let result = check_hugepages(&x86(), &request);
        assert!(result.is_valid);
        assert!(result.recommendations[0].contains("DPDK"));
    }
}
