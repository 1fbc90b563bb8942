//! Scenario tests for the aggregate validator
//!
//! These run the full validator against realistic cluster topologies and
//! check how the sub-check results are folded together.

#[cfg(test)]
mod scenario_tests {
    use crate::models::{PowerMode, RequirementsRequest};
    use crate::topology::HardwareTopology;
    use crate::validator::{checks, validate, STATUS_INVALID, STATUS_VALID};

    /// Two-socket worker used across scenarios
    fn dual_socket_worker() -> HardwareTopology {
        HardwareTopology::discovered(48, 2, true, &["amd64"])
    }

    #[test]
    fn test_valid_5g_ran_configuration() {
        let request = RequirementsRequest {
            enable_rt_kernel: true,
            enable_dpdk: true,
            power_mode: PowerMode::UltraLowLatency,
            ..RequirementsRequest::new("5g-ran").with_reserved_cpus(8)
        };
        let report = validate(&dual_socket_worker(), &request);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.overall_status, STATUS_VALID);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("NUMA boundaries")));
        assert!(report.warnings.iter().any(|w| w.contains("ultra-low-latency")));
        assert!(report.recommendations.iter().any(|r| r.contains("DPDK")));
    }

    #[test]
    fn test_too_many_reserved_cpus() {
        let request = RequirementsRequest::new("database").with_reserved_cpus(46);
        let report = validate(&dual_socket_worker(), &request);

        assert!(!report.is_valid);
        assert_eq!(report.overall_status, STATUS_INVALID);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("46") && e.contains("48")));
    }

    #[test]
    fn test_missing_reserved_is_error_not_fault() {
        let report = validate(&dual_socket_worker(), &RequirementsRequest::new("custom"));

        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Reserved CPU count is required".to_string()]);
        assert_eq!(report.detailed_checks.len(), 4);
    }

    #[test]
    fn test_reserved_at_or_above_capacity_is_infeasible() {
        for (cpus, numa, ht) in [(4, 1, false), (16, 1, true), (48, 2, true), (128, 4, true)] {
            let topology = HardwareTopology::discovered(cpus, numa, ht, &["x86_64"]);
            for reserved in [cpus, cpus + 1, cpus * 2] {
                let request = RequirementsRequest::new("custom").with_reserved_cpus(reserved);
                let report = validate(&topology, &request);
                assert!(
                    !report.is_valid,
                    "reserved {} on {} cpus should be invalid",
                    reserved, cpus
                );
                assert!(!report.errors.is_empty());
            }
        }
    }

    #[test]
    fn test_oversized_numa_count_is_reported_not_fatal() {
        let topology = HardwareTopology::from_json(
            r#"{"total_nodes": 1, "worker_nodes": 1, "cpus_per_node": 48,
                "numa_nodes_per_node": 4294967295, "hyperthreading_enabled": true,
                "architectures": ["amd64"]}"#,
        )
        .unwrap();
        let request = RequirementsRequest::new("5g-ran").with_reserved_cpus(4);

        let report = validate(&topology, &request);
        assert!(!report.is_valid);
        assert!(!report.detailed_checks[checks::CPU].is_valid);
    }

    #[test]
    fn test_single_numa_never_warns_about_alignment() {
        let topology = HardwareTopology::discovered(32, 1, true, &["x86_64"]);
        for reserved in 0..=32 {
            let request = RequirementsRequest::new("custom").with_reserved_cpus(reserved);
            let report = validate(&topology, &request);
            assert!(!report.warnings.iter().any(|w| w.contains("NUMA")));
            assert!(!report.recommendations.iter().any(|r| r.contains("NUMA nodes")));
        }
    }

    #[test]
    fn test_invalid_hugepage_size_is_demoted_to_warning() {
        let topology = HardwareTopology::discovered(48, 2, true, &["x86_64"]);
        let request = RequirementsRequest::new("database")
            .with_reserved_cpus(8)
            .with_hugepages("3M", Some(64));
        let report = validate(&topology, &request);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.iter().any(|w| w.contains("'3M'")));

        let hugepages = &report.detailed_checks[checks::HUGEPAGES];
        assert!(!hugepages.is_valid);
        assert_eq!(hugepages.errors.len(), 1);
    }

    #[test]
    fn test_advisory_checks_never_invalidate() {
        let topology = HardwareTopology::discovered(64, 1, false, &["aarch64"]);
        let request = RequirementsRequest {
            enable_rt_kernel: true,
            power_mode: PowerMode::LowLatency,
            per_pod_power_management: true,
            ..RequirementsRequest::new("database").with_reserved_cpus(4)
        };
        let report = validate(&topology, &request);

        assert!(report.is_valid);
        // ARM RT, database RT, power draw, per-pod conflict
        assert_eq!(report.warnings.len(), 4);
    }

    #[test]
    fn test_aggregation_order() {
        let request = RequirementsRequest {
            enable_rt_kernel: true,
            power_mode: PowerMode::UltraLowLatency,
            ..RequirementsRequest::new("database").with_reserved_cpus(5)
        };
        let report = validate(&dual_socket_worker(), &request);

        let numa_warning = report
            .warnings
            .iter()
            .position(|w| w.contains("not evenly divisible"))
            .unwrap();
        let rt_warning = report
            .warnings
            .iter()
            .position(|w| w.contains("RT kernel typically"))
            .unwrap();
        let power_warning = report
            .warnings
            .iter()
            .position(|w| w.contains("power consumption"))
            .unwrap();

        assert!(numa_warning < rt_warning);
        assert!(rt_warning < power_warning);
    }

    #[test]
    fn test_detailed_checks_are_preserved() {
        let request = RequirementsRequest::new("telco-vnf").with_reserved_cpus(4);
        let report = validate(&dual_socket_worker(), &request);

        let keys: Vec<&str> = report.detailed_checks.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["cpu", "hugepages", "power_mode", "rt_kernel"]);
        assert!(report.detailed_checks[checks::RT_KERNEL]
            .recommendations
            .iter()
            .any(|r| r.contains("telco-vnf")));
    }

    #[test]
    fn test_report_serializes() {
        let request = RequirementsRequest::new("hpc").with_reserved_cpus(4);
        let report = validate(&dual_socket_worker(), &request);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["is_valid"], true);
        assert!(json["detailed_checks"]["cpu"]["recommendations"].is_array());
    }
}
