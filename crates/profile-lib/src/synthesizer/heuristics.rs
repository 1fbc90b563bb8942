//! Hardware-aware default for the reserved CPU count

use crate::topology::HardwareTopology;

/// Reserved CPUs used when the node size is unknown
const UNKNOWN_NODE_RESERVED: u32 = 4;

/// Workloads that keep the reserved pool minimal to maximise isolated CPUs
const MINIMAL_RESERVED_WORKLOADS: &[&str] = &["5g-ran", "telco-vnf", "ai-inference"];

/// Fraction of the node reserved for system processes on general workloads
const GENERAL_RESERVED_FRACTION: f64 = 0.1;

/// Compute a reserved CPU count for `workload_type` on `topology`.
///
/// Exact halves round to even. The result is clamped to `[2, cpus_per_node / 4]` and is non-decreasing
/// in `cpus_per_node` for a fixed workload type and NUMA layout.
pub fn reserved_cpu_heuristic(topology: &HardwareTopology, workload_type: &str) -> u32 {
    let cpus_per_node = topology.cpus_per_node();
    if cpus_per_node == 0 {
        return UNKNOWN_NODE_RESERVED;
    }

    // 2 CPUs per NUMA node for kubelet, runtime and kernel threads
    let base_reserved = topology.numa_nodes_per_node().saturating_mul(2).max(2);

    let reserved = if MINIMAL_RESERVED_WORKLOADS.contains(&workload_type) {
        base_reserved
    } else {
        // database and everything else share the proportional rule
        let proportional = (cpus_per_node as f64 * GENERAL_RESERVED_FRACTION).round_ties_even() as u32;
        proportional.max(4)
    };

    reserved.min(cpus_per_node / 4).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topology(cpus: u32, numa: u32) -> HardwareTopology {
        HardwareTopology::discovered(cpus, numa, true, &["amd64"])
    }

    #[test]
    fn test_unknown_cpu_count() {
        assert_eq!(reserved_cpu_heuristic(&HardwareTopology::no_data(), "5g-ran"), 4);
        assert_eq!(reserved_cpu_heuristic(&topology(0, 2), "database"), 4);
    }

    #[test]
    fn test_minimal_workloads_use_numa_base() {
        assert_eq!(reserved_cpu_heuristic(&topology(48, 2), "5g-ran"), 4);
        assert_eq!(reserved_cpu_heuristic(&topology(48, 2), "telco-vnf"), 4);
        assert_eq!(reserved_cpu_heuristic(&topology(128, 4), "ai-inference"), 8);
        assert_eq!(reserved_cpu_heuristic(&topology(64, 1), "5g-ran"), 2);
    }

    #[test]
    fn test_proportional_workloads() {
        assert_eq!(reserved_cpu_heuristic(&topology(48, 2), "database"), 5);
        assert_eq!(reserved_cpu_heuristic(&topology(128, 4), "hpc"), 13);
        assert_eq!(reserved_cpu_heuristic(&topology(32, 2), "custom"), 4);
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        assert_eq!(reserved_cpu_heuristic(&topology(45, 1), "database"), 4);
        assert_eq!(reserved_cpu_heuristic(&topology(65, 1), "database"), 6);
        assert_eq!(reserved_cpu_heuristic(&topology(75, 1), "database"), 8);
    }

    #[test]
    fn test_huge_numa_count_saturates() {
        let topology = topology(48, u32::MAX);
        assert_eq!(reserved_cpu_heuristic(&topology, "5g-ran"), 12);
    }

    #[test]
    fn test_clamped_to_quarter_of_node() {
        // quarter of 8 is 2
        assert_eq!(reserved_cpu_heuristic(&topology(8, 1), "database"), 2);
        // quarter of 12 is 3, below the NUMA base of 4
        assert_eq!(reserved_cpu_heuristic(&topology(12, 2), "5g-ran"), 3);
        // never below 2, even on tiny nodes
        assert_eq!(reserved_cpu_heuristic(&topology(4, 1), "hpc"), 2);
    }

    #[test]
    fn test_monotonic_in_cpu_count() {
        for workload in ["5g-ran", "telco-vnf", "ai-inference", "database", "hpc", "custom"] {
            for numa in 1..=4 {
                let mut previous = 0;
                for cpus in 1..=256 {
                    let reserved = reserved_cpu_heuristic(&topology(cpus, numa), workload);
                    assert!(
                        reserved >= previous,
                        "{} numa={} cpus={}: {} < {}",
                        workload,
                        numa,
                        cpus,
                        reserved,
                        previous
                    );
                    assert!(reserved >= 2);
                    previous = reserved;
                }
            }
        }
    }
}
