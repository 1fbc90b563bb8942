//! CPU allocation checks

use super::CheckReport;
use crate::models::RequirementsRequest;
use crate::topology::HardwareTopology;

/// Reserved CPU count below which system workloads are likely starved
const MIN_RESERVED_CPUS: u32 = 2;

/// Validate reserved/isolated CPU counts against the node capacity.
///
/// When the isolated count is not given it is derived as
/// `cpus_per_node - reserved`, and the derived pool must still hold one full
/// physical core per NUMA node. An unknown node size (no topology data)
/// therefore always fails this check.
pub fn check_cpu(topology: &HardwareTopology, request: &RequirementsRequest) -> CheckReport {
    let mut result = CheckReport::new();

    let cpus_per_node = topology.cpus_per_node() as i64;
    let numa_nodes = topology.numa_nodes_per_node();
    let ht_enabled = topology.hyperthreading_enabled();

    let Some(reserved) = request.reserved_cpu_count else {
        result.error("Reserved CPU count is required");
        return result;
    };

    if reserved < MIN_RESERVED_CPUS {
        result.warn(
            "Reserved CPU count is very low. Minimum 2 CPUs recommended for system workloads.",
        );
        result.recommend("Consider reserving at least 2-4 CPUs for system processes");
    }

    let (isolated, derived) = match request.isolated_cpu_count {
        Some(isolated) => (isolated as i64, false),
        None => {
            let isolated = cpus_per_node - reserved as i64;
            result.recommend(format!(
                "Isolated CPU count not specified. Will use {} CPUs (total - reserved)",
                isolated
            ));
            (isolated, true)
        }
    };

    let total_required = isolated + reserved as i64;
    if total_required > cpus_per_node {
        result.error(format!(
            "Total CPUs required ({}) exceeds available CPUs per node ({})",
            total_required, cpus_per_node
        ));
    } else if derived {
        let threads_per_core = if ht_enabled { 2 } else { 1 };
        let min_isolated = numa_nodes.saturating_mul(threads_per_core) as i64;
        if isolated < min_isolated {
            result.error(format!(
                "Reserved CPUs ({}) leave only {} of the {} available CPUs per node for \
                 isolated workloads; at least {} are needed (one full core per NUMA node)",
                reserved,
                isolated.max(0),
                cpus_per_node,
                min_isolated
            ));
        }
    }

    if numa_nodes > 1 {
        if reserved % numa_nodes != 0 {
            result.warn(format!(
                "Reserved CPUs ({}) not evenly divisible by NUMA nodes ({}). \
                 Consider using --split-reserved-cpus-across-numa flag.",
                reserved, numa_nodes
            ));
        }
        result.recommend(format!(
            "Your system has {} NUMA nodes. Consider allocating CPUs aligned to NUMA boundaries \
             for optimal performance.",
            numa_nodes
        ));
    }

    if ht_enabled {
        result.recommend(
            "Hyperthreading is enabled. For ultra-low latency workloads, \
             consider disabling it with --disable-ht flag.",
        );
    }

    result
}
