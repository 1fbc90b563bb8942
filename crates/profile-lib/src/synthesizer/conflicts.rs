//! Conflict resolution between mutually exclusive options

use crate::models::{PowerMode, ResolvedParameters, TopologyPolicy};
use crate::topology::HardwareTopology;
use tracing::debug;

/// Repair inconsistent options in place. Running it again is a no-op.
///
/// - Per-pod power management forces the power mode back to `default`.
/// - DPDK needs NUMA-aligned devices: any policy other than
///   `single-numa-node` or `restricted` becomes `single-numa-node`.
/// - On multi-NUMA nodes the reserved pool is split across NUMA nodes once
///   it holds at least two CPUs per node.
pub fn resolve_conflicts(topology: &HardwareTopology, params: &mut ResolvedParameters) {
    let options = &mut params.options;

    if options.per_pod_power_management && options.power_mode != PowerMode::Default {
        debug!(
            power_mode = %options.power_mode,
            "Per-pod power management enabled, resetting power mode to default"
        );
        options.power_mode = PowerMode::Default;
    }

    if options.enable_dpdk
        && !matches!(
            options.topology_policy,
            TopologyPolicy::SingleNumaNode | TopologyPolicy::Restricted
        )
    {
        debug!(
            topology_policy = %options.topology_policy,
            "DPDK enabled, switching topology policy to single-numa-node"
        );
        options.topology_policy = TopologyPolicy::SingleNumaNode;
    }

    let numa_nodes = topology.numa_nodes_per_node();
    if numa_nodes > 1
        && !options.split_reserved_across_numa
        && params.reserved_cpu_count >= numa_nodes.saturating_mul(2)
    {
        debug!(
            numa_nodes,
            reserved_cpu_count = params.reserved_cpu_count,
            "Enough reserved CPUs to split across NUMA nodes"
        );
        options.split_reserved_across_numa = true;
    }
}
