//! Parameter explanation text

use crate::models::{PowerMode, ResolvedParameters, TopologyPolicy};
use crate::topology::HardwareTopology;

pub(super) fn explain(topology: &HardwareTopology, params: &ResolvedParameters) -> String {
    let options = &params.options;
    let mut lines: Vec<String> = Vec::new();

    lines.push("Parameter Explanation:".to_string());
    lines.push("=".repeat(50));

    lines.push("\nProfile Configuration:".to_string());
    lines.push(format!("  - Profile Name: {}", params.profile_name));
    lines.push(format!("  - MachineConfigPool: {}", params.mcp_name));
    lines.push(format!(
        "    → This profile will apply to nodes in the '{}' MCP",
        params.mcp_name
    ));

    lines.push("\nCPU Allocation:".to_string());
    let cpus_per_node = topology.cpus_per_node();
    let isolated = match params.isolated_cpu_count {
        Some(count) => count.to_string(),
        None if cpus_per_node > 0 => {
            (cpus_per_node as i64 - params.reserved_cpu_count as i64).to_string()
        }
        None => "calculated".to_string(),
    };
    lines.push(format!("  - Reserved CPUs: {}", params.reserved_cpu_count));
    lines.push("    → Used for system processes (kubelet, container runtime)".to_string());
    lines.push(format!("  - Isolated CPUs: ~{}", isolated));
    lines.push("    → Dedicated to application workloads".to_string());

    if options.disable_ht {
        lines.push("  - Hyperthreading: DISABLED".to_string());
        lines.push("    → Reduces CPU count but improves deterministic behavior".to_string());
    }

    if options.split_reserved_across_numa {
        lines.push(format!(
            "  - Reserved CPUs will be split across {} NUMA node(s)",
            topology.numa_nodes_per_node()
        ));
        lines.push("    → Improves NUMA locality for system processes".to_string());
    }

    lines.push("\nKernel Configuration:".to_string());
    if options.enable_rt_kernel {
        lines.push("  - Real-Time Kernel: ENABLED".to_string());
        lines.push("    → Provides deterministic latency for time-sensitive workloads".to_string());
        lines.push("    ⚠ Requires node reboot during application".to_string());
    } else {
        lines.push("  - Real-Time Kernel: DISABLED".to_string());
        lines.push("    → Standard kernel will be used".to_string());
    }

    if options.enable_dpdk {
        lines.push("\nNetwork Configuration:".to_string());
        lines.push("  - User-Level Networking (DPDK): ENABLED".to_string());
        lines.push("    → Optimizes for high-throughput packet processing".to_string());
        lines.push("    → Typically requires 1G hugepages".to_string());
    }

    lines.push("\nNUMA Topology:".to_string());
    lines.push(format!("  - Topology Manager Policy: {}", options.topology_policy));
    lines.push(
        match options.topology_policy {
            TopologyPolicy::SingleNumaNode => "    → Pods must fit within a single NUMA node",
            TopologyPolicy::Restricted => "    → Pods prefer single NUMA node but can span",
            TopologyPolicy::BestEffort => "    → Best-effort NUMA alignment",
        }
        .to_string(),
    );

    lines.push("\nPower Management:".to_string());
    lines.push(format!("  - Power Mode: {}", options.power_mode));
    match options.power_mode {
        PowerMode::UltraLowLatency => {
            lines.push("    → Maximum performance, highest power consumption".to_string());
            lines.push("    → C-states disabled, CPU frequency maximized".to_string());
        }
        PowerMode::LowLatency => {
            lines.push("    → Balanced low-latency with controlled power".to_string());
        }
        PowerMode::Default => {
            lines.push("    → Standard power management".to_string());
        }
    }

    if options.per_pod_power_management {
        lines.push("  - Per-Pod Power Management: ENABLED".to_string());
        lines.push("    → Allows pod-level power tuning".to_string());
    }

    lines.join("\n")
}
