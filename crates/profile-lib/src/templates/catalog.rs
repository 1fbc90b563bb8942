//! Built-in workload template seeds

use super::WorkloadTemplate;
use crate::models::{HugepagesAdvice, PowerMode, ProfileOptions, TopologyPolicy};

struct Seed {
    type_id: &'static str,
    display_name: &'static str,
    description: &'static str,
    use_cases: &'static [&'static str],
    config: ProfileOptions,
    hugepages: (&'static str, &'static str),
}

impl From<Seed> for WorkloadTemplate {
    fn from(seed: Seed) -> Self {
        Self {
            type_id: seed.type_id.to_string(),
            display_name: seed.display_name.to_string(),
            description: seed.description.to_string(),
            use_cases: seed.use_cases.iter().map(|s| s.to_string()).collect(),
            default_config: seed.config,
            recommended_hugepages: HugepagesAdvice {
                size: seed.hugepages.0.to_string(),
                note: seed.hugepages.1.to_string(),
            },
        }
    }
}

const fn options(
    enable_rt_kernel: bool,
    disable_ht: bool,
    enable_dpdk: bool,
    power_mode: PowerMode,
    topology_policy: TopologyPolicy,
    per_pod_power_management: bool,
) -> ProfileOptions {
    ProfileOptions {
        enable_rt_kernel,
        disable_ht,
        enable_dpdk,
        power_mode,
        topology_policy,
        split_reserved_across_numa: true,
        per_pod_power_management,
    }
}

pub(super) fn builtin_templates() -> Vec<WorkloadTemplate> {
    use PowerMode::{LowLatency, UltraLowLatency};
    use TopologyPolicy::{Restricted, SingleNumaNode};

    let seeds = [
        Seed {
            type_id: "5g-ran",
            display_name: "5G RAN (Radio Access Network)",
            description: "Optimized for 5G Radio Access Network workloads requiring ultra-low latency \
                          and deterministic performance. Uses real-time kernel, disabled hyperthreading, \
                          and aggressive power settings.",
            use_cases: &[
                "5G base station processing",
                "Real-time radio signal processing",
                "Ultra-low latency packet processing",
            ],
            config: options(true, true, true, UltraLowLatency, SingleNumaNode, false),
            hugepages: ("1G", "1G hugepages recommended for DPDK packet processing"),
        },
        Seed {
            type_id: "telco-vnf",
            display_name: "Telco VNF (Virtual Network Function)",
            description: "Optimized for Telco VNF workloads including packet processing, session border \
                          controllers, and network functions. Enables RT kernel and DPDK for \
                          high-performance networking.",
            use_cases: &[
                "Virtual routers",
                "Session border controllers",
                "Packet gateways",
                "DPI (Deep Packet Inspection)",
            ],
            config: options(true, false, true, LowLatency, SingleNumaNode, false),
            hugepages: ("1G", "1G hugepages recommended for DPDK"),
        },
        Seed {
            type_id: "database",
            display_name: "Database Server",
            description: "Optimized for database workloads requiring memory optimization and consistent \
                          performance. Uses hugepages for memory management but does not require RT kernel.",
            use_cases: &["PostgreSQL", "MySQL/MariaDB", "MongoDB", "Oracle Database"],
            config: options(false, false, false, PowerMode::Default, Restricted, false),
            hugepages: ("2M", "2M hugepages for database shared memory buffers"),
        },
        Seed {
            type_id: "ai-inference",
            display_name: "AI/ML Inference",
            description: "Optimized for AI/ML inference workloads requiring CPU isolation and consistent \
                          performance. Does not use RT kernel but isolates CPUs for predictable inference \
                          latency.",
            use_cases: &[
                "TensorFlow Serving",
                "PyTorch inference",
                "ONNX Runtime",
                "Real-time AI inference",
            ],
            config: options(false, false, false, LowLatency, SingleNumaNode, false),
            hugepages: ("2M", "2M hugepages for model data structures"),
        },
        Seed {
            type_id: "hpc",
            display_name: "High Performance Computing",
            description: "Optimized for HPC workloads requiring maximum compute throughput and NUMA \
                          awareness. Focuses on CPU isolation and memory locality.",
            use_cases: &[
                "Scientific computing",
                "Computational fluid dynamics",
                "Molecular dynamics",
                "Weather simulation",
            ],
            config: options(false, false, false, LowLatency, SingleNumaNode, false),
            hugepages: ("1G", "1G hugepages for large memory allocations"),
        },
        Seed {
            type_id: "low-latency-trading",
            display_name: "Low-Latency Trading",
            description: "Optimized for financial trading systems requiring microsecond latency. Uses RT \
                          kernel, disabled HT, and ultra-low-latency power mode.",
            use_cases: &[
                "High-frequency trading",
                "Market data processing",
                "Order matching engines",
                "Risk calculation engines",
            ],
            config: options(true, true, true, UltraLowLatency, SingleNumaNode, false),
            hugepages: ("1G", "1G hugepages for lock-free data structures"),
        },
        Seed {
            type_id: "media-processing",
            display_name: "Media Processing",
            description: "Optimized for real-time media encoding/transcoding workloads. Balances between \
                          throughput and latency.",
            use_cases: &[
                "Video transcoding",
                "Live streaming",
                "Real-time video processing",
                "Audio processing",
            ],
            config: options(false, false, false, PowerMode::Default, Restricted, true),
            hugepages: ("2M", "2M hugepages for frame buffers"),
        },
    ];

    seeds.into_iter().map(WorkloadTemplate::from).collect()
}
