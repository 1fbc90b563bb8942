//! Cluster hardware topology
//!
//! The topology is produced by a must-gather analysis collaborator. This
//! module only aggregates per-node records into the summary that the
//! validator and synthesizer consume; it does not read bundle files.

use crate::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node roles that mark a control-plane node
const CONTROL_PLANE_ROLES: &[&str] = &["master", "control-plane"];

/// Message carried by the no-data sentinel
pub const NO_NODES_FOUND: &str = "No nodes found";

/// CPU topology of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuTopology {
    pub total_cpus: u32,
    pub numa_nodes: u32,
    pub cores_per_socket: u32,
    pub threads_per_core: u32,
    pub sockets: u32,
}

impl CpuTopology {
    /// Estimate topology from a bare CPU count when no detailed data exists
    pub fn estimate(cpu_count: u32) -> Self {
        let numa_nodes = if cpu_count >= 64 {
            4
        } else if cpu_count >= 32 {
            2
        } else {
            1
        };

        Self {
            total_cpus: cpu_count,
            numa_nodes,
            cores_per_socket: cpu_count / 2,
            threads_per_core: 2,
            sockets: if cpu_count > 16 { 2 } else { 1 },
        }
    }
}

/// CPU capacity of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCpu {
    pub capacity: u32,
    #[serde(default)]
    pub allocatable: u32,
    pub topology: CpuTopology,
}

/// Per-node hardware record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub architecture: String,
    pub cpu: NodeCpu,
}

impl NodeInfo {
    fn is_control_plane(&self) -> bool {
        self.roles
            .iter()
            .any(|r| CONTROL_PLANE_ROLES.contains(&r.as_str()))
    }
}

/// Aggregated hardware facts for the worker pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySummary {
    pub total_nodes: u32,
    pub worker_nodes: u32,
    #[serde(default)]
    pub total_cpus: u32,
    pub cpus_per_node: u32,
    #[serde(default = "default_numa_nodes")]
    pub numa_nodes_per_node: u32,
    #[serde(default)]
    pub hyperthreading_enabled: bool,
    #[serde(default)]
    pub architectures: Vec<String>,
}

fn default_numa_nodes() -> u32 {
    1
}

/// Discovered cluster topology, or an explicit "no data" marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HardwareTopology {
    NoData { error: String },
    Discovered(TopologySummary),
}

impl HardwareTopology {
    pub fn no_data() -> Self {
        HardwareTopology::NoData {
            error: NO_NODES_FOUND.to_string(),
        }
    }

    /// Build a topology directly from summary facts
    pub fn discovered(
        cpus_per_node: u32,
        numa_nodes_per_node: u32,
        hyperthreading_enabled: bool,
        architectures: &[&str],
    ) -> Self {
        HardwareTopology::Discovered(TopologySummary {
            total_nodes: 1,
            worker_nodes: 1,
            total_cpus: cpus_per_node,
            cpus_per_node,
            numa_nodes_per_node: numa_nodes_per_node.max(1),
            hyperthreading_enabled,
            architectures: dedup_ordered(architectures.iter().map(|a| a.to_string())),
        })
    }

    /// Aggregate node records into a topology.
    ///
    /// Workers are nodes without a control-plane role; when none exist every
    /// node is treated as a worker. The first worker is the representative
    /// node for per-node facts.
    pub fn from_nodes(nodes: &[NodeInfo]) -> Self {
        if nodes.is_empty() {
            return Self::no_data();
        }

        let mut workers: Vec<&NodeInfo> = nodes.iter().filter(|n| !n.is_control_plane()).collect();
        if workers.is_empty() {
            workers = nodes.iter().collect();
        }

        let representative = workers[0];
        let sample = representative.cpu.topology;

        HardwareTopology::Discovered(TopologySummary {
            total_nodes: nodes.len() as u32,
            worker_nodes: workers.len() as u32,
            total_cpus: workers
                .iter()
                .fold(0u32, |total, n| total.saturating_add(n.cpu.capacity)),
            cpus_per_node: representative.cpu.capacity,
            numa_nodes_per_node: sample.numa_nodes.max(1),
            hyperthreading_enabled: sample.threads_per_core > 1,
            architectures: dedup_ordered(workers.iter().map(|n| n.architecture.clone())),
        })
    }

    /// Parse a topology document: either a serialized `HardwareTopology`
    /// or a JSON array of node records.
    pub fn from_json(content: &str) -> Result<Self> {
        match serde_json::from_str::<HardwareTopology>(content) {
            Ok(topology) => Ok(topology),
            Err(summary_err) => match serde_json::from_str::<Vec<NodeInfo>>(content) {
                Ok(nodes) => Ok(Self::from_nodes(&nodes)),
                Err(_) => Err(ProfileError::InvalidTopology(summary_err.to_string())),
            },
        }
    }

    pub fn summary(&self) -> Option<&TopologySummary> {
        match self {
            HardwareTopology::Discovered(summary) => Some(summary),
            HardwareTopology::NoData { .. } => None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.summary().is_some()
    }

    /// CPUs on the representative worker (0 when unknown)
    pub fn cpus_per_node(&self) -> u32 {
        self.summary().map(|s| s.cpus_per_node).unwrap_or(0)
    }

    pub fn numa_nodes_per_node(&self) -> u32 {
        self.summary()
            .map(|s| s.numa_nodes_per_node.max(1))
            .unwrap_or(1)
    }

    /// Hyperthreading is assumed enabled when nothing is known
    pub fn hyperthreading_enabled(&self) -> bool {
        self.summary()
            .map(|s| s.hyperthreading_enabled)
            .unwrap_or(true)
    }

    pub fn architectures(&self) -> &[String] {
        self.summary()
            .map(|s| s.architectures.as_slice())
            .unwrap_or(&[])
    }

    /// Architecture of the representative worker
    pub fn primary_architecture(&self) -> Option<&str> {
        self.architectures().first().map(String::as_str)
    }
}

impl fmt::Display for HardwareTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = match self {
            HardwareTopology::NoData { error } => return writeln!(f, "{}", error),
            HardwareTopology::Discovered(summary) => summary,
        };

        let architectures = if summary.architectures.is_empty() {
            "unknown".to_string()
        } else {
            summary.architectures.join(", ")
        };
        let ht_status = if summary.hyperthreading_enabled {
            "enabled"
        } else {
            "disabled"
        };

        writeln!(f, "Cluster Hardware Summary:")?;
        writeln!(f, "- Total Nodes: {}", summary.total_nodes)?;
        writeln!(f, "- Worker Nodes: {}", summary.worker_nodes)?;
        writeln!(f, "- CPUs per Node: {}", summary.cpus_per_node)?;
        writeln!(f, "- Total CPUs: {}", summary.total_cpus)?;
        writeln!(f, "- Architecture: {}", architectures)?;
        writeln!(f, "- NUMA Nodes per Node: {}", summary.numa_nodes_per_node)?;
        writeln!(f, "- Hyperthreading: {}", ht_status)
    }
}

fn dedup_ordered(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
