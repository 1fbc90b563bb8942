//! Core data models shared by the validator, synthesizer and command assembler

use crate::error::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Power consumption mode passed to performance-profile-creator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerMode {
    #[default]
    Default,
    LowLatency,
    UltraLowLatency,
}

impl PowerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerMode::Default => "default",
            PowerMode::LowLatency => "low-latency",
            PowerMode::UltraLowLatency => "ultra-low-latency",
        }
    }

    /// Returns true for the high power consumption modes
    pub fn is_high_power(&self) -> bool {
        !matches!(self, PowerMode::Default)
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerMode {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(PowerMode::Default),
            "low-latency" => Ok(PowerMode::LowLatency),
            "ultra-low-latency" => Ok(PowerMode::UltraLowLatency),
            _ => Err(ProfileError::UnknownPowerMode(s.to_string())),
        }
    }
}

/// Kubelet topology manager policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopologyPolicy {
    SingleNumaNode,
    #[default]
    Restricted,
    BestEffort,
}

impl TopologyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopologyPolicy::SingleNumaNode => "single-numa-node",
            TopologyPolicy::Restricted => "restricted",
            TopologyPolicy::BestEffort => "best-effort",
        }
    }
}

impl fmt::Display for TopologyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyPolicy {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single-numa-node" => Ok(TopologyPolicy::SingleNumaNode),
            "restricted" => Ok(TopologyPolicy::Restricted),
            "best-effort" => Ok(TopologyPolicy::BestEffort),
            _ => Err(ProfileError::UnknownTopologyPolicy(s.to_string())),
        }
    }
}

/// The seven core profile options. Every field is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOptions {
    pub enable_rt_kernel: bool,
    pub disable_ht: bool,
    pub enable_dpdk: bool,
    pub power_mode: PowerMode,
    pub topology_policy: TopologyPolicy,
    pub split_reserved_across_numa: bool,
    pub per_pod_power_management: bool,
}

/// Advisory huge page sizing attached to a workload template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HugepagesAdvice {
    pub size: String,
    pub note: String,
}

/// Performance requirements to validate against the cluster hardware
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementsRequest {
    pub workload_type: String,
    #[serde(default)]
    pub isolated_cpu_count: Option<u32>,
    #[serde(default)]
    pub reserved_cpu_count: Option<u32>,
    #[serde(default)]
    pub enable_rt_kernel: bool,
    #[serde(default)]
    pub enable_dpdk: bool,
    #[serde(default)]
    pub hugepages_size: Option<String>,
    #[serde(default)]
    pub hugepages_count: Option<u32>,
    #[serde(default)]
    pub power_mode: PowerMode,
    #[serde(default)]
    pub per_pod_power_management: bool,
}

impl RequirementsRequest {
    pub fn new(workload_type: impl Into<String>) -> Self {
        Self {
            workload_type: workload_type.into(),
            ..Default::default()
        }
    }

    pub fn with_reserved_cpus(mut self, count: u32) -> Self {
        self.reserved_cpu_count = Some(count);
        self
    }

    pub fn with_isolated_cpus(mut self, count: u32) -> Self {
        self.isolated_cpu_count = Some(count);
        self
    }

    pub fn with_hugepages(mut self, size: impl Into<String>, count: Option<u32>) -> Self {
        self.hugepages_size = Some(size.into());
        self.hugepages_count = count;
        self
    }
}

/// Caller-supplied overrides for parameter synthesis. `None` means "not supplied".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated_cpu_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_cpu_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_rt_kernel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ht: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_dpdk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_mode: Option<PowerMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology_policy: Option<TopologyPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_reserved_across_numa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_pod_power_management: Option<bool>,
}

impl ParameterOverrides {
    /// Overwrite `options` with every supplied value
    pub fn apply_to(&self, options: &mut ProfileOptions) {
        if let Some(v) = self.enable_rt_kernel {
            options.enable_rt_kernel = v;
        }
        if let Some(v) = self.disable_ht {
            options.disable_ht = v;
        }
        if let Some(v) = self.enable_dpdk {
            options.enable_dpdk = v;
        }
        if let Some(v) = self.power_mode {
            options.power_mode = v;
        }
        if let Some(v) = self.topology_policy {
            options.topology_policy = v;
        }
        if let Some(v) = self.split_reserved_across_numa {
            options.split_reserved_across_numa = v;
        }
        if let Some(v) = self.per_pod_power_management {
            options.per_pod_power_management = v;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Fully-resolved parameters ready for the command assembler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedParameters {
    pub mcp_name: String,
    pub profile_name: String,
    #[serde(flatten)]
    pub options: ProfileOptions,
    pub reserved_cpu_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isolated_cpu_count: Option<u32>,
}
