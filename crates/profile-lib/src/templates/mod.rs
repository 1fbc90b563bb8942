//! Workload templates
//!
//! A read-only catalog mapping a workload type (e.g. `5g-ran`) to default
//! profile options and descriptive metadata. The catalog is an explicit
//! value; `TemplateCatalog::shared()` hands out one immutable instance for
//! callers that do not want to build their own.

mod catalog;

use crate::models::{HugepagesAdvice, PowerMode, ProfileOptions};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static SHARED_CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();

/// A preset configuration for a class of workloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadTemplate {
    pub type_id: String,
    pub display_name: String,
    pub description: String,
    pub use_cases: Vec<String>,
    pub default_config: ProfileOptions,
    pub recommended_hugepages: HugepagesAdvice,
}

impl WorkloadTemplate {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.description.to_lowercase(),
            self.use_cases.join(" ").to_lowercase(),
            self.display_name.to_lowercase()
        )
    }
}

/// Listing entry for a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    #[serde(rename = "type")]
    pub type_id: String,
    pub name: String,
    pub description: String,
    pub use_cases: Vec<String>,
    pub requires_rt_kernel: bool,
    pub requires_dpdk: bool,
    pub power_mode: PowerMode,
}

impl From<&WorkloadTemplate> for TemplateSummary {
    fn from(template: &WorkloadTemplate) -> Self {
        Self {
            type_id: template.type_id.clone(),
            name: template.display_name.clone(),
            description: template.description.clone(),
            use_cases: template.use_cases.clone(),
            requires_rt_kernel: template.default_config.enable_rt_kernel,
            requires_dpdk: template.default_config.enable_dpdk,
            power_mode: template.default_config.power_mode,
        }
    }
}

/// Ordered, immutable registry of workload templates
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<WorkloadTemplate>,
}

impl TemplateCatalog {
    /// Build the built-in catalog
    pub fn builtin() -> Self {
        Self {
            templates: catalog::builtin_templates(),
        }
    }

    /// Build a catalog from an explicit template list
    pub fn from_templates(templates: Vec<WorkloadTemplate>) -> Self {
        Self { templates }
    }

    /// Process-wide built-in catalog, initialised on first use
    pub fn shared() -> &'static TemplateCatalog {
        SHARED_CATALOG.get_or_init(Self::builtin)
    }

    /// Look up a template; unknown types are "custom" and yield `None`
    pub fn get(&self, type_id: &str) -> Option<&WorkloadTemplate> {
        self.templates.iter().find(|t| t.type_id == type_id)
    }

    /// Templates in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &WorkloadTemplate> {
        self.templates.iter()
    }

    pub fn list(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(TemplateSummary::from).collect()
    }

    pub fn type_ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.type_id.as_str()).collect()
    }

    /// Template types whose description, use cases or name mention any keyword
    pub fn find_by_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<&str> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        self.templates
            .iter()
            .filter(|t| {
                let text = t.search_text();
                keywords.iter().any(|k| text.contains(k.as_str()))
            })
            .map(|t| t.type_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TopologyPolicy;

    #[test]
    fn test_builtin_order_and_size() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(
            catalog.type_ids(),
            vec![
                "5g-ran",
                "telco-vnf",
                "database",
                "ai-inference",
                "hpc",
                "low-latency-trading",
                "media-processing",
            ]
        );
        assert_eq!(catalog.list().len(), 7);
    }

    #[test]
    fn test_seed_table() {
        let catalog = TemplateCatalog::builtin();
        // (type, rt, ht-disable, dpdk, power, policy, per-pod-pm)
        let expected = [
            ("5g-ran", true, true, true, PowerMode::UltraLowLatency, TopologyPolicy::SingleNumaNode, false),
            ("telco-vnf", true, false, true, PowerMode::LowLatency, TopologyPolicy::SingleNumaNode, false),
            ("database", false, false, false, PowerMode::Default, TopologyPolicy::Restricted, false),
            ("ai-inference", false, false, false, PowerMode::LowLatency, TopologyPolicy::SingleNumaNode, false),
            ("hpc", false, false, false, PowerMode::LowLatency, TopologyPolicy::SingleNumaNode, false),
            ("low-latency-trading", true, true, true, PowerMode::UltraLowLatency, TopologyPolicy::SingleNumaNode, false),
            ("media-processing", false, false, false, PowerMode::Default, TopologyPolicy::Restricted, true),
        ];

        for (type_id, rt, no_ht, dpdk, power, policy, per_pod) in expected {
            let config = catalog.get(type_id).unwrap().default_config;
            assert_eq!(config.enable_rt_kernel, rt, "{type_id} rt");
            assert_eq!(config.disable_ht, no_ht, "{type_id} ht");
            assert_eq!(config.enable_dpdk, dpdk, "{type_id} dpdk");
            assert_eq!(config.power_mode, power, "{type_id} power");
            assert_eq!(config.topology_policy, policy, "{type_id} policy");
            assert!(config.split_reserved_across_numa, "{type_id} numa split");
            assert_eq!(config.per_pod_power_management, per_pod, "{type_id} per-pod");
        }
    }

    #[test]
    fn test_unknown_type_is_absent() {
        let catalog = TemplateCatalog::builtin();
        assert!(catalog.get("custom").is_none());
        assert!(catalog.get("5G-RAN").is_none());
    }

    #[test]
    fn test_summary_fields() {
        let summaries = TemplateCatalog::builtin().list();
        let ran = &summaries[0];
        assert_eq!(ran.type_id, "5g-ran");
        assert!(ran.requires_rt_kernel);
        assert!(ran.requires_dpdk);
        assert_eq!(ran.power_mode, PowerMode::UltraLowLatency);

        let json = serde_json::to_value(ran).unwrap();
        assert_eq!(json["type"], "5g-ran");
    }

    #[test]
    fn test_find_by_keywords() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.find_by_keywords(&["PostgreSQL"]), vec!["database"]);
        assert_eq!(catalog.find_by_keywords(&["transcoding"]), vec!["media-processing"]);
        assert!(catalog.find_by_keywords(&["quantum"]).is_empty());
        assert!(catalog.find_by_keywords(&[" "]).is_empty());
    }

    #[test]
    fn test_shared_catalog_is_stable() {
        let a = TemplateCatalog::shared();
        let b = TemplateCatalog::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), 7);
    }
}
