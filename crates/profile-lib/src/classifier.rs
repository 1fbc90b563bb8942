//! Workload recommendation from natural-language descriptions
//!
//! Keyword heuristics that map a free-form description to a catalog
//! workload type and a handful of suggested option overrides.

use crate::models::{ParameterOverrides, PowerMode, TopologyPolicy};
use crate::templates::{TemplateCatalog, WorkloadTemplate};
use serde::{Deserialize, Serialize};

/// Workload type reported when no rule matches
pub const CUSTOM_WORKLOAD: &str = "custom";

/// Keywords at or below this length only match whole words
const SHORT_KEYWORD_LEN: usize = 3;

/// (workload type, keywords, reasoning), first match wins
const WORKLOAD_RULES: &[(&str, &[&str], &str)] = &[
    (
        "5g-ran",
        &["5g", "ran", "radio", "baseband"],
        "Detected 5G/RAN workload - requires ultra-low latency",
    ),
    (
        "database",
        &["database", "db", "sql", "postgres", "mysql"],
        "Detected database workload - requires memory optimization",
    ),
    (
        "ai-inference",
        &["ai", "ml", "inference", "tensorflow", "pytorch"],
        "Detected AI/ML workload - requires CPU isolation",
    ),
    (
        "telco-vnf",
        &["vnf", "telco", "nfv"],
        "Detected Telco VNF workload - requires RT kernel and DPDK",
    ),
    (
        "low-latency-trading",
        &["trading"],
        "Detected trading workload - requires microsecond latency",
    ),
    (
        "hpc",
        &["hpc", "simulation"],
        "Detected HPC workload - requires compute throughput and NUMA awareness",
    ),
    (
        "media-processing",
        &["video", "transcod", "streaming", "media"],
        "Detected media processing workload - balances throughput and latency",
    ),
];

const REALTIME_KEYWORDS: &[&str] = &["real-time", "realtime", "rt", "low latency", "latency-sensitive"];
const DPDK_KEYWORDS: &[&str] = &["dpdk", "user space networking", "packet processing"];
const POWER_SAVING_KEYWORDS: &[&str] = &["power efficient", "power saving", "energy"];
const NUMA_KEYWORDS: &[&str] = &["numa", "locality", "affinity"];

/// Result of classifying a workload description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadRecommendation {
    pub workload_type: String,
    pub recommended_settings: ParameterOverrides,
    pub reasoning: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<WorkloadTemplate>,
}

struct Description {
    text: String,
    words: Vec<String>,
}

impl Description {
    fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let words = text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Self { text, words }
    }

    fn mentions(&self, keyword: &str) -> bool {
        if keyword.len() <= SHORT_KEYWORD_LEN {
            self.words.iter().any(|w| w == keyword)
        } else {
            self.text.contains(keyword)
        }
    }

    fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }
}

/// Recommend a workload type and settings for `description`
pub fn recommend(description: &str, catalog: &TemplateCatalog) -> WorkloadRecommendation {
    let description = Description::new(description);
    let mut settings = ParameterOverrides::default();
    let mut reasoning = Vec::new();

    let workload_type = WORKLOAD_RULES
        .iter()
        .find(|(_, keywords, _)| description.mentions_any(keywords))
        .map(|(workload_type, _, reason)| {
            reasoning.push(reason.to_string());
            workload_type.to_string()
        })
        .unwrap_or_else(|| CUSTOM_WORKLOAD.to_string());

    if description.mentions_any(REALTIME_KEYWORDS) {
        settings.enable_rt_kernel = Some(true);
        settings.power_mode = Some(PowerMode::UltraLowLatency);
        reasoning.push("Real-time/low-latency keywords detected - enabling RT kernel".to_string());
    }

    if description.mentions_any(DPDK_KEYWORDS) {
        settings.enable_dpdk = Some(true);
        settings.topology_policy = Some(TopologyPolicy::SingleNumaNode);
        reasoning.push(
            "DPDK/packet processing detected - enabling user-level networking".to_string(),
        );
    }

    if description.mentions_any(POWER_SAVING_KEYWORDS) {
        settings.per_pod_power_management = Some(true);
        settings.power_mode = Some(PowerMode::Default);
        reasoning.push(
            "Power efficiency mentioned - enabling per-pod power management".to_string(),
        );
    }

    if description.mentions_any(NUMA_KEYWORDS) {
        settings.topology_policy = Some(TopologyPolicy::SingleNumaNode);
        reasoning.push("NUMA awareness mentioned - setting single-numa-node policy".to_string());
    }

    let template = catalog.get(&workload_type).cloned();

    WorkloadRecommendation {
        workload_type,
        recommended_settings: settings,
        reasoning,
        template,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(description: &str) -> WorkloadRecommendation {
        recommend(description, &TemplateCatalog::builtin())
    }

    #[test]
    fn test_5g_ran_with_low_latency() {
        let rec = classify("I need to run 5G RAN workloads with ultra-low latency");

        assert_eq!(rec.workload_type, "5g-ran");
        assert_eq!(rec.recommended_settings.enable_rt_kernel, Some(true));
        assert_eq!(rec.recommended_settings.power_mode, Some(PowerMode::UltraLowLatency));
        assert_eq!(rec.template.unwrap().type_id, "5g-ran");
    }

    #[test]
    fn test_database_with_realtime() {
        let rec = classify("Database server running PostgreSQL with some real-time requirements");
        assert_eq!(rec.workload_type, "database");
        assert_eq!(rec.recommended_settings.enable_rt_kernel, Some(true));
    }

    #[test]
    fn test_ai_with_dpdk() {
        let rec = classify("AI inference using TensorFlow with DPDK packet processing");
        assert_eq!(rec.workload_type, "ai-inference");
        assert_eq!(rec.recommended_settings.enable_dpdk, Some(true));
        assert_eq!(
            rec.recommended_settings.topology_policy,
            Some(TopologyPolicy::SingleNumaNode)
        );
    }

    #[test]
    fn test_trading_is_not_mistaken_for_ai() {
        let rec = classify("Low latency trading system for high-frequency trading");
        assert_eq!(rec.workload_type, "low-latency-trading");
        assert_eq!(rec.recommended_settings.enable_rt_kernel, Some(true));
    }

    #[test]
    fn test_short_keywords_match_whole_words_only() {
        // "transcoding" contains "ran" and "maintain" contains "ai"
        let rec = classify("Maintain a transcoding farm");
        assert_eq!(rec.workload_type, "media-processing");
        assert_eq!(rec.recommended_settings.enable_rt_kernel, None);
    }

    #[test]
    fn test_power_saving_resets_power_mode() {
        let rec = classify("Realtime analytics, but energy matters");
        assert_eq!(rec.workload_type, CUSTOM_WORKLOAD);
        assert_eq!(rec.recommended_settings.per_pod_power_management, Some(true));
        assert_eq!(rec.recommended_settings.power_mode, Some(PowerMode::Default));
        assert!(rec.template.is_none());
        assert_eq!(rec.reasoning.len(), 2);
    }

    #[test]
    fn test_numa_keywords() {
        let rec = classify("batch jobs with strict memory locality");
        assert_eq!(
            rec.recommended_settings.topology_policy,
            Some(TopologyPolicy::SingleNumaNode)
        );
    }

    #[test]
    fn test_unmatched_description() {
        let rec = classify("a web frontend");
        assert_eq!(rec.workload_type, CUSTOM_WORKLOAD);
        assert!(rec.recommended_settings.is_empty());
        assert!(rec.reasoning.is_empty());
    }
}
