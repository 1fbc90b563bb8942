//! Workload template commands

use anyhow::{bail, Result};
use profile_lib::{TemplateCatalog, WorkloadTemplate};
use tabled::Tabled;

use crate::output::{
    color_flag, print_heading, print_info, print_json, print_table, print_warning, OutputFormat,
};

/// Row for the templates table
#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Type")]
    type_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "RT Kernel")]
    rt_kernel: String,
    #[tabled(rename = "DPDK")]
    dpdk: String,
    #[tabled(rename = "Power Mode")]
    power_mode: String,
    #[tabled(rename = "Hugepages")]
    hugepages: String,
}

impl From<&WorkloadTemplate> for TemplateRow {
    fn from(t: &WorkloadTemplate) -> Self {
        Self {
            type_id: t.type_id.clone(),
            name: t.display_name.clone(),
            rt_kernel: color_flag(t.default_config.enable_rt_kernel),
            dpdk: color_flag(t.default_config.enable_dpdk),
            power_mode: t.default_config.power_mode.to_string(),
            hugepages: t.recommended_hugepages.size.clone(),
        }
    }
}

/// Row for a template's default options
#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Option")]
    option: &'static str,
    #[tabled(rename = "Default")]
    value: String,
}

/// List all templates
pub fn list_templates(catalog: &TemplateCatalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&catalog.list())?,
        OutputFormat::Table => {
            let rows: Vec<TemplateRow> = catalog.iter().map(TemplateRow::from).collect();
            print_table(rows);
            println!("\nTotal: {} templates", catalog.len());
        }
    }
    Ok(())
}

/// Show one template in full
pub fn show_template(catalog: &TemplateCatalog, type_id: &str, format: OutputFormat) -> Result<()> {
    let Some(template) = catalog.get(type_id) else {
        bail!(
            "Unknown workload type '{}'. Available: {}",
            type_id,
            catalog.type_ids().join(", ")
        );
    };

    match format {
        OutputFormat::Json => print_json(template)?,
        OutputFormat::Table => {
            println!("{} ({})", template.display_name, template.type_id);
            println!("{}", template.description);

            print_heading("Use cases:");
            for use_case in &template.use_cases {
                println!("  - {}", use_case);
            }

            print_heading("Default configuration:");
            let options = &template.default_config;
            print_table(vec![
                OptionRow { option: "Real-time kernel", value: color_flag(options.enable_rt_kernel) },
                OptionRow { option: "Disable hyperthreading", value: color_flag(options.disable_ht) },
                OptionRow { option: "User-level networking (DPDK)", value: color_flag(options.enable_dpdk) },
                OptionRow { option: "Power mode", value: options.power_mode.to_string() },
                OptionRow { option: "Topology manager policy", value: options.topology_policy.to_string() },
                OptionRow {
                    option: "Split reserved CPUs across NUMA",
                    value: color_flag(options.split_reserved_across_numa),
                },
                OptionRow {
                    option: "Per-pod power management",
                    value: color_flag(options.per_pod_power_management),
                },
            ]);

            println!();
            print_info(&format!(
                "Hugepages: {} ({})",
                template.recommended_hugepages.size, template.recommended_hugepages.note
            ));
        }
    }
    Ok(())
}

/// Find templates mentioning any of the keywords
pub fn search_templates(
    catalog: &TemplateCatalog,
    keywords: &[String],
    format: OutputFormat,
) -> Result<()> {
    let matches: Vec<&WorkloadTemplate> = catalog
        .find_by_keywords(keywords)
        .into_iter()
        .filter_map(|type_id| catalog.get(type_id))
        .collect();

    match format {
        OutputFormat::Json => {
            let ids: Vec<&str> = matches.iter().map(|t| t.type_id.as_str()).collect();
            print_json(&ids)?;
        }
        OutputFormat::Table => {
            if matches.is_empty() {
                print_warning(&format!("No templates match: {}", keywords.join(" ")));
                return Ok(());
            }
            let rows: Vec<TemplateRow> = matches.into_iter().map(TemplateRow::from).collect();
            print_table(rows);
        }
    }
    Ok(())
}
