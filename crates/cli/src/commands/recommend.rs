//! Natural-language workload recommendation

use anyhow::{bail, Result};
use profile_lib::{recommend, ParameterOverrides, StructuredLogger, TemplateCatalog};
use tabled::Tabled;

use crate::output::{print_heading, print_info, print_json, print_success, print_table, print_warning, OutputFormat};

/// Row for suggested settings
#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Flag")]
    flag: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn setting_rows(settings: &ParameterOverrides) -> Vec<SettingRow> {
    let mut rows = Vec::new();
    if let Some(v) = settings.enable_rt_kernel {
        rows.push(SettingRow { flag: "--rt-kernel", value: v.to_string() });
    }
    if let Some(v) = settings.enable_dpdk {
        rows.push(SettingRow { flag: "--dpdk", value: v.to_string() });
    }
    if let Some(v) = settings.power_mode {
        rows.push(SettingRow { flag: "--power-mode", value: v.to_string() });
    }
    if let Some(v) = settings.topology_policy {
        rows.push(SettingRow { flag: "--topology-policy", value: v.to_string() });
    }
    if let Some(v) = settings.per_pod_power_management {
        rows.push(SettingRow { flag: "--per-pod-power-management", value: v.to_string() });
    }
    rows
}

/// Classify a workload description and print the suggestion
pub fn recommend_workload(
    catalog: &TemplateCatalog,
    description: &[String],
    format: OutputFormat,
) -> Result<()> {
    let description = description.join(" ");
    if description.trim().is_empty() {
        bail!("Workload description must not be empty");
    }

    let recommendation = recommend(&description, catalog);
    StructuredLogger::new("-").log_classification(&recommendation);

    match format {
        OutputFormat::Json => print_json(&recommendation)?,
        OutputFormat::Table => {
            print_success(&format!(
                "Recommended workload type: {}",
                recommendation.workload_type
            ));
            match &recommendation.template {
                Some(template) => print_info(&format!("Template: {}", template.display_name)),
                None => print_warning("No matching template, defaults will be used"),
            }

            if !recommendation.reasoning.is_empty() {
                print_heading("Reasoning:");
                for reason in &recommendation.reasoning {
                    println!("  - {}", reason);
                }
            }

            let rows = setting_rows(&recommendation.recommended_settings);
            if !rows.is_empty() {
                print_heading("Suggested overrides:");
                print_table(rows);
            }

            println!(
                "\nNext: ppa generate --workload-type {} --topology <file> --bundle <path> --mcp-name <pool>",
                recommendation.workload_type
            );
        }
    }
    Ok(())
}
