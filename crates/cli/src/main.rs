//! Performance Profile Advisor CLI
//!
//! A command-line tool for browsing workload templates, validating
//! performance requirements against cluster hardware, and generating
//! performance-profile-creator commands.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate, recommend, summary, templates, validate};
use profile_lib::TemplateCatalog;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use output::{LogFormat, OutputFormat};

/// Exit status when requirements fail validation
const EXIT_INVALID: i32 = 2;

/// Performance Profile Advisor CLI
#[derive(Parser)]
#[command(name = "ppa")]
#[command(author, version, about = "Performance Profile Advisor for node tuning", long_about = None)]
pub struct Cli {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, short, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log format on stderr
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse workload templates
    #[command(subcommand)]
    Templates(TemplatesCommands),

    /// Suggest a workload type from a free-form description
    Recommend {
        /// Workload description, e.g. "5G RAN with DPDK"
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Show the cluster hardware summary
    Summary {
        /// Topology file (summary object or list of node records)
        #[arg(long)]
        topology: PathBuf,
    },

    /// Validate performance requirements against the hardware
    Validate(validate::ValidateArgs),

    /// Generate the performance-profile-creator command
    Generate(generate::GenerateArgs),
}

#[derive(Subcommand)]
pub enum TemplatesCommands {
    /// List all workload templates
    List,

    /// Show one template in detail
    Show {
        /// Workload type, e.g. 5g-ran
        workload_type: String,
    },

    /// Find templates by keyword
    Search {
        /// Keywords matched against names, descriptions and use cases
        #[arg(required = true)]
        keywords: Vec<String>,
    },
}

fn init_tracing(verbose: bool, log_format: LogFormat) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Run the selected command; `Ok(false)` means validation failed
fn run(cli: Cli) -> Result<bool> {
    let config = config::CliConfig::load()?;
    debug!(?config, "Loaded configuration");

    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(OutputFormat::from_config))
        .unwrap_or_default();
    let catalog = TemplateCatalog::shared();

    match cli.command {
        Commands::Templates(templates_cmd) => match templates_cmd {
            TemplatesCommands::List => templates::list_templates(catalog, format)?,
            TemplatesCommands::Show { workload_type } => {
                templates::show_template(catalog, &workload_type, format)?
            }
            TemplatesCommands::Search { keywords } => {
                templates::search_templates(catalog, &keywords, format)?
            }
        },
        Commands::Recommend { description } => {
            recommend::recommend_workload(catalog, &description, format)?
        }
        Commands::Summary { topology } => summary::show_summary(&topology, format)?,
        Commands::Validate(args) => return validate::validate_requirements(&args, format),
        Commands::Generate(args) => generate::generate_command(catalog, &config, &args, format)?,
    }

    Ok(true)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_INVALID),
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}
