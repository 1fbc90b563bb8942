//! Performance profile advisor library
//!
//! This crate provides the core functionality for:
//! - Cluster hardware topology aggregation
//! - Workload templates and natural-language workload recommendation
//! - Validation of performance requirements against hardware
//! - Parameter synthesis and conflict resolution
//! - Rendering of the performance-profile-creator command line

pub mod classifier;
pub mod command;
pub mod error;
pub mod models;
pub mod observability;
pub mod synthesizer;
pub mod templates;
pub mod topology;
pub mod validator;

pub use classifier::{recommend, WorkloadRecommendation, CUSTOM_WORKLOAD};
pub use command::{generate_profile_command, CommandAssembler, CommandConfig, ProfileCommand};
pub use error::{ProfileError, Result};
pub use models::*;
pub use observability::StructuredLogger;
pub use synthesizer::{reserved_cpu_heuristic, resolve_conflicts, synthesize, DEFAULT_PROFILE_NAME};
pub use templates::{TemplateCatalog, TemplateSummary, WorkloadTemplate};
pub use topology::{CpuTopology, HardwareTopology, NodeCpu, NodeInfo, TopologySummary};
pub use validator::{validate, CheckReport, RequirementsValidator, ValidationReport};
