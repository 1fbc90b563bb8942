//! Error types for the profile library
//!
//! Data-shaped problems (over-allocation, bad huge-page sizes, ...) are never
//! errors here; they are reported through `ValidationReport`. Only caller
//! contract violations surface as `ProfileError`.

use thiserror::Error;

/// Errors returned by the profile library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A mandatory argument was missing or empty
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// Power mode string not recognised
    #[error("Unknown power mode '{0}' (expected default, low-latency or ultra-low-latency)")]
    UnknownPowerMode(String),

    /// Topology manager policy string not recognised
    #[error("Unknown topology policy '{0}' (expected single-numa-node, restricted or best-effort)")]
    UnknownTopologyPolicy(String),

    /// Topology document could not be interpreted
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),
}

/// Result alias for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;
