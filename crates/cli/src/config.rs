//! Configuration management for the CLI

use anyhow::{Context, Result};
use profile_lib::command::{
    DEFAULT_CONTAINER_RUNTIME, DEFAULT_IMAGE, DEFAULT_IMAGE_TAG, DEFAULT_MUST_GATHER_MOUNT,
    DEFAULT_OUTPUT_FILE,
};
use profile_lib::CommandConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix, e.g. `PPA_IMAGE_TAG`
const ENV_PREFIX: &str = "PPA";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Container runtime used to launch the tool image
    pub container_runtime: String,
    /// Tool image without tag
    pub image: String,
    /// Tool image tag
    pub image_tag: String,
    /// Mount point of the must-gather bundle inside the container
    pub must_gather_mount: String,
    /// File the generated profile is redirected to
    pub output_file: String,
    /// Profile name used when `--profile-name` is not given
    pub default_profile_name: Option<String>,
    /// Output format used when `--format` is not given
    pub default_format: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            container_runtime: DEFAULT_CONTAINER_RUNTIME.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            image_tag: DEFAULT_IMAGE_TAG.to_string(),
            must_gather_mount: DEFAULT_MUST_GATHER_MOUNT.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            default_profile_name: None,
            default_format: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from the config file and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: Option<PathBuf>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Json)
                    .required(false),
            );
        }

        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    /// Get the configuration file path
    fn config_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".config").join("ppa").join("config.json"))
    }

    /// Command settings, with CLI flags taking precedence
    pub fn command_config(
        &self,
        image_tag: Option<&str>,
        output_file: Option<&str>,
    ) -> CommandConfig {
        CommandConfig {
            container_runtime: self.container_runtime.clone(),
            image: self.image.clone(),
            image_tag: image_tag.unwrap_or(&self.image_tag).to_string(),
            must_gather_mount: self.must_gather_mount.clone(),
            output_file: output_file.unwrap_or(&self.output_file).to_string(),
            ..CommandConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_library() {
        let config = CliConfig::default();
        assert_eq!(config.command_config(None, None), CommandConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig {
            image_tag: "4.13".to_string(),
            ..Default::default()
        };
        let command = config.command_config(Some("4.15"), Some("out.yaml"));
        assert_eq!(command.image_tag, "4.15");
        assert_eq!(command.output_file, "out.yaml");

        let command = config.command_config(None, None);
        assert_eq!(command.image_tag, "4.13");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"container_runtime": "docker", "default_profile_name": "edge"}"#,
        )
        .unwrap();

        let config = CliConfig::load_from(Some(path)).unwrap();
        assert_eq!(config.container_runtime, "docker");
        assert_eq!(config.default_profile_name.as_deref(), Some("edge"));
        assert_eq!(config.image, DEFAULT_IMAGE);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from(Some(dir.path().join("absent.json"))).unwrap();
        assert_eq!(config.output_file, DEFAULT_OUTPUT_FILE);
    }
}
