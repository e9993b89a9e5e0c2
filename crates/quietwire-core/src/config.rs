use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PLUGIN_PATH: &str = "/usr/lib/ladspa/libdeep_filter_ladspa.so";
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;
pub const DEFAULT_ATTENUATION_LIMIT: f64 = 100.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Explicit generator configuration.
///
/// Every field has a working default, so an absent or empty config file
/// means a stock installation. Channel counts and position labels are
/// deliberately not configurable; they are contract constants of the
/// generated documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_plugin_path")]
    pub plugin_path: PathBuf,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_attenuation_limit")]
    pub attenuation_limit: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Optional override for the introspection tool binary.
    #[serde(default)]
    pub analyse_tool: Option<PathBuf>,
}

fn default_plugin_path() -> PathBuf {
    PathBuf::from(DEFAULT_PLUGIN_PATH)
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_attenuation_limit() -> f64 {
    DEFAULT_ATTENUATION_LIMIT
}

fn default_output_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pipewire")
        .join("filter-chain.conf.d")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            plugin_path: default_plugin_path(),
            sample_rate: default_sample_rate(),
            attenuation_limit: default_attenuation_limit(),
            output_dir: default_output_dir(),
            analyse_tool: None,
        }
    }
}

impl GeneratorConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quietwire").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.sample_rate, 48_000);
        assert_eq!(config.attenuation_limit, 100.0);
    }

    #[test]
    fn partial_document_overrides_selectively() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"plugin_path": "/opt/ladspa/df.so", "attenuation_limit": 40}"#)
                .unwrap();
        assert_eq!(config.plugin_path, PathBuf::from("/opt/ladspa/df.so"));
        assert_eq!(config.attenuation_limit, 40.0);
        assert_eq!(config.sample_rate, 48_000);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = GeneratorConfig::default();
        config.sample_rate = 44_100;
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
