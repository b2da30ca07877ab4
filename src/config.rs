use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "kalends.toml";

/// Top-level Kalends configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KalendsConfig {
    /// Holiday calendar settings.
    #[serde(default)]
    pub holidays: HolidaysToml,

    /// Recurrence expansion settings.
    #[serde(default)]
    pub recurrence: RecurrenceToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Built-in rule sets: "us-federal", "western-christian".
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,
    /// Extra rules applied on top of the presets.
    #[serde(default)]
    pub rules: Vec<RuleToml>,
    /// One-off holidays keyed by ISO date.
    #[serde(default)]
    pub custom: BTreeMap<String, String>,
}

impl Default for HolidaysToml {
    fn default() -> Self {
        Self {
            presets: default_presets(),
            rules: Vec::new(),
            custom: BTreeMap::new(),
        }
    }
}

fn default_presets() -> Vec<String> {
    vec!["us-federal".to_string()]
}

/// A single holiday rule. Which fields are required depends on `kind`:
/// `fixed` needs `month` and `day`, `nth_weekday` needs `month`, `weekday`
/// and `ordinal`, `easter` takes an optional `offset` in days.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleToml {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub weekday: Option<String>,
    #[serde(default)]
    pub ordinal: Option<OrdinalToml>,
    #[serde(default)]
    pub offset: Option<i64>,
}

/// `ordinal = 2` or `ordinal = "last"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OrdinalToml {
    Number(u8),
    Name(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecurrenceToml {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for RecurrenceToml {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    10
}

/// Loads configuration.
///
/// An explicit `path` must exist. Without one, `kalends.toml` in the working
/// directory is used when present, and built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<KalendsConfig> {
    let path: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.is_file() {
                debug!("no config file, using defaults");
                return Ok(KalendsConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: KalendsConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
