//! Configuration types for routenorm.
//!
//! [`Config::load`] layers the embedded defaults, the user config file
//! (`$XDG_CONFIG_HOME/routenorm/config.toml`, or an explicit path) and
//! `ROUTENORM_*` environment overrides. [`Config::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
format = "aloha"

[output]
pretty       = false
include_name = true

[pipeline]
on_unknown = "skip"
on_error   = "skip"
"#;

const ENV_PREFIX: &str = "ROUTENORM";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Wire format of incoming raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `ALOHA: <name> [ k=v ... ] <utc=..,lat=..,lon=..>` text lines.
    #[default]
    Aloha,
    /// One JSON object per line.
    Jsonl,
}

/// `[input]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub format: InputFormat,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
    #[serde(default = "default_include_name")]
    pub include_name: bool,
}

fn default_include_name() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            include_name: default_include_name(),
        }
    }
}

/// What the pipeline does with a line it cannot turn into an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Count it, log it, move on.
    #[default]
    Skip,
    /// Abort the run.
    Fail,
}

/// `[pipeline]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PipelineConfig {
    /// Events whose name no rule claims.
    #[serde(default)]
    pub on_unknown: Policy,
    /// Lines that fail to decode or normalize.
    #[serde(default)]
    pub on_error: Policy,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// With `explicit` set, that file must exist. Otherwise the XDG path is
    /// read if present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let user_file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("routenorm")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
