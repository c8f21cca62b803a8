//! # Configuration
//!
//! Configuration is loaded with [`confique`] from layered sources.
//!
//! ## Storage Hierarchy
//!
//! Resolved in priority order:
//! 1. **Environment variables**: `ROCOCO_SPECS_DISTINCT`.
//! 2. **Project Config**: `rococo-specs.toml` in the directory passed to [`SpecsConfig::load`].
//! 3. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `distinct` | `always` | When composed specifications request deduplication (`always` or `membership`) |

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::specification::Specification;

pub const CONFIG_FILE_NAME: &str = "rococo-specs.toml";

/// When a composer marks its specification as distinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistinctPolicy {
    /// Every specification requests deduplication by entity id.
    #[default]
    Always,

    /// Only specifications containing a membership predicate do.
    Membership,
}

impl DistinctPolicy {
    pub fn requires_distinct(self, spec: &Specification) -> bool {
        match self {
            DistinctPolicy::Always => true,
            DistinctPolicy::Membership => spec.has_membership(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown distinct policy '{}' (expected 'always' or 'membership')",
            self.0
        )
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for DistinctPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(DistinctPolicy::Always),
            "membership" => Ok(DistinctPolicy::Membership),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Configuration for rococo-specs, stored in `rococo-specs.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecsConfig {
    /// When composed specifications request distinct results.
    /// When absent, defaults to "always".
    #[config(env = "ROCOCO_SPECS_DISTINCT", parse_env = DistinctPolicy::from_str)]
    pub distinct: Option<DistinctPolicy>,
}

impl SpecsConfig {
    /// Load from environment, `project_dir/rococo-specs.toml`, then the global
    /// config file. Missing files are skipped.
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut builder = SpecsConfig::builder().env();
        if let Some(dir) = project_dir {
            builder = builder.file(dir.join(CONFIG_FILE_NAME));
        }
        if let Some(global) = global_config_path() {
            builder = builder.file(global);
        }
        Ok(builder.load()?)
    }

    /// Get the distinct policy, using the default if not configured.
    pub fn distinct(&self) -> DistinctPolicy {
        self.distinct.unwrap_or_default()
    }
}

/// Location of the global config file, if the platform has a config dir.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "rococo", "rococo-specs")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
