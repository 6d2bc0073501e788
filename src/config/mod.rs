use crate::core::ConfigProvider;
use crate::utils::error::{ManifestError, Result};
use std::env;

pub const REQUIRES_ENV: &str = "EXTENSIONS_REQUIRES";
pub const REPOSITORIES_ENV: &str = "EXTENSIONS_REPOSITORIES";

pub const DEFAULT_REQUIRES: &str = "webtales/Client: dev-master, webtales/Clients: dev-master";
pub const DEFAULT_REPOSITORIES: &str = "vcs:https://github.com/WebTales/rubedo-client.git";

/// Raw configuration strings, read once at startup.
///
/// Defaults only apply to unset variables. A variable set to `""` is kept
/// as-is and later yields `null` for its manifest field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestConfig {
    pub requires: String,
    pub repositories: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            requires: DEFAULT_REQUIRES.to_string(),
            repositories: DEFAULT_REPOSITORIES.to_string(),
        }
    }
}

impl ManifestConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            requires: read_var(REQUIRES_ENV, DEFAULT_REQUIRES)?,
            repositories: read_var(REPOSITORIES_ENV, DEFAULT_REPOSITORIES)?,
        })
    }

    /// Build from an arbitrary key lookup; `None` means unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            requires: lookup(REQUIRES_ENV).unwrap_or_else(|| DEFAULT_REQUIRES.to_string()),
            repositories: lookup(REPOSITORIES_ENV)
                .unwrap_or_else(|| DEFAULT_REPOSITORIES.to_string()),
        }
    }
}

fn read_var(name: &str, default: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) => {
            tracing::debug!("{} set ({} bytes)", name, value.len());
            Ok(value)
        }
        Err(env::VarError::NotPresent) => {
            tracing::debug!("{} unset, using default", name);
            Ok(default.to_string())
        }
        Err(env::VarError::NotUnicode(_)) => Err(ManifestError::InvalidEnvironment {
            name: name.to_string(),
        }),
    }
}

impl ConfigProvider for ManifestConfig {
    fn requires(&self) -> &str {
        &self.requires
    }

    fn repositories(&self) -> &str {
        &self.repositories
    }
}
