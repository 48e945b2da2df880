//! Suite configuration.
//!
//! The only tunable is the target base URL. Resolution order:
//!
//! 1. `APIPROBE_BASE_URL` environment variable
//! 2. `target.base_url` in the config file (`apiprobe.toml` in the working
//!    directory, or the path named by `APIPROBE_CONFIG`), with `${VAR}`
//!    references expanded from the environment
//! 3. the public JSONPlaceholder instance
//!
//! A missing or malformed config file falls back to defaults with a warning;
//! a malformed URL only surfaces when a client is built from it.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "APIPROBE_CONFIG";

/// Environment variable overriding the base URL outright.
pub const BASE_URL_ENV: &str = "APIPROBE_BASE_URL";

const DEFAULT_CONFIG_FILE: &str = "apiprobe.toml";

#[derive(Debug, Default, Deserialize)]
pub struct ProbeConfig {
    pub target: Option<TargetConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TargetConfig {
    pub base_url: Option<String>,
}

impl ProbeConfig {
    /// Loads the config file from the default or `APIPROBE_CONFIG` location.
    #[must_use]
    pub fn load() -> Self {
        let path = env::var(CONFIG_PATH_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        Self::load_from(&path)
    }

    /// Loads the config file at `path`, falling back to defaults if it is
    /// absent or unparseable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {path:?}: {err}");
                return Self::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {path:?}: {err}");
                Self::default()
            }
        }
    }

    /// Resolves the effective base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        resolve_base_url(
            env::var(BASE_URL_ENV).ok(),
            self.target.as_ref().and_then(|t| t.base_url.as_deref()),
        )
    }
}

fn resolve_base_url(env_override: Option<String>, file_value: Option<&str>) -> String {
    if let Some(url) = env_override
        && !url.trim().is_empty()
    {
        return url;
    }

    if let Some(url) = file_value {
        let expanded = expand_env_vars(url);
        if !expanded.trim().is_empty() {
            return expanded;
        }
    }

    DEFAULT_BASE_URL.to_string()
}

/// Expands `${VAR}` references from the environment. Unset variables expand
/// to the empty string; an unterminated `${` is left as-is.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
