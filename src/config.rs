//! Connection configuration for the Azure DevOps organization.
//!
//! Three values are required and read from environment variables:
//! - `AZURE_DEVOPS_ORG_URL` - Organization URL (e.g. `https://dev.azure.com/my-org`)
//! - `AZURE_DEVOPS_PROJECT` - Default project name
//! - `AZURE_DEVOPS_PERSONAL_ACCESS_TOKEN` - PAT used for every API call
//!
//! Before the variables are read, a dotenv file is loaded from the first
//! existing candidate location (see [`env_file_candidates`]). Values already
//! present in the process environment are never overridden by the file.

use std::path::PathBuf;

use thiserror::Error;

pub const ORG_URL_VAR: &str = "AZURE_DEVOPS_ORG_URL";
pub const PROJECT_VAR: &str = "AZURE_DEVOPS_PROJECT";
pub const PAT_VAR: &str = "AZURE_DEVOPS_PERSONAL_ACCESS_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}; check your .env file or environment")]
    MissingVar(&'static str),
}

/// Immutable connection settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AzdoConfig {
    pub org_url: String,
    pub project: String,
    pub pat: String,
}

impl AzdoConfig {
    /// Load configuration from the environment, reading a dotenv file first
    /// if one exists in any candidate location.
    pub fn from_env() -> Result<Self, ConfigError> {
        match find_env_file() {
            Some(path) => {
                if dotenvy::from_path(&path).is_ok() {
                    tracing::debug!("loaded environment from {}", path.display());
                }
            }
            None => {
                tracing::warn!("no .env file found, using environment variables if available");
            }
        }
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve the three required values through the given lookup. Empty
    /// strings count as missing.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };
        Ok(Self {
            org_url: required(ORG_URL_VAR)?,
            project: required(PROJECT_VAR)?,
            pat: required(PAT_VAR)?,
        })
    }
}

/// Dotenv candidate locations, in search order: the working directory, the
/// directory above the running executable, the working directory again by
/// absolute path, then `~/.azuredevops.env`.
pub fn env_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("..").join(".env"));
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(".env"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".azuredevops.env"));
    }
    candidates
}

fn find_env_file() -> Option<PathBuf> {
    env_file_candidates().into_iter().find(|p| p.exists())
}
