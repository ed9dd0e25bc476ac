//! Credential loading
//!
//! Credentials can come from:
//! - a TOML credentials file, with bare keys (`endpoint_url`, `token`) or the
//!   host-prefixed keys (`dns_subdomain_provider_endpoint_url`,
//!   `dns_subdomain_provider_token`)
//! - the `SUBDOMAIN_PROVIDER_ENDPOINT_URL` / `SUBDOMAIN_PROVIDER_TOKEN`
//!   environment variables

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::types::SubdomainProviderCredentials;

pub const ENV_ENDPOINT_URL: &str = "SUBDOMAIN_PROVIDER_ENDPOINT_URL";
pub const ENV_TOKEN: &str = "SUBDOMAIN_PROVIDER_TOKEN";

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(default, alias = "dns_subdomain_provider_endpoint_url")]
    endpoint_url: Option<String>,
    #[serde(default, alias = "dns_subdomain_provider_token")]
    token: Option<String>,
}

/// Loads [`SubdomainProviderCredentials`] from files or the environment.
#[derive(Debug, Default)]
pub struct CredentialsLoader;

impl CredentialsLoader {
    /// Load credentials from a TOML file.
    ///
    /// On Unix a warning is logged when the file is readable by group or
    /// others; the file is still used.
    pub fn from_file(path: &Path) -> Result<SubdomainProviderCredentials> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let metadata = fs::metadata(path).map_err(|e| {
                ProviderError::configuration(
                    "credentials",
                    format!("failed to read '{}': {e}", path.display()),
                )
            })?;
            let mode = metadata.permissions().mode() & 0o777;
            if mode & 0o077 != 0 {
                log::warn!(
                    "Credentials file '{}' has permissive mode {mode:o} (should be 0600 or 0400)",
                    path.display()
                );
            }
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ProviderError::configuration(
                "credentials",
                format!("failed to read '{}': {e}", path.display()),
            )
        })?;

        log::debug!("Loading credentials from '{}'", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse credentials from TOML text.
    pub fn from_toml_str(content: &str) -> Result<SubdomainProviderCredentials> {
        let file: CredentialsFile = toml::from_str(content)
            .map_err(|e| ProviderError::configuration("credentials", e.message().to_string()))?;

        Self::build(file.endpoint_url, file.token)
    }

    /// Load credentials from the process environment.
    pub fn from_env() -> Result<SubdomainProviderCredentials> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<SubdomainProviderCredentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::build(lookup(ENV_ENDPOINT_URL), lookup(ENV_TOKEN))
    }

    fn build(
        endpoint_url: Option<String>,
        token: Option<String>,
    ) -> Result<SubdomainProviderCredentials> {
        let endpoint_url = endpoint_url
            .ok_or_else(|| ProviderError::configuration("endpoint_url", "missing"))?;
        let token = token.ok_or_else(|| ProviderError::configuration("token", "missing"))?;

        SubdomainProviderCredentials::new(endpoint_url, token).validated()
    }
}
