//! Provider manifest retrieval

use reqwest::Client;
use serde::Deserialize;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::Manifest;
use crate::utils::log_sanitizer::truncate_for_log;

use super::MANIFEST_OPERATION;

/// Manifest as sent on the wire; every field is optional until checked.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    root_domain: Option<String>,
}

impl Manifest {
    /// Fetch the manifest with `GET {endpoint_url}/manifest`.
    ///
    /// Sent once, without authentication and without retries. A trailing `/`
    /// on `endpoint_url` is ignored.
    ///
    /// # Errors
    /// * [`ProviderError::ManifestUnavailable`] - the endpoint did not answer HTTP 200
    /// * [`ProviderError::MalformedManifest`] - the body is not JSON or has no usable `root_domain`
    /// * [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] - transport failure
    pub async fn fetch(client: &Client, endpoint_url: &str) -> Result<Self> {
        let endpoint_url = endpoint_url.trim_end_matches('/');
        let url = format!("{endpoint_url}/{MANIFEST_OPERATION}");
        let (status, body) = HttpUtils::execute_request(client.get(&url), "GET", &url).await?;

        if status != 200 {
            log::error!("API manifest not available at {endpoint_url} (HTTP {status})");
            return Err(ProviderError::ManifestUnavailable {
                endpoint: endpoint_url.to_string(),
                status,
            });
        }

        Self::from_body(endpoint_url, &body)
    }

    fn from_body(endpoint_url: &str, body: &str) -> Result<Self> {
        let malformed = |detail: String| ProviderError::MalformedManifest {
            endpoint: endpoint_url.to_string(),
            detail,
        };

        let raw: RawManifest = serde_json::from_str(body).map_err(|e| {
            log::error!("Manifest is not valid JSON: {}", truncate_for_log(body));
            malformed(format!("invalid JSON: {e}"))
        })?;

        match raw.root_domain {
            Some(root_domain) if !root_domain.trim().is_empty() => {
                log::debug!("Manifest root domain: {root_domain}");
                Ok(Self {
                    root_domain: root_domain.trim().to_string(),
                })
            }
            Some(_) => Err(malformed("root_domain is empty".to_string())),
            None => Err(malformed("root_domain is missing".to_string())),
        }
    }
}
