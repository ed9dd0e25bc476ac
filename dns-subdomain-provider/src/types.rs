use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_secret;

// ============ Credentials ============

/// Credentials for the subdomain provider API.
///
/// Supplied once and immutable for the lifetime of a client. The token is
/// opaque and is only ever sent as a bearer token.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubdomainProviderCredentials {
    /// Base URL of the provider API, without a trailing slash.
    pub endpoint_url: String,
    /// API token for the provider account.
    pub token: String,
}

impl SubdomainProviderCredentials {
    pub fn new(endpoint_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            token: token.into(),
        }
    }

    /// Check both fields and normalize the endpoint.
    ///
    /// - `endpoint_url` must be non-empty and use `http://` or `https://`;
    ///   trailing slashes are removed so paths can be appended directly.
    /// - `token` must be non-empty. Its content is not inspected.
    pub fn validated(self) -> Result<Self> {
        let endpoint_url = self.endpoint_url.trim();
        if endpoint_url.is_empty() {
            return Err(ProviderError::configuration(
                "endpoint_url",
                "must not be empty",
            ));
        }
        if !(endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://")) {
            return Err(ProviderError::configuration(
                "endpoint_url",
                format!("'{endpoint_url}' must start with http:// or https://"),
            ));
        }
        if self.token.trim().is_empty() {
            return Err(ProviderError::configuration("token", "must not be empty"));
        }

        Ok(Self {
            endpoint_url: endpoint_url.trim_end_matches('/').to_string(),
            token: self.token.trim().to_string(),
        })
    }
}

impl std::fmt::Debug for SubdomainProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubdomainProviderCredentials")
            .field("endpoint_url", &self.endpoint_url)
            .field("token", &mask_secret(&self.token))
            .finish()
    }
}

// ============ Manifest ============

/// Provider metadata served by `GET /manifest`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Provider-controlled parent domain under which validation subdomains live.
    pub root_domain: String,
}

// ============ Validation Records ============

/// Body of `assign-validation-data` and `clean-validation-data` requests.
///
/// Both the record name and its content are sent, so cleaning up only removes
/// the exact record that was assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationRecord {
    /// Part of the challenge domain in front of the root domain.
    pub subdomain: String,
    /// TXT record content (the challenge validation).
    pub data: String,
    /// TXT record name (typically beginning with `_acme-challenge.`).
    pub record_name: String,
}

impl ValidationRecord {
    /// Build the request body for `domain_name` under `root_domain`.
    ///
    /// Fails with [`ProviderError::IncompatibleDomain`] when `root_domain` does
    /// not occur in `domain_name`.
    pub fn for_domain(
        domain_name: &str,
        root_domain: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<Self> {
        let subdomain = subdomain_of(domain_name, root_domain).ok_or_else(|| {
            ProviderError::IncompatibleDomain {
                domain: domain_name.to_string(),
                root_domain: root_domain.to_string(),
            }
        })?;

        Ok(Self {
            subdomain: subdomain.to_string(),
            data: record_content.to_string(),
            record_name: record_name.to_string(),
        })
    }
}

/// Part of `domain_name` in front of the first occurrence of `root_domain`,
/// without the separator directly before it.
///
/// - `"_acme-challenge.foo.example.com"` under `"example.com"` -> `"_acme-challenge.foo"`
/// - `"example.com"` under `"example.com"` -> `""`
/// - `"foo.example.org"` under `"example.com"` -> `None`
pub fn subdomain_of<'a>(domain_name: &'a str, root_domain: &str) -> Option<&'a str> {
    if root_domain.is_empty() {
        return None;
    }
    let position = domain_name.find(root_domain)?;
    let mut prefix = domain_name[..position].chars();
    prefix.next_back();
    Some(prefix.as_str())
}

/// Generic `{success, message}` acknowledgement returned by the record endpoints.
///
/// `success` is required but not necessarily a boolean; see [`ApiAck::is_success`].
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiAck {
    pub success: serde_json::Value,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiAck {
    /// Truthiness of `success`: `false`, `null`, zero, and empty strings,
    /// arrays or objects all count as failure.
    pub fn is_success(&self) -> bool {
        match &self.success {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v.abs() > 0.0),
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(a) => !a.is_empty(),
            serde_json::Value::Object(o) => !o.is_empty(),
        }
    }
}

// ============ Metadata ============

/// The input type of a credential field (affects UI rendering).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Plain text input.
    Text,
    /// Masked/password input.
    Password,
}

/// Definition of a single credential field required by the authenticator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialField {
    /// Key used in credential files (e.g., `"endpoint_url"`).
    pub key: String,
    /// Human-readable label.
    pub label: String,
    /// Input type for UI rendering.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Help/description text.
    pub help_text: String,
}

/// Static description of an authenticator, shown by the host when listing plugins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorMetadata {
    /// Plugin identifier used to select the authenticator.
    pub id: String,
    /// One-line description.
    pub description: String,
    /// Longer explanation of what the authenticator does.
    pub more_info: String,
    /// Credential fields the host has to resolve before calling the authenticator.
    pub credential_fields: Vec<CredentialField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subdomain_strips_root_and_separator() {
        assert_eq!(
            subdomain_of("_acme-challenge.foo.example.com", "example.com"),
            Some("_acme-challenge.foo")
        );
    }

    #[test]
    fn subdomain_single_label() {
        assert_eq!(subdomain_of("foo.example.com", "example.com"), Some("foo"));
    }

    #[test]
    fn subdomain_of_root_itself_is_empty() {
        assert_eq!(subdomain_of("example.com", "example.com"), Some(""));
    }

    #[test]
    fn subdomain_uses_first_occurrence() {
        assert_eq!(
            subdomain_of("a.example.com.example.com", "example.com"),
            Some("a")
        );
    }

    #[test]
    fn subdomain_missing_root() {
        assert_eq!(subdomain_of("foo.example.org", "example.com"), None);
    }

    #[test]
    fn subdomain_empty_root_never_matches() {
        assert_eq!(subdomain_of("foo.example.com", ""), None);
    }

    #[test]
    fn validation_record_incompatible_domain() {
        let result = ValidationRecord::for_domain("foo.example.org", "example.com", "n", "v");
        assert!(
            matches!(
                &result,
                Err(ProviderError::IncompatibleDomain { domain, root_domain })
                    if domain == "foo.example.org" && root_domain == "example.com"
            ),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn validation_record_body_shape() {
        let record = ValidationRecord::for_domain(
            "_acme-challenge.foo.example.com",
            "example.com",
            "_acme-challenge.foo.example.com",
            "token-value",
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "subdomain": "_acme-challenge.foo",
                "data": "token-value",
                "record_name": "_acme-challenge.foo.example.com",
            })
        );
    }

    #[test]
    fn credentials_validated_trims_trailing_slash() {
        let creds = SubdomainProviderCredentials::new("https://api.example.net/", " secret ")
            .validated()
            .unwrap();
        assert_eq!(creds.endpoint_url, "https://api.example.net");
        assert_eq!(creds.token, "secret");
    }

    #[test]
    fn credentials_reject_empty_token() {
        let result = SubdomainProviderCredentials::new("https://api.example.net", "  ").validated();
        assert!(matches!(
            result,
            Err(ProviderError::Configuration { ref param, .. }) if param == "token"
        ));
    }

    #[test]
    fn credentials_reject_missing_scheme() {
        let result = SubdomainProviderCredentials::new("api.example.net", "t").validated();
        assert!(matches!(
            result,
            Err(ProviderError::Configuration { ref param, .. }) if param == "endpoint_url"
        ));
    }

    #[test]
    fn credentials_debug_masks_token() {
        let creds = SubdomainProviderCredentials::new("https://api.example.net", "supersecret");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("supe****"));
    }

    #[test]
    fn ack_without_message() {
        let ack: ApiAck = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ack.is_success());
        assert!(ack.message.is_none());
    }

    #[test]
    fn ack_success_follows_json_truthiness() {
        for falsy in ["false", "null", "0", "0.0", "\"\"", "[]", "{}"] {
            let body = format!(r#"{{"success":{falsy},"message":"m"}}"#);
            let ack: ApiAck = serde_json::from_str(&body).unwrap();
            assert!(!ack.is_success(), "{falsy} should count as failure");
        }
        for truthy in ["true", "1", "-2", "\"yes\"", "[0]", r#"{"a":1}"#] {
            let body = format!(r#"{{"success":{truthy}}}"#);
            let ack: ApiAck = serde_json::from_str(&body).unwrap();
            assert!(ack.is_success(), "{truthy} should count as success");
        }
    }

    #[test]
    fn ack_requires_success_field() {
        assert!(serde_json::from_str::<ApiAck>(r#"{"message":"m"}"#).is_err());
    }
}
