use serde::{Deserialize, Serialize};

/// Prefix used in every rendered error message.
const PROVIDER: &str = "subdomain-provider";

/// Unified error type for all subdomain provider operations.
///
/// Every variant carries enough context (endpoint, domain, root domain, status
/// code or provider message) for an operator to tell a misconfigured credential
/// from an API mismatch. All variants are serializable for structured error
/// reporting.
///
/// Nothing here is retried: each failure is handed back to the caller, which
/// decides whether it is fatal (presenting a record) or merely worth logging
/// (cleaning one up).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// `GET /manifest` answered with something other than HTTP 200.
    ManifestUnavailable {
        /// Endpoint the manifest was requested from.
        endpoint: String,
        /// HTTP status returned by the endpoint.
        status: u16,
    },

    /// The manifest body could not be decoded or had no usable `root_domain`.
    MalformedManifest {
        /// Endpoint the manifest was requested from.
        endpoint: String,
        /// What was wrong with the body.
        detail: String,
    },

    /// The challenge domain does not live under the provider's root domain.
    ///
    /// Raised before any request is sent.
    IncompatibleDomain {
        /// Domain the challenge was requested for.
        domain: String,
        /// Root domain announced by the provider manifest.
        root_domain: String,
    },

    /// `assign-validation-data` or `clean-validation-data` answered with
    /// something other than HTTP 200.
    RecordRejected {
        /// API operation that was rejected.
        operation: String,
        /// HTTP status returned by the endpoint.
        status: u16,
    },

    /// The API answered HTTP 200 but reported a falsy `success`.
    ApiError {
        /// API operation that failed.
        operation: String,
        /// Message reported by the provider.
        raw_message: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Failed to parse an API response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// Credentials or client settings are missing or invalid.
    Configuration {
        /// Name of the offending setting.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户配置、API 拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::IncompatibleDomain { .. }
                | Self::RecordRejected { .. }
                | Self::ApiError { .. }
                | Self::Configuration { .. }
        )
    }

    pub(crate) fn configuration(param: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Configuration {
            param: param.into(),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ManifestUnavailable { endpoint, status } => {
                write!(
                    f,
                    "[{PROVIDER}] API manifest not available at {endpoint} (HTTP {status})"
                )
            }
            Self::MalformedManifest { endpoint, detail } => {
                write!(f, "[{PROVIDER}] Malformed API manifest at {endpoint}: {detail}")
            }
            Self::IncompatibleDomain {
                domain,
                root_domain,
            } => {
                write!(
                    f,
                    "[{PROVIDER}] Domain '{domain}' is not compatible with root domain '{root_domain}'"
                )
            }
            Self::RecordRejected { operation, status } => {
                write!(
                    f,
                    "[{PROVIDER}] Validation data is not accepted by API ({operation}, HTTP {status})"
                )
            }
            Self::ApiError {
                operation,
                raw_message,
            } => {
                write!(f, "[{PROVIDER}] {operation}: {raw_message}")
            }
            Self::NetworkError { detail } => {
                write!(f, "[{PROVIDER}] Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "[{PROVIDER}] Request timeout: {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "[{PROVIDER}] Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "[{PROVIDER}] Serialization error: {detail}")
            }
            Self::Configuration { param, detail } => {
                write!(f, "[{PROVIDER}] Invalid configuration '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
