//! # dns-subdomain-provider
//!
//! DNS-01 authenticator for ACME clients, backed by the "subdomain provider"
//! REST API.
//!
//! The provider delegates subdomains of a root domain it controls. Its API has
//! three calls:
//!
//! | Call | Method | Path | Auth |
//! |------|--------|------|------|
//! | Manifest | `GET` | `/manifest` | none |
//! | Assign | `POST` | `/assign-validation-data` | Bearer token |
//! | Clean | `DELETE` | `/clean-validation-data` | Bearer token |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_subdomain_provider::{
//!     Manifest, SubdomainProviderClient, SubdomainProviderCredentials, create_http_client,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = SubdomainProviderCredentials::new(
//!         "https://subdomains.example.net/api",
//!         "your-token",
//!     )
//!     .validated()?;
//!
//!     // 1. Learn the root domain (one request, may fail on its own)
//!     let http = create_http_client()?;
//!     let manifest = Manifest::fetch(&http, &credentials.endpoint_url).await?;
//!
//!     // 2. Build the client; no network involved
//!     let client = SubdomainProviderClient::new(http, credentials, manifest);
//!
//!     // 3. Present and clean up the challenge record
//!     let domain = format!("_acme-challenge.foo.{}", client.root_domain());
//!     client.add_txt_record(&domain, &domain, "challenge-token").await?;
//!     client.del_txt_record(&domain, &domain, "challenge-token").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Hosts that only need the plugin lifecycle can use [`create_authenticator`]
//! and the [`Authenticator`] trait instead; credentials can be read with
//! [`CredentialsLoader`].
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::ManifestUnavailable`] — manifest endpoint did not answer HTTP 200
//! - [`ProviderError::MalformedManifest`] — manifest has no usable `root_domain`
//! - [`ProviderError::IncompatibleDomain`] — domain is not under the root domain (no request sent)
//! - [`ProviderError::RecordRejected`] — assign/clean did not answer HTTP 200
//! - [`ProviderError::ApiError`] — assign/clean answered HTTP 200 with a falsy `success`
//!
//! Nothing is retried.

mod authenticator;
mod client;
mod config;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_authenticator, get_all_authenticator_metadata};

pub use traits::Authenticator;

pub use authenticator::SubdomainProviderAuthenticator;
pub use client::SubdomainProviderClient;
pub use config::{CredentialsLoader, ENV_ENDPOINT_URL, ENV_TOKEN};
pub use http_client::create_http_client;

// Re-export types
pub use types::{
    AuthenticatorMetadata, CredentialField, FieldType, Manifest, SubdomainProviderCredentials,
    ValidationRecord, subdomain_of,
};
