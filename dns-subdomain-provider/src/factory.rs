//! Authenticator factory functions and metadata.

use std::sync::Arc;

use crate::authenticator::SubdomainProviderAuthenticator;
use crate::error::Result;
use crate::traits::Authenticator;
use crate::types::{AuthenticatorMetadata, SubdomainProviderCredentials};

/// Creates an [`Authenticator`] from the resolved credentials.
///
/// The returned authenticator is wrapped in `Arc<dyn Authenticator>` so a host
/// can hand it to whichever task drives the ACME order.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_subdomain_provider::{create_authenticator, SubdomainProviderCredentials};
///
/// let authenticator = create_authenticator(SubdomainProviderCredentials::new(
///     "https://subdomains.example.net/api",
///     "your-token",
/// ))
/// .unwrap();
/// ```
pub fn create_authenticator(
    credentials: SubdomainProviderCredentials,
) -> Result<Arc<dyn Authenticator>> {
    Ok(Arc::new(SubdomainProviderAuthenticator::new(credentials)?))
}

/// Returns metadata for every authenticator this crate provides.
pub fn get_all_authenticator_metadata() -> Vec<AuthenticatorMetadata> {
    vec![SubdomainProviderAuthenticator::metadata()]
}
