//! Subdomain provider REST client

mod http;
mod manifest;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;
use crate::types::{Manifest, SubdomainProviderCredentials, ValidationRecord};

pub(crate) const MANIFEST_OPERATION: &str = "manifest";
pub(crate) const ASSIGN_OPERATION: &str = "assign-validation-data";
pub(crate) const CLEAN_OPERATION: &str = "clean-validation-data";

/// Client for the subdomain provider API.
///
/// Holds the credentials and the root domain learned from the provider
/// manifest. It has no other state, so a fresh instance can be created for
/// every authentication attempt.
///
/// Construction is split in two: [`Manifest::fetch`] talks to the network,
/// [`SubdomainProviderClient::new`] does not. [`SubdomainProviderClient::connect`]
/// runs both.
#[derive(Debug)]
pub struct SubdomainProviderClient {
    pub(crate) client: Client,
    pub(crate) credentials: SubdomainProviderCredentials,
    pub(crate) root_domain: String,
}

impl SubdomainProviderClient {
    /// Build a client from a fetched manifest. A trailing `/` on the endpoint is dropped.
    pub fn new(
        client: Client,
        mut credentials: SubdomainProviderCredentials,
        manifest: Manifest,
    ) -> Self {
        let trimmed_len = credentials.endpoint_url.trim_end_matches('/').len();
        credentials.endpoint_url.truncate(trimmed_len);
        Self {
            client,
            credentials,
            root_domain: manifest.root_domain,
        }
    }

    /// Validate `credentials`, fetch the manifest once, and build a client.
    pub async fn connect(credentials: SubdomainProviderCredentials) -> Result<Self> {
        let credentials = credentials.validated()?;
        let client = create_http_client()?;
        let manifest = Manifest::fetch(&client, &credentials.endpoint_url).await?;
        Ok(Self::new(client, credentials, manifest))
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    pub fn endpoint_url(&self) -> &str {
        &self.credentials.endpoint_url
    }

    /// Add a TXT record using the supplied information.
    ///
    /// * `domain_name` - the domain the record is associated with; must contain the root domain
    /// * `record_name` - the record name (typically beginning with `_acme-challenge.`)
    /// * `record_content` - the record content (typically the challenge validation)
    pub async fn add_txt_record(
        &self,
        domain_name: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<()> {
        let record =
            ValidationRecord::for_domain(domain_name, &self.root_domain, record_name, record_content)?;

        self.send_validation_record(reqwest::Method::POST, ASSIGN_OPERATION, &record)
            .await?;

        log::info!(
            "Assigned validation data for '{}' (subdomain '{}')",
            record.record_name,
            record.subdomain
        );
        Ok(())
    }

    /// Delete a TXT record using the supplied information.
    ///
    /// Both the record's name and content are sent so that a record created by
    /// a concurrent validation of the same name is left alone.
    ///
    /// Errors are returned, not swallowed; whether a failed cleanup matters is
    /// up to the caller.
    pub async fn del_txt_record(
        &self,
        domain_name: &str,
        record_name: &str,
        record_content: &str,
    ) -> Result<()> {
        let record =
            ValidationRecord::for_domain(domain_name, &self.root_domain, record_name, record_content)?;

        self.send_validation_record(reqwest::Method::DELETE, CLEAN_OPERATION, &record)
            .await?;

        log::info!(
            "Cleaned validation data for '{}' (subdomain '{}')",
            record.record_name,
            record.subdomain
        );
        Ok(())
    }
}
