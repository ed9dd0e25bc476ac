//! Subdomain provider authenticator

use async_trait::async_trait;

use crate::client::SubdomainProviderClient;
use crate::error::{ProviderError, Result};
use crate::traits::Authenticator;
use crate::types::{AuthenticatorMetadata, CredentialField, FieldType, SubdomainProviderCredentials};

pub(crate) const AUTHENTICATOR_ID: &str = "dns-subdomain-provider";

/// [`Authenticator`] backed by the subdomain provider API.
///
/// A new [`SubdomainProviderClient`] (and with it a fresh manifest fetch) is
/// created for every lifecycle call.
#[derive(Debug, Clone)]
pub struct SubdomainProviderAuthenticator {
    credentials: SubdomainProviderCredentials,
}

impl SubdomainProviderAuthenticator {
    pub fn new(credentials: SubdomainProviderCredentials) -> Result<Self> {
        Ok(Self {
            credentials: credentials.validated()?,
        })
    }

    pub fn credentials(&self) -> &SubdomainProviderCredentials {
        &self.credentials
    }

    async fn client(&self) -> Result<SubdomainProviderClient> {
        SubdomainProviderClient::connect(self.credentials.clone()).await
    }
}

fn log_failure(stage: &str, domain: &str, e: &ProviderError) {
    if e.is_expected() {
        log::warn!("{stage} for '{domain}' failed: {e}");
    } else {
        log::error!("{stage} for '{domain}' failed: {e}");
    }
}

#[async_trait]
impl Authenticator for SubdomainProviderAuthenticator {
    fn id(&self) -> &'static str {
        AUTHENTICATOR_ID
    }

    fn metadata() -> AuthenticatorMetadata {
        AuthenticatorMetadata {
            id: AUTHENTICATOR_ID.to_string(),
            description: "Obtain certificates using a DNS TXT record (if you are using \
                          subdomain provider for DNS)."
                .to_string(),
            more_info: "This plugin configures a DNS TXT record to respond to a dns-01 \
                        challenge using the subdomain provider API."
                .to_string(),
            credential_fields: vec![
                CredentialField {
                    key: "endpoint_url".to_string(),
                    label: "Endpoint URL".to_string(),
                    field_type: FieldType::Text,
                    help_text: "API endpoint url for subdomain provider".to_string(),
                },
                CredentialField {
                    key: "token".to_string(),
                    label: "API Token".to_string(),
                    field_type: FieldType::Password,
                    help_text: "API token for subdomain provider account".to_string(),
                },
            ],
        }
    }

    async fn perform(&self, domain: &str, validation_name: &str, validation: &str) -> Result<()> {
        log::debug!("Presenting challenge record '{validation_name}' for '{domain}'");
        let result = async {
            self.client()
                .await?
                .add_txt_record(domain, validation_name, validation)
                .await
        }
        .await;

        if let Err(e) = &result {
            log_failure("Challenge setup", domain, e);
        }
        result
    }

    async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str) -> Result<()> {
        log::debug!("Removing challenge record '{validation_name}' for '{domain}'");
        let result = async {
            self.client()
                .await?
                .del_txt_record(domain, validation_name, validation)
                .await
        }
        .await;

        if let Err(e) = &result {
            log_failure("Challenge cleanup", domain, e);
        }
        result
    }
}
