//! Validation record requests

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::{ApiAck, ValidationRecord};
use crate::utils::log_sanitizer::mask_secret;

use super::SubdomainProviderClient;

impl SubdomainProviderClient {
    /// Send `record` to `{endpoint_url}/{operation}` and check the acknowledgement.
    ///
    /// Only an exact HTTP 200 counts as accepted; any other status is
    /// [`ProviderError::RecordRejected`] regardless of the body. A 200 whose
    /// `success` is falsy becomes [`ProviderError::ApiError`].
    pub(crate) async fn send_validation_record(
        &self,
        method: Method,
        operation: &str,
        record: &ValidationRecord,
    ) -> Result<()> {
        let url = format!("{}/{operation}", self.credentials.endpoint_url);
        let body_json = serde_json::to_string(record).map_err(|e| {
            ProviderError::SerializationError {
                detail: e.to_string(),
            }
        })?;
        log::debug!("Request Body: {body_json}");
        log::debug!(
            "Authorization: Bearer {}",
            mask_secret(&self.credentials.token)
        );

        let request = self
            .client
            .request(method.clone(), &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.credentials.token))
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);

        let (status, body) = HttpUtils::execute_request(request, method.as_str(), &url).await?;

        if status != 200 {
            log::warn!("{operation} rejected with HTTP {status}");
            return Err(ProviderError::RecordRejected {
                operation: operation.to_string(),
                status,
            });
        }

        let ack: ApiAck = HttpUtils::parse_json(&body)?;
        if !ack.is_success() {
            let message = ack.message.unwrap_or_else(|| "Unknown error".to_string());
            log::warn!("{operation} failed: {message}");
            return Err(ProviderError::ApiError {
                operation: operation.to_string(),
                raw_message: message,
            });
        }

        Ok(())
    }
}
