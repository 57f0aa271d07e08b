//! Client for the company registry (Enhetsregisteret), keyed by organization number.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::SourceError;
use crate::http::{build_client, normalize_base_url};

const USER_AGENT: &str = "firmadata/0.1 (company-lookup)";

pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`SourceError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(timeout_secs, USER_AGENT)?,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// The organization number is appended to the path as-is.
    #[must_use]
    pub fn entity_url(&self, organization_number: &str) -> String {
        format!("{}/{organization_number}", self.base_url)
    }

    /// Fetches the registry entry for `organization_number` and returns the
    /// body verbatim.
    ///
    /// Only HTTP 200 counts as a hit; a 404 for an unknown number is reported
    /// the same way as any other status.
    ///
    /// # Errors
    ///
    /// - [`SourceError::UnexpectedStatus`] for any status other than 200.
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Deserialize`] if the body is not JSON.
    pub async fn fetch_entity(&self, organization_number: &str) -> Result<Value, SourceError> {
        let url = self.entity_url(organization_number);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: format!("registry entity {organization_number}"),
            source: e,
        })
    }
}
