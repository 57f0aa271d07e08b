//! Ads-transparency lookup against the Meta Ad Library `ads_archive` endpoint.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::SourceError;
use crate::http::{build_client, normalize_base_url};

const USER_AGENT: &str = "firmadata/0.1 (company-lookup)";

/// Field projection requested for every ad.
pub const AD_FIELDS: &str = "ad_creative_body,ad_delivery_start_time,ad_snapshot_url,page_name";

pub struct AdsClient {
    client: Client,
    base_url: String,
}

impl AdsClient {
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

    /// Searches archived ads of every type matching `company_name`.
    ///
    /// An empty `access_token` short-circuits before any request is made.
    ///
    /// # Errors
    ///
    /// - [`SourceError::MissingToken`] if `access_token` is empty.
    /// - [`SourceError::UnexpectedStatus`] for any status other than 200.
    ///   Auth failures and rate limiting are not told apart.
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::Deserialize`] / [`SourceError::UnexpectedShape`] if the
    ///   body is not a JSON object with an array (or absent) `data` field.
    pub async fn search_ads(
        &self,
        company_name: &str,
        access_token: &str,
    ) -> Result<Vec<Value>, SourceError> {
        if access_token.is_empty() {
            return Err(SourceError::MissingToken);
        }

        // The request URL carries the token; keep it out of error messages.
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("search_terms", company_name),
                ("ad_type", "ALL"),
                ("fields", AD_FIELDS),
                ("access_token", access_token),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Http(e.without_url()))?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.base_url.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.without_url()))?;
        let payload: Value = serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: format!("ads search for {company_name}"),
            source: e,
        })?;

        extract_ad_entries(payload)
    }
}

/// Pulls the `data` array out of an `ads_archive` response body.
///
/// A missing or `null` `data` field means no ads.
fn extract_ad_entries(payload: Value) -> Result<Vec<Value>, SourceError> {
    let Value::Object(mut body) = payload else {
        return Err(SourceError::UnexpectedShape {
            context: "ads response body".to_string(),
        });
    };

    match body.remove("data") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(SourceError::UnexpectedShape {
            context: "ads response `data` field".to_string(),
        }),
    }
}
