//! Runs every sub-lookup for a company and merges the results.
//!
//! Each source reports a `Result`; failures are logged and collapsed to
//! `null`/`[]` in [`LookupOutcomes::into_profile`], so one broken source never
//! fails the whole lookup.

use std::sync::Arc;

use firmadata_core::{
    AggregateResponse, AppConfig, CompanyProfile, DirectoryListing, LookupRequest, SearchResult,
};
use serde_json::Value;
use tokio::task::JoinError;
use tracing::Instrument;

use crate::ads::AdsClient;
use crate::directory::DirectoryClient;
use crate::error::SourceError;
use crate::registry::RegistryClient;
use crate::search::placeholder_results;

/// Where each source lives and how requests to it are made.
#[derive(Debug, Clone)]
pub struct SourceEndpoints {
    pub registry_base_url: String,
    pub directory_base_url: String,
    pub directory_user_agent: String,
    pub ads_base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl SourceEndpoints {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            registry_base_url: config.registry_base_url.clone(),
            directory_base_url: config.directory_base_url.clone(),
            directory_user_agent: config.directory_user_agent.clone(),
            ads_base_url: config.ads_base_url.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Raw per-source results of one lookup, before failures are collapsed.
#[derive(Debug)]
pub struct LookupOutcomes {
    pub registry: Result<Value, SourceError>,
    pub directory: Result<Option<DirectoryListing>, SourceError>,
    pub ads: Result<Vec<Value>, SourceError>,
    pub search: Vec<SearchResult>,
}

impl LookupOutcomes {
    /// Collapses every failed source to its empty value, logging the cause.
    #[must_use]
    pub fn into_profile(self) -> CompanyProfile {
        CompanyProfile {
            registry: settle("registry", self.registry),
            directory: settle("directory", self.directory).flatten(),
            ads: settle("ads", self.ads).unwrap_or_default(),
            search: self.search,
        }
    }
}

fn settle<T>(source: &'static str, outcome: Result<T, SourceError>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(SourceError::MissingToken) => {
            tracing::debug!(source, "lookup skipped: no access token");
            None
        }
        Err(e) => {
            tracing::warn!(source, error = %e, "lookup failed; returning empty result");
            None
        }
    }
}

/// Holds one client per source. Built once at startup and shared via `Arc`.
pub struct Aggregator {
    registry: RegistryClient,
    directory: DirectoryClient,
    ads: AdsClient,
}

impl Aggregator {
    /// # Errors
    ///
    /// Returns [`SourceError`] if any base URL is invalid or an HTTP client
    /// cannot be built.
    pub fn new(endpoints: &SourceEndpoints) -> Result<Self, SourceError> {
        let timeout = endpoints.request_timeout_secs;
        Ok(Self {
            registry: RegistryClient::new(&endpoints.registry_base_url, timeout)?,
            directory: DirectoryClient::new(
                &endpoints.directory_base_url,
                &endpoints.directory_user_agent,
                timeout,
            )?,
            ads: AdsClient::new(&endpoints.ads_base_url, timeout)?,
        })
    }

    /// Runs the lookups one after another and returns each source's result.
    pub async fn collect(&self, request: &LookupRequest) -> LookupOutcomes {
        let registry = self
            .registry
            .fetch_entity(&request.organization_number)
            .await;
        let directory = self.directory.search(&request.company_name).await;
        let ads = self
            .ads
            .search_ads(&request.company_name, &request.ads_token)
            .await;
        let search = placeholder_results(&request.company_name);

        LookupOutcomes {
            registry,
            directory,
            ads,
            search,
        }
    }

    /// Performs a full lookup and always returns a response body.
    ///
    /// The lookup runs on its own task; if that task panics the caller gets
    /// `{ "error": .. }` instead of a dropped connection.
    pub async fn lookup(self: Arc<Self>, request: LookupRequest) -> AggregateResponse {
        tracing::info!(
            company_name = %request.company_name,
            organization_number = %request.organization_number,
            ads = !request.ads_token.is_empty(),
            "starting company lookup"
        );

        // The spawned task keeps the caller's span so source failures carry its fields.
        let task = tokio::spawn(
            async move { self.collect(&request).await.into_profile() }.in_current_span(),
        );
        response_from_join(task.await)
    }
}

fn response_from_join(joined: Result<CompanyProfile, JoinError>) -> AggregateResponse {
    match joined {
        Ok(profile) => AggregateResponse::Profile(profile),
        Err(e) => {
            tracing::error!(error = %e, "company lookup aborted");
            AggregateResponse::failure(e.to_string())
        }
    }
}
