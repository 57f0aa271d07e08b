//! Request and response shapes for a company lookup.
//!
//! The registry record and ad entries are owned by their upstream sources
//! and are carried as opaque [`serde_json::Value`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input to a single company lookup.
///
/// The Norwegian field names used by earlier clients (`firmanavn`, `orgnr`,
/// `meta_token`) are accepted as aliases.
#[derive(Clone, Deserialize)]
pub struct LookupRequest {
    #[serde(alias = "firmanavn")]
    pub company_name: String,
    #[serde(alias = "orgnr")]
    pub organization_number: String,
    #[serde(default, alias = "meta_token")]
    pub ads_token: String,
}

impl LookupRequest {
    #[must_use]
    pub fn new(
        company_name: impl Into<String>,
        organization_number: impl Into<String>,
        ads_token: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            organization_number: organization_number.into(),
            ads_token: ads_token.into(),
        }
    }
}

impl std::fmt::Debug for LookupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupRequest")
            .field("company_name", &self.company_name)
            .field("organization_number", &self.organization_number)
            .field(
                "ads_token",
                &if self.ads_token.is_empty() {
                    ""
                } else {
                    "[redacted]"
                },
            )
            .finish()
    }
}

/// Fields scraped from the first matching directory hit.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DirectoryListing {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Synthetic search hit. Links are derived from the company name and are
/// not guaranteed to resolve.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
}

/// Merged result of all sub-lookups. Failed lookups appear as `null`/`[]`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompanyProfile {
    pub registry: Option<Value>,
    pub directory: Option<DirectoryListing>,
    pub ads: Vec<Value>,
    pub search: Vec<SearchResult>,
}

/// Body returned for every lookup: either the merged profile or `{ "error": .. }`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AggregateResponse {
    Profile(CompanyProfile),
    Failure { error: String },
}

impl AggregateResponse {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            error: message.into(),
        }
    }
}

impl From<CompanyProfile> for AggregateResponse {
    fn from(profile: CompanyProfile) -> Self {
        Self::Profile(profile)
    }
}
