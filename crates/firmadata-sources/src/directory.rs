//! Business-directory scrape (gulesider.no).
//!
//! The listing is read from the site's search page markup. The selectors are
//! tied to the current class names; if the site changes them the scrape
//! returns `None` rather than an error.

use std::sync::LazyLock;

use firmadata_core::DirectoryListing;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};

use crate::error::SourceError;
use crate::http::{build_client, normalize_base_url};

static HIT_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.search-hit-content").expect("valid selector"));
static HIT_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("valid selector"));
static HIT_ADDRESS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.address").expect("valid selector"));

pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    /// `user_agent` replaces the default `User-Agent`; the site rejects
    /// requests that do not look like a browser.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`SourceError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Spaces become `+`; everything else is passed through unescaped.
    #[must_use]
    pub fn search_url(&self, company_name: &str) -> String {
        format!("{}/{}", self.base_url, search_term(company_name))
    }

    /// Searches the directory for `company_name` and extracts the first hit.
    ///
    /// Returns `Ok(None)` when the page loads but contains no hit container.
    ///
    /// # Errors
    ///
    /// - [`SourceError::UnexpectedStatus`] for any status other than 200.
    /// - [`SourceError::Http`] on network failure, or if the name produces an
    ///   unusable URL.
    pub async fn search(
        &self,
        company_name: &str,
    ) -> Result<Option<DirectoryListing>, SourceError> {
        let url = self.search_url(company_name);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let listing = extract_listing(&body);
        if listing.is_none() {
            tracing::debug!(url = %url, "directory page has no search hit container");
        }
        Ok(listing)
    }
}

fn search_term(company_name: &str) -> String {
    company_name.replace(' ', "+")
}

/// Extracts name and address from the first `div.search-hit-content`.
///
/// Later containers are ignored. A matched container always yields a
/// listing, with `None` for whichever of `h2` / `span.address` is missing.
#[must_use]
pub fn extract_listing(html: &str) -> Option<DirectoryListing> {
    let document = Html::parse_document(html);
    let hit = document.select(&HIT_CONTAINER).next()?;

    Some(DirectoryListing {
        name: first_text(hit, &HIT_NAME),
        address: first_text(hit, &HIT_ADDRESS),
    })
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
