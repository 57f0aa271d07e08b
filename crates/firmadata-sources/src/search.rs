//! Placeholder web-search results.
//!
//! No search engine is queried: both entries are built from the company name
//! alone and the links may not exist.

use firmadata_core::SearchResult;

/// Returns the official-site and Facebook placeholders for `company_name`.
#[must_use]
pub fn placeholder_results(company_name: &str) -> Vec<SearchResult> {
    let slug = company_slug(company_name);
    vec![
        SearchResult {
            title: format!("{company_name} - Offisiell nettside"),
            link: format!("https://{slug}.no"),
        },
        SearchResult {
            title: format!("{company_name} på Facebook"),
            link: format!("https://facebook.com/{slug}"),
        },
    ]
}

/// Lowercased with every space removed.
fn company_slug(company_name: &str) -> String {
    company_name.to_lowercase().replace(' ', "")
}
