use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::SourceError;

/// Builds a `reqwest::Client` for one source.
///
/// With `timeout_secs == None` no request timeout is set and the transport
/// defaults apply.
pub(crate) fn build_client(
    timeout_secs: Option<u64>,
    user_agent: &str,
) -> Result<Client, SourceError> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Validates a configured base URL and returns it without a trailing slash.
pub(crate) fn normalize_base_url(base_url: &str) -> Result<String, SourceError> {
    let trimmed = base_url.trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| SourceError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    Ok(trimmed.to_owned())
}
