use thiserror::Error;

/// Why a single sub-lookup produced no data.
///
/// These never reach the HTTP caller; the aggregator logs them and collapses
/// the field to `null` or `[]`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response shape from {context}")]
    UnexpectedShape { context: String },

    #[error("no access token supplied")]
    MissingToken,

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
