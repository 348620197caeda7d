use thiserror::Error;
use url::Url;

/// Per-source fetch failures.
///
/// The `Display` text of each variant is exactly the sentinel phrase
/// substituted into the output stream in place of the failed source's
/// events, so the wire format and the error taxonomy cannot drift apart.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request failed before any of the body was read, including
    /// non-success HTTP status codes.
    #[error("Error fetching URL: {url}")]
    Connect {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    /// The body stream failed after the response headers arrived.
    #[error("Error reading response body: {url}")]
    Read {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The text unit carried on the merged stream for this failure,
    /// terminated like any other line.
    pub fn sentinel(&self) -> String {
        format!("{self}\r\n")
    }
}
