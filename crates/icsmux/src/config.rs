use std::{env, time::Duration};

use anyhow::{Context, Result};
use url::Url;

/// Default sources: the two officeholidays country feeds the service was
/// built around. Overridable with `FEED_URLS`.
const DEFAULT_FEED_URLS: &str = "https://www.officeholidays.com/ics/ics_country.php?tbl_country=Colombia,https://www.officeholidays.com/ics/ics_country.php?tbl_country=Canada";

/// Static calendar wrapper emitted around the streamed event units.
const DEFAULT_STREAM_HEADER: &str = concat!(
    "BEGIN:VCALENDAR\r\n",
    "VERSION:2.0\r\n",
    "PRODID:-//icsmux//Combined Holidays//EN\r\n",
    "CALSCALE:GREGORIAN\r\n",
);
const DEFAULT_STREAM_FOOTER: &str = "END:VCALENDAR\r\n";

/// Application configuration loaded from environment variables.
///
/// Replaces compiled-in URL constants and global wrapper text: everything a
/// handler needs travels through this struct, injected via [`crate::state::AppState`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Feed URLs to aggregate, in configuration order.
    pub sources: Vec<Url>,
    /// Per-request timeout for source fetches, in seconds (default: 30).
    pub fetch_timeout_seconds: u64,
    /// Capacity of the fan-in channel between fetchers and the response
    /// stream (default: 1). Producers stall once it is full, which is the
    /// intended backpressure for a live stream.
    pub channel_capacity: usize,
    /// Static text emitted before the first event unit.
    pub stream_header: String,
    /// Static text emitted after the merged stream closes.
    pub stream_footer: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FEED_URLS` - comma-separated source URLs (default: the two
    ///   officeholidays country feeds)
    /// - `FETCH_TIMEOUT_SECONDS` - per-fetch timeout (default: 30)
    /// - `CHANNEL_CAPACITY` - fan-in channel capacity (default: 1)
    /// - `STREAM_HEADER` / `STREAM_FOOTER` - calendar wrapper text
    ///
    /// Fails when any configured URL does not parse.
    pub fn from_env() -> Result<Self> {
        let raw_urls = env::var("FEED_URLS").unwrap_or_else(|_| DEFAULT_FEED_URLS.to_string());

        Ok(Self {
            sources: parse_sources(&raw_urls)?,
            fetch_timeout_seconds: env::var("FETCH_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            channel_capacity: env::var("CHANNEL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&capacity| capacity > 0)
                .unwrap_or(1),
            stream_header: env::var("STREAM_HEADER")
                .unwrap_or_else(|_| DEFAULT_STREAM_HEADER.to_string()),
            stream_footer: env::var("STREAM_FOOTER")
                .unwrap_or_else(|_| DEFAULT_STREAM_FOOTER.to_string()),
        })
    }

    /// Get the per-fetch timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

/// Parse a comma-separated URL list, rejecting anything that is not a URL.
fn parse_sources(raw: &str) -> Result<Vec<Url>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| Url::parse(part).with_context(|| format!("invalid feed URL: {part}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sources_splits_and_trims() {
        let sources =
            parse_sources("https://a.example/one.ics, https://b.example/two.ics ,").unwrap();

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].as_str(), "https://a.example/one.ics");
        assert_eq!(sources[1].as_str(), "https://b.example/two.ics");
    }

    #[test]
    fn test_parse_sources_rejects_invalid_url() {
        let result = parse_sources("https://a.example/one.ics,not a url");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a url"));
    }

    #[test]
    fn test_fetch_timeout_conversion() {
        let config = Config {
            sources: Vec::new(),
            fetch_timeout_seconds: 600,
            channel_capacity: 1,
            stream_header: DEFAULT_STREAM_HEADER.to_string(),
            stream_footer: DEFAULT_STREAM_FOOTER.to_string(),
        };

        assert_eq!(config.fetch_timeout(), Duration::from_secs(600));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("FEED_URLS");
        env::remove_var("FETCH_TIMEOUT_SECONDS");
        env::remove_var("CHANNEL_CAPACITY");
        env::remove_var("STREAM_HEADER");
        env::remove_var("STREAM_FOOTER");

        let config = Config::from_env().unwrap();

        assert_eq!(config.sources.len(), 2);
        assert!(config.sources[0].as_str().contains("Colombia"));
        assert!(config.sources[1].as_str().contains("Canada"));
        assert_eq!(config.fetch_timeout_seconds, 30);
        assert_eq!(config.channel_capacity, 1);
        assert!(config.stream_header.starts_with("BEGIN:VCALENDAR\r\n"));
        assert_eq!(config.stream_footer, "END:VCALENDAR\r\n");
    }
}
