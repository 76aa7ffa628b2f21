// src/catalog/remote.rs
use crate::catalog::seed::parse_listings;
use crate::catalog::{ListingSource, SourceError};
use crate::domain::Listing;
use rand::Rng;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{info, warn};

const USER_AGENT: &str = concat!("helatrade/", env!("CARGO_PKG_VERSION"));

const MAX_ATTEMPTS: u64 = 3;
const MAX_BACKOFF_SECS: u64 = 10;
const JITTER_MAX_MILLIS: u64 = 500;

/// Fetches the listing collection as a JSON array over HTTP.
pub struct RemoteSource {
    client: Client,
    url: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    fn try_fetch(&self) -> Result<String, SourceError> {
        let resp = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Network(format!("HTTP {status}: {text}")));
        }

        Ok(text)
    }
}

impl ListingSource for RemoteSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Vec<Listing>, SourceError> {
        let mut last_err = None;

        for attempt in 1..=MAX_ATTEMPTS {
            let start = std::time::Instant::now();

            match self.try_fetch() {
                Ok(body) => {
                    info!(attempt, elapsed = ?start.elapsed(), url = %self.url, "fetched listings");
                    // A body that doesn't parse won't parse on retry either.
                    return parse_listings(&body);
                }
                Err(e) => {
                    warn!(attempt, elapsed = ?start.elapsed(), error = %e, "listing fetch failed");
                    last_err = Some(e);

                    if attempt < MAX_ATTEMPTS {
                        let base = std::cmp::min(2 * attempt, MAX_BACKOFF_SECS);
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
                        std::thread::sleep(
                            Duration::from_secs(base) + Duration::from_millis(jitter),
                        );
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| SourceError::Network("listing fetch retry loop failed".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_host_is_a_network_error() {
        // Port 9 on loopback refuses connections immediately.
        let source = RemoteSource::new("http://127.0.0.1:9/listings.json").unwrap();

        assert!(matches!(source.try_fetch(), Err(SourceError::Network(_))));
    }

    #[test]
    fn name_is_the_url() {
        let source = RemoteSource::new("https://example.lk/listings.json").unwrap();

        assert_eq!(source.name(), "https://example.lk/listings.json");
    }
}
