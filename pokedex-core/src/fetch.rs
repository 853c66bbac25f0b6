use std::sync::OnceLock;

use reqwest::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Only a plain 200 carries a usable image.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Performs the single GET issued per remote image.
///
/// `Err` carries a transport error message (DNS, TLS, connection reset...).
/// Any response that arrives, whatever its status, is `Ok`.
pub trait Fetcher: Send + Sync {
    fn get(&self, url: &Url) -> Result<FetchResponse, String>;
}

/// Blocking reqwest client with default settings: no custom headers, no
/// auth, reqwest's default timeout.
///
/// The client is built on first use so a TLS backend problem surfaces as a
/// per-image diagnostic instead of aborting startup.
#[derive(Default)]
pub struct HttpFetcher {
    client: OnceLock<Result<reqwest::blocking::Client, String>>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn client(&self) -> Result<&reqwest::blocking::Client, String> {
        self.client
            .get_or_init(|| {
                reqwest::blocking::Client::builder()
                    .build()
                    .map_err(|e| format!("HTTP client unavailable: {e}"))
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &Url) -> Result<FetchResponse, String> {
        let client = self.client()?;
        let response = client
            .get(url.clone())
            .send()
            .map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| e.to_string())?;
        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("initialized", &self.client.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_is_success() {
        let ok = |status| FetchResponse {
            status,
            body: Vec::new(),
        };
        assert!(ok(200).is_success());
        assert!(!ok(204).is_success());
        assert!(!ok(206).is_success());
        assert!(!ok(301).is_success());
        assert!(!ok(404).is_success());
        assert!(!ok(500).is_success());
    }
}
