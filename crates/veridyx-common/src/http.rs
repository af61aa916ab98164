use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::VeridyxError;

/// HTTP client wrapper that enforces the etiquette every outbound request
/// must carry: a descriptive User-Agent identifying the platform and a hard
/// request timeout. Open-access PDF hosts are arbitrary, so unlike a domain
/// allowlist the capability being capped here is time and identification.
#[derive(Debug, Clone)]
pub struct PoliteClient {
    client: Client,
    user_agent: String,
}

impl PoliteClient {
    /// Creates a client with the given identifier string and timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, VeridyxError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| VeridyxError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// GET request builder. Redirects are followed by default.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url)
    }

    /// The identifier string sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_carries_identifier() {
        let c = PoliteClient::new("Veridyx/0.1 (mailto:veridyx@example.com)", Duration::from_secs(30))
            .unwrap();
        assert!(c.user_agent().starts_with("Veridyx/"));
    }
}
