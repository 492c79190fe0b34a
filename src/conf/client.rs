use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default = "ClientConfig::default_endpoint")]
    pub endpoint: String,
    #[serde(with = "humantime_serde", default = "ClientConfig::default_timeout")]
    pub timeout: Duration,
}

impl ClientConfig {
    fn default_endpoint() -> String {
        String::from("https://insightgenei-ai.onrender.com")
    }

    // The hosted service cold-starts, so the first query can take a while.
    fn default_timeout() -> Duration {
        Duration::from_secs(60)
    }

    /// Full URL of the query route.
    pub fn query_url(&self) -> String {
        format!("{}/query", self.endpoint.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Self::default_timeout(),
        }
    }
}
