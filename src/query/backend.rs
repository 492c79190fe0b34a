use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::conf::ClientConfig;
use crate::core::InsightError;

use super::QueryResult;

/// Something that can answer a natural-language query.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn fetch(&self, text: &str) -> Result<QueryResult, InsightError>;
}

/// Query service reached over HTTP: `GET <endpoint>/query?text=...`.
pub struct HttpBackend {
    client: Client,
    url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InsightError::NetworkError(format!("building HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: config.query_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QueryBackend for HttpBackend {
    async fn fetch(&self, text: &str) -> Result<QueryResult, InsightError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("text", text)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| InsightError::NetworkError(e.to_string()))?;

        let status = response.status();
        debug!("query service answered {status}");
        if !status.is_success() {
            return Err(InsightError::HttpStatusError(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<QueryResult>(&body)
            .map_err(|e| InsightError::DecodeError(e.to_string()))
    }
}
