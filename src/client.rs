use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{Meal, MealResponse};

/// Anything that can resolve a keyword into a list of meals.
///
/// `MealSearchClient` is the production implementation; tests substitute
/// an in-memory source so the coordinator can be exercised without a server.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn search(&self, keyword: Option<&str>) -> Result<Vec<Meal>, SearchError>;
}

/// HTTP client for TheMealDB search endpoint.
pub struct MealSearchClient {
    client: Client,
    endpoint: String,
}

impl MealSearchClient {
    /// Create a client with the default endpoint and timeout.
    pub fn new() -> Result<Self, SearchError> {
        Self::from_config(&SearchConfig::default())
    }

    /// Create a client from configuration
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, SearchError> {
        let config = SearchConfig {
            endpoint: endpoint.into(),
            ..Default::default()
        };
        Self::from_config(&config)
    }

    /// Search the endpoint for meals matching `keyword`.
    ///
    /// An absent or empty keyword is a valid request meaning "browse all".
    /// A `{"meals": null}` response is a normal zero-result outcome. Decode
    /// failures are reported as [`SearchError::Decode`], never swallowed.
    pub async fn search(&self, keyword: Option<&str>) -> Result<Vec<Meal>, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("s", keyword.unwrap_or(""))])
            .send()
            .await?
            .error_for_status()?;

        // Decode from text rather than response.json() so a malformed body
        // surfaces as a Decode error, distinct from transport failures.
        let body = response.text().await?;
        debug!("search response body: {}", body);

        let envelope: MealResponse = serde_json::from_str(&body)?;
        Ok(envelope.into_meals())
    }
}

#[async_trait]
impl MealSource for MealSearchClient {
    async fn search(&self, keyword: Option<&str>) -> Result<Vec<Meal>, SearchError> {
        MealSearchClient::search(self, keyword).await
    }
}
