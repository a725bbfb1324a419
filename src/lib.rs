pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;

pub use browser::{MealBrowser, SelectionCallback};
pub use client::{MealSearchClient, MealSource};
pub use config::SearchConfig;
pub use error::SearchError;
pub use filter::{apply_filters, extract_areas};
pub use model::{Meal, MealResponse};

/// Search TheMealDB for meals matching `keyword` using a default client.
///
/// An absent keyword browses the default result set. Endpoint and timeout
/// come from configuration (config.toml / MEALDB__ environment variables)
/// when present, falling back to the public TheMealDB search endpoint.
pub async fn search_meals(keyword: Option<&str>) -> Result<Vec<Meal>, SearchError> {
    let config = SearchConfig::load()?;
    let client = MealSearchClient::from_config(&config)?;
    client.search(keyword).await
}
