//! TheMealDB fetch client.
//!
//! Two read-only lookups against the public JSON API: the meals in a
//! category (summaries only) and a single meal by id (full record). One
//! attempt per call, no caching.

use crate::config::ApiConfig;
use crate::error::{DecodeError, Error};
use crate::model::{Meal, MealResponse, MealSummary};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Builds endpoint URLs for TheMealDB's two lookups.
#[derive(Debug, Clone)]
pub struct Api {
    base_url: Url,
}

impl Api {
    /// The base URL must end with a trailing slash for joins to resolve
    /// inside the API path.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// `filter.php?c=<category>` - the meals in a category.
    pub fn category_url(&self, category: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join("filter.php")?;
        url.query_pairs_mut().append_pair("c", category);
        Ok(url)
    }

    /// `lookup.php?i=<id>` - the full record for one meal.
    pub fn lookup_url(&self, id: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join("lookup.php")?;
        url.query_pairs_mut().append_pair("i", id);
        Ok(url)
    }
}

/// Unified interface for the two catalog lookups.
///
/// Models take the service as a trait object so tests can substitute
/// canned or failing implementations.
#[async_trait]
pub trait MealDbService: Send + Sync {
    /// Fetch the summaries of every meal in a category.
    async fn meals_in_category(&self, category: &str) -> Result<Vec<MealSummary>, Error>;

    /// Fetch the full record for a single meal, or `None` if the id
    /// matched nothing.
    async fn meal_by_id(&self, id: &str) -> Result<Option<Meal>, Error>;
}

/// HTTP implementation of [`MealDbService`] backed by a shared
/// [`reqwest::Client`].
pub struct MealDbClient {
    client: Client,
    api: Api,
}

impl MealDbClient {
    /// Create a client against the public TheMealDB endpoint with default
    /// settings.
    pub fn new() -> Result<Self, Error> {
        Self::with_config(&ApiConfig::default())
    }

    /// Create a client from configuration (base URL, timeout, user agent).
    pub fn with_config(config: &ApiConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            api: Api::new(Url::parse(&config.base_url)?),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            api: Api::new(base_url),
        }
    }

    /// GET the envelope at `url`. Non-success statuses surface as
    /// transport errors, unparseable bodies as decode errors.
    async fn fetch_envelope<T: DeserializeOwned>(&self, url: Url) -> Result<MealResponse<T>, Error> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let envelope = serde_json::from_slice(&body).map_err(DecodeError::from)?;
        Ok(envelope)
    }
}

#[async_trait]
impl MealDbService for MealDbClient {
    async fn meals_in_category(&self, category: &str) -> Result<Vec<MealSummary>, Error> {
        let url = self.api.category_url(category)?;
        let response: MealResponse<MealSummary> = self.fetch_envelope(url).await?;
        Ok(response.into_meals())
    }

    async fn meal_by_id(&self, id: &str) -> Result<Option<Meal>, Error> {
        let url = self.api.lookup_url(id)?;
        let response: MealResponse<Value> = self.fetch_envelope(url).await?;

        // The API never returns more than one meal for an id lookup, but
        // nothing here depends on that: the first element wins.
        match response.into_meals().into_iter().next() {
            Some(value) => Ok(Some(Meal::try_from(&value)?)),
            None => Ok(None),
        }
    }
}
