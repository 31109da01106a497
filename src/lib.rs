//! Client library for browsing TheMealDB recipe catalog.
//!
//! The interesting part lives in [`decode`]: TheMealDB's lookup payloads
//! spread a meal's ingredients over 20 numbered string fields, which the
//! decoder normalizes into an ordered list of ingredient records. On top
//! of that sit a thin fetch client ([`api`]) and the state models backing
//! a category listing and a meal detail screen ([`state`]).

pub mod api;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod state;

pub use api::{Api, MealDbClient, MealDbService};
pub use config::ApiConfig;
pub use error::{DecodeError, Error};
pub use model::{Ingredient, Meal, MealResponse, MealSummary};
pub use state::{CategoryModel, DetailModel, FetchState};

/// Fetch the summaries of every meal in a category using a default client.
pub async fn meals_in_category(category: &str) -> Result<Vec<MealSummary>, Error> {
    MealDbClient::new()?.meals_in_category(category).await
}

/// Fetch a single meal by id using a default client. Returns `None` if the
/// id matched nothing.
pub async fn meal_by_id(id: &str) -> Result<Option<Meal>, Error> {
    MealDbClient::new()?.meal_by_id(id).await
}
