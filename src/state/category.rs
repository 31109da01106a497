use crate::api::MealDbService;
use crate::model::MealSummary;
use crate::state::FetchState;
use std::sync::Arc;

/// Search queries shorter than this many characters show the full list.
const MIN_QUERY_LEN: usize = 2;

/// Drives the meal listing for a single category.
///
/// Holds the fetch state and a search string, and derives what the
/// listing should currently show from the two.
pub struct CategoryModel {
    service: Arc<dyn MealDbService>,
    category: String,
    state: FetchState<Vec<MealSummary>>,
    query: String,
}

impl CategoryModel {
    pub fn new(category: impl Into<String>, service: Arc<dyn MealDbService>) -> Self {
        Self {
            service,
            category: category.into(),
            state: FetchState::Loading,
            query: String::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> &FetchState<Vec<MealSummary>> {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Updates the search string. Takes effect on the next [`display`]
    /// call; fetch state is untouched.
    ///
    /// [`display`]: CategoryModel::display
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Loads the category listing, sorted alphabetically by meal name.
    ///
    /// Re-enters `Loading` first, so calling this again after a failure
    /// acts as a retry. The search string is preserved across retries.
    pub async fn fetch(&mut self) {
        self.state = FetchState::Loading;
        self.state = match self.service.meals_in_category(&self.category).await {
            Ok(mut meals) => {
                meals.sort_by(|a, b| a.name.cmp(&b.name));
                if meals.is_empty() {
                    FetchState::Empty
                } else {
                    FetchState::Loaded(meals)
                }
            }
            Err(error) => FetchState::Failed(error.to_string()),
        };
    }

    /// What the listing should currently show.
    ///
    /// A trimmed, lower-cased query of at least [`MIN_QUERY_LEN`]
    /// characters filters the loaded list by case-insensitive substring
    /// match. A filter that matches nothing still yields `Loaded` with an
    /// empty list, which is distinct from `Empty` (the category itself had
    /// no meals).
    pub fn display(&self) -> FetchState<Vec<MealSummary>> {
        match &self.state {
            FetchState::Loaded(meals) => {
                let query = self.query.trim().to_lowercase();
                if query.chars().count() >= MIN_QUERY_LEN {
                    FetchState::Loaded(
                        meals
                            .iter()
                            .filter(|meal| meal.name.to_lowercase().contains(&query))
                            .cloned()
                            .collect(),
                    )
                } else {
                    FetchState::Loaded(meals.clone())
                }
            }
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, Error};
    use crate::model::Meal;
    use async_trait::async_trait;

    struct StubService {
        meals: Vec<MealSummary>,
    }

    #[async_trait]
    impl MealDbService for StubService {
        async fn meals_in_category(&self, _category: &str) -> Result<Vec<MealSummary>, Error> {
            Ok(self.meals.clone())
        }

        async fn meal_by_id(&self, _id: &str) -> Result<Option<Meal>, Error> {
            Ok(None)
        }
    }

    struct FailingService;

    #[async_trait]
    impl MealDbService for FailingService {
        async fn meals_in_category(&self, _category: &str) -> Result<Vec<MealSummary>, Error> {
            Err(Error::Decode(DecodeError::MissingField(
                "strMeal".to_string(),
            )))
        }

        async fn meal_by_id(&self, _id: &str) -> Result<Option<Meal>, Error> {
            Err(Error::Decode(DecodeError::MissingField(
                "strMeal".to_string(),
            )))
        }
    }

    fn summary(id: &str, name: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail_url: None,
        }
    }

    fn dessert_model() -> CategoryModel {
        let service = StubService {
            meals: vec![
                summary("2", "Banana Bread"),
                summary("1", "Apple Pie"),
                summary("3", "Chocolate Gateau"),
            ],
        };
        CategoryModel::new("Dessert", Arc::new(service))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let model = dessert_model();
        assert!(model.state().is_loading());
        assert_eq!(model.display(), FetchState::Loading);
    }

    #[tokio::test]
    async fn test_fetch_sorts_alphabetically() {
        let mut model = dessert_model();
        model.fetch().await;

        let meals = model.state().loaded().unwrap();
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Apple Pie", "Banana Bread", "Chocolate Gateau"]);
    }

    #[tokio::test]
    async fn test_empty_result_is_empty_state() {
        let mut model = CategoryModel::new("Dessert", Arc::new(StubService { meals: vec![] }));
        model.fetch().await;

        assert_eq!(*model.state(), FetchState::Empty);
        assert_eq!(model.display(), FetchState::Empty);
    }

    #[tokio::test]
    async fn test_failure_carries_message() {
        let mut model = CategoryModel::new("Dessert", Arc::new(FailingService));
        model.fetch().await;

        match model.display() {
            FetchState::Failed(message) => assert!(message.contains("strMeal")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_filters_case_insensitively() {
        let mut model = dessert_model();
        model.fetch().await;
        model.set_query("ap");

        match model.display() {
            FetchState::Loaded(meals) => {
                assert_eq!(meals.len(), 1);
                assert_eq!(meals[0].name, "Apple Pie");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_short_query_shows_full_list() {
        let mut model = dessert_model();
        model.fetch().await;
        model.set_query("a");

        match model.display() {
            FetchState::Loaded(meals) => assert_eq!(meals.len(), 3),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_length_check() {
        let mut model = dessert_model();
        model.fetch().await;
        model.set_query("  a  ");

        // Trims down to one character, so no filtering happens.
        match model.display() {
            FetchState::Loaded(meals) => assert_eq!(meals.len(), 3),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unmatched_query_is_loaded_empty_not_empty_state() {
        let mut model = dessert_model();
        model.fetch().await;
        model.set_query("xyz");

        assert_eq!(model.display(), FetchState::Loaded(vec![]));
        assert!(model.state().loaded().is_some());
    }

    #[tokio::test]
    async fn test_retry_preserves_query() {
        let mut model = CategoryModel::new("Dessert", Arc::new(FailingService));
        model.set_query("ap");
        model.fetch().await;
        model.fetch().await;

        assert_eq!(model.query(), "ap");
        assert!(matches!(model.state(), FetchState::Failed(_)));
    }
}
