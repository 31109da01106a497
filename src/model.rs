use serde::{Deserialize, Deserializer};
use url::Url;

/// A single entry from a category listing.
///
/// TheMealDB's `filter.php` endpoint returns only these three fields per
/// meal; the full record has to be looked up separately by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MealSummary {
    /// The meal's ID on TheMealDB.
    #[serde(rename = "idMeal")]
    pub id: String,
    /// The name of the meal.
    #[serde(rename = "strMeal")]
    pub name: String,
    /// A URL that points to an image of the meal.
    #[serde(
        rename = "strMealThumb",
        default,
        deserialize_with = "lenient_url"
    )]
    pub thumbnail_url: Option<Url>,
}

/// One ingredient of a meal, paired with its measurement.
///
/// Derived from the numbered `strIngredient{n}` / `strMeasure{n}` fields
/// during decoding; both strings are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measurement: String,
}

impl Ingredient {
    /// A URL that points to an image of the ingredient.
    pub fn thumbnail_url(&self) -> Option<Url> {
        Url::parse(&format!(
            "https://www.themealdb.com/images/ingredients/{}.png",
            self.name
        ))
        .ok()
    }
}

/// A fully decoded meal record.
///
/// Constructed exclusively by decoding a lookup payload, see
/// [`crate::decode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Meal {
    /// The meal's ID on TheMealDB.
    pub id: String,
    /// The name of the meal.
    pub name: String,
    /// A URL that points to an image of the meal.
    pub thumbnail_url: Url,
    /// The name of the category the meal is in.
    pub category: String,
    /// The meal's origin, eg, "British".
    pub area: String,
    /// The instructions to prepare the meal.
    pub instructions: String,
    /// A list of tags describing the meal.
    pub tags: Option<Vec<String>>,
    /// A URL that points to a video associated with the meal.
    pub video_url: Option<Url>,
    /// The ingredients needed to prepare the meal, in source order.
    pub ingredients: Vec<Ingredient>,
    /// A URL pointing to the source of the recipe for the meal.
    pub source_url: Option<Url>,
}

/// The top-level envelope every TheMealDB endpoint responds with.
///
/// The `meals` array is null (or missing entirely) when nothing matched,
/// which decodes as an empty list rather than an error.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealResponse<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

impl<T> MealResponse<T> {
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Decodes an optional URL field, mapping malformed values to `None`
/// instead of failing the record.
fn lenient_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| Url::parse(&s).ok()))
}
