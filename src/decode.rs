//! Decoding of TheMealDB lookup payloads.
//!
//! The API represents ingredients and measurements using 20 numbered string
//! fields each, rather than an array of objects. The decoder here pairs the
//! value of each `strIngredient{n}` key with the matching `strMeasure{n}`
//! value and builds an ordered list of [`Ingredient`] records, discarding
//! entries where either string is empty. The numbered fields never appear on
//! the resulting [`Meal`].

use crate::error::DecodeError;
use crate::model::{Ingredient, Meal};
use log::debug;
use serde_json::{Map, Value};
use url::Url;

/// The fixed number of ingredient/measurement slots in a lookup payload.
pub const INGREDIENT_SLOTS: usize = 20;

impl TryFrom<&Value> for Meal {
    type Error = DecodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| DecodeError::TypeMismatch("meal".to_string()))?;

        Ok(Meal {
            id: required_string(object, "idMeal")?,
            name: required_string(object, "strMeal")?,
            thumbnail_url: required_url(object, "strMealThumb")?,
            category: required_string(object, "strCategory")?,
            area: required_string(object, "strArea")?,
            instructions: required_string(object, "strInstructions")?,
            tags: optional_tags(object),
            video_url: optional_url(object, "strYoutube"),
            ingredients: collect_ingredients(object),
            source_url: optional_url(object, "strSource"),
        })
    }
}

impl TryFrom<Value> for Meal {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Meal::try_from(&value)
    }
}

/// Pairs up the numbered ingredient and measurement fields, in ascending
/// index order. An entry makes the list only when both values are present,
/// are strings, and are non-empty; anything else leaves a gap, which is
/// normal for the trailing slots.
fn collect_ingredients(object: &Map<String, Value>) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|index| {
            let name = object.get(&format!("strIngredient{index}"))?.as_str()?;
            let measurement = object.get(&format!("strMeasure{index}"))?.as_str()?;
            if name.is_empty() || measurement.is_empty() {
                return None;
            }
            Some(Ingredient {
                name: name.to_string(),
                measurement: measurement.to_string(),
            })
        })
        .collect()
}

fn required_string(object: &Map<String, Value>, key: &str) -> Result<String, DecodeError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(DecodeError::MissingField(key.to_string())),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(DecodeError::TypeMismatch(key.to_string())),
    }
}

fn required_url(object: &Map<String, Value>, key: &str) -> Result<Url, DecodeError> {
    let raw = required_string(object, key)?;
    Url::parse(&raw).map_err(|_| DecodeError::TypeMismatch(key.to_string()))
}

/// Best-effort read of an optional URL field. A missing, null, non-string,
/// or unparseable value resolves to `None` rather than failing the decode.
fn optional_url(object: &Map<String, Value>, key: &str) -> Option<Url> {
    let raw = object.get(key)?.as_str()?;
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(error) => {
            debug!("Dropping unparseable `{key}`: {error}");
            None
        }
    }
}

/// Splits the comma-joined `strTags` field. An empty string counts as no
/// tags at all, not as an empty list.
fn optional_tags(object: &Map<String, Value>) -> Option<Vec<String>> {
    object
        .get("strTags")
        .and_then(Value::as_str)
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.split(',').map(str::to_string).collect())
}
