use crate::api::MealDbService;
use crate::model::{Meal, MealSummary};
use crate::state::FetchState;
use std::sync::Arc;

/// Drives the detail screen for a single meal.
///
/// Constructed from the [`MealSummary`] the user tapped in the listing;
/// the full record is looked up by id on [`fetch`].
///
/// [`fetch`]: DetailModel::fetch
pub struct DetailModel {
    service: Arc<dyn MealDbService>,
    summary: MealSummary,
    state: FetchState<Meal>,
}

impl DetailModel {
    pub fn new(summary: MealSummary, service: Arc<dyn MealDbService>) -> Self {
        Self {
            service,
            summary,
            state: FetchState::Loading,
        }
    }

    pub fn summary(&self) -> &MealSummary {
        &self.summary
    }

    pub fn state(&self) -> &FetchState<Meal> {
        &self.state
    }

    /// Loads the full meal record. An id that matches nothing resolves to
    /// `Empty`; calling again after a failure acts as a retry.
    pub async fn fetch(&mut self) {
        self.state = FetchState::Loading;
        self.state = match self.service.meal_by_id(&self.summary.id).await {
            Ok(Some(meal)) => FetchState::Loaded(meal),
            Ok(None) => FetchState::Empty,
            Err(error) => FetchState::Failed(error.to_string()),
        };
    }

    /// The meal's instructions, reflowed for display.
    pub fn formatted_instructions(&self) -> Option<String> {
        self.state
            .loaded()
            .map(|meal| reflow_instructions(&meal.instructions))
    }

    /// The flag for the loaded meal's area, when it is a known one.
    pub fn flag_emoji(&self) -> Option<&'static str> {
        self.state.loaded().and_then(|meal| area_flag(&meal.area))
    }
}

/// Drops empty lines and rejoins the rest with blank-line separators, so
/// instruction text renders as evenly spaced paragraphs. Purely cosmetic;
/// the stored instructions are untouched.
pub fn reflow_instructions(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Flag emoji for the closed set of areas the catalog uses. Unknown areas
/// get no flag.
pub fn area_flag(area: &str) -> Option<&'static str> {
    match area {
        "British" => Some("\u{1F1EC}\u{1F1E7}"),
        "Canadian" => Some("\u{1F1E8}\u{1F1E6}"),
        "Tunisian" => Some("\u{1F1F9}\u{1F1F3}"),
        "American" => Some("\u{1F1FA}\u{1F1F8}"),
        "Croatian" => Some("\u{1F1ED}\u{1F1F7}"),
        "Russian" => Some("\u{1F1F7}\u{1F1FA}"),
        "Portuguese" => Some("\u{1F1F5}\u{1F1F9}"),
        "French" => Some("\u{1F1EB}\u{1F1F7}"),
        "Italian" => Some("\u{1F1EE}\u{1F1F9}"),
        "Malaysian" => Some("\u{1F1F2}\u{1F1FE}"),
        "Polish" => Some("\u{1F1F5}\u{1F1F1}"),
        "Greek" => Some("\u{1F1EC}\u{1F1F7}"),
        _ => None,
    }
}
