//! State containers backing the two screens of the app: the category
//! listing and the meal detail. Each model owns a [`FetchState`] snapshot
//! that a UI layer can render directly.

mod category;
mod detail;

pub use category::CategoryModel;
pub use detail::{area_flag, reflow_instructions, DetailModel};

/// The lifecycle of a single fetch.
///
/// A model starts out `Loading`, and every call to its `fetch` method
/// re-enters `Loading` before resolving to exactly one of the other
/// variants. Overlapping fetches each overwrite the state on completion,
/// last write wins.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// A fetch is in flight (also the initial state).
    Loading,
    /// The fetch finished with something to show.
    Loaded(T),
    /// The fetch finished with nothing to show.
    Empty,
    /// The fetch failed; the message is ready for display.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded value, if the fetch has resolved successfully.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
