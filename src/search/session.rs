use crate::geocoding::Place;

/// Maximum number of suggestions kept visible.
pub const MAX_SUGGESTIONS: usize = 3;

/// Minimum number of characters before completions are fetched.
pub const MIN_SUGGESTION_CHARS: usize = 3;

/// Mutable state of one widget session.
///
/// Created empty, lives for the session, and is discarded with it.
#[derive(Default)]
pub struct SearchState {
    pub location_text: String,
    pub query_text: String,
    pub resolved_place: Option<Place>,
    pub last_geocoded_text: String,
    pub suggestions: Vec<String>,
    pub suggestions_loading: bool,
    pub is_geocoding: bool,
}

/// What the caller must do after a location edit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocationEdit {
    FetchSuggestions,
    ClearSuggestions,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the location text.
    ///
    /// The resolved place is kept: it only reads as stale while the trimmed
    /// text differs from the text it was geocoded from.
    pub fn set_location_text(&mut self, text: &str) -> LocationEdit {
        self.location_text = text.to_string();
        if text.chars().count() >= MIN_SUGGESTION_CHARS {
            self.suggestions_loading = true;
            LocationEdit::FetchSuggestions
        } else {
            self.suggestions.clear();
            self.suggestions_loading = false;
            LocationEdit::ClearSuggestions
        }
    }

    pub fn set_query_text(&mut self, text: &str) {
        self.query_text = text.to_string();
    }

    /// Adopt a suggestion as the location text.
    pub fn select_suggestion(&mut self, index: usize) -> Option<&str> {
        let suggestion = self.suggestions.get(index)?.clone();
        self.location_text = suggestion;
        self.suggestions.clear();
        self.suggestions_loading = false;
        Some(&self.location_text)
    }

    /// Publish a completed suggestion batch.
    pub fn apply_suggestions(&mut self, mut suggestions: Vec<String>) {
        suggestions.truncate(MAX_SUGGESTIONS);
        self.suggestions = suggestions;
        self.suggestions_loading = false;
    }

    /// Store a freshly geocoded place together with the text it was resolved from.
    pub fn apply_place(&mut self, place: Place, geocoded_text: &str) {
        self.resolved_place = Some(place);
        self.last_geocoded_text = geocoded_text.to_string();
    }

    /// Whether the location text has drifted from the resolved place.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.resolved_place.is_some()
            && self.location_text.trim() != self.last_geocoded_text.trim()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn sydney() -> Place {
        Place {
            name: "Sydney, New South Wales, Australia".to_string(),
            latitude: -33.8688,
            longitude: 151.2093,
            country: "Australia".to_string(),
        }
    }

    #[test]
    fn geocode_clears_staleness_ok() {
        let mut state = SearchState::new();
        state.set_location_text("Sydney");
        state.apply_place(sydney(), "Sydney");

        assert!(!state.is_stale());
        assert_eq!(state.last_geocoded_text, "Sydney");
    }

    #[test]
    fn editing_after_geocode_flags_stale_ok() {
        let mut state = SearchState::new();
        state.set_location_text("Sydney");
        state.apply_place(sydney(), "Sydney");

        state.set_location_text("Sydney CBD");
        assert!(state.is_stale());

        state.set_location_text("Sydney");
        assert!(!state.is_stale());

        // Trimmed comparison: surrounding whitespace is not a real edit.
        state.set_location_text("  Sydney ");
        assert!(!state.is_stale());
    }

    #[test]
    fn query_edits_keep_the_place_ok() {
        let mut state = SearchState::new();
        state.set_location_text("Sydney");
        state.apply_place(sydney(), "Sydney");

        state.set_query_text("coffee shops");
        state.set_query_text("plumbers");

        assert!(state.resolved_place.is_some());
        assert!(!state.is_stale());
    }

    #[test]
    fn no_place_is_never_stale_ok() {
        let mut state = SearchState::new();
        state.set_location_text("Sydney");
        assert!(!state.is_stale());
    }

    #[test]
    fn short_input_clears_suggestions_ok() {
        let mut state = SearchState::new();
        assert_eq!(state.set_location_text("Par"), LocationEdit::FetchSuggestions);
        assert!(state.suggestions_loading);
        state.apply_suggestions(vec!["Paris, France".to_string()]);

        assert_eq!(state.set_location_text("Pa"), LocationEdit::ClearSuggestions);
        assert!(state.suggestions.is_empty());
        assert!(!state.suggestions_loading);
    }

    #[test]
    fn suggestions_are_capped_ok() {
        let mut state = SearchState::new();
        state.apply_suggestions((1..=5).map(|n| format!("Place {n}")).collect_vec());
        assert_eq!(state.suggestions.len(), MAX_SUGGESTIONS);
        assert!(!state.suggestions_loading);
    }

    #[test]
    fn select_suggestion_ok() {
        let mut state = SearchState::new();
        state.set_location_text("Par");
        state.apply_suggestions(vec![
            "Paris, France".to_string(),
            "Parramatta, Australia".to_string(),
        ]);

        assert_eq!(state.select_suggestion(1), Some("Parramatta, Australia"));
        assert_eq!(state.location_text, "Parramatta, Australia");
        assert!(state.suggestions.is_empty());

        assert_eq!(state.select_suggestion(0), None);
    }
}
