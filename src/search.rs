//! The location-search pipeline: input tracking, suggestions, and search URLs.

mod region;
mod session;
mod suggest;
mod url;

pub use self::{
    session::{LocationEdit, SearchState},
    suggest::{SuggestionBatch, SuggestionFetcher, fetch_suggestions},
    url::build_search_url,
};
