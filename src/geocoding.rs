//! Geocoding against the public place-search service.

mod client;
mod error;
mod place;

use async_trait::async_trait;

pub use self::{
    client::{LookupRequest, NominatimClient},
    error::GeocodingError,
    place::{Address, Candidate, Place},
};
use crate::prelude::*;

#[async_trait]
pub trait Geocode {
    /// Look up candidate places for the free-text query, best match first.
    async fn lookup(&self, query: &str, limit: u32) -> Result<Vec<Candidate>, GeocodingError>;

    /// Resolve the query to the single best matching place.
    async fn resolve(&self, query: &str) -> Result<Place, GeocodingError> {
        self.lookup(query, 1)
            .await?
            .into_iter()
            .next()
            .ok_or(GeocodingError::NotFound)?
            .try_into()
    }
}
