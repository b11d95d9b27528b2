use async_trait::async_trait;
use bon::Builder;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use url::Url;

use crate::{
    geocoding::{Candidate, Geocode, GeocodingError},
    prelude::*,
};

pub const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

#[must_use]
#[derive(Clone)]
pub struct NominatimClient(pub ClientWithMiddleware);

impl NominatimClient {
    /// Search the geocoding service.
    #[instrument(skip_all, err(level = Level::DEBUG))]
    pub async fn search(
        &self,
        request: &LookupRequest<'_>,
    ) -> Result<Vec<Candidate>, GeocodingError> {
        info!(query = request.query, limit = request.limit, "📍 Looking up…");
        let url = {
            let query =
                serde_qs::to_string(request).context("failed to serialize the lookup request")?;
            let mut url = Url::parse(SEARCH_URL).unwrap();
            url.set_query(Some(&query));
            url
        };
        let candidates: Vec<Candidate> = self
            .0
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("failed to deserialize the candidates")?;
        info!(n_candidates = candidates.len(), "📍 Fetched");
        Ok(candidates)
    }
}

#[async_trait]
impl Geocode for NominatimClient {
    async fn lookup(&self, query: &str, limit: u32) -> Result<Vec<Candidate>, GeocodingError> {
        LookupRequest::builder().query(query).limit(limit).build().call_on(self).await
    }
}

/// Lookup request for the place-search endpoint.
#[must_use]
#[derive(Builder, Serialize)]
pub struct LookupRequest<'a> {
    #[serde(rename = "q")]
    pub query: &'a str,

    pub limit: u32,

    #[serde(rename = "format")]
    #[builder(default = Format::JsonV2)]
    pub format: Format,

    /// The address breakdown carries the candidate's country.
    #[serde(rename = "addressdetails")]
    #[builder(default = 1)]
    pub address_details: u8,
}

impl LookupRequest<'_> {
    pub async fn call_on(&self, client: &NominatimClient) -> Result<Vec<Candidate>, GeocodingError> {
        client.search(self).await
    }
}

#[must_use]
#[derive(Serialize)]
pub enum Format {
    #[serde(rename = "jsonv2")]
    JsonV2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lookup_request_ok() -> Result {
        let request = LookupRequest::builder().query("Paris").limit(1).build();
        assert_eq!(
            serde_qs::to_string(&request)?,
            "q=Paris&limit=1&format=jsonv2&addressdetails=1",
        );
        Ok(())
    }
}
