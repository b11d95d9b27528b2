use url::Url;

use crate::{geocoding::Place, search::region::region_code};

/// Query endpoint of the external search engine.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Fixed interface language for built search URLs.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Build a search URL biased towards the place.
///
/// The query travels verbatim in `q`. The location bias travels only in the
/// coordinate and region parameters, never folded into the query text.
#[must_use]
pub fn build_search_url(place: &Place, query: &str) -> Url {
    let mut url = Url::parse(SEARCH_ENDPOINT).unwrap();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("ll", &format!("{},{}", place.latitude, place.longitude))
        .append_pair("gl", region_code(&place.country))
        .append_pair("hl", DEFAULT_LANGUAGE)
        .finish();
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Place {
        Place {
            name: "Paris, Île-de-France, France".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            country: "France".to_string(),
        }
    }

    #[test]
    fn paris_coffee_shops_ok() {
        let url = build_search_url(&paris(), "coffee shops");
        let url = url.as_str();

        assert!(url.starts_with(SEARCH_ENDPOINT));
        assert!(url.contains("q=coffee+shops"));
        assert!(url.contains("ll=48.8566%2C2.3522"));
        assert!(url.contains("gl=fr"));
        assert!(url.contains("hl=en"));
    }

    #[test]
    fn query_is_never_rewritten_ok() {
        let url = build_search_url(&paris(), "coffee shops");
        let query = url
            .query_pairs()
            .find(|(name, _)| name == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap();

        assert_eq!(query, "coffee shops");
    }

    #[test]
    fn deterministic_ok() {
        assert_eq!(
            build_search_url(&paris(), "coffee shops"),
            build_search_url(&paris(), "coffee shops"),
        );
    }

    #[test]
    fn unknown_country_uses_the_fallback_region_ok() {
        let place = Place { country: "Unknown".to_string(), ..paris() };
        assert!(build_search_url(&place, "coffee").as_str().contains("gl=us"));
    }
}
