use std::fmt::{self, Display, Formatter};

use serde::Deserialize;

use crate::{geocoding::GeocodingError, prelude::*};

pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Resolved location.
///
/// Immutable once constructed; a new geocode replaces it wholesale.
#[derive(Clone, Debug)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.6}, {:.6} \u{2022} {})",
            self.name, self.latitude, self.longitude, self.country,
        )
    }
}

/// Candidate place as returned by the geocoding service.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    pub country: Option<String>,
}

impl TryFrom<Candidate> for Place {
    type Error = GeocodingError;

    fn try_from(candidate: Candidate) -> Result<Self, Self::Error> {
        let latitude = candidate
            .lat
            .parse()
            .with_context(|| format!("failed to parse the latitude `{}`", candidate.lat))?;
        let longitude = candidate
            .lon
            .parse()
            .with_context(|| format!("failed to parse the longitude `{}`", candidate.lon))?;
        Ok(Self {
            name: candidate.display_name,
            latitude,
            longitude,
            country: candidate
                .address
                .and_then(|address| address.country)
                .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_into_place_ok() -> Result {
        let candidate: Candidate = serde_json::from_str(
            r#"{
                "display_name": "Paris, Île-de-France, France",
                "lat": "48.8566",
                "lon": "2.3522",
                "address": {"country": "France"}
            }"#,
        )?;
        let place = Place::try_from(candidate)?;
        assert_eq!(place.name, "Paris, Île-de-France, France");
        assert!((place.latitude - 48.8566).abs() < 1e-9);
        assert!((place.longitude - 2.3522).abs() < 1e-9);
        assert_eq!(place.country, "France");
        Ok(())
    }

    #[test]
    fn missing_country_defaults_to_unknown_ok() -> Result {
        let candidate: Candidate = serde_json::from_str(
            r#"{"display_name": "Null Island", "lat": "0.0", "lon": "0.0"}"#,
        )?;
        assert_eq!(Place::try_from(candidate)?.country, UNKNOWN_COUNTRY);
        Ok(())
    }

    #[test]
    fn unparsable_coordinate_fails() {
        let candidate = Candidate {
            display_name: "Nowhere".to_string(),
            lat: "not-a-number".to_string(),
            lon: "2.3522".to_string(),
            address: None,
        };
        assert!(Place::try_from(candidate).is_err());
    }
}
