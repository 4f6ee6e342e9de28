//! Wire shapes of the public geocoding and country-lookup services.

use serde::Deserialize;

/// One reverse-geocoding suggestion, as returned by the location service.
///
/// Coordinates arrive as strings on the wire.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LocationSuggestion {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl LocationSuggestion {
    /// Parsed `(lat, lon)` pair, if both coordinates are numeric.
    pub fn coords(&self) -> Option<(f64, f64)> {
        let lat = self.lat.parse().ok()?;
        let lon = self.lon.parse().ok()?;
        Some((lat, lon))
    }
}

/// One country entry from the country-lookup service.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CountryDto {
    pub name: CountryName,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CountryName {
    pub common: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_parses_coords() {
        let suggestion: LocationSuggestion = serde_json::from_str(
            r#"{"display_name":"Riyadh, Saudi Arabia","lat":"24.63","lon":"46.71"}"#,
        )
        .expect("valid suggestion");
        assert_eq!(suggestion.coords(), Some((24.63, 46.71)));
    }

    #[test]
    fn non_numeric_coords_yield_none() {
        let suggestion = LocationSuggestion {
            display_name: "x".into(),
            lat: "abc".into(),
            lon: "1".into(),
        };
        assert_eq!(suggestion.coords(), None);
    }
}
