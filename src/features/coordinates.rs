use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geo-coordinates attached to a Commons page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

fn raw_coordinates(page: &Value) -> Option<(&Value, &Value)> {
    let first = page.get("coordinates")?.get(0)?;
    Some((first.get("lat")?, first.get("lon")?))
}

pub(crate) fn coordinates(page: &Value) -> Option<Coordinates> {
    let (lat, lon) = raw_coordinates(page)?;
    Some(Coordinates {
        lat: lat.as_f64()?,
        lon: lon.as_f64()?,
    })
}

/// Formats the first coordinate entry, or the fixed fallback when the page
/// carries no coordinates. The lat/lon numbers are rendered exactly as they
/// appear in the response JSON.
pub(crate) fn coordinates_message(page: &Value) -> String {
    match raw_coordinates(page) {
        Some((lat, lon)) => format!("Latitude: {lat}, Longitude: {lon}"),
        None => "Geo-location unavailable.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coordinates_with_full_data() {
        let page = json!({
            "coordinates": [{ "lat": 41.0, "lon": -8.0, "primary": "" }]
        });

        let result = coordinates(&page);
        assert_eq!(
            result,
            Some(Coordinates {
                lat: 41.0,
                lon: -8.0
            })
        );
    }

    #[test]
    fn test_coordinates_returns_none_without_coordinates_key() {
        let page = json!({ "title": "File:Example.jpg" });
        assert!(coordinates(&page).is_none());
    }

    #[test]
    fn test_coordinates_returns_none_for_empty_list() {
        let page = json!({ "coordinates": [] });
        assert!(coordinates(&page).is_none());
    }

    #[test]
    fn test_message_keeps_the_json_number_form() {
        let page = json!({
            "coordinates": [{ "lat": 41.0, "lon": -8.0 }]
        });

        assert_eq!(
            coordinates_message(&page),
            "Latitude: 41.0, Longitude: -8.0"
        );
    }

    #[test]
    fn test_message_fallback_is_exact() {
        let page = json!({ "title": "File:Example.jpg" });
        assert_eq!(coordinates_message(&page), "Geo-location unavailable.");
    }

    #[test]
    fn test_message_fallback_when_lat_is_missing() {
        let page = json!({ "coordinates": [{ "lon": -8.0 }] });
        assert_eq!(coordinates_message(&page), "Geo-location unavailable.");
    }
}
