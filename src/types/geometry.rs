use crate::types::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The GeoJSON geometry the forecast is valid for, kept exactly as received.
///
/// The service returns the grid point it snapped the request to, e.g.
/// `{"type": "Point", "coordinates": [[17.70, 59.32]]}`. The accessors read that
/// shape when present and return empty results otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geometry(Value);

impl Geometry {
    /// The GeoJSON `type` member, if present.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type")?.as_str()
    }

    /// The positions in `coordinates`, each given as `[longitude, latitude]` on the wire.
    /// Accepts both a single position and a list of positions.
    pub fn points(&self) -> Vec<Coordinate> {
        let Some(coordinates) = self.0.get("coordinates").and_then(Value::as_array) else {
            return Vec::new();
        };
        if let Some(point) = position(coordinates) {
            return vec![point];
        }
        coordinates
            .iter()
            .filter_map(Value::as_array)
            .filter_map(|p| position(p))
            .collect()
    }

    /// The untouched JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

fn position(values: &[Value]) -> Option<Coordinate> {
    match values {
        [lon, lat, ..] => Some(Coordinate::normalize(lat.as_f64()?, lon.as_f64()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_point() {
        let geometry: Geometry = serde_json::from_value(json!({
            "type": "Point",
            "coordinates": [[17.701873, 59.325841]]
        }))
        .unwrap();
        assert_eq!(geometry.kind(), Some("Point"));
        assert_eq!(geometry.points(), vec![Coordinate::normalize(59.325841, 17.701873)]);
    }

    #[test]
    fn test_flat_point() {
        let geometry: Geometry = serde_json::from_value(json!({
            "type": "Point",
            "coordinates": [16.158549, 58.5812]
        }))
        .unwrap();
        assert_eq!(geometry.points(), vec![Coordinate::normalize(58.5812, 16.158549)]);
    }

    #[test]
    fn test_unexpected_shapes_are_passed_through() {
        let raw = json!({"kind": "polygon", "coordinates": "n/a"});
        let geometry: Geometry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(geometry.kind(), None);
        assert!(geometry.points().is_empty());
        assert_eq!(geometry.as_value(), &raw);
    }
}
