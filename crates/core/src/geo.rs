//! Geographic point with a GeoJSON wire shape.

use serde::{Deserialize, Serialize};

/// Longitude/latitude pair. Defaults to the origin, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "GeoJsonPoint", try_from = "GeoJsonPoint")]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const ORIGIN: Self = Self { lon: 0.0, lat: 0.0 };

    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// `{"type": "Point", "coordinates": [lon, lat]}`
#[derive(Serialize, Deserialize)]
struct GeoJsonPoint {
    #[serde(rename = "type")]
    kind: String,
    coordinates: [f64; 2],
}

impl From<GeoPoint> for GeoJsonPoint {
    fn from(point: GeoPoint) -> Self {
        Self { kind: "Point".to_owned(), coordinates: [point.lon, point.lat] }
    }
}

impl TryFrom<GeoJsonPoint> for GeoPoint {
    type Error = String;

    fn try_from(value: GeoJsonPoint) -> Result<Self, Self::Error> {
        if value.kind != "Point" {
            return Err(format!("expected GeoJSON type 'Point', got '{}'", value.kind));
        }
        let [lon, lat] = value.coordinates;
        Ok(Self { lon, lat })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_geojson_point() {
        let json = serde_json::to_value(GeoPoint::new(-112.5, 45.7)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Point", "coordinates": [-112.5, 45.7]}));
    }

    #[test]
    fn rejects_other_geometry_types() {
        let err = serde_json::from_value::<GeoPoint>(
            serde_json::json!({"type": "Polygon", "coordinates": [1.0, 2.0]}),
        );
        assert!(err.is_err());
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(GeoPoint::default(), GeoPoint::ORIGIN);
    }
}
