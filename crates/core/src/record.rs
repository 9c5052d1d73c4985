//! Source dataset shape and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::geo::GeoPoint;

/// `geo_point_2d` as it appears in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawGeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl From<RawGeoPoint> for GeoPoint {
    fn from(raw: RawGeoPoint) -> Self {
        Self::new(raw.lon, raw.lat)
    }
}

/// One flat row of the laureate dataset.
///
/// Every field is optional; fields not listed here (`geo_shape`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaureateRecord {
    pub id: Option<i64>,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub born: Option<String>,
    pub died: Option<String>,
    pub borncountry: Option<String>,
    pub borncountrycode: Option<String>,
    pub borncity: Option<String>,
    pub diedcountry: Option<String>,
    pub diedcountrycode: Option<String>,
    pub diedcity: Option<String>,
    pub gender: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub overallmotivation: Option<String>,
    pub motivation: Option<String>,
    /// Affiliated organization name.
    pub name: Option<String>,
    /// Affiliated organization city.
    pub city: Option<String>,
    /// Affiliated organization country (a name, not a code).
    pub country: Option<String>,
    pub geo_point_2d: Option<RawGeoPoint>,
    pub borncountrycode3: Option<String>,
    pub diedcountrycode3: Option<String>,
}

impl LaureateRecord {
    /// Check a raw JSON row against the record shape.
    ///
    /// # Errors
    /// Returns [`CoreError::Serialization`] when a field has the wrong type
    /// or the row is not an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Read the dataset file as a list of untyped rows.
///
/// # Errors
/// Fails if the file cannot be read, is not JSON, or its top level is not an array.
pub fn load_dataset(path: &Path) -> Result<Vec<serde_json::Value>> {
    let content = std::fs::read_to_string(path)?;
    parse_dataset(&content)
}

/// Parse dataset text; see [`load_dataset`].
///
/// # Errors
/// Fails if the text is not JSON or its top level is not an array.
pub fn parse_dataset(content: &str) -> Result<Vec<serde_json::Value>> {
    match serde_json::from_str(content)? {
        serde_json::Value::Array(rows) => Ok(rows),
        other => Err(CoreError::InvalidInput(format!(
            "dataset must be a JSON array, found {}",
            json_kind(&other)
        ))),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match *value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
