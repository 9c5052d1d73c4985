//! Test utilities and module declarations for storage tests.

use crate::Storage;
use laureates_core::{CountryResolver, NormalizedRecord, normalize};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn hench_row() -> serde_json::Value {
    serde_json::json!({
        "id": 351,
        "firstname": "Philip S.",
        "surname": "Hench",
        "born": "1896-02-28",
        "died": "1965-03-30",
        "borncountry": "USA",
        "borncountrycode": "US",
        "borncity": "Pittsburgh PA",
        "diedcountry": "Jamaica",
        "diedcountrycode": "JM",
        "diedcity": "Ocho Rios",
        "gender": "male",
        "year": 1950,
        "category": "Medicine",
        "overallmotivation": null,
        "motivation": "\"for their discoveries relating to the hormones of the adrenal cortex\"",
        "name": "Mayo Clinic",
        "city": "Rochester MN",
        "country": "USA",
        "geo_shape": null,
        "geo_point_2d": {"lon": -112.4943339159, "lat": 45.6875333395},
        "borncountrycode3": "USA",
        "diedcountrycode3": "JAM"
    })
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn normalized(row: serde_json::Value) -> NormalizedRecord {
    let mut dataset = normalize(vec![row], CountryResolver::global());
    assert!(dataset.quarantined.is_empty(), "{:?}", dataset.quarantined);
    dataset.records.pop().unwrap()
}

mod import_tests;
mod view_tests;
