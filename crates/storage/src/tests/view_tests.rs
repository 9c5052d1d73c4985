use super::{create_test_storage, hench_row, normalized};

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn winner_view_joins_organization_address() {
    let (storage, _dir) = create_test_storage();
    let ids = storage.import_record(&normalized(hench_row())).unwrap();

    let rows = storage.winner_view().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.id, ids.winner_id);
    assert_eq!(row.organization, "Mayo Clinic");
    assert_eq!(row.country.as_ref().unwrap().alpha_2, "US");
    assert_eq!(row.coordinates.lon, -112.4943339159);
    assert_eq!(row.coordinates.lat, 45.6875333395);
    assert_eq!(row.year, Some(1950));
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn winner_without_organization_is_not_in_view() {
    let (storage, _dir) = create_test_storage();
    let mut row = hench_row();
    row["country"] = serde_json::Value::Null;
    storage.import_record(&normalized(row)).unwrap();
    assert!(storage.winner_view().unwrap().is_empty());
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn distinct_countries_are_sorted_and_unique() {
    let (storage, _dir) = create_test_storage();
    storage.import_record(&normalized(hench_row())).unwrap();
    let mut row = hench_row();
    row["borncity"] = "Kingston".into();
    storage.import_record(&normalized(row)).unwrap();

    let names: Vec<String> = storage
        .distinct_countries()
        .unwrap()
        .into_iter()
        .map(|c| c.name.into_owned())
        .collect();
    assert_eq!(names, vec!["Jamaica", "United States"]);
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn empty_store_has_zero_stats() {
    let (storage, _dir) = create_test_storage();
    let stats = storage.stats().unwrap();
    assert_eq!((stats.winners, stats.addresses, stats.organizations), (0, 0, 0));
    assert!(storage.distinct_countries().unwrap().is_empty());
}
