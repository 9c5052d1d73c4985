use super::{create_test_storage, hench_row, normalized};
use laureates_core::{AddressOwner, AddressRole};

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn hench_imports_all_entities() {
    let (storage, _dir) = create_test_storage();
    let ids = storage.import_record(&normalized(hench_row())).unwrap();

    let stats = storage.stats().unwrap();
    assert_eq!(stats.winners, 1);
    assert_eq!(stats.organizations, 1);
    assert_eq!(stats.addresses, 3);

    let winner = storage.get_winner(ids.winner_id).unwrap().unwrap();
    let organization = ids.organization.unwrap();
    assert!(!organization.reused);
    let organization_address = ids.organization_address.unwrap();
    assert!(!organization_address.reused);
    assert_eq!(winner.entity.organization_id, Some(organization.id));
    assert_eq!(winner.entity.birth_address_id, ids.birth_address.map(|l| l.id));
    assert_eq!(winner.entity.death_address_id, ids.death_address.map(|l| l.id));
    assert_eq!(winner.entity.born.unwrap().to_string(), "1896-02-28");

    let org = storage.get_organization(organization.id).unwrap().unwrap();
    assert_eq!(org.entity.name, "Mayo Clinic");
    let org_address = storage.get_address(org.entity.address_id.unwrap()).unwrap().unwrap();
    assert_eq!(
        org_address.entity.owner,
        AddressOwner::Organization { organization_id: organization.id }
    );
    assert_eq!(org_address.entity.city.as_deref(), Some("Rochester MN"));
    assert_eq!(org_address.entity.country.unwrap().alpha_2, "US");
    assert_eq!(org_address.entity.coordinates.lat, 45.6875333395);
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn birth_address_is_owned_by_winner() {
    let (storage, _dir) = create_test_storage();
    let ids = storage.import_record(&normalized(hench_row())).unwrap();

    let birth = storage.get_address(ids.birth_address.unwrap().id).unwrap().unwrap();
    assert_eq!(birth.entity.owner.role(), AddressRole::Birth);
    assert_eq!(birth.entity.owner.winner_id(), Some(ids.winner_id));
    assert_eq!(birth.entity.city.as_deref(), Some("Pittsburgh PA"));
    assert_eq!(birth.entity.coordinates.lon, 0.0);

    let death = storage.get_address(ids.death_address.unwrap().id).unwrap().unwrap();
    assert_eq!(death.entity.country.unwrap().name, "Jamaica");
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn organization_is_reused_by_name() {
    let (storage, _dir) = create_test_storage();
    let first = storage.import_record(&normalized(hench_row())).unwrap();

    let mut row = hench_row();
    row["surname"] = "Kendall".into();
    row["borncity"] = "South Norwalk CT".into();
    row["diedcity"] = "Princeton NJ".into();
    let second = storage.import_record(&normalized(row)).unwrap();

    let org = second.organization.unwrap();
    assert!(org.reused);
    assert!(second.organization_address.is_none());
    assert_eq!(org.id, first.organization.unwrap().id);
    assert_eq!(storage.list_organizations().unwrap().len(), 1);
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn address_is_reused_by_city_across_roles() {
    let (storage, _dir) = create_test_storage();
    let first = storage.import_record(&normalized(hench_row())).unwrap();
    let org_id = first.organization.unwrap().id;
    let org_address_id =
        storage.get_organization(org_id).unwrap().unwrap().entity.address_id.unwrap();

    let mut row = hench_row();
    row["surname"] = "Other".into();
    row["borncity"] = "Rochester MN".into();
    row["diedcity"] = "".into();
    let second = storage.import_record(&normalized(row)).unwrap();

    let birth = second.birth_address.unwrap();
    assert!(birth.reused);
    assert_eq!(birth.id, org_address_id);

    // Blank city never deduplicates.
    let death = second.death_address.unwrap();
    assert!(!death.reused);

    // The reused address keeps its first owner.
    let address = storage.get_address(birth.id).unwrap().unwrap();
    assert_eq!(address.entity.owner.organization_id(), Some(org_id));
    let winner = storage.get_winner(second.winner_id).unwrap().unwrap();
    assert_eq!(winner.entity.birth_address_id, Some(org_address_id));
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn record_without_country_creates_no_organization() {
    let (storage, _dir) = create_test_storage();
    let mut row = hench_row();
    row["country"] = serde_json::Value::Null;
    row["diedcountry"] = serde_json::Value::Null;
    row["diedcountrycode"] = serde_json::Value::Null;
    let ids = storage.import_record(&normalized(row)).unwrap();

    assert!(ids.organization.is_none());
    assert!(ids.death_address.is_none());
    let stats = storage.stats().unwrap();
    assert_eq!(stats.organizations, 0);
    assert_eq!(stats.addresses, 1);
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn new_organization_keeps_its_coordinates_when_city_already_stored() {
    let (storage, _dir) = create_test_storage();
    let mut local = hench_row();
    local["surname"] = "Local".into();
    local["borncity"] = "Rochester MN".into();
    local["country"] = serde_json::Value::Null;
    let first = storage.import_record(&normalized(local)).unwrap();
    let birth_id = first.birth_address.unwrap().id;

    let hench = storage.import_record(&normalized(hench_row())).unwrap();
    let org_address = hench.organization_address.unwrap();
    assert!(!org_address.reused);
    assert_ne!(org_address.id, birth_id);

    let rows = storage.winner_view().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].organization, "Mayo Clinic");
    assert_eq!(rows[0].coordinates.lon, -112.4943339159);
    assert_eq!(rows[0].coordinates.lat, 45.6875333395);
    assert_eq!(rows[0].country.as_ref().unwrap().alpha_2, "US");
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn failed_write_rolls_back_whole_record() {
    let (storage, _dir) = create_test_storage();
    storage
        .pool
        .get()
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER reject_death_address BEFORE INSERT ON addresses
             WHEN NEW.role = 'death'
             BEGIN SELECT RAISE(ABORT, 'death address rejected'); END;",
        )
        .unwrap();

    let err = storage.import_record(&normalized(hench_row())).unwrap_err();
    assert!(err.is_constraint(), "unexpected error: {err}");

    let stats = storage.stats().unwrap();
    assert_eq!((stats.winners, stats.addresses, stats.organizations), (0, 0, 0));
}
