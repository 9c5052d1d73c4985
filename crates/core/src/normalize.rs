//! Record normalizer: splits raw laureate rows into winner, address and
//! organization drafts ready for persistence.
//!
//! Rows are validated once at the boundary. A row that does not match
//! [`LaureateRecord`] or carries an unparseable date is quarantined and the
//! pass carries on with the next row.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::DATE_FORMAT;
use crate::country::{Country, CountryResolver};
use crate::entity::{Address, AddressOwner, AddressRole, EntityId, Organization, Winner};
use crate::error::{CoreError, Result};
use crate::geo::GeoPoint;
use crate::record::LaureateRecord;

/// Address fields known before the owning entity has an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDraft {
    pub role: AddressRole,
    pub city: Option<String>,
    pub country: Option<Country>,
    pub coordinates: GeoPoint,
}

impl AddressDraft {
    /// Natural key used for deduplication: the trimmed, non-empty city.
    #[must_use]
    pub fn dedup_key(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub fn into_address(self, owner_id: EntityId) -> Address {
        Address {
            street: None,
            zip: None,
            city: self.city,
            country: self.country,
            coordinates: self.coordinates,
            owner: AddressOwner::for_role(self.role, owner_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationDraft {
    pub name: String,
    pub category: Option<String>,
    pub address: AddressDraft,
}

impl OrganizationDraft {
    #[must_use]
    pub fn to_organization(&self) -> Organization {
        Organization { name: self.name.clone(), category: self.category.clone(), address_id: None }
    }
}

/// One source row split into its entities.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Position of the row in the source array.
    pub index: usize,
    /// `id` field of the source row, if any.
    pub source_id: Option<i64>,
    pub winner: Winner,
    pub organization: Option<OrganizationDraft>,
    pub birth_address: Option<AddressDraft>,
    pub death_address: Option<AddressDraft>,
}

impl NormalizedRecord {
    /// Personal and organization address drafts, in that order.
    pub fn addresses(&self) -> impl Iterator<Item = &AddressDraft> {
        self.birth_address
            .iter()
            .chain(self.death_address.iter())
            .chain(self.organization.iter().map(|org| &org.address))
    }
}

/// A row rejected at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarantinedRow {
    pub index: usize,
    pub source_id: Option<i64>,
    pub reason: String,
}

/// Result of one normalization pass, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedDataset {
    pub records: Vec<NormalizedRecord>,
    pub quarantined: Vec<QuarantinedRow>,
}

impl NormalizedDataset {
    /// Distinct alpha-2 codes of every resolved address country.
    #[must_use]
    pub fn country_codes(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(NormalizedRecord::addresses)
            .filter_map(|address| address.country.as_ref())
            .map(|country| country.alpha_2.to_string())
            .collect()
    }

    /// Organization names, one entry per distinct name.
    #[must_use]
    pub fn distinct_organization_names(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .filter_map(|record| record.organization.as_ref())
            .map(|org| org.name.as_str())
            .collect()
    }

    /// Cities that will become one address each after deduplication.
    #[must_use]
    pub fn distinct_cities(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .flat_map(NormalizedRecord::addresses)
            .filter_map(AddressDraft::dedup_key)
            .collect()
    }
}

/// Normalize a whole dataset in one pass.
#[must_use]
pub fn normalize(rows: Vec<serde_json::Value>, resolver: &CountryResolver) -> NormalizedDataset {
    let mut dataset = NormalizedDataset::default();
    for (index, row) in rows.into_iter().enumerate() {
        let source_id = row.get("id").and_then(serde_json::Value::as_i64);
        let outcome = LaureateRecord::from_value(row)
            .and_then(|record| normalize_record(index, record, resolver));
        match outcome {
            Ok(record) => dataset.records.push(record),
            Err(e) => {
                tracing::warn!(index, ?source_id, error = %e, "quarantined malformed row");
                let reason = e.to_string();
                dataset.quarantined.push(QuarantinedRow { index, source_id, reason });
            },
        }
    }
    tracing::info!(
        records = dataset.records.len(),
        quarantined = dataset.quarantined.len(),
        "dataset normalized"
    );
    dataset
}

/// Split one validated record into winner, organization and address drafts.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`] if `born` or `died` is present but not `YYYY-MM-DD`.
pub fn normalize_record(
    index: usize,
    record: LaureateRecord,
    resolver: &CountryResolver,
) -> Result<NormalizedRecord> {
    let winner = Winner {
        firstname: record.firstname,
        surname: record.surname,
        born: parse_date("born", record.born.as_deref())?,
        died: parse_date("died", record.died.as_deref())?,
        gender: record.gender,
        year: record.year,
        category: record.category,
        motivation: record.motivation,
        overall_motivation: record.overallmotivation,
        organization_id: None,
        birth_address_id: None,
        death_address_id: None,
    };

    let organization = non_empty(record.country.as_deref()).map(|country_name| {
        OrganizationDraft {
            name: record.name.as_deref().map(str::trim).unwrap_or_default().to_owned(),
            category: None,
            address: AddressDraft {
                role: AddressRole::Organization,
                city: owned_non_empty(record.city.as_deref()),
                country: resolver.resolve_name(country_name).cloned(),
                coordinates: record.geo_point_2d.map(GeoPoint::from).unwrap_or_default(),
            },
        }
    });

    let birth_address = personal_address(
        AddressRole::Birth,
        CountryFields {
            alpha_2: record.borncountrycode.as_deref(),
            alpha_3: record.borncountrycode3.as_deref(),
            name: record.borncountry.as_deref(),
        },
        record.borncity.as_deref(),
        resolver,
    );
    let death_address = personal_address(
        AddressRole::Death,
        CountryFields {
            alpha_2: record.diedcountrycode.as_deref(),
            alpha_3: record.diedcountrycode3.as_deref(),
            name: record.diedcountry.as_deref(),
        },
        record.diedcity.as_deref(),
        resolver,
    );

    Ok(NormalizedRecord {
        index,
        source_id: record.id,
        winner,
        organization,
        birth_address,
        death_address,
    })
}

/// Country columns of one birth or death location.
struct CountryFields<'a> {
    alpha_2: Option<&'a str>,
    alpha_3: Option<&'a str>,
    name: Option<&'a str>,
}

/// Build a birth or death address if the record names a country for it.
///
/// Resolution order: alpha-2 code, then alpha-3 code, then the country name.
/// Each later field is only consulted when the earlier ones do not resolve.
fn personal_address(
    role: AddressRole,
    fields: CountryFields<'_>,
    city: Option<&str>,
    resolver: &CountryResolver,
) -> Option<AddressDraft> {
    let alpha_2 = non_empty(fields.alpha_2);
    let alpha_3 = non_empty(fields.alpha_3);
    let name = non_empty(fields.name);
    if alpha_2.is_none() && alpha_3.is_none() && name.is_none() {
        return None;
    }
    let country = alpha_2
        .and_then(|code| resolver.resolve_code(code))
        .or_else(|| alpha_3.and_then(|code| resolver.resolve_alpha3(code)))
        .or_else(|| name.and_then(|name| resolver.resolve_name(name)));
    Some(AddressDraft {
        role,
        city: owned_non_empty(city),
        country: country.cloned(),
        coordinates: GeoPoint::ORIGIN,
    })
}

/// Parse a `YYYY-MM-DD` date; absent or blank input is `None`, not an error.
///
/// # Errors
/// Returns [`CoreError::InvalidDate`] for any other unparseable value.
pub fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CoreError::InvalidDate { field, value: value.to_owned() })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn owned_non_empty(value: Option<&str>) -> Option<String> {
    non_empty(value).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hench() -> serde_json::Value {
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
            "motivation": "\"for their discoveries on the hormones of the adrenal cortex\"",
            "name": "Mayo Clinic",
            "city": "Rochester MN",
            "country": "USA",
            "geo_shape": null,
            "geo_point_2d": {"lon": -112.4943339159, "lat": 45.6875333395},
            "borncountrycode3": "USA",
            "diedcountrycode3": "JAM"
        })
    }

    fn resolver() -> &'static CountryResolver {
        CountryResolver::global()
    }

    #[test]
    fn splits_hench_into_entities() {
        let dataset = normalize(vec![hench()], resolver());
        assert!(dataset.quarantined.is_empty());
        let record = &dataset.records[0];
        assert_eq!(record.source_id, Some(351));
        assert_eq!(record.winner.surname.as_deref(), Some("Hench"));
        assert_eq!(record.winner.year, Some(1950));

        let birth = record.birth_address.as_ref().unwrap();
        assert_eq!(birth.role, AddressRole::Birth);
        assert_eq!(birth.city.as_deref(), Some("Pittsburgh PA"));
        assert_eq!(birth.country.as_ref().unwrap().name, "United States");
        assert_eq!(birth.coordinates, GeoPoint::ORIGIN);

        let death = record.death_address.as_ref().unwrap();
        assert_eq!(death.country.as_ref().unwrap().alpha_3, "JAM");

        let org = record.organization.as_ref().unwrap();
        assert_eq!(org.name, "Mayo Clinic");
        assert!(org.category.is_none());
        assert_eq!(org.address.role, AddressRole::Organization);
        assert_eq!(org.address.country.as_ref().unwrap().alpha_2, "US");
        assert_eq!(org.address.coordinates, GeoPoint::new(-112.4943339159, 45.6875333395));
    }

    #[test]
    fn birth_date_round_trips() {
        let dataset = normalize(vec![hench()], resolver());
        let born = dataset.records[0].winner.born.unwrap();
        assert_eq!(born, NaiveDate::from_ymd_opt(1896, 2, 28).unwrap());
        assert_eq!(born.format(DATE_FORMAT).to_string(), "1896-02-28");
    }

    #[test]
    fn empty_dates_are_none() {
        let mut row = hench();
        row["died"] = serde_json::json!("");
        row.as_object_mut().unwrap().remove("born");
        let dataset = normalize(vec![row], resolver());
        let winner = &dataset.records[0].winner;
        assert!(winner.born.is_none());
        assert!(winner.died.is_none());
    }

    #[test]
    fn missing_geo_point_defaults_to_origin() {
        let mut row = hench();
        row.as_object_mut().unwrap().remove("geo_point_2d");
        let dataset = normalize(vec![row], resolver());
        let org = dataset.records[0].organization.as_ref().unwrap();
        assert_eq!(org.address.coordinates, GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn absent_countries_produce_no_sub_entities() {
        let row = serde_json::json!({
            "id": 1,
            "firstname": "Marie",
            "surname": "Curie",
            "borncountry": "",
            "diedcountry": "",
            "country": "",
            "name": "Sorbonne"
        });
        let dataset = normalize(vec![row], resolver());
        let record = &dataset.records[0];
        assert!(record.birth_address.is_none());
        assert!(record.death_address.is_none());
        assert!(record.organization.is_none());
    }

    #[test]
    fn birth_country_name_used_when_code_missing() {
        let row = serde_json::json!({"borncountry": "Russia", "borncity": "Moscow"});
        let dataset = normalize(vec![row], resolver());
        let birth = dataset.records[0].birth_address.as_ref().unwrap();
        assert_eq!(birth.country.as_ref().unwrap().name, "Russian Federation");
    }

    #[test]
    fn alpha3_code_used_when_alpha2_missing_or_unknown() {
        let rows = vec![
            serde_json::json!({"diedcountrycode3": "JAM", "diedcountry": "Prussia"}),
            serde_json::json!({"borncountrycode": "XX", "borncountrycode3": "FRA"}),
        ];
        let dataset = normalize(rows, resolver());
        let death = dataset.records[0].death_address.as_ref().unwrap();
        assert_eq!(death.country.as_ref().unwrap().alpha_2, "JM");
        let birth = dataset.records[1].birth_address.as_ref().unwrap();
        assert_eq!(birth.country.as_ref().unwrap().name, "France");
    }

    #[test]
    fn unresolved_country_is_null_not_raw_string() {
        let row = serde_json::json!({"name": "Kaiser-Wilhelm-Institut", "country": "Prussia"});
        let dataset = normalize(vec![row], resolver());
        let org = dataset.records[0].organization.as_ref().unwrap();
        assert!(org.address.country.is_none());
    }

    #[test]
    fn malformed_rows_are_quarantined_and_pass_continues() {
        let rows = vec![
            serde_json::json!({"id": 10, "year": "1950"}),
            serde_json::json!({"id": 11, "born": "28/02/1896"}),
            serde_json::json!("not an object"),
            hench(),
        ];
        let dataset = normalize(rows, resolver());
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.records[0].index, 3);
        assert_eq!(dataset.quarantined.len(), 3);
        assert_eq!(dataset.quarantined[0].source_id, Some(10));
        assert!(dataset.quarantined[1].reason.contains("28/02/1896"));
        assert_eq!(dataset.quarantined[2].source_id, None);
    }

    #[test]
    fn dataset_helpers_deduplicate() {
        let mut second = hench();
        second["id"] = serde_json::json!(352);
        second["borncity"] = serde_json::json!("Rochester MN");
        let dataset = normalize(vec![hench(), second], resolver());

        assert_eq!(dataset.distinct_organization_names().len(), 1);
        let cities = dataset.distinct_cities();
        assert_eq!(cities.len(), 3);
        assert!(cities.contains("Rochester MN"));
        let codes: Vec<_> = dataset.country_codes().into_iter().collect();
        assert_eq!(codes, vec!["JM".to_owned(), "US".to_owned()]);
    }

    #[test]
    fn draft_becomes_owned_address() {
        let draft = AddressDraft {
            role: AddressRole::Death,
            city: Some("Ocho Rios".to_owned()),
            country: None,
            coordinates: GeoPoint::ORIGIN,
        };
        let address = draft.into_address(5);
        assert_eq!(address.owner, AddressOwner::Death { winner_id: 5 });
    }
}
