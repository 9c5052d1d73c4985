//! Persisted entities: winners, addresses, organizations.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::country::Country;
use crate::error::CoreError;
use crate::geo::GeoPoint;

/// Row identifier assigned by the store.
pub type EntityId = i64;

/// A stored entity together with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: EntityId,
    #[serde(flatten)]
    pub entity: T,
}

impl<T> Stored<T> {
    #[must_use]
    pub const fn new(id: EntityId, entity: T) -> Self {
        Self { id, entity }
    }
}

/// A prize winner as recorded at award time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Winner {
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub born: Option<NaiveDate>,
    pub died: Option<NaiveDate>,
    pub gender: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub motivation: Option<String>,
    pub overall_motivation: Option<String>,
    /// Affiliation at the time of the award.
    pub organization_id: Option<EntityId>,
    pub birth_address_id: Option<EntityId>,
    pub death_address_id: Option<EntityId>,
}

/// Which kind of entity an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressRole {
    Birth,
    Death,
    Organization,
}

impl AddressRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Birth => "birth",
            Self::Death => "death",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for AddressRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "birth" => Ok(Self::Birth),
            "death" => Ok(Self::Death),
            "organization" => Ok(Self::Organization),
            _ => Err(CoreError::InvalidRole(s.to_owned())),
        }
    }
}

/// The single entity owning an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum AddressOwner {
    Birth { winner_id: EntityId },
    Death { winner_id: EntityId },
    Organization { organization_id: EntityId },
}

impl AddressOwner {
    /// Build the owner for `role` pointing at `owner_id`.
    #[must_use]
    pub const fn for_role(role: AddressRole, owner_id: EntityId) -> Self {
        match role {
            AddressRole::Birth => Self::Birth { winner_id: owner_id },
            AddressRole::Death => Self::Death { winner_id: owner_id },
            AddressRole::Organization => Self::Organization { organization_id: owner_id },
        }
    }

    /// Rebuild an owner from its stored columns.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInput`] when the foreign key matching the
    /// role is missing or the other one is also set.
    pub fn from_columns(
        role: AddressRole,
        winner_id: Option<EntityId>,
        organization_id: Option<EntityId>,
    ) -> Result<Self, CoreError> {
        match (role, winner_id, organization_id) {
            (AddressRole::Birth | AddressRole::Death, Some(id), None)
            | (AddressRole::Organization, None, Some(id)) => Ok(Self::for_role(role, id)),
            _ => Err(CoreError::InvalidInput(format!(
                "address role {role} with winner_id={winner_id:?} \
                 organization_id={organization_id:?}"
            ))),
        }
    }

    #[must_use]
    pub const fn role(&self) -> AddressRole {
        match *self {
            Self::Birth { .. } => AddressRole::Birth,
            Self::Death { .. } => AddressRole::Death,
            Self::Organization { .. } => AddressRole::Organization,
        }
    }

    #[must_use]
    pub const fn winner_id(&self) -> Option<EntityId> {
        match *self {
            Self::Birth { winner_id } | Self::Death { winner_id } => Some(winner_id),
            Self::Organization { .. } => None,
        }
    }

    #[must_use]
    pub const fn organization_id(&self) -> Option<EntityId> {
        match *self {
            Self::Organization { organization_id } => Some(organization_id),
            Self::Birth { .. } | Self::Death { .. } => None,
        }
    }
}

/// A postal location owned by exactly one winner or organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Canonical record or nothing; never a raw string.
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub coordinates: GeoPoint,
    pub owner: AddressOwner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub address_id: Option<EntityId>,
}

/// One flattened row of winner, affiliated organization and its address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinnerView {
    pub id: EntityId,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub born: Option<NaiveDate>,
    pub died: Option<NaiveDate>,
    pub gender: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub motivation: Option<String>,
    pub organization: String,
    pub country: Option<Country>,
    pub coordinates: GeoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_serializes_with_role_tag() {
        let json = serde_json::to_value(AddressOwner::Birth { winner_id: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({"role": "birth", "winner_id": 7}));

        let json = serde_json::json!({"role": "organization", "organization_id": 3});
        let owner: AddressOwner = serde_json::from_value(json).unwrap();
        assert_eq!(owner.organization_id(), Some(3));
        assert_eq!(owner.winner_id(), None);
    }

    #[test]
    fn owner_from_columns_requires_exactly_one_key() {
        assert_eq!(
            AddressOwner::from_columns(AddressRole::Death, Some(1), None).unwrap(),
            AddressOwner::Death { winner_id: 1 }
        );
        assert!(AddressOwner::from_columns(AddressRole::Birth, Some(1), Some(2)).is_err());
        assert!(AddressOwner::from_columns(AddressRole::Organization, Some(1), None).is_err());
        assert!(AddressOwner::from_columns(AddressRole::Birth, None, None).is_err());
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [AddressRole::Birth, AddressRole::Death, AddressRole::Organization] {
            assert_eq!(role.as_str().parse::<AddressRole>().unwrap(), role);
        }
        assert!("born".parse::<AddressRole>().is_err());
    }

    #[test]
    fn stored_flattens_id() {
        let stored = Stored::new(
            4,
            Organization { name: "Mayo Clinic".to_owned(), category: None, address_id: Some(9) },
        );
        let json = serde_json::to_value(&stored).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 4, "name": "Mayo Clinic", "category": null, "address_id": 9})
        );
    }

    #[test]
    fn address_payload_defaults_coordinates() {
        let address: Address = serde_json::from_value(serde_json::json!({
            "city": "Ocho Rios",
            "owner": {"role": "death", "winner_id": 1}
        }))
        .unwrap();
        assert_eq!(address.coordinates, GeoPoint::ORIGIN);
        assert!(address.country.is_none());
    }

    #[test]
    fn winner_dates_serialize_as_iso() {
        let winner = Winner {
            born: NaiveDate::from_ymd_opt(1896, 2, 28),
            ..Winner::default()
        };
        let json = serde_json::to_value(&winner).unwrap();
        assert_eq!(json["born"], "1896-02-28");
    }
}
