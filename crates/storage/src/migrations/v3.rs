//! Migration v3: winner links to birth and death addresses
//!
//! Reused addresses keep their first owner, so winners point at them directly.

pub(super) const BIRTH_ADDRESS: &str = "birth_address_id";
pub(super) const DEATH_ADDRESS: &str = "death_address_id";
pub(super) const ADDRESS_REF_DEF: &str = "INTEGER REFERENCES addresses(id)";
