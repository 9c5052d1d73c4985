//! Core types for laureates
//!
//! Domain entities, the source record shape, the reference country resolver
//! and the record normalizer. Shared by the storage, service and HTTP crates.

pub mod constants;
pub mod country;
mod entity;
pub mod env_config;
mod error;
mod geo;
pub mod normalize;
mod record;

pub use country::{Country, CountryResolver, NameLookup};
pub use entity::*;
pub use error::*;
pub use geo::GeoPoint;
pub use normalize::{
    AddressDraft, NormalizedDataset, NormalizedRecord, OrganizationDraft, QuarantinedRow,
    normalize, normalize_record,
};
pub use record::{LaureateRecord, RawGeoPoint, load_dataset, parse_dataset};
