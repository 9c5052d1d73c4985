use laureates_core::{Address, AddressOwner, AddressRole, EntityId, GeoPoint, Stored};
use rusqlite::{Connection, OptionalExtension as _, params};

use super::{Storage, conversion_error, get_conn, log_row_error, parse_json_column};
use crate::error::{Result, StorageError};

const ADDRESS_COLUMNS: &str =
    "id, street, zip, city, country, lon, lat, role, winner_id, organization_id";

impl Storage {
    /// Insert an address exactly as given; no deduplication by city.
    ///
    /// # Errors
    /// Returns `Constraint` if the owner does not exist.
    pub fn insert_address(&self, address: &Address) -> Result<Stored<Address>> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let id = insert_address_row(&tx, address)?;
        tx.commit()?;
        fetch_address(&conn, id)?.ok_or_else(|| StorageError::not_found("address", id))
    }

    /// Get address by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_address(&self, id: EntityId) -> Result<Option<Stored<Address>>> {
        let conn = get_conn(&self.pool)?;
        fetch_address(&conn, id)
    }

    /// All addresses in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_addresses(&self) -> Result<Vec<Stored<Address>>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare(&format!("SELECT {ADDRESS_COLUMNS} FROM addresses ORDER BY id"))?;
        let addresses = stmt.query_map([], row_to_address)?.filter_map(log_row_error).collect();
        Ok(addresses)
    }
}

pub(super) fn insert_address_row(conn: &Connection, address: &Address) -> Result<EntityId> {
    let country = address.country.as_ref().map(serde_json::to_string).transpose()?;
    conn.execute(
        "INSERT INTO addresses
           (street, zip, city, country, lon, lat, role, winner_id, organization_id)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            address.street,
            address.zip,
            address.city,
            country,
            address.coordinates.lon,
            address.coordinates.lat,
            address.owner.role().as_str(),
            address.owner.winner_id(),
            address.owner.organization_id(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Oldest address with exactly this city.
pub(super) fn find_address_by_city(conn: &Connection, city: &str) -> Result<Option<EntityId>> {
    let id = conn
        .query_row(
            "SELECT id FROM addresses WHERE city = ?1 ORDER BY id LIMIT 1",
            params![city],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

fn fetch_address(conn: &Connection, id: EntityId) -> Result<Option<Stored<Address>>> {
    let address = conn
        .query_row(
            &format!("SELECT {ADDRESS_COLUMNS} FROM addresses WHERE id = ?1"),
            params![id],
            row_to_address,
        )
        .optional()?;
    Ok(address)
}

fn row_to_address(row: &rusqlite::Row<'_>) -> rusqlite::Result<Stored<Address>> {
    let role: AddressRole =
        row.get::<_, String>(7)?.parse().map_err(|e| conversion_error(7, e))?;
    let owner = AddressOwner::from_columns(role, row.get(8)?, row.get(9)?)
        .map_err(|e| conversion_error(8, e))?;
    Ok(Stored::new(
        row.get(0)?,
        Address {
            street: row.get(1)?,
            zip: row.get(2)?,
            city: row.get(3)?,
            country: parse_json_column(row, 4)?,
            coordinates: GeoPoint::new(row.get(5)?, row.get(6)?),
            owner,
        },
    ))
}
