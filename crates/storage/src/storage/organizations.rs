use laureates_core::{EntityId, Organization, Stored};
use rusqlite::{Connection, OptionalExtension as _, params};

use super::{Storage, get_conn, log_row_error};
use crate::error::{Result, StorageError};

impl Storage {
    /// Insert an organization exactly as given; no deduplication by name.
    ///
    /// # Errors
    /// Returns `Constraint` if `address_id` references a missing address.
    pub fn insert_organization(&self, organization: &Organization) -> Result<Stored<Organization>> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let id = insert_organization_row(&tx, organization)?;
        tx.commit()?;
        fetch_organization(&conn, id)?.ok_or_else(|| StorageError::not_found("organization", id))
    }

    /// Get organization by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_organization(&self, id: EntityId) -> Result<Option<Stored<Organization>>> {
        let conn = get_conn(&self.pool)?;
        fetch_organization(&conn, id)
    }

    /// All organizations in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_organizations(&self) -> Result<Vec<Stored<Organization>>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT id, name, category, address_id FROM organizations ORDER BY id")?;
        let organizations =
            stmt.query_map([], row_to_organization)?.filter_map(log_row_error).collect();
        Ok(organizations)
    }
}

pub(super) fn insert_organization_row(
    conn: &Connection,
    organization: &Organization,
) -> Result<EntityId> {
    conn.execute(
        "INSERT INTO organizations (name, category, address_id) VALUES (?1, ?2, ?3)",
        params![organization.name, organization.category, organization.address_id],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Oldest organization with exactly this name.
pub(super) fn find_organization_by_name(conn: &Connection, name: &str) -> Result<Option<EntityId>> {
    let id = conn
        .query_row(
            "SELECT id FROM organizations WHERE name = ?1 ORDER BY id LIMIT 1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

pub(super) fn set_organization_address(
    conn: &Connection,
    organization_id: EntityId,
    address_id: EntityId,
) -> Result<()> {
    conn.execute(
        "UPDATE organizations SET address_id = ?1 WHERE id = ?2",
        params![address_id, organization_id],
    )?;
    Ok(())
}

fn fetch_organization(conn: &Connection, id: EntityId) -> Result<Option<Stored<Organization>>> {
    let organization = conn
        .query_row(
            "SELECT id, name, category, address_id FROM organizations WHERE id = ?1",
            params![id],
            row_to_organization,
        )
        .optional()?;
    Ok(organization)
}

fn row_to_organization(row: &rusqlite::Row<'_>) -> rusqlite::Result<Stored<Organization>> {
    Ok(Stored::new(
        row.get(0)?,
        Organization { name: row.get(1)?, category: row.get(2)?, address_id: row.get(3)? },
    ))
}
