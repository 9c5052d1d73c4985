//! One-transaction import of a normalized record.

use laureates_core::{AddressDraft, EntityId, NormalizedRecord, OrganizationDraft};
use rusqlite::Connection;
use serde::Serialize;

use super::addresses::{find_address_by_city, insert_address_row};
use super::organizations::{
    find_organization_by_name, insert_organization_row, set_organization_address,
};
use super::winners::{PersonalAddressColumn, insert_winner_row, link_personal_address};
use super::{Storage, get_conn};
use crate::error::Result;

/// Identifier of a related row and whether an existing row was reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Linked {
    pub id: EntityId,
    pub reused: bool,
}

/// Rows written (or reused) for one imported record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportedIds {
    pub winner_id: EntityId,
    pub organization: Option<Linked>,
    /// Only set when the organization was created by this record.
    pub organization_address: Option<Linked>,
    pub birth_address: Option<Linked>,
    pub death_address: Option<Linked>,
}

impl Storage {
    /// Persist a normalized record in a single transaction.
    ///
    /// Organizations are reused by name. Birth and death addresses are reused
    /// by city; a reused address keeps its original owner and the winner
    /// still links to it. A new organization always gets a fresh address.
    ///
    /// # Errors
    /// Returns error if any write fails; nothing from this record is kept then.
    pub fn import_record(&self, record: &NormalizedRecord) -> Result<ImportedIds> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;

        let (organization, organization_address) = match record.organization.as_ref() {
            Some(draft) => {
                let (org, address) = resolve_organization(&tx, draft)?;
                (Some(org), address)
            },
            None => (None, None),
        };

        let mut winner = record.winner.clone();
        winner.organization_id = organization.map(|org| org.id);
        let winner_id = insert_winner_row(&tx, &winner)?;

        let birth_address = record
            .birth_address
            .as_ref()
            .map(|draft| {
                attach_personal_address(&tx, draft, winner_id, PersonalAddressColumn::Birth)
            })
            .transpose()?;
        let death_address = record
            .death_address
            .as_ref()
            .map(|draft| {
                attach_personal_address(&tx, draft, winner_id, PersonalAddressColumn::Death)
            })
            .transpose()?;

        tx.commit()?;

        tracing::debug!(
            index = record.index,
            winner_id,
            organization = ?organization,
            "record imported"
        );

        Ok(ImportedIds {
            winner_id,
            organization,
            organization_address,
            birth_address,
            death_address,
        })
    }
}

fn resolve_organization(
    conn: &Connection,
    draft: &OrganizationDraft,
) -> Result<(Linked, Option<Linked>)> {
    if let Some(id) = find_organization_by_name(conn, &draft.name)? {
        tracing::debug!(id, name = %draft.name, "organization reused");
        return Ok((Linked { id, reused: true }, None));
    }
    // No city lookup here: the address carries the organization's own point.
    let id = insert_organization_row(conn, &draft.to_organization())?;
    let address_id = insert_address_row(conn, &draft.address.clone().into_address(id))?;
    set_organization_address(conn, id, address_id)?;
    Ok((Linked { id, reused: false }, Some(Linked { id: address_id, reused: false })))
}

fn attach_personal_address(
    conn: &Connection,
    draft: &AddressDraft,
    winner_id: EntityId,
    column: PersonalAddressColumn,
) -> Result<Linked> {
    let address = find_or_insert_address(conn, draft, winner_id)?;
    link_personal_address(conn, winner_id, column, address.id)?;
    Ok(address)
}

fn find_or_insert_address(
    conn: &Connection,
    draft: &AddressDraft,
    owner_id: EntityId,
) -> Result<Linked> {
    if let Some(city) = draft.dedup_key() {
        if let Some(id) = find_address_by_city(conn, city)? {
            tracing::debug!(id, city, role = %draft.role, "address reused");
            return Ok(Linked { id, reused: true });
        }
    }
    let id = insert_address_row(conn, &draft.clone().into_address(owner_id))?;
    Ok(Linked { id, reused: false })
}
