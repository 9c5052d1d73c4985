use laureates_core::{EntityId, Stored, Winner};
use rusqlite::{Connection, OptionalExtension as _, params};

use super::{Storage, format_date, get_conn, log_row_error, parse_date_column};
use crate::error::{Result, StorageError};

const WINNER_COLUMNS: &str = "id, firstname, surname, born, died, gender, year, category, \
     motivation, overall_motivation, organization_id, birth_address_id, death_address_id";

impl Storage {
    /// Insert a winner exactly as given and return the stored row.
    ///
    /// # Errors
    /// Returns `Constraint` if a referenced organization or address does not exist.
    pub fn insert_winner(&self, winner: &Winner) -> Result<Stored<Winner>> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let id = insert_winner_row(&tx, winner)?;
        tx.commit()?;
        fetch_winner(&conn, id)?.ok_or_else(|| StorageError::not_found("winner", id))
    }

    /// Get winner by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_winner(&self, id: EntityId) -> Result<Option<Stored<Winner>>> {
        let conn = get_conn(&self.pool)?;
        fetch_winner(&conn, id)
    }

    /// All winners in insertion order.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_winners(&self) -> Result<Vec<Stored<Winner>>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("SELECT {WINNER_COLUMNS} FROM winners ORDER BY id"))?;
        let winners = stmt.query_map([], row_to_winner)?.filter_map(log_row_error).collect();
        Ok(winners)
    }
}

pub(super) fn insert_winner_row(conn: &Connection, winner: &Winner) -> Result<EntityId> {
    conn.execute(
        "INSERT INTO winners
           (firstname, surname, born, died, gender, year, category, motivation,
            overall_motivation, organization_id, birth_address_id, death_address_id)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            winner.firstname,
            winner.surname,
            format_date(winner.born),
            format_date(winner.died),
            winner.gender,
            winner.year,
            winner.category,
            winner.motivation,
            winner.overall_motivation,
            winner.organization_id,
            winner.birth_address_id,
            winner.death_address_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Point a winner at a birth or death address inside an import transaction.
pub(super) fn link_personal_address(
    conn: &Connection,
    winner_id: EntityId,
    column: PersonalAddressColumn,
    address_id: EntityId,
) -> Result<()> {
    let sql = match column {
        PersonalAddressColumn::Birth => "UPDATE winners SET birth_address_id = ?1 WHERE id = ?2",
        PersonalAddressColumn::Death => "UPDATE winners SET death_address_id = ?1 WHERE id = ?2",
    };
    conn.execute(sql, params![address_id, winner_id])?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub(super) enum PersonalAddressColumn {
    Birth,
    Death,
}

fn fetch_winner(conn: &Connection, id: EntityId) -> Result<Option<Stored<Winner>>> {
    let winner = conn
        .query_row(
            &format!("SELECT {WINNER_COLUMNS} FROM winners WHERE id = ?1"),
            params![id],
            row_to_winner,
        )
        .optional()?;
    Ok(winner)
}

fn row_to_winner(row: &rusqlite::Row<'_>) -> rusqlite::Result<Stored<Winner>> {
    Ok(Stored::new(
        row.get(0)?,
        Winner {
            firstname: row.get(1)?,
            surname: row.get(2)?,
            born: parse_date_column(row, 3)?,
            died: parse_date_column(row, 4)?,
            gender: row.get(5)?,
            year: row.get(6)?,
            category: row.get(7)?,
            motivation: row.get(8)?,
            overall_motivation: row.get(9)?,
            organization_id: row.get(10)?,
            birth_address_id: row.get(11)?,
            death_address_id: row.get(12)?,
        },
    ))
}
