use laureates_core::{Country, GeoPoint, WinnerView};
use serde::Serialize;

use super::{Storage, get_conn, log_row_error, parse_date_column, parse_json_column};
use crate::error::Result;

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub winners: u64,
    pub addresses: u64,
    pub organizations: u64,
}

impl Storage {
    /// Winners joined through their organization to its address.
    ///
    /// Winners without an organization, or whose organization has no
    /// address, are left out. Identical rows are collapsed.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn winner_view(&self) -> Result<Vec<WinnerView>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT w.id, w.firstname, w.surname, w.born, w.died, w.gender, w.year,
                    w.category, w.motivation, o.name, a.country, a.lon, a.lat
               FROM winners w
               JOIN organizations o ON o.id = w.organization_id
               JOIN addresses a ON a.id = o.address_id
               ORDER BY w.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(WinnerView {
                    id: row.get(0)?,
                    firstname: row.get(1)?,
                    surname: row.get(2)?,
                    born: parse_date_column(row, 3)?,
                    died: parse_date_column(row, 4)?,
                    gender: row.get(5)?,
                    year: row.get(6)?,
                    category: row.get(7)?,
                    motivation: row.get(8)?,
                    organization: row.get(9)?,
                    country: parse_json_column(row, 10)?,
                    coordinates: GeoPoint::new(row.get(11)?, row.get(12)?),
                })
            })?
            .filter_map(log_row_error)
            .collect();
        Ok(rows)
    }

    /// Distinct countries stored on any address, sorted by name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn distinct_countries(&self) -> Result<Vec<Country>> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare("SELECT DISTINCT country FROM addresses WHERE country IS NOT NULL")?;
        let mut countries: Vec<Country> = stmt
            .query_map([], |row| parse_json_column(row, 0))?
            .filter_map(log_row_error)
            .flatten()
            .collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.alpha_2.cmp(&b.alpha_2)));
        countries.dedup();
        Ok(countries)
    }

    /// Row counts for winners, addresses and organizations.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let conn = get_conn(&self.pool)?;
        let stats = conn.query_row(
            "SELECT (SELECT COUNT(*) FROM winners),
                    (SELECT COUNT(*) FROM addresses),
                    (SELECT COUNT(*) FROM organizations)",
            [],
            |row| {
                Ok(StoreStats {
                    winners: row.get(0)?,
                    addresses: row.get(1)?,
                    organizations: row.get(2)?,
                })
            },
        )?;
        Ok(stats)
    }
}
