//! Repository for booking rows.
//!
//! Keeps the legacy spreadsheet contract: the table is read in full and
//! overwritten in full on every mutation. Callers load the vector,
//! mutate it, and hand the whole thing back to `save_all`.

use crate::db::connection::Database;
use crate::domain::reservation::{derive_rows, RawRow, Reservation};
use crate::errors::ServerError;
use rusqlite::params;

/// Full table, insertion order, no validation applied.
pub fn load_raw(db: &Database) -> Result<Vec<RawRow>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "SELECT client_name, platform, phone, arrival_date, departure_date,
                        gross_price, net_price
                 FROM reservations ORDER BY id",
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RawRow {
                    client_name: row.get(0)?,
                    platform: row.get(1)?,
                    phone: row.get(2)?,
                    arrival_date: row.get(3)?,
                    departure_date: row.get(4)?,
                    gross_price: row.get(5)?,
                    net_price: row.get(6)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

/// Full table with derived fields computed; malformed rows dropped.
pub fn load(db: &Database) -> Result<Vec<Reservation>, ServerError> {
    Ok(derive_rows(load_raw(db)?))
}

/// Replaces the whole table in one transaction, so a failure never
/// leaves a partial write behind. Only raw columns are stored.
pub fn save_all(db: &Database, rows: &[Reservation]) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        tx.execute("DELETE FROM reservations", [])
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        for r in rows {
            tx.execute(
                "INSERT INTO reservations
                   (client_name, platform, phone, arrival_date, departure_date,
                    gross_price, net_price)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    r.client_name,
                    r.platform.label(),
                    r.phone,
                    r.arrival_date.format("%Y-%m-%d").to_string(),
                    r.departure_date.format("%Y-%m-%d").to_string(),
                    r.gross_price,
                    r.net_price,
                ],
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        }

        tx.commit()
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}
