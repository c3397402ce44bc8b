//! Append-only audit trail of SMS send attempts.

use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

#[derive(Debug)]
pub struct SmsLogEntry {
    pub sent_at: NaiveDateTime,
    pub recipient: String,
    pub message: String,
    pub success: bool,
}

pub fn append_entry(
    conn: &Connection,
    sent_at: NaiveDateTime,
    recipient: &str,
    message: &str,
    success: bool,
) -> Result<(), ServerError> {
    conn.execute(
        "INSERT INTO sms_log (sent_at, recipient, message, success) VALUES (?1, ?2, ?3, ?4)",
        params![sent_at, recipient, message, success],
    )
    .map_err(|e| ServerError::DbError(format!("append sms log failed: {e}")))?;
    Ok(())
}

/// Most recent entries first.
pub fn recent_entries(conn: &Connection) -> Result<Vec<SmsLogEntry>, ServerError> {
    let mut stmt = conn
        .prepare(
            "SELECT sent_at, recipient, message, success
             FROM sms_log ORDER BY id DESC LIMIT 200",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(SmsLogEntry {
                sent_at: row.get(0)?,
                recipient: row.get(1)?,
                message: row.get(2)?,
                success: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
