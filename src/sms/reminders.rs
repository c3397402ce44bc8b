//! Next-day arrival reminders.
//!
//! Picks the reservations arriving tomorrow, sends each guest the fixed
//! welcome message through the gateway, and appends every attempt to the
//! audit log. Send failures are recorded and surfaced as warnings; they
//! never abort the run.

use crate::db::connection::Database;
use crate::db::sms_log;
use crate::domain::reservation::Reservation;
use crate::errors::ServerError;
use crate::sms::gateway::SmsGateway;
use chrono::{Duration, Local, NaiveDate};

#[derive(Debug)]
pub struct ReminderOutcome {
    pub client_name: String,
    pub recipient: String,
    pub error: Option<String>,
}

impl ReminderOutcome {
    pub fn sent(&self) -> bool {
        self.error.is_none()
    }
}

/// Numbers without an international prefix are assumed French.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    let last_nine = if digits.len() > 9 {
        &digits[digits.len() - 9..]
    } else {
        &digits
    };
    format!("+33{last_nine}")
}

/// The fixed welcome template sent the evening before arrival.
pub fn arrival_reminder(reservation: &Reservation) -> String {
    format!(
        "Bonjour {},\n\
         Nous sommes heureux de vous accueillir demain a Nice.\n\
         Un emplacement de parking est a votre disposition.\n\
         Merci de nous indiquer votre heure approximative d'arrivee.\n\
         Bon voyage et a demain !\n\
         Annick & Charley",
        reservation.client_name
    )
}

pub fn due_tomorrow(rows: &[Reservation], today: NaiveDate) -> Vec<&Reservation> {
    let tomorrow = today + Duration::days(1);
    rows.iter().filter(|r| r.arrival_date == tomorrow).collect()
}

/// Runs the reminder round for `today + 1`. Guests without a phone
/// number are reported as skipped, not messaged. After a round with at
/// least one send attempt, the owner gets one summary message listing
/// the per-guest results.
pub fn send_arrival_reminders(
    db: &Database,
    gateway: &dyn SmsGateway,
    rows: &[Reservation],
    today: NaiveDate,
) -> Result<Vec<ReminderOutcome>, ServerError> {
    let mut outcomes = Vec::new();

    for reservation in due_tomorrow(rows, today) {
        if reservation.phone.trim().is_empty() {
            outcomes.push(ReminderOutcome {
                client_name: reservation.client_name.clone(),
                recipient: String::new(),
                error: Some("no phone number on file".to_string()),
            });
            continue;
        }

        let recipient = normalize_phone(&reservation.phone);
        let message = arrival_reminder(reservation);
        let error = gateway.send(&message).err().map(|e| e.to_string());

        db.with_conn(|conn| {
            sms_log::append_entry(
                conn,
                Local::now().naive_local(),
                &recipient,
                &message,
                error.is_none(),
            )
        })?;

        outcomes.push(ReminderOutcome {
            client_name: reservation.client_name.clone(),
            recipient,
            error,
        });
    }

    let attempted = outcomes.iter().any(|o| !o.recipient.is_empty());
    if attempted {
        let lines: Vec<String> = outcomes
            .iter()
            .map(|o| {
                let target = if o.recipient.is_empty() {
                    "pas de numero"
                } else {
                    o.recipient.as_str()
                };
                format!(
                    "{} {} -> {}",
                    if o.sent() { "OK" } else { "ECHEC" },
                    o.client_name,
                    target
                )
            })
            .collect();
        let summary = format!("Journal des SMS envoyes :\n{}", lines.join("\n"));
        let success = gateway.send(&summary).is_ok();

        db.with_conn(|conn| {
            sms_log::append_entry(conn, Local::now().naive_local(), "owner", &summary, success)
        })?;
    }

    Ok(outcomes)
}
