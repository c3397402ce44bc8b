use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Booking channel. Only used for categorization and the calendar
/// color marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Booking,
    Airbnb,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Booking, Platform::Airbnb, Platform::Other];

    /// Case-insensitive parse. The legacy spreadsheets used the French
    /// label "Autre"; anything unrecognized also falls back to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "booking" => Platform::Booking,
            "airbnb" => Platform::Airbnb,
            _ => Platform::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Booking => "Booking",
            Platform::Airbnb => "Airbnb",
            Platform::Other => "Other",
        }
    }

    /// Colored square shown next to guest names on the calendar.
    pub fn marker(&self) -> &'static str {
        match self {
            Platform::Booking => "🟦",
            Platform::Airbnb => "🟥",
            Platform::Other => "🟩",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A booking row as it comes out of storage, before any validation.
/// Dates are kept as raw text so that malformed values can be dropped
/// by the deriver instead of failing the whole load.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub client_name: String,
    pub platform: String,
    pub phone: String,
    pub arrival_date: Option<String>,
    pub departure_date: Option<String>,
    pub gross_price: Option<f64>,
    pub net_price: Option<f64>,
}

/// A booking with its derived fields filled in. The derived fields are
/// recomputed on every load and are never authoritative in storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub client_name: String,
    pub platform: Platform,
    pub phone: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub gross_price: f64,
    pub net_price: f64,
    pub charges: f64,
    pub margin_pct: f64,
    pub nights: i64,
    pub year: i32,
    pub month: u32,
}

impl Reservation {
    /// Builds a reservation from its raw fields, computing everything
    /// derived. Prices are rounded to 2 decimals on the way in.
    pub fn new(
        client_name: String,
        platform: Platform,
        phone: String,
        arrival_date: NaiveDate,
        departure_date: NaiveDate,
        gross_price: f64,
        net_price: f64,
    ) -> Self {
        let gross_price = round2(gross_price);
        let net_price = round2(net_price);
        let charges = round2(gross_price - net_price);
        let margin_pct = if gross_price == 0.0 {
            0.0
        } else {
            round2(charges / gross_price * 100.0)
        };
        let nights = (departure_date - arrival_date).num_days();

        Reservation {
            client_name,
            platform,
            phone,
            year: arrival_date.year(),
            month: arrival_date.month(),
            arrival_date,
            departure_date,
            gross_price,
            net_price,
            charges,
            margin_pct,
            nights,
        }
    }
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// The legacy spreadsheets held both ISO and French day-first dates.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

/// Field deriver: turns raw storage rows into display-ready
/// reservations. Rows with missing or unparsable dates are silently
/// dropped; missing prices default to zero. Pure function, no I/O.
pub fn derive_rows(raw: Vec<RawRow>) -> Vec<Reservation> {
    raw.into_iter().filter_map(derive_row).collect()
}

fn derive_row(row: RawRow) -> Option<Reservation> {
    let arrival = parse_date(row.arrival_date.as_deref()?)?;
    let departure = parse_date(row.departure_date.as_deref()?)?;

    Some(Reservation::new(
        row.client_name,
        Platform::parse(&row.platform),
        row.phone,
        arrival,
        departure,
        row.gross_price.unwrap_or(0.0),
        row.net_price.unwrap_or(0.0),
    ))
}
