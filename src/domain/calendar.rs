use crate::domain::reservation::Reservation;
use chrono::{Datelike, NaiveDate};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;

/// One cell of the month grid. `day` is `None` for the leading and
/// trailing filler cells outside the month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayCell {
    pub day: Option<u32>,
    pub entries: Vec<String>,
}

/// A fixed 6x7, Monday-first month view.
#[derive(Debug)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => (next - first).num_days() as u32,
        // December of chrono's maximum year has no successor month.
        None => (NaiveDate::MAX - first).num_days() as u32 + 1,
    }
}

/// Builds the month view: each day cell collects "{marker} {name}" for
/// every reservation whose stay covers that day. Occupancy is half-open
/// (`arrival <= day < departure`), so the departure day itself is free.
pub fn build_month_grid(rows: &[Reservation], year: i32, month: u32) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let offset = first.weekday().num_days_from_monday() as usize;
    let ndays = days_in_month(year, month);

    let mut weeks = Vec::with_capacity(GRID_ROWS);
    for week in 0..GRID_ROWS {
        let mut cells = Vec::with_capacity(GRID_COLS);
        for col in 0..GRID_COLS {
            let slot = week * GRID_COLS + col;
            let day = (slot + 1).checked_sub(offset).map(|d| d as u32);
            let cell = match day {
                Some(d) if d >= 1 && d <= ndays => {
                    let date = NaiveDate::from_ymd_opt(year, month, d).unwrap();
                    let entries = rows
                        .iter()
                        .filter(|r| r.arrival_date <= date && date < r.departure_date)
                        .map(|r| format!("{} {}", r.platform.marker(), r.client_name))
                        .collect();
                    DayCell {
                        day: Some(d),
                        entries,
                    }
                }
                _ => DayCell::default(),
            };
            cells.push(cell);
        }
        weeks.push(cells);
    }

    MonthGrid { year, month, weeks }
}
