use crate::db::connection::Database;
use crate::db::{reservations, sms_log};
use crate::domain::calendar::build_month_grid;
use crate::domain::report::{client_summaries, monthly_figures, totals};
use crate::domain::reservation::{parse_date, Platform, Reservation};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, redirect_response, ResultResp};
use crate::sms::SmsGateway;
use crate::spreadsheets::export_reservations_xlsx;
use crate::templates::pages;
use astra::Request;
use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;
use std::io::Read;

/// Everything a request handler needs: the database handle and the
/// outbound SMS boundary.
pub struct App {
    pub db: Database,
    pub sms: Box<dyn SmsGateway>,
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let rows = reservations::load(&app.db)?;
            let t = totals(&rows);
            html_response(pages::reservations_page(&rows, &t))
        }

        ("GET", "/add") => html_response(pages::add_page()),

        ("POST", "/add") => {
            let form = parse_form(&mut req)?;
            let new = reservation_from_form(&form)?;

            let mut rows = reservations::load(&app.db)?;
            rows.push(new);
            reservations::save_all(&app.db, &rows)?;

            redirect_response("/")
        }

        ("GET", "/edit") => {
            let params = parse_query(&req);
            let rows = reservations::load(&app.db)?;

            match params.get("id") {
                None => html_response(pages::edit_list_page(&rows)),
                Some(raw) => {
                    let id = parse_row_id(raw)?;
                    let reservation = rows.get(id).ok_or(ServerError::NotFound)?;
                    html_response(pages::edit_form_page(id, reservation))
                }
            }
        }

        ("POST", "/edit") => {
            let form = parse_form(&mut req)?;
            let id = parse_row_id(form.get("id").map(String::as_str).unwrap_or(""))?;
            let updated = reservation_from_form(&form)?;

            let mut rows = reservations::load(&app.db)?;
            if id >= rows.len() {
                return Err(ServerError::NotFound);
            }
            rows[id] = updated;
            reservations::save_all(&app.db, &rows)?;

            redirect_response("/")
        }

        ("POST", "/delete") => {
            let form = parse_form(&mut req)?;
            let id = parse_row_id(form.get("id").map(String::as_str).unwrap_or(""))?;

            let mut rows = reservations::load(&app.db)?;
            if id >= rows.len() {
                return Err(ServerError::NotFound);
            }
            rows.remove(id);
            reservations::save_all(&app.db, &rows)?;

            redirect_response("/edit")
        }

        ("GET", "/calendar") => {
            let params = parse_query(&req);
            let today = Local::now().date_naive();

            let year = match params.get("year") {
                Some(v) => v
                    .parse::<i32>()
                    .map_err(|_| ServerError::BadRequest("invalid year".into()))?,
                None => today.year(),
            };
            let month = match params.get("month") {
                Some(v) => v
                    .parse::<u32>()
                    .map_err(|_| ServerError::BadRequest("invalid month".into()))?,
                None => today.month(),
            };
            if !(1..=12).contains(&month) {
                return Err(ServerError::BadRequest(
                    "month must be between 1 and 12".into(),
                ));
            }
            if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
                return Err(ServerError::BadRequest("invalid year".into()));
            }

            let rows = reservations::load(&app.db)?;
            let grid = build_month_grid(&rows, year, month);
            html_response(pages::calendar_page(&grid))
        }

        ("GET", "/report") => {
            let rows = reservations::load(&app.db)?;
            let figures = monthly_figures(&rows);
            let t = totals(&rows);
            html_response(pages::report_page(&figures, &t))
        }

        ("GET", "/clients") => {
            let rows = reservations::load(&app.db)?;
            let clients = client_summaries(&rows);
            html_response(pages::clients_page(&clients))
        }

        ("GET", "/sms-history") => {
            let entries = app.db.with_conn(|conn| sms_log::recent_entries(conn))?;
            html_response(pages::sms_history_page(None, &entries))
        }

        ("POST", "/sms/send-reminders") => {
            let rows = reservations::load(&app.db)?;
            let today = Local::now().date_naive();

            // Gateway failures come back inside the outcomes; only a
            // database failure aborts here.
            let outcomes =
                crate::sms::send_arrival_reminders(&app.db, app.sms.as_ref(), &rows, today)?;

            let entries = app.db.with_conn(|conn| sms_log::recent_entries(conn))?;
            html_response(pages::sms_history_page(Some(&outcomes), &entries))
        }

        ("GET", "/export") => {
            let rows = reservations::load(&app.db)?;
            export_reservations_xlsx(&rows)
        }

        ("GET", "/api/reservations") => {
            let rows = reservations::load(&app.db)?;
            json_response(&rows)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn parse_row_id(raw: &str) -> Result<usize, ServerError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ServerError::BadRequest("invalid reservation id".into()))
}

fn parse_price(form: &HashMap<String, String>, field: &str) -> Result<f64, ServerError> {
    let raw = form.get(field).map(|s| s.trim()).unwrap_or("");
    if raw.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid {}", field.replace('_', " "))))?;
    if value < 0.0 {
        return Err(ServerError::BadRequest(format!(
            "{} cannot be negative",
            field.replace('_', " ")
        )));
    }
    Ok(value)
}

/// Validates a submitted form and builds the reservation with its
/// derived fields. Enforces the two row invariants: departure after
/// arrival, and net price no greater than gross.
fn reservation_from_form(form: &HashMap<String, String>) -> Result<Reservation, ServerError> {
    let client_name = form
        .get("client_name")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if client_name.is_empty() {
        return Err(ServerError::BadRequest("client name is required".into()));
    }

    let platform = Platform::parse(form.get("platform").map(String::as_str).unwrap_or(""));
    let phone = form
        .get("phone")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let arrival = form
        .get("arrival_date")
        .and_then(|s| parse_date(s))
        .ok_or_else(|| ServerError::BadRequest("a valid arrival date is required".into()))?;
    let departure = form
        .get("departure_date")
        .and_then(|s| parse_date(s))
        .ok_or_else(|| ServerError::BadRequest("a valid departure date is required".into()))?;
    if departure <= arrival {
        return Err(ServerError::BadRequest(
            "departure date must be after arrival date".into(),
        ));
    }

    let gross_price = parse_price(form, "gross_price")?;
    let net_price = parse_price(form, "net_price")?;
    if net_price > gross_price {
        return Err(ServerError::BadRequest(
            "net price cannot exceed gross price".into(),
        ));
    }

    Ok(Reservation::new(
        client_name,
        platform,
        phone,
        arrival,
        departure,
        gross_price,
        net_price,
    ))
}
