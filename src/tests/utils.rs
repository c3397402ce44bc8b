use crate::db::connection::{init_db, Database};
use crate::db::reservations;
use crate::domain::reservation::{Platform, Reservation};
use crate::errors::ServerError;
use crate::router::App;
use crate::sms::SmsGateway;
use astra::{Body, Response};
use chrono::NaiveDate;
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB using the production schema.
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "gite_test_{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// In-memory gateway: records every message, optionally failing.
#[derive(Clone, Default)]
pub struct StubGateway {
    pub sent: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl StubGateway {
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl SmsGateway for StubGateway {
    fn send(&self, message: &str) -> Result<(), ServerError> {
        self.sent.lock().unwrap().push(message.to_string());
        if self.fail {
            Err(ServerError::SmsError("stub gateway failure".into()))
        } else {
            Ok(())
        }
    }
}

pub fn make_app(tag: &str) -> (App, StubGateway) {
    let gateway = StubGateway::default();
    let app = App {
        db: make_db(tag),
        sms: Box::new(gateway.clone()),
    };
    (app, gateway)
}

pub fn stay(
    name: &str,
    platform: Platform,
    phone: &str,
    arrival: NaiveDate,
    departure: NaiveDate,
    gross: f64,
    net: f64,
) -> Reservation {
    Reservation::new(
        name.to_string(),
        platform,
        phone.to_string(),
        arrival,
        departure,
        gross,
        net,
    )
}

pub fn seed(db: &Database, rows: &[Reservation]) {
    reservations::save_all(db, rows).expect("Failed to seed reservations");
}

pub fn get(path: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, body: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn read_body(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("Failed to read response body");
    String::from_utf8(bytes).expect("Response body was not UTF-8")
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
