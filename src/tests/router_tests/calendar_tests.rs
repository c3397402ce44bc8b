use crate::domain::reservation::Platform;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_app, read_body, seed, stay, ymd};
use chrono::{Datelike, NaiveDate};

#[test]
fn calendar_shows_guests_on_occupied_days_only() {
    let (app, _) = make_app("calendar");
    seed(
        &app.db,
        &[stay("Dupont", Platform::Airbnb, "", ymd(2024, 6, 10), ymd(2024, 6, 13), 300.0, 270.0)],
    );

    let mut resp = handle(get("/calendar?year=2024&month=6"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = read_body(&mut resp);
    assert!(body.contains("June 2024"));
    // Three occupied nights; the departure day itself stays free.
    assert_eq!(body.matches("🟥 Dupont").count(), 3);
}

#[test]
fn calendar_ignores_reservations_from_other_months() {
    let (app, _) = make_app("calendar_other_month");
    seed(
        &app.db,
        &[stay("Dupont", Platform::Airbnb, "", ymd(2024, 6, 10), ymd(2024, 6, 13), 300.0, 270.0)],
    );

    let mut resp = handle(get("/calendar?year=2024&month=7"), &app).unwrap();
    let body = read_body(&mut resp);
    assert!(!body.contains("Dupont"));
}

#[test]
fn calendar_defaults_to_the_current_month() {
    let (app, _) = make_app("calendar_default");

    let resp = handle(get("/calendar"), &app).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn calendar_renders_the_last_representable_month() {
    let (app, _) = make_app("calendar_max_year");
    let year = NaiveDate::MAX.year();

    let mut resp = handle(get(&format!("/calendar?year={year}&month=12")), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains(&format!("December {year}")));
}

#[test]
fn calendar_rejects_out_of_range_month() {
    let (app, _) = make_app("calendar_bad_month");

    let result = handle(get("/calendar?year=2024&month=13"), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn calendar_rejects_non_numeric_params() {
    let (app, _) = make_app("calendar_bad_params");

    let result = handle(get("/calendar?year=twenty&month=6"), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
