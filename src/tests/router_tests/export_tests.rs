use crate::domain::reservation::Platform;
use crate::router::handle;
use crate::tests::utils::{get, make_app, read_body, seed, stay, ymd};

#[test]
fn export_returns_an_xlsx_attachment() {
    let (app, _) = make_app("export");
    seed(
        &app.db,
        &[stay("Dupont", Platform::Airbnb, "", ymd(2024, 7, 1), ymd(2024, 7, 4), 300.0, 270.0)],
    );

    let resp = handle(get("/export"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("reservations.xlsx"));
}

#[test]
fn api_returns_rows_with_derived_fields() {
    let (app, _) = make_app("api");
    seed(
        &app.db,
        &[stay("Dupont", Platform::Airbnb, "0612345678", ymd(2024, 7, 1), ymd(2024, 7, 4), 300.0, 270.0)],
    );

    let mut resp = handle(get("/api/reservations"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/json");

    let body = read_body(&mut resp);
    let rows: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(rows[0]["client_name"], "Dupont");
    assert_eq!(rows[0]["platform"], "Airbnb");
    assert_eq!(rows[0]["charges"], 30.0);
    assert_eq!(rows[0]["margin_pct"], 10.0);
    assert_eq!(rows[0]["nights"], 3);
    assert_eq!(rows[0]["year"], 2024);
    assert_eq!(rows[0]["month"], 7);
}
