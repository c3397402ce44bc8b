use crate::db::reservations;
use crate::domain::reservation::Platform;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_app, post_form, read_body, seed, stay, ymd};

#[test]
fn empty_table_shows_a_hint() {
    let (app, _) = make_app("list_empty");

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(read_body(&mut resp).contains("No reservations yet"));
}

#[test]
fn added_reservation_appears_with_derived_fields() {
    let (app, _) = make_app("add");

    let resp = handle(
        post_form(
            "/add",
            "client_name=Dupont&platform=Airbnb&phone=0612345678\
             &arrival_date=2024-07-01&departure_date=2024-07-04\
             &gross_price=300&net_price=270",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let mut resp = handle(get("/"), &app).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("Dupont"));
    assert!(body.contains("30.00")); // charges
    assert!(body.contains("10.00")); // margin percentage
    assert!(body.contains("<td>3</td>")); // nights

    let rows = reservations::load(&app.db).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].nights, 3);
}

#[test]
fn add_rejects_net_price_above_gross() {
    let (app, _) = make_app("add_net_gt_gross");

    let result = handle(
        post_form(
            "/add",
            "client_name=Dupont&platform=Booking&arrival_date=2024-07-01\
             &departure_date=2024-07-04&gross_price=100&net_price=150",
        ),
        &app,
    );

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(reservations::load(&app.db).unwrap().is_empty());
}

#[test]
fn add_rejects_departure_on_or_before_arrival() {
    let (app, _) = make_app("add_bad_dates");

    let result = handle(
        post_form(
            "/add",
            "client_name=Dupont&platform=Booking&arrival_date=2024-07-04\
             &departure_date=2024-07-04&gross_price=100&net_price=90",
        ),
        &app,
    );

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn add_rejects_missing_client_name() {
    let (app, _) = make_app("add_no_name");

    let result = handle(
        post_form(
            "/add",
            "client_name=&platform=Booking&arrival_date=2024-07-01\
             &departure_date=2024-07-04&gross_price=100&net_price=90",
        ),
        &app,
    );

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn edit_replaces_the_whole_row() {
    let (app, _) = make_app("edit");
    seed(
        &app.db,
        &[
            stay("Dupont", Platform::Airbnb, "", ymd(2024, 7, 1), ymd(2024, 7, 4), 300.0, 270.0),
            stay("Martin", Platform::Booking, "", ymd(2024, 8, 1), ymd(2024, 8, 3), 200.0, 180.0),
        ],
    );

    let resp = handle(
        post_form(
            "/edit",
            "id=1&client_name=Martin&platform=Other&phone=0700000000\
             &arrival_date=2024-08-02&departure_date=2024-08-05\
             &gross_price=250&net_price=225",
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let rows = reservations::load(&app.db).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].client_name, "Dupont");
    assert_eq!(rows[1].platform, Platform::Other);
    assert_eq!(rows[1].arrival_date, ymd(2024, 8, 2));
    assert_eq!(rows[1].nights, 3);
    assert_eq!(rows[1].charges, 25.0);
}

#[test]
fn edit_form_is_prefilled() {
    let (app, _) = make_app("edit_form");
    seed(
        &app.db,
        &[stay("Dupont", Platform::Airbnb, "0612345678", ymd(2024, 7, 1), ymd(2024, 7, 4), 300.0, 270.0)],
    );

    let mut resp = handle(get("/edit?id=0"), &app).unwrap();
    let body = read_body(&mut resp);
    assert!(body.contains("value=\"Dupont\""));
    assert!(body.contains("value=\"2024-07-01\""));
}

#[test]
fn edit_unknown_id_is_not_found() {
    let (app, _) = make_app("edit_missing");

    let result = handle(get("/edit?id=9"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn delete_removes_only_the_selected_row() {
    let (app, _) = make_app("delete");
    seed(
        &app.db,
        &[
            stay("Dupont", Platform::Airbnb, "", ymd(2024, 7, 1), ymd(2024, 7, 4), 300.0, 270.0),
            stay("Martin", Platform::Booking, "", ymd(2024, 8, 1), ymd(2024, 8, 3), 200.0, 180.0),
        ],
    );

    let resp = handle(post_form("/delete", "id=0"), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/edit");

    let rows = reservations::load(&app.db).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].client_name, "Martin");
}

#[test]
fn save_all_overwrites_the_full_table() {
    let (app, _) = make_app("overwrite");
    seed(
        &app.db,
        &[stay("Dupont", Platform::Airbnb, "", ymd(2024, 7, 1), ymd(2024, 7, 4), 300.0, 270.0)],
    );
    seed(
        &app.db,
        &[stay("Martin", Platform::Booking, "", ymd(2024, 8, 1), ymd(2024, 8, 3), 200.0, 180.0)],
    );

    let rows = reservations::load(&app.db).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].client_name, "Martin");
}

#[test]
fn unknown_route_is_not_found() {
    let (app, _) = make_app("not_found");

    let result = handle(get("/no-such-page"), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
