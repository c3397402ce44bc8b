use crate::db::connection::{init_db, Database};
use crate::router::{handle, App};
use crate::sms::{FreeMobileGateway, SmsDisabled, SmsGateway};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod sms;
mod spreadsheets;
mod templates;


fn main() {
    let db = Database::new("reservations.sqlite3");

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // SMS stays optional: without credentials every send attempt is
    // logged as a failure and surfaced as a warning in the UI.
    let sms: Box<dyn SmsGateway> = match FreeMobileGateway::from_env() {
        Some(gateway) => Box::new(gateway),
        None => {
            eprintln!("⚠️  FREE_USER / FREE_API_KEY not set, SMS sending is disabled");
            Box::new(SmsDisabled)
        }
    };

    let app = Arc::new(App { db, sms });

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => crate::templates::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
