pub mod connection;
pub mod reservations;
pub mod sms_log;

pub use connection::{init_db, Database};
