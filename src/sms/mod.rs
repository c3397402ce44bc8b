pub mod gateway;
pub mod reminders;

pub use gateway::{FreeMobileGateway, SmsDisabled, SmsGateway};
pub use reminders::{send_arrival_reminders, ReminderOutcome};
