pub mod calendar;
pub mod report;
pub mod reservation;
