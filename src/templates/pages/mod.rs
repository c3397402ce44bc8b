pub mod add;
pub mod calendar;
pub mod clients;
pub mod edit;
pub mod report;
pub mod reservations;
pub mod sms_history;

pub use add::add_page;
pub use calendar::calendar_page;
pub use clients::clients_page;
pub use edit::{edit_form_page, edit_list_page};
pub use report::report_page;
pub use reservations::reservations_page;
pub use sms_history::sms_history_page;
