pub mod html;
pub mod json;
pub mod xlsx;

use crate::errors::ServerError;
use astra::Response;

pub type ResultResp = Result<Response, ServerError>;

pub use html::{html_response, redirect_response};
pub use json::json_response;
pub use xlsx::xlsx_response;
