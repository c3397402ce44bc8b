use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Two-decimal money cell.
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}
