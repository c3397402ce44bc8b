use crate::domain::reservation::Platform;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn add_page() -> Markup {
    desktop_layout(
        "New Reservation",
        html! {
            main {
                h1 { "➕ New Reservation" }
                div class="card" {
                    (reservation_form("/add", None))
                }
            }
        },
    )
}

/// Shared add/edit form. `prefill` carries the current values plus the
/// positional id of the row being edited.
pub fn reservation_form(
    action: &str,
    prefill: Option<(usize, &crate::domain::reservation::Reservation)>,
) -> Markup {
    let r = prefill.map(|(_, r)| r);
    html! {
        form action=(action) method="post" {
            @if let Some((id, _)) = prefill {
                input type="hidden" name="id" value=(id);
            }
            label { "Client name"
                input type="text" name="client_name" required value=[r.map(|r| r.client_name.as_str())];
            }
            label { "Platform"
                select name="platform" {
                    @for p in Platform::ALL {
                        option value=(p.label()) selected[r.map(|r| r.platform) == Some(p)] { (p.label()) }
                    }
                }
            }
            label { "Phone"
                input type="tel" name="phone" value=[r.map(|r| r.phone.as_str())];
            }
            label { "Arrival date"
                input type="date" name="arrival_date" required value=[r.map(|r| r.arrival_date.to_string())];
            }
            label { "Departure date"
                input type="date" name="departure_date" required value=[r.map(|r| r.departure_date.to_string())];
            }
            label { "Gross price"
                input type="number" name="gross_price" step="0.01" min="0" required value=[r.map(|r| r.gross_price)];
            }
            label { "Net price"
                input type="number" name="net_price" step="0.01" min="0" required value=[r.map(|r| r.net_price)];
            }
            button type="submit" { "Save" }
        }
    }
}
