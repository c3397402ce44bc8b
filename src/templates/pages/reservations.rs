use crate::domain::report::Totals;
use crate::domain::reservation::Reservation;
use crate::templates::components::money;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn reservations_page(rows: &[Reservation], totals: &Totals) -> Markup {
    desktop_layout(
        "Reservations",
        html! {
            main {
                h1 { "📋 Reservations" }

                @if rows.is_empty() {
                    p { "No reservations yet. " a href="/add" { "Add the first one." } }
                } @else {
                    div style="overflow-x: auto;" {
                        table {
                            thead {
                                tr {
                                    th { "Client" }
                                    th { "Platform" }
                                    th { "Phone" }
                                    th { "Arrival" }
                                    th { "Departure" }
                                    th { "Gross" }
                                    th { "Net" }
                                    th { "Charges" }
                                    th { "%" }
                                    th { "Nights" }
                                }
                            }
                            tbody {
                                @for r in rows {
                                    tr {
                                        td { (r.client_name) }
                                        td { (r.platform.marker()) " " (r.platform) }
                                        td { (r.phone) }
                                        td { (r.arrival_date) }
                                        td { (r.departure_date) }
                                        td { (money(r.gross_price)) }
                                        td { (money(r.net_price)) }
                                        td { (money(r.charges)) }
                                        td { (money(r.margin_pct)) }
                                        td { (r.nights) }
                                    }
                                }
                            }
                            tfoot {
                                tr {
                                    td colspan="5" { "Total (" (totals.stays) " stays)" }
                                    td { (money(totals.gross)) }
                                    td { (money(totals.net)) }
                                    td { (money(totals.charges)) }
                                    td { (money(totals.margin_pct)) }
                                    td { (totals.nights) }
                                }
                            }
                        }
                    }

                    div style="display: flex; gap: 10px; align-items: center; margin-top: 1rem;" {
                        a href="/export" { "📥 Download reservations.xlsx" }
                        form class="inline" action="/sms/send-reminders" method="post" {
                            button type="submit" { "✉️ Send tomorrow's arrival reminders" }
                        }
                    }
                }
            }
        },
    )
}
