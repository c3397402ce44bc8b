use crate::domain::report::ClientSummary;
use crate::templates::components::money;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn clients_page(clients: &[ClientSummary]) -> Markup {
    desktop_layout(
        "Clients",
        html! {
            main {
                h1 { "👥 Clients" }

                @if clients.is_empty() {
                    p { "No clients yet." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Stays" }
                                th { "Nights" }
                                th { "Total gross" }
                            }
                        }
                        tbody {
                            @for c in clients {
                                tr {
                                    td { (c.name) }
                                    td { (c.stays) }
                                    td { (c.nights) }
                                    td { (money(c.gross)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
