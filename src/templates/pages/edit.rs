use crate::domain::reservation::Reservation;
use crate::templates::desktop_layout;
use crate::templates::pages::add::reservation_form;
use maud::{html, Markup};

pub fn edit_list_page(rows: &[Reservation]) -> Markup {
    desktop_layout(
        "Edit / Delete",
        html! {
            main {
                h1 { "✏️ Edit / Delete" }

                @if rows.is_empty() {
                    p { "Nothing to edit yet." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Client" }
                                th { "Platform" }
                                th { "Arrival" }
                                th { "Departure" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            @for (id, r) in rows.iter().enumerate() {
                                tr {
                                    td { (r.client_name) }
                                    td { (r.platform) }
                                    td { (r.arrival_date) }
                                    td { (r.departure_date) }
                                    td {
                                        a href=(format!("/edit?id={id}")) { "Edit" }
                                        " "
                                        form class="inline" action="/delete" method="post"
                                            onsubmit="return confirm('Delete this reservation?');" {
                                            input type="hidden" name="id" value=(id);
                                            button type="submit" class="danger" { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_form_page(id: usize, reservation: &Reservation) -> Markup {
    desktop_layout(
        "Edit Reservation",
        html! {
            main {
                h1 { "✏️ Edit " (reservation.client_name) }
                div class="card" {
                    (reservation_form("/edit", Some((id, reservation))))
                }
            }
        },
    )
}
