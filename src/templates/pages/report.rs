use crate::domain::calendar::month_name;
use crate::domain::report::{MonthlyFigures, Totals};
use crate::templates::components::money;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn report_page(figures: &[MonthlyFigures], totals: &Totals) -> Markup {
    desktop_layout(
        "Report",
        html! {
            main {
                h1 { "📊 Report" }

                @if figures.is_empty() {
                    p { "No data to report on yet." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Month" }
                                th { "Stays" }
                                th { "Nights" }
                                th { "Gross" }
                                th { "Net" }
                                th { "Charges" }
                                th { "Gross / night" }
                                th { "Net / night" }
                            }
                        }
                        tbody {
                            @for f in figures {
                                tr {
                                    td { (month_name(f.month)) " " (f.year) }
                                    td { (f.stays) }
                                    td { (f.nights) }
                                    td { (money(f.gross)) }
                                    td { (money(f.net)) }
                                    td { (money(f.charges)) }
                                    td { (money(f.gross_per_night)) }
                                    td { (money(f.net_per_night)) }
                                }
                            }
                        }
                        tfoot {
                            tr {
                                td { "Total" }
                                td { (totals.stays) }
                                td { (totals.nights) }
                                td { (money(totals.gross)) }
                                td { (money(totals.net)) }
                                td { (money(totals.charges)) }
                                td { (money(totals.gross_per_night)) }
                                td { (money(totals.net_per_night)) }
                            }
                        }
                    }
                }
            }
        },
    )
}
