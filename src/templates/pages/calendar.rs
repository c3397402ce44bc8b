use crate::domain::calendar::{MonthGrid, WEEKDAY_HEADERS};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn calendar_page(grid: &MonthGrid) -> Markup {
    let (py, pm) = prev_month(grid.year, grid.month);
    let (ny, nm) = next_month(grid.year, grid.month);

    desktop_layout(
        "Calendar",
        html! {
            main {
                h1 { "📅 " (grid.title()) }

                div style="display: flex; gap: 1rem; margin-bottom: 1rem;" {
                    a href=(format!("/calendar?year={py}&month={pm}")) { "← Previous" }
                    a href="/calendar" { "Today" }
                    a href=(format!("/calendar?year={ny}&month={nm}")) { "Next →" }
                }

                table class="calendar" {
                    thead {
                        tr {
                            @for day in WEEKDAY_HEADERS {
                                th { (day) }
                            }
                        }
                    }
                    tbody {
                        @for week in &grid.weeks {
                            tr {
                                @for cell in week {
                                    td {
                                        @if let Some(day) = cell.day {
                                            div class="day" { (day) }
                                            @for entry in &cell.entries {
                                                div class="entry" { (entry) }
                                            }
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
