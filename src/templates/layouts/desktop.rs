use maud::{html, Markup, DOCTYPE};

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0; border-bottom: 2px solid #e5e7eb; margin-bottom: 1.5rem; }
nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; flex-wrap: wrap; }
nav a { text-decoration: none; color: #2563eb; }
table { width: 100%; border-collapse: collapse; margin-top: 1rem; }
th { padding: 10px 8px; border-bottom: 2px solid #e5e7eb; text-align: left; }
td { padding: 8px; border-bottom: 1px solid #f3f4f6; }
tfoot td { font-weight: bold; border-top: 2px solid #e5e7eb; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
.calendar td { vertical-align: top; height: 80px; width: 14%; border: 1px solid #e5e7eb; }
.calendar .day { font-weight: bold; color: #6b7280; }
.calendar .entry { font-size: 0.85em; white-space: nowrap; }
.warning { color: #b45309; }
.failure { color: #dc2626; }
.success { color: #059669; }
form.inline { display: inline; margin: 0; }
label { display: block; margin-top: 0.75rem; }
input, select { padding: 6px; margin-top: 0.25rem; border: 1px solid #ccc; border-radius: 4px; }
button { margin-top: 1rem; padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 4px; cursor: pointer; }
button.danger { background: #dc2626; margin-top: 0; padding: 4px 10px; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                header {
                    h3 { "🏠 Gite Bookings" }
                    nav {
                        ul {
                            li { a href="/" { "Reservations" } }
                            li { a href="/add" { "Add" } }
                            li { a href="/edit" { "Edit / Delete" } }
                            li { a href="/calendar" { "Calendar" } }
                            li { a href="/report" { "Report" } }
                            li { a href="/clients" { "Clients" } }
                            li { a href="/sms-history" { "SMS History" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
