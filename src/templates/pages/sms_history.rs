use crate::db::sms_log::SmsLogEntry;
use crate::sms::ReminderOutcome;
use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn outcome_list(outcomes: &[ReminderOutcome]) -> Markup {
    html! {
        @if outcomes.is_empty() {
            p { "No guests arriving tomorrow." }
        } @else {
            ul {
                @for o in outcomes {
                    @if let Some(err) = &o.error {
                        li class="failure" {
                            "❌ " (o.client_name)
                            @if !o.recipient.is_empty() { " (" (o.recipient) ")" }
                            ": " (err)
                        }
                    } @else {
                        li class="success" {
                            "✅ " (o.client_name) " (" (o.recipient) ")"
                        }
                    }
                }
            }
            @if outcomes.iter().any(|o| !o.sent()) {
                p class="warning" {
                    "Some reminders could not be sent. Failed attempts appear in the log below."
                }
            }
        }
    }
}

/// History page, optionally topped with the outcomes of a reminder run
/// that just finished.
pub fn sms_history_page(outcomes: Option<&[ReminderOutcome]>, entries: &[SmsLogEntry]) -> Markup {
    desktop_layout(
        "SMS History",
        html! {
            main {
                h1 { "✉️ SMS History" }

                @if let Some(outcomes) = outcomes {
                    (card("Reminder run", outcome_list(outcomes)))
                }

                @if entries.is_empty() {
                    p { "No SMS sent yet." }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Sent at" }
                                th { "Recipient" }
                                th { "Message" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            @for e in entries {
                                tr {
                                    td { (e.sent_at.format("%Y-%m-%d %H:%M")) }
                                    td { (e.recipient) }
                                    td { (e.message) }
                                    td {
                                        @if e.success {
                                            span class="success" { "sent" }
                                        } @else {
                                            span class="failure" { "failed" }
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
