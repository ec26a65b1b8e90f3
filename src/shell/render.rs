//! Plain-text and JSON renderings of ledger data for the shell.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::schedule::ScheduleEntry;
use crate::core::ticket::Ticket;
use crate::core::train::Train;

pub const BOOKED: &str = "Ticket(s) booked successfully!";
pub const BOOKING_FAILED: &str = "Ticket booking failed. Please check availability.";
pub const BOOKING_INVALID: &str = "Please select a train and specify a valid number of tickets.";
pub const CANCELLED: &str = "Ticket canceled successfully!";
pub const CANCEL_FAILED: &str = "Ticket cancellation failed. Please try again.";
pub const SELECT_TICKET: &str = "Please select a ticket to cancel.";

/// Numbered train list; the numbers are what `book` expects.
pub fn trains(trains: &[Train]) -> String {
    let mut out = String::from("Trains:");
    for train in trains {
        out.push_str(&format!("\n{}. {}", train.id().0, train));
    }
    out
}

pub fn schedule(entries: &[ScheduleEntry]) -> String {
    let mut out = String::from("Train Schedule:");
    for entry in entries {
        out.push('\n');
        out.push_str(&entry.to_string());
    }
    out
}

/// Numbered ticket list; the numbers are what `cancel` expects.
pub fn tickets(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets booked.".to_string();
    }
    let mut out = String::from("Tickets:");
    for (n, ticket) in tickets.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", n + 1, ticket));
    }
    out
}

/// Grouped listing. Groups follow catalog order so output is stable even
/// though the grouping itself is unordered.
pub fn groups(trains: &[Train], groups: &HashMap<String, Vec<Ticket>>) -> String {
    let mut out = String::from("Grouped Tickets:\n");
    for train in trains {
        let Some(group) = groups.get(train.name()) else {
            continue;
        };
        out.push_str(&format!("Train Number: {}\n", train.name()));
        for ticket in group {
            out.push_str(&ticket.details());
            out.push_str("\n\n");
        }
    }
    out.trim_end().to_string()
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("failed to render JSON: {e}"))
}
