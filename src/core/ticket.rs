//! # Tickets
//!
//! A ticket records one successful booking. It names the train it was booked
//! against but does not own it. Tickets are never edited: cancelling one
//! removes it from the ledger.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::train::{Train, TrainId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new UUID v4 ticket ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accessibility needs attached to a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessibility {
    pub need_ramp: bool,
    pub need_wheelchair: bool,
}

impl Accessibility {
    pub fn new(need_ramp: bool, need_wheelchair: bool) -> Self {
        Self {
            need_ramp,
            need_wheelchair,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    train: TrainId,
    train_name: String,
    seats: u32,
    accessibility: Accessibility,
}

impl Ticket {
    pub(crate) fn new(train: &Train, seats: u32, accessibility: Accessibility) -> Self {
        Self {
            id: TicketId::new(),
            train: train.id(),
            train_name: train.name().to_string(),
            seats,
            accessibility,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn train(&self) -> TrainId {
        self.train
    }

    /// Name of the train at booking time; the grouping key.
    pub fn train_name(&self) -> &str {
        &self.train_name
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn accessibility(&self) -> Accessibility {
        self.accessibility
    }

    pub fn need_ramp(&self) -> bool {
        self.accessibility.need_ramp
    }

    pub fn need_wheelchair(&self) -> bool {
        self.accessibility.need_wheelchair
    }

    /// Multi-line summary used by the grouped ticket listing.
    pub fn details(&self) -> String {
        format!(
            "Number of Seats: {}\nNeed Ramp: {}\nNeed Wheelchair: {}",
            self.seats, self.accessibility.need_ramp, self.accessibility.need_wheelchair
        )
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket for {} - {} seat(s)", self.train_name, self.seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hm;

    fn sample_ticket() -> Ticket {
        let train = Train::new(TrainId(2), "Train 2", "Chicago", "Madison", hm(0, 56), hm(21, 0));
        Ticket::new(&train, 3, Accessibility::new(true, false))
    }

    #[test]
    fn test_ticket_references_train() {
        let ticket = sample_ticket();
        assert_eq!(ticket.train(), TrainId(2));
        assert_eq!(ticket.train_name(), "Train 2");
        assert_eq!(ticket.seats(), 3);
        assert!(ticket.need_ramp());
        assert!(!ticket.need_wheelchair());
    }

    #[test]
    fn test_ticket_ids_are_unique() {
        assert_ne!(sample_ticket().id(), sample_ticket().id());
    }

    #[test]
    fn test_ticket_display_and_details() {
        let ticket = sample_ticket();
        assert_eq!(ticket.to_string(), "Ticket for Train 2 - 3 seat(s)");
        assert_eq!(
            ticket.details(),
            "Number of Seats: 3\nNeed Ramp: true\nNeed Wheelchair: false"
        );
    }

    #[test]
    fn test_ticket_serializes_flags() {
        let json = serde_json::to_value(sample_ticket()).unwrap();
        assert_eq!(json["train_name"], "Train 2");
        assert_eq!(json["accessibility"]["need_ramp"], true);
        assert_eq!(json["accessibility"]["need_wheelchair"], false);
    }
}
