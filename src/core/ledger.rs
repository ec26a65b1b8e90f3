//! # Reservation Ledger
//!
//! Owns the catalog and every active ticket, and is the only thing that
//! moves seat counters.
//!
//! ```text
//! Ledger
//! └── state: Mutex<LedgerState>
//!     ├── catalog: Catalog        // trains + booked counters
//!     └── tickets: Vec<Ticket>    // booking order
//! ```
//!
//! After every operation, for every train T:
//! `sum(seats of tickets on T) == T.booked_seats <= T.total_seats`.
//!
//! Booking and cancelling hold the lock across check-and-mutate, so two
//! callers can never both see the same free seats.

use std::collections::HashMap;

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::core::catalog::Catalog;
use crate::core::error::LedgerError;
use crate::core::schedule::{Clock, ScheduleEntry, schedule_board};
use crate::core::ticket::{Accessibility, Ticket, TicketId};
use crate::core::train::{Train, TrainId};

#[derive(Debug)]
struct LedgerState {
    catalog: Catalog,
    tickets: Vec<Ticket>,
}

#[derive(Debug)]
pub struct Ledger {
    state: Mutex<LedgerState>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl Ledger {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                catalog,
                tickets: Vec::new(),
            }),
        }
    }

    /// All trains in catalog order.
    pub fn list_trains(&self) -> Vec<Train> {
        self.state.lock().catalog.list_trains()
    }

    pub fn train(&self, id: TrainId) -> Option<Train> {
        self.state.lock().catalog.get(id).cloned()
    }

    pub fn available_seats(&self, id: TrainId) -> Result<u32, LedgerError> {
        self.state
            .lock()
            .catalog
            .available_seats(id)
            .ok_or(LedgerError::UnknownTrain(id))
    }

    /// Reserves `seats` on `train`. Either the seats are taken and a ticket
    /// is recorded, or nothing changes and the reason is returned.
    pub fn book_ticket(
        &self,
        train: TrainId,
        seats: u32,
        accessibility: Accessibility,
    ) -> Result<Ticket, LedgerError> {
        if seats == 0 {
            debug!("Rejected booking on train {train}: zero seats");
            return Err(LedgerError::InvalidSeatCount(seats));
        }

        let mut state = self.state.lock();
        let Some(target) = state.catalog.get(train) else {
            debug!("Rejected booking: unknown train {train}");
            return Err(LedgerError::UnknownTrain(train));
        };

        let available = target.available_seats();
        if available < seats {
            debug!("Rejected booking on train {train}: {seats} requested, {available} available");
            return Err(LedgerError::InsufficientSeats {
                train,
                requested: seats,
                available,
            });
        }

        let ticket = Ticket::new(target, seats, accessibility);
        state.catalog.book_seats(train, seats);
        state.tickets.push(ticket.clone());

        info!(
            "Booked {} seat(s) on {} as ticket {}",
            seats,
            ticket.train_name(),
            ticket.id()
        );
        Ok(ticket)
    }

    /// Removes `ticket` from the ledger and returns its seats to the train.
    pub fn cancel_ticket(&self, ticket: &Ticket) -> Result<Ticket, LedgerError> {
        if ticket.seats() == 0 {
            return Err(LedgerError::InvalidSeatCount(0));
        }

        let mut state = self.state.lock();
        let booked = state
            .catalog
            .get(ticket.train())
            .map(Train::booked_seats)
            .ok_or(LedgerError::UnknownTrain(ticket.train()))?;

        let position = state
            .tickets
            .iter()
            .position(|t| t.id() == ticket.id())
            .ok_or_else(|| {
                debug!("Cancel of unknown ticket {}", ticket.id());
                LedgerError::TicketNotFound(ticket.id())
            })?;

        // Use the ledger's own record, not the caller's copy.
        let seats = state.tickets[position].seats();
        if !state.catalog.cancel_seats(ticket.train(), seats) {
            warn!(
                "Ticket {} holds {} seat(s) but train {} has {} booked",
                ticket.id(),
                seats,
                ticket.train(),
                booked
            );
            return Err(LedgerError::SeatAccountingMismatch {
                train: ticket.train(),
                seats,
                booked,
            });
        }

        let removed = state.tickets.remove(position);
        info!(
            "Cancelled ticket {} ({} seat(s) on {})",
            removed.id(),
            removed.seats(),
            removed.train_name()
        );
        Ok(removed)
    }

    /// Active tickets in booking order.
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.state.lock().tickets.clone()
    }

    pub fn find_ticket(&self, id: TicketId) -> Option<Ticket> {
        self.state.lock().tickets.iter().find(|t| t.id() == id).cloned()
    }

    pub fn ticket_count(&self) -> usize {
        self.state.lock().tickets.len()
    }

    /// Tickets keyed by train name. Each group keeps booking order; the order
    /// of the keys themselves is unspecified.
    pub fn group_by_train(&self) -> HashMap<String, Vec<Ticket>> {
        let state = self.state.lock();
        let mut groups: HashMap<String, Vec<Ticket>> = HashMap::new();
        for ticket in &state.tickets {
            groups
                .entry(ticket.train_name().to_string())
                .or_default()
                .push(ticket.clone());
        }
        groups
    }

    /// Schedule board for the whole catalog at the clock's current time.
    pub fn schedule(&self, clock: &dyn Clock) -> Vec<ScheduleEntry> {
        schedule_board(self.state.lock().catalog.trains(), clock)
    }
}
