//! rail-ledger library exports for testing

pub mod core;
pub mod shell;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    Accessibility, Catalog, Clock, ErrorKind, FixedClock, Ledger, LedgerError, ScheduleEntry,
    SystemClock, Ticket, TicketId, TimeDifference, Train, TrainId,
};
