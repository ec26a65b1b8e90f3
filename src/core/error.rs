//! # Errors
//!
//! Every failure the reservation core can report. Nothing here panics or
//! prints; the caller decides how a failure is shown to a person.

use crate::core::ticket::TicketId;
use crate::core::train::TrainId;

/// Broad class of a [`LedgerError`], so callers can pick a message without
/// matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, rejected before anything was touched.
    Validation,
    /// Not enough free seats on the train.
    Capacity,
    /// The ticket is not (or no longer) in the ledger.
    NotFound,
    /// Ticket and train seat counters disagree.
    Consistency,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("unknown train {0}")]
    UnknownTrain(TrainId),

    #[error("invalid seat count: {0}")]
    InvalidSeatCount(u32),

    #[error("train {train} has {available} seat(s) available, {requested} requested")]
    InsufficientSeats {
        train: TrainId,
        requested: u32,
        available: u32,
    },

    #[error("ticket {0} not found")]
    TicketNotFound(TicketId),

    #[error("cannot release {seats} seat(s) on train {train}: only {booked} booked")]
    SeatAccountingMismatch {
        train: TrainId,
        seats: u32,
        booked: u32,
    },
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::UnknownTrain(_) | LedgerError::InvalidSeatCount(_) => {
                ErrorKind::Validation
            }
            LedgerError::InsufficientSeats { .. } => ErrorKind::Capacity,
            LedgerError::TicketNotFound(_) => ErrorKind::NotFound,
            LedgerError::SeatAccountingMismatch { .. } => ErrorKind::Consistency,
        }
    }
}

/// Reasons a catalog cannot be assembled from a list of trains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no trains")]
    Empty,

    #[error("duplicate train name: {0}")]
    DuplicateTrain(String),

    #[error("train {0} has zero seat capacity")]
    ZeroCapacity(String),

    #[error("train {train}: invalid time of day {value:?} (expected HH:mm)")]
    InvalidTime { train: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(LedgerError::UnknownTrain(TrainId(9)).kind(), ErrorKind::Validation);
        assert_eq!(LedgerError::InvalidSeatCount(0).kind(), ErrorKind::Validation);
        let capacity = LedgerError::InsufficientSeats {
            train: TrainId(1),
            requested: 5,
            available: 2,
        };
        assert_eq!(capacity.kind(), ErrorKind::Capacity);
        assert_eq!(LedgerError::TicketNotFound(TicketId::new()).kind(), ErrorKind::NotFound);
        let mismatch = LedgerError::SeatAccountingMismatch {
            train: TrainId(1),
            seats: 3,
            booked: 1,
        };
        assert_eq!(mismatch.kind(), ErrorKind::Consistency);
    }

    #[test]
    fn test_capacity_message_names_counts() {
        let err = LedgerError::InsufficientSeats {
            train: TrainId(2),
            requested: 7,
            available: 3,
        };
        assert_eq!(err.to_string(), "train #2 has 3 seat(s) available, 7 requested");
    }
}
