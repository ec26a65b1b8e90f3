//! # Trains
//!
//! A train is a scheduled service with a fixed seat capacity and a counter of
//! booked seats. Identity (id, name, route, times) never changes after
//! creation; only the booked counter moves, and only through the catalog.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::core::schedule::serialize_hhmm;

/// Seat capacity given to every train unless configured otherwise.
pub const DEFAULT_TOTAL_SEATS: u32 = 100;

/// 1-based position of a train in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrainId(pub u32);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Train {
    id: TrainId,
    name: String,
    source: String,
    destination: String,
    #[serde(serialize_with = "serialize_hhmm")]
    departure: NaiveTime,
    #[serde(serialize_with = "serialize_hhmm")]
    arrival: NaiveTime,
    total_seats: u32,
    booked_seats: u32,
}

impl Train {
    pub fn new(
        id: TrainId,
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        departure: NaiveTime,
        arrival: NaiveTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
            departure,
            arrival,
            total_seats: DEFAULT_TOTAL_SEATS,
            booked_seats: 0,
        }
    }

    /// Replaces the seat capacity. Only meaningful before any booking.
    pub fn with_total_seats(mut self, total_seats: u32) -> Self {
        self.total_seats = total_seats;
        self
    }

    pub fn id(&self) -> TrainId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> NaiveTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveTime {
        self.arrival
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    pub fn booked_seats(&self) -> u32 {
        self.booked_seats
    }

    pub fn available_seats(&self) -> u32 {
        self.total_seats - self.booked_seats
    }

    /// Takes `n` seats. The caller has already checked availability.
    pub(crate) fn book_seats(&mut self, n: u32) {
        debug_assert!(n <= self.available_seats());
        self.booked_seats += n;
    }

    /// Releases `n` seats when `0 < n <= booked_seats`; anything else is
    /// ignored. Returns whether the counter moved.
    pub(crate) fn cancel_seats(&mut self, n: u32) -> bool {
        if n > 0 && n <= self.booked_seats {
            self.booked_seats -= n;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - From {} to {} ({} seats available)",
            self.name,
            self.source,
            self.destination,
            self.available_seats()
        )
    }
}
