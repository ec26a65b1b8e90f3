//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveTime;

use crate::core::ledger::Ledger;

/// Time of day from hours and minutes.
pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    hms(hour, minute, 0)
}

pub fn hms(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap()
}

/// Creates a ledger over the seed catalog with no tickets.
pub fn test_ledger() -> Ledger {
    Ledger::default()
}

/// Booked seats summed over every train.
pub fn booked_total(ledger: &Ledger) -> u32 {
    ledger.list_trains().iter().map(|t| t.booked_seats()).sum()
}
