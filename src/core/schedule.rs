//! # Schedule
//!
//! Derived, read-only view of train times for display: `HH:mm` strings and
//! the time left until (or since) arrival.
//!
//! Only the time of day is modelled. The distance between "now" and an
//! arrival is the plain absolute difference of two times of day, with no
//! notion of tomorrow: at 23:00 a train arriving at 01:00 is 22 hours away,
//! not 2. Calendar-aware scheduling would need dates on every train.

use std::fmt;

use chrono::{Local, NaiveTime};
use serde::{Serialize, Serializer};

use crate::core::train::Train;

/// Source of the current time of day.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// A non-negative duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeDifference {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeDifference {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for TimeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours {} minutes {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Absolute distance between two times of day, truncated to whole seconds.
pub fn time_between(now: NaiveTime, target: NaiveTime) -> TimeDifference {
    let seconds = target.signed_duration_since(now).num_seconds().unsigned_abs();
    TimeDifference::from_seconds(seconds)
}

/// Zero-padded 24-hour `HH:mm`.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serializes a time of day as `HH:mm`, matching the text listings.
pub(crate) fn serialize_hhmm<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_hhmm(*time))
}

/// Parses `HH:mm`.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
}

/// One line of the schedule board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub train: Train,
    pub departure: String,
    pub arrival: String,
    pub until_arrival: TimeDifference,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Departure Time: {}, Arrival Time: {}, Time Difference: {})",
            self.train, self.departure, self.arrival, self.until_arrival
        )
    }
}

pub fn schedule_entry(train: &Train, now: NaiveTime) -> ScheduleEntry {
    ScheduleEntry {
        train: train.clone(),
        departure: format_hhmm(train.departure()),
        arrival: format_hhmm(train.arrival()),
        until_arrival: time_between(now, train.arrival()),
    }
}

/// Entries for every train, all measured against the same `now`.
pub fn schedule_board<'a>(
    trains: impl IntoIterator<Item = &'a Train>,
    clock: &dyn Clock,
) -> Vec<ScheduleEntry> {
    let now = clock.now();
    trains.into_iter().map(|t| schedule_entry(t, now)).collect()
}
