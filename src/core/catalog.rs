//! # Train Catalog
//!
//! Fixed registry of trains in insertion order. Trains are never added or
//! removed once the catalog is built; the ledger moves their seat counters
//! through [`Catalog::book_seats`] and [`Catalog::cancel_seats`].

use std::collections::HashSet;

use chrono::NaiveTime;

use crate::core::error::CatalogError;
use crate::core::train::{DEFAULT_TOTAL_SEATS, Train, TrainId};

/// Trains every fresh ledger starts with: (name, source, destination, departure, arrival).
const SEED: [(&str, &str, &str, (u32, u32), (u32, u32)); 3] = [
    ("Train 1", "Boston", "Portland", (0, 55), (23, 0)),
    ("Train 2", "Chicago", "Madison", (0, 56), (21, 0)),
    ("Train 3", "San Francisco", "Los Angeles", (19, 0), (18, 50)),
];

/// A train description that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrain {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub total_seats: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    trains: Vec<Train>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// The three-train seed catalog with default capacity.
    pub fn seeded() -> Self {
        Self::seeded_with_capacity(DEFAULT_TOTAL_SEATS)
    }

    pub fn seeded_with_capacity(total_seats: u32) -> Self {
        let trains = SEED
            .iter()
            .zip(1..)
            .map(|(&(name, source, destination, (dh, dm), (ah, am)), id)| {
                Train::new(
                    TrainId(id),
                    name,
                    source,
                    destination,
                    NaiveTime::from_hms_opt(dh, dm, 0).expect("seed departure is a valid time"),
                    NaiveTime::from_hms_opt(ah, am, 0).expect("seed arrival is a valid time"),
                )
                .with_total_seats(total_seats)
            })
            .collect();
        Self { trains }
    }

    /// Builds a catalog, numbering trains from 1 in the order given.
    /// Names must be unique and every train needs at least one seat.
    pub fn from_new_trains(
        new_trains: impl IntoIterator<Item = NewTrain>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut trains = Vec::new();

        for (new_train, id) in new_trains.into_iter().zip(1..) {
            if !seen.insert(new_train.name.clone()) {
                return Err(CatalogError::DuplicateTrain(new_train.name));
            }
            if new_train.total_seats == 0 {
                return Err(CatalogError::ZeroCapacity(new_train.name));
            }
            trains.push(
                Train::new(
                    TrainId(id),
                    new_train.name,
                    new_train.source,
                    new_train.destination,
                    new_train.departure,
                    new_train.arrival,
                )
                .with_total_seats(new_train.total_seats),
            );
        }

        if trains.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { trains })
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Snapshot of every train in catalog order.
    pub fn list_trains(&self) -> Vec<Train> {
        self.trains.clone()
    }

    pub fn len(&self) -> usize {
        self.trains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    pub fn get(&self, id: TrainId) -> Option<&Train> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.trains.get(index)
    }

    fn get_mut(&mut self, id: TrainId) -> Option<&mut Train> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.trains.get_mut(index)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Train> {
        self.trains.iter().find(|t| t.name() == name)
    }

    pub fn available_seats(&self, id: TrainId) -> Option<u32> {
        self.get(id).map(Train::available_seats)
    }

    /// Adds `n` to the train's booked counter without checking capacity.
    /// Returns false only when the train does not exist.
    pub(crate) fn book_seats(&mut self, id: TrainId, n: u32) -> bool {
        match self.get_mut(id) {
            Some(train) => {
                train.book_seats(n);
                true
            }
            None => false,
        }
    }

    /// Releases `n` seats; out-of-range counts leave the train untouched.
    /// Returns whether the counter moved.
    pub(crate) fn cancel_seats(&mut self, id: TrainId, n: u32) -> bool {
        self.get_mut(id).is_some_and(|train| train.cancel_seats(n))
    }
}
