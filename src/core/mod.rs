//! # Reservation Core
//!
//! Seat accounting for a fixed catalog of trains.
//! It knows nothing about any specific front end.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (trains)     │
//!                    │  • Ledger (tickets)     │
//!                    │  • Schedule (times)     │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │   Shell    │                          │   Other    │
//!     │  Adapter   │                          │  callers   │
//!     │ (stdin)    │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The `Catalog`, the trains and their seat counters
//! - [`ledger`]: The `Ledger`, booking, cancelling and grouping tickets
//! - [`schedule`]: `HH:mm` formatting and time to arrival
//! - [`config`]: Settings file and override resolution

pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod schedule;
pub mod ticket;
pub mod train;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{CatalogError, ErrorKind, LedgerError};
pub use ledger::Ledger;
pub use schedule::{Clock, FixedClock, ScheduleEntry, SystemClock, TimeDifference};
pub use ticket::{Accessibility, Ticket, TicketId};
pub use train::{Train, TrainId};
