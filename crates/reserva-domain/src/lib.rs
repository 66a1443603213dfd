//! Reserva domain - booking collaborators
//!
//! This crate provides the domain side of the booking assistant:
//! - Models: `Service`, `Employee`, `Booking`
//! - `ServiceCatalog`, `StaffDirectory`, `BookingLedger` trait contracts
//! - In-memory implementations with reader/writer locking (multiple chat
//!   sessions query and mutate these concurrently)
//! - Demo seed data
//!
//! Name lookups are case-insensitive across all collaborators.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod models;
pub mod seed;
pub mod staff;

pub use catalog::{InMemoryServiceCatalog, ServiceCatalog};
pub use error::{Error, Result};
pub use ledger::{BookingLedger, InMemoryBookingLedger};
pub use models::{parse_date, parse_slot, parse_time, Booking, Employee, Service};
pub use staff::{InMemoryStaffDirectory, StaffDirectory};
