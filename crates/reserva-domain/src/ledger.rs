//! Booking ledger
//!
//! Saved appointments indexed by date. There is no reservation step:
//! availability checking and saving are separate operations, so two
//! concurrent sessions can both pass an availability check for the same
//! slot and both save. The assistant re-checks right before saving, which
//! narrows but does not close that window.

use crate::error::Result;
use crate::models::{parse_date, Booking};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Append access to saved bookings
pub trait BookingLedger: Send + Sync {
    /// Bookings for the given `YYYY-MM-DD` date and employee
    fn bookings_for(&self, date: &str, employee_id: u32) -> Result<Vec<Booking>>;

    /// Save a booking, assigning the next id when the booking carries id 0.
    /// Returns the stored booking.
    fn save(&self, booking: Booking) -> Result<Booking>;
}

struct LedgerState {
    by_date: HashMap<NaiveDate, Vec<Booking>>,
    next_id: u32,
}

/// In-memory booking ledger
pub struct InMemoryBookingLedger {
    state: RwLock<LedgerState>,
}

impl Default for InMemoryBookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookingLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState {
                by_date: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl BookingLedger for InMemoryBookingLedger {
    fn bookings_for(&self, date: &str, employee_id: u32) -> Result<Vec<Booking>> {
        let date = parse_date(date)?;
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());

        Ok(state
            .by_date
            .get(&date)
            .map(|bookings| {
                bookings
                    .iter()
                    .filter(|b| b.employee_id == employee_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn save(&self, mut booking: Booking) -> Result<Booking> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        if booking.id == 0 {
            booking.id = state.next_id;
            state.next_id += 1;
        }

        debug!(
            booking_id = booking.id,
            employee_id = booking.employee_id,
            starts_at = %booking.starts_at,
            "Saving booking"
        );

        let date = booking.starts_at.date();
        state.by_date.entry(date).or_default().push(booking.clone());

        Ok(booking)
    }
}
