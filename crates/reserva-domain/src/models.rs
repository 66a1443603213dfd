//! Domain models and slot parsing
//!
//! Dates travel as `YYYY-MM-DD` strings and times as `HH:MM`; booking
//! timestamps combine both into a `NaiveDateTime`.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Date format accepted from the model
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format accepted from the model
pub const TIME_FORMAT: &str = "%H:%M";

/// A bookable service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service id
    pub id: u32,
    /// Service name
    pub name: String,
    /// Price in the business currency
    pub price: f64,
    /// Duration in minutes
    pub duration_minutes: u32,
}

/// An employee offering a subset of the services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee id
    pub id: u32,
    /// Employee name
    pub name: String,
    /// Short role description
    pub description: String,
    /// Ids of the services this employee offers
    pub service_ids: Vec<u32>,
}

/// A saved appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking id (0 = not yet assigned)
    pub id: u32,
    /// Employee performing the service
    pub employee_id: u32,
    /// Booked service
    pub service_id: u32,
    /// Start of the appointment
    pub starts_at: NaiveDateTime,
    /// Customer name
    pub customer_name: String,
    /// Customer phone number
    pub customer_phone: String,
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| Error::InvalidSlot(format!("date must be YYYY-MM-DD, got '{date}'")))
}

/// Parse an `HH:MM` time string
pub fn parse_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| Error::InvalidSlot(format!("time must be HH:MM, got '{time}'")))
}

/// Combine a date and a time string into a booking timestamp
pub fn parse_slot(date: &str, time: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::new(parse_date(date)?, parse_time(time)?))
}
