//! Staff directory
//!
//! Employee lookups plus the availability check, which combines the
//! catalog (service durations) with the ledger (existing bookings).

use crate::catalog::ServiceCatalog;
use crate::error::{Error, Result};
use crate::ledger::BookingLedger;
use crate::models::{parse_slot, Employee, Service};
use chrono::Duration;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Read access to the staff directory
pub trait StaffDirectory: Send + Sync {
    /// All employees, ordered by id
    fn all(&self) -> Result<Vec<Employee>>;

    /// Look up an employee by id
    fn by_id(&self, id: u32) -> Result<Option<Employee>>;

    /// Look up an employee by name (case-insensitive)
    fn by_name(&self, name: &str) -> Result<Option<Employee>>;

    /// Services offered by the given employee
    fn services_for(&self, employee_id: u32) -> Result<Vec<Service>>;

    /// Employees offering the given service
    fn staff_for_service(&self, service_id: u32) -> Result<Vec<Employee>>;

    /// Whether the employee is free for the service at `date` (`YYYY-MM-DD`)
    /// and `time` (`HH:MM`). Overlap check only; the slot is not reserved.
    fn check_availability(
        &self,
        employee_id: u32,
        service_id: u32,
        date: &str,
        time: &str,
    ) -> Result<bool>;
}

/// In-memory staff directory
pub struct InMemoryStaffDirectory {
    employees: RwLock<HashMap<u32, Employee>>,
    catalog: Arc<dyn ServiceCatalog>,
    ledger: Arc<dyn BookingLedger>,
}

impl InMemoryStaffDirectory {
    /// Create a directory from the given employees
    #[must_use]
    pub fn new(
        employees: Vec<Employee>,
        catalog: Arc<dyn ServiceCatalog>,
        ledger: Arc<dyn BookingLedger>,
    ) -> Self {
        Self {
            employees: RwLock::new(employees.into_iter().map(|e| (e.id, e)).collect()),
            catalog,
            ledger,
        }
    }
}

impl StaffDirectory for InMemoryStaffDirectory {
    fn all(&self) -> Result<Vec<Employee>> {
        let employees = self.employees.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<Employee> = employees.values().cloned().collect();
        all.sort_by_key(|e| e.id);
        Ok(all)
    }

    fn by_id(&self, id: u32) -> Result<Option<Employee>> {
        let employees = self.employees.read().unwrap_or_else(|e| e.into_inner());
        Ok(employees.get(&id).cloned())
    }

    fn by_name(&self, name: &str) -> Result<Option<Employee>> {
        let employees = self.employees.read().unwrap_or_else(|e| e.into_inner());
        Ok(employees
            .values()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    fn services_for(&self, employee_id: u32) -> Result<Vec<Service>> {
        let employee = self
            .by_id(employee_id)?
            .ok_or_else(|| Error::EmployeeNotFound(employee_id.to_string()))?;

        let mut services = Vec::with_capacity(employee.service_ids.len());
        for service_id in &employee.service_ids {
            let service = self
                .catalog
                .by_id(*service_id)?
                .ok_or_else(|| Error::ServiceNotFound(service_id.to_string()))?;
            services.push(service);
        }

        Ok(services)
    }

    fn staff_for_service(&self, service_id: u32) -> Result<Vec<Employee>> {
        let mut matching: Vec<Employee> = self
            .all()?
            .into_iter()
            .filter(|e| e.service_ids.contains(&service_id))
            .collect();
        matching.sort_by_key(|e| e.id);
        Ok(matching)
    }

    fn check_availability(
        &self,
        employee_id: u32,
        service_id: u32,
        date: &str,
        time: &str,
    ) -> Result<bool> {
        let service = self
            .catalog
            .by_id(service_id)?
            .ok_or_else(|| Error::ServiceNotFound(service_id.to_string()))?;

        let starts_at = parse_slot(date, time)?;
        let ends_at = starts_at + Duration::minutes(i64::from(service.duration_minutes));

        let day_bookings = self.ledger.bookings_for(date, employee_id)?;
        for booking in &day_bookings {
            // Each existing booking occupies its own service's duration.
            let booked_minutes = self
                .catalog
                .by_id(booking.service_id)?
                .map(|s| s.duration_minutes)
                .unwrap_or(service.duration_minutes);
            let booking_ends = booking.starts_at + Duration::minutes(i64::from(booked_minutes));

            if starts_at < booking_ends && booking.starts_at < ends_at {
                debug!(
                    employee_id,
                    service_id,
                    slot = %starts_at,
                    conflict = %booking.starts_at,
                    "Slot overlaps existing booking"
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryServiceCatalog;
    use crate::ledger::InMemoryBookingLedger;
    use crate::models::{Booking, Service};

    fn directory() -> (
        InMemoryStaffDirectory,
        Arc<InMemoryBookingLedger>,
        Arc<InMemoryServiceCatalog>,
    ) {
        let catalog = Arc::new(InMemoryServiceCatalog::new(vec![
            Service {
                id: 1,
                name: "Dental Cleaning".to_string(),
                price: 80.0,
                duration_minutes: 60,
            },
            Service {
                id: 2,
                name: "Dental Checkup".to_string(),
                price: 50.0,
                duration_minutes: 30,
            },
        ]));
        let ledger = Arc::new(InMemoryBookingLedger::new());
        let staff = InMemoryStaffDirectory::new(
            vec![
                Employee {
                    id: 1,
                    name: "Alice".to_string(),
                    description: "Senior hygienist".to_string(),
                    service_ids: vec![1, 2],
                },
                Employee {
                    id: 2,
                    name: "George".to_string(),
                    description: "Oral surgeon".to_string(),
                    service_ids: vec![2],
                },
            ],
            catalog.clone(),
            ledger.clone(),
        );
        (staff, ledger, catalog)
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        let (staff, _, _) = directory();
        assert_eq!(staff.by_name("alice").unwrap().unwrap().id, 1);
        assert_eq!(staff.by_name("ALICE").unwrap().unwrap().id, 1);
        assert!(staff.by_name("Nadia").unwrap().is_none());
    }

    #[test]
    fn test_services_for_resolves_catalog_entries() {
        let (staff, _, _) = directory();
        let services = staff.services_for(2).unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "Dental Checkup");
    }

    #[test]
    fn test_staff_for_service_filters() {
        let (staff, _, _) = directory();
        let cleaners = staff.staff_for_service(1).unwrap();
        assert_eq!(cleaners.len(), 1);
        assert_eq!(cleaners[0].name, "Alice");

        let checkups = staff.staff_for_service(2).unwrap();
        assert_eq!(checkups.len(), 2);
    }

    #[test]
    fn test_availability_free_day() {
        let (staff, _, _) = directory();
        assert!(staff
            .check_availability(1, 1, "2025-06-01", "09:00")
            .unwrap());
    }

    #[test]
    fn test_availability_detects_overlap() {
        let (staff, ledger, _) = directory();
        ledger
            .save(Booking {
                id: 0,
                employee_id: 1,
                service_id: 1,
                starts_at: parse_slot("2025-06-01", "09:00").unwrap(),
                customer_name: "Jane".to_string(),
                customer_phone: "555-0100".to_string(),
            })
            .unwrap();

        // 09:30 falls inside the 09:00-10:00 cleaning
        assert!(!staff
            .check_availability(1, 1, "2025-06-01", "09:30")
            .unwrap());
        // 10:00 starts exactly when the cleaning ends
        assert!(staff
            .check_availability(1, 1, "2025-06-01", "10:00")
            .unwrap());
        // other employees are unaffected
        assert!(staff
            .check_availability(2, 2, "2025-06-01", "09:30")
            .unwrap());
    }

    #[test]
    fn test_availability_unknown_service() {
        let (staff, _, _) = directory();
        assert!(staff
            .check_availability(1, 99, "2025-06-01", "09:00")
            .is_err());
    }

    #[test]
    fn test_availability_bad_slot() {
        let (staff, _, _) = directory();
        assert!(staff.check_availability(1, 1, "junk", "09:00").is_err());
    }
}
