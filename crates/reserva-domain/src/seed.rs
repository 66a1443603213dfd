//! Demo seed data
//!
//! A small dental clinic used by the server, the CLI, and the tests.

use crate::catalog::InMemoryServiceCatalog;
use crate::ledger::InMemoryBookingLedger;
use crate::models::{Employee, Service};
use crate::staff::InMemoryStaffDirectory;
use std::sync::Arc;

/// The wired-up demo collaborators
pub struct DemoClinic {
    /// Service catalog
    pub catalog: Arc<InMemoryServiceCatalog>,
    /// Staff directory
    pub staff: Arc<InMemoryStaffDirectory>,
    /// Booking ledger
    pub ledger: Arc<InMemoryBookingLedger>,
}

/// Build the demo dental clinic
#[must_use]
pub fn demo_clinic() -> DemoClinic {
    let catalog = Arc::new(InMemoryServiceCatalog::new(vec![
        Service {
            id: 1,
            name: "Dental Checkup".to_string(),
            price: 50.0,
            duration_minutes: 30,
        },
        Service {
            id: 2,
            name: "Dental Cleaning".to_string(),
            price: 80.0,
            duration_minutes: 60,
        },
        Service {
            id: 3,
            name: "Teeth Whitening".to_string(),
            price: 120.0,
            duration_minutes: 45,
        },
        Service {
            id: 4,
            name: "Tooth Extraction".to_string(),
            price: 150.0,
            duration_minutes: 45,
        },
        Service {
            id: 5,
            name: "Orthodontic Consultation".to_string(),
            price: 60.0,
            duration_minutes: 30,
        },
    ]));

    let ledger = Arc::new(InMemoryBookingLedger::new());

    let staff = Arc::new(InMemoryStaffDirectory::new(
        vec![
            Employee {
                id: 1,
                name: "Alice".to_string(),
                description: "Senior dental hygienist".to_string(),
                service_ids: vec![1, 2, 3],
            },
            Employee {
                id: 2,
                name: "George".to_string(),
                description: "Oral surgeon".to_string(),
                service_ids: vec![1, 4],
            },
            Employee {
                id: 3,
                name: "Emily".to_string(),
                description: "Cosmetic dentistry specialist".to_string(),
                service_ids: vec![2, 3, 5],
            },
        ],
        catalog.clone(),
        ledger.clone(),
    ));

    DemoClinic {
        catalog,
        staff,
        ledger,
    }
}
