//! Service catalog
//!
//! Lookup of bookable services by id or (case-insensitive) name.

use crate::error::Result;
use crate::models::Service;
use std::collections::HashMap;
use std::sync::RwLock;

/// Read access to the service catalog
pub trait ServiceCatalog: Send + Sync {
    /// All services, ordered by id
    fn all(&self) -> Result<Vec<Service>>;

    /// Look up a service by id
    fn by_id(&self, id: u32) -> Result<Option<Service>>;

    /// Look up a service by name (case-insensitive)
    fn by_name(&self, name: &str) -> Result<Option<Service>>;
}

/// In-memory service catalog
pub struct InMemoryServiceCatalog {
    services: RwLock<HashMap<u32, Service>>,
}

impl InMemoryServiceCatalog {
    /// Create a catalog from the given services
    #[must_use]
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services: RwLock::new(services.into_iter().map(|s| (s.id, s)).collect()),
        }
    }
}

impl ServiceCatalog for InMemoryServiceCatalog {
    fn all(&self) -> Result<Vec<Service>> {
        let services = self.services.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<Service> = services.values().cloned().collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    fn by_id(&self, id: u32) -> Result<Option<Service>> {
        let services = self.services.read().unwrap_or_else(|e| e.into_inner());
        Ok(services.get(&id).cloned())
    }

    fn by_name(&self, name: &str) -> Result<Option<Service>> {
        let services = self.services.read().unwrap_or_else(|e| e.into_inner());
        Ok(services
            .values()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}
