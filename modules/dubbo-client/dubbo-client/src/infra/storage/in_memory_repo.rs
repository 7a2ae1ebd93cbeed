//! In-memory registry repository.

use async_trait::async_trait;
use dubbo_client_sdk::{DubboClientError, LocationRecord, MetadataRecord, RegisterRepository};
use parking_lot::Mutex;

/// Keeps every published record in publication order.
///
/// Stands in for the registry transport in tests and embedded setups.
#[derive(Debug, Default)]
pub struct InMemoryRegisterRepository {
    interfaces: Mutex<Vec<MetadataRecord>>,
    uris: Mutex<Vec<LocationRecord>>,
}

impl InMemoryRegisterRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata records published so far.
    #[must_use]
    pub fn interfaces(&self) -> Vec<MetadataRecord> {
        self.interfaces.lock().clone()
    }

    /// Location records published so far.
    #[must_use]
    pub fn uris(&self) -> Vec<LocationRecord> {
        self.uris.lock().clone()
    }

    /// Drops every stored record.
    pub fn clear(&self) {
        self.interfaces.lock().clear();
        self.uris.lock().clear();
    }
}

#[async_trait]
impl RegisterRepository for InMemoryRegisterRepository {
    async fn persist_interface(&self, record: MetadataRecord) -> Result<(), DubboClientError> {
        self.interfaces.lock().push(record);
        Ok(())
    }

    async fn persist_uri(&self, record: LocationRecord) -> Result<(), DubboClientError> {
        self.uris.lock().push(record);
        Ok(())
    }
}
