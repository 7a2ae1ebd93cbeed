//! Dubbo client API traits.
//!
//! `RegisterContext` is the identity every record is built against.
//! `RegisterRepository` is where finished records go.

use async_trait::async_trait;

use crate::error::DubboClientError;
use crate::models::{LocationRecord, MetadataRecord};

/// Shared registration identity supplied by the owning client component.
///
/// Values are read many times during a registration cycle and must not change
/// while it runs.
pub trait RegisterContext: Send + Sync {
    /// Context path every route of this client is mounted under.
    ///
    /// Used verbatim as a path prefix: no slash is inserted or stripped.
    fn context_path(&self) -> &str;

    /// Configured application name (may be blank).
    fn app_name(&self) -> &str;

    /// Host the registry should route traffic to.
    fn host(&self) -> &str;

    /// Port to advertise for a service exported on `declared`.
    fn port(&self, declared: u16) -> u16;

    /// Application name to advertise for a service that declares `declared`.
    fn resolve_app_name(&self, declared: &str) -> String;
}

/// Sink publishing registration records to the gateway registry.
///
/// Implementations own the transport and any retry policy.
#[async_trait]
pub trait RegisterRepository: Send + Sync {
    /// Publish a per-method metadata record.
    ///
    /// # Errors
    /// Returns `DubboClientError::Repository` when the record cannot be published.
    async fn persist_interface(&self, record: MetadataRecord) -> Result<(), DubboClientError>;

    /// Publish a per-instance location record.
    ///
    /// # Errors
    /// Returns `DubboClientError::Repository` when the record cannot be published.
    async fn persist_uri(&self, record: LocationRecord) -> Result<(), DubboClientError>;
}
