//! Dubbo gateway registration client.
//!
//! Turns exported Dubbo services into the records a gateway registry needs:
//! one `MetadataRecord` per exported method and one `LocationRecord` per
//! service instance. A registration cycle refuses to publish anything until
//! the client identity (context path and application name) is configured.
//!
//! ## Configuration
//!
//! ```yaml
//! app_name: "order-svc"
//! context_path: "/order"
//! host: "10.0.0.5"   # optional, defaults to the primary local IP
//! port: 20880        # optional, overrides the port each service declares
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod context;
pub mod domain;
pub mod infra;

pub use config::DubboClientConfig;
pub use context::ClientContext;
pub use domain::service::{ExportedMethod, ExportedService, RegistrationSummary, Service};
pub use infra::storage::InMemoryRegisterRepository;
