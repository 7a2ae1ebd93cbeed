//! Dubbo Client SDK
//!
//! This crate provides the public contract of the Dubbo gateway registration
//! client:
//! - `RegisterContext` - the shared identity (context path, app name, host, port)
//!   every registration record is built against
//! - `RegisterRepository` - the sink that publishes records to the gateway registry
//! - `MetadataRecord` / `LocationRecord` - the records handed to the registry
//! - `DubboRpcExt` - the Dubbo tuning payload embedded in a metadata record
//! - `DubboClientError` for error handling
//!
//! ## Usage
//!
//! ```ignore
//! use dubbo_client_sdk::{RegisterContext, RegisterRepository};
//!
//! let record = dubbo_client::domain::metadata::build_metadata_record(
//!     ctx.as_ref(),
//!     &service,
//!     &annotation,
//!     &method,
//! );
//! repo.persist_interface(record).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::{RegisterContext, RegisterRepository};
pub use error::DubboClientError;
pub use models::{
    DubboRpcExt, LocationRecord, MetadataRecord, MethodSignature, RoutingAnnotation, RpcType,
    ServiceDescriptor,
};
