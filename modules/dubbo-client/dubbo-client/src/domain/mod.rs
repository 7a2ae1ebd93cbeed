//! Record builders and the registration cycle.

pub mod error;
pub mod ext;
pub mod location;
pub mod metadata;
pub mod precondition;
pub mod service;

#[cfg(test)]
mod service_test;

use dubbo_client_sdk::RpcType;

/// RPC family tag carried by every record this client builds.
pub const RPC_TYPE: RpcType = RpcType::Dubbo;

/// Empty or whitespace-only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
