//! Dubbo extension payload.

use dubbo_client_sdk::{DubboRpcExt, ServiceDescriptor};

/// Copies the service's tuning fields into an extension payload.
///
/// Values are passed through unvalidated; `url` is left empty.
#[must_use]
pub fn build_rpc_ext(service: &ServiceDescriptor) -> DubboRpcExt {
    DubboRpcExt {
        group: service.group.clone(),
        version: service.version.clone(),
        loadbalance: service.loadbalance.clone(),
        retries: service.retries,
        timeout: service.timeout,
        sent: service.sent,
        cluster: service.cluster.clone(),
        url: String::new(),
    }
}
