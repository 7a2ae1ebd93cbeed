//! Per-instance location record.

use dubbo_client_sdk::{LocationRecord, RegisterContext, ServiceDescriptor};

use super::RPC_TYPE;

/// Builds the location record advertising where `service` is reachable.
#[must_use]
pub fn build_location_record(
    ctx: &dyn RegisterContext,
    service: &ServiceDescriptor,
) -> LocationRecord {
    LocationRecord {
        context_path: ctx.context_path().to_owned(),
        app_name: ctx.resolve_app_name(&service.app_name),
        rpc_type: RPC_TYPE,
        host: ctx.host().to_owned(),
        port: ctx.port(service.port),
    }
}
