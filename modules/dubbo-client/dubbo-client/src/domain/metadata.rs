//! Per-method metadata record.

use dubbo_client_sdk::{
    MetadataRecord, MethodSignature, RegisterContext, RoutingAnnotation, ServiceDescriptor,
};

use super::ext::build_rpc_ext;
use super::{is_blank, RPC_TYPE};

/// Builds the metadata record for one exported method.
///
/// The route path is the context path followed directly by the annotation path,
/// or by the method name when the annotation path is blank. Nothing is inserted
/// between the two, so the context path must already end the way the routes
/// expect (`"/api/"` + `"order"`, or `"/api"` + `"/order"`).
///
/// The rule name is the annotation's rule name, or the route path when empty.
#[must_use]
pub fn build_metadata_record(
    ctx: &dyn RegisterContext,
    service: &ServiceDescriptor,
    annotation: &RoutingAnnotation,
    method: &MethodSignature,
) -> MetadataRecord {
    let local_path = if is_blank(&annotation.path) {
        method.name.as_str()
    } else {
        annotation.path.as_str()
    };
    let path = format!("{}{local_path}", ctx.context_path());
    let rule_name = if annotation.rule_name.is_empty() {
        path.clone()
    } else {
        annotation.rule_name.clone()
    };

    let record = MetadataRecord {
        app_name: ctx.resolve_app_name(&service.app_name),
        service_name: service.interface.clone(),
        method_name: method.name.clone(),
        context_path: ctx.context_path().to_owned(),
        host: ctx.host().to_owned(),
        port: ctx.port(service.port),
        path,
        rule_name,
        path_desc: annotation.desc.clone(),
        parameter_types: method.parameter_types.join(","),
        rpc_type: RPC_TYPE,
        rpc_ext: build_rpc_ext(service).encode(),
        enabled: annotation.enabled,
    };

    tracing::debug!(
        service = %record.service_name,
        method = %record.method_name,
        path = %record.path,
        rule_name = %record.rule_name,
        "Built dubbo metadata record"
    );

    record
}
