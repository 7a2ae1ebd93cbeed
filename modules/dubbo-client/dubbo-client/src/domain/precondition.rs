//! Identity check gating every registration cycle.

use dubbo_client_sdk::{DubboClientError, RegisterContext};

use super::{is_blank, RPC_TYPE};

/// Fails unless both the context path and the application name are set.
///
/// # Errors
/// Returns `DubboClientError::MissingIdentity` when either field is blank.
pub fn check_param(ctx: &dyn RegisterContext) -> Result<(), DubboClientError> {
    let context_path_blank = is_blank(ctx.context_path());
    let app_name_blank = is_blank(ctx.app_name());

    if context_path_blank || app_name_blank {
        tracing::warn!(
            rpc_type = %RPC_TYPE,
            context_path_blank,
            app_name_blank,
            "Client identity incomplete, registration refused"
        );
        return Err(DubboClientError::missing_identity(
            RPC_TYPE,
            context_path_blank,
            app_name_blank,
        ));
    }

    Ok(())
}
