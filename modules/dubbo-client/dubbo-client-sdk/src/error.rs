//! Dubbo client error types.
//!
//! Transport-agnostic error definitions shared by the client and repositories.

use thiserror::Error;

use crate::models::RpcType;

/// Error type for Dubbo client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DubboClientError {
    /// Context path or application name is blank; nothing may be registered.
    #[error("apache {rpc_type} client must config the contextPath or appName")]
    MissingIdentity {
        rpc_type: RpcType,
        context_path_blank: bool,
        app_name_blank: bool,
    },

    /// The registry repository rejected or failed to publish a record.
    #[error("register repository error: {message}")]
    Repository { message: String },
}

impl DubboClientError {
    /// Create a missing identity error.
    #[must_use]
    pub fn missing_identity(
        rpc_type: RpcType,
        context_path_blank: bool,
        app_name_blank: bool,
    ) -> Self {
        Self::MissingIdentity {
            rpc_type,
            context_path_blank,
            app_name_blank,
        }
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    /// Configuration errors abort the registration cycle and are never retried.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingIdentity { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identity_message_names_fields_and_family() {
        let err = DubboClientError::missing_identity(RpcType::Dubbo, true, false);
        assert_eq!(
            err.to_string(),
            "apache dubbo client must config the contextPath or appName"
        );
        assert!(err.is_config_error());
    }

    #[test]
    fn test_repository_error_is_not_config_error() {
        let err = DubboClientError::repository("connection refused");
        assert_eq!(err.to_string(), "register repository error: connection refused");
        assert!(!err.is_config_error());
    }
}
