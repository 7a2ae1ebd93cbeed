//! Domain-level errors for the Dubbo registration client.

use dubbo_client_sdk::DubboClientError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The client identity check refused the cycle.
    #[error("{0}")]
    Precondition(DubboClientError),

    #[error("Failed to publish {record} record: {source}")]
    Repository {
        record: &'static str,
        #[source]
        source: DubboClientError,
    },
}

impl From<DomainError> for DubboClientError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Precondition(err) | DomainError::Repository { source: err, .. } => err,
        }
    }
}
