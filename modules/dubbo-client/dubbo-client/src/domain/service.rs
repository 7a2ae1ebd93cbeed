use std::sync::Arc;

use dubbo_client_sdk::{
    MethodSignature, RegisterContext, RegisterRepository, RoutingAnnotation, ServiceDescriptor,
};

use crate::domain::error::DomainError;
use crate::domain::location::build_location_record;
use crate::domain::metadata::build_metadata_record;
use crate::domain::precondition::check_param;

/// A method exported by a service together with its routing attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedMethod {
    pub signature: MethodSignature,
    pub annotation: RoutingAnnotation,
}

/// A discovered service instance and the methods it exposes to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedService {
    pub descriptor: ServiceDescriptor,
    pub methods: Vec<ExportedMethod>,
}

/// Counts of records published by one registration cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationSummary {
    pub metadata_records: usize,
    pub location_records: usize,
}

/// Runs registration cycles against a registry repository.
#[derive(Clone)]
pub struct Service {
    ctx: Arc<dyn RegisterContext>,
    repo: Arc<dyn RegisterRepository>,
}

impl Service {
    #[must_use]
    pub fn new(ctx: Arc<dyn RegisterContext>, repo: Arc<dyn RegisterRepository>) -> Self {
        Self { ctx, repo }
    }

    /// Publish metadata for every exported method and one location per service.
    ///
    /// The identity check runs first; when it fails nothing is built or published.
    /// The first repository failure aborts the cycle.
    ///
    /// # Errors
    /// Returns `DomainError::Precondition` when the client identity is incomplete and
    /// `DomainError::Repository` when a record cannot be published.
    pub async fn register(
        &self,
        services: &[ExportedService],
    ) -> Result<RegistrationSummary, DomainError> {
        check_param(self.ctx.as_ref()).map_err(DomainError::Precondition)?;

        let mut summary = RegistrationSummary::default();

        for service in services {
            for method in &service.methods {
                let record = build_metadata_record(
                    self.ctx.as_ref(),
                    &service.descriptor,
                    &method.annotation,
                    &method.signature,
                );
                self.repo
                    .persist_interface(record)
                    .await
                    .map_err(|source| DomainError::Repository {
                        record: "metadata",
                        source,
                    })?;
                summary.metadata_records += 1;
            }

            let location = build_location_record(self.ctx.as_ref(), &service.descriptor);
            tracing::debug!(
                service = %service.descriptor.interface,
                host = %location.host,
                port = location.port,
                "Built dubbo location record"
            );
            self.repo
                .persist_uri(location)
                .await
                .map_err(|source| DomainError::Repository {
                    record: "location",
                    source,
                })?;
            summary.location_records += 1;
        }

        tracing::info!(
            context_path = %self.ctx.context_path(),
            metadata_records = summary.metadata_records,
            location_records = summary.location_records,
            "Dubbo registration cycle completed"
        );

        Ok(summary)
    }
}
