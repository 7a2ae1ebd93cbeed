#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::context::ClientContext;
    use crate::infra::storage::InMemoryRegisterRepository;
    use async_trait::async_trait;
    use dubbo_client_sdk::{
        DubboClientError, LocationRecord, MetadataRecord, MethodSignature, RegisterRepository,
        RoutingAnnotation, ServiceDescriptor,
    };
    use parking_lot::Mutex;
    use std::sync::Arc;

    // Mock repository that fails on the n-th metadata record
    struct FailingRepository {
        fail_at: usize,
        seen: Mutex<usize>,
        uris: Mutex<Vec<LocationRecord>>,
    }

    #[async_trait]
    impl RegisterRepository for FailingRepository {
        async fn persist_interface(&self, _record: MetadataRecord) -> Result<(), DubboClientError> {
            let mut seen = self.seen.lock();
            *seen += 1;
            if *seen == self.fail_at {
                return Err(DubboClientError::repository("registry unavailable"));
            }
            Ok(())
        }

        async fn persist_uri(&self, record: LocationRecord) -> Result<(), DubboClientError> {
            self.uris.lock().push(record);
            Ok(())
        }
    }

    fn order_service() -> service::ExportedService {
        service::ExportedService {
            descriptor: ServiceDescriptor::new("order-svc", "com.example.OrderService", 20880)
                .with_version("1.0.0"),
            methods: vec![
                service::ExportedMethod {
                    signature: MethodSignature::new("queryOrder", ["java.lang.String"]),
                    annotation: RoutingAnnotation::new("/query", "query order"),
                },
                service::ExportedMethod {
                    signature: MethodSignature::new("cancel", ["long", "java.lang.String"]),
                    annotation: RoutingAnnotation::new("", "cancel order")
                        .with_rule_name("cancel-rule"),
                },
            ],
        }
    }

    fn user_service() -> service::ExportedService {
        service::ExportedService {
            descriptor: ServiceDescriptor::new("user-svc", "com.example.UserService", 20881),
            methods: vec![service::ExportedMethod {
                signature: MethodSignature::new("findUser", ["long"]),
                annotation: RoutingAnnotation::default(),
            }],
        }
    }

    fn create_context() -> Arc<ClientContext> {
        Arc::new(ClientContext::new("gateway-app", "/dubbo", "10.0.0.5", None))
    }

    #[tokio::test]
    async fn test_register_publishes_metadata_and_locations() {
        let repo = Arc::new(InMemoryRegisterRepository::new());
        let service = service::Service::new(create_context(), repo.clone());

        let summary = service
            .register(&[order_service(), user_service()])
            .await
            .unwrap();

        assert_eq!(summary.metadata_records, 3);
        assert_eq!(summary.location_records, 2);

        let paths: Vec<String> = repo.interfaces().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/dubbo/query", "/dubbocancel", "/dubbofindUser"]);

        let ports: Vec<u16> = repo.uris().into_iter().map(|r| r.port).collect();
        assert_eq!(ports, vec![20880, 20881]);
    }

    #[tokio::test]
    async fn test_register_refuses_incomplete_identity() {
        let repo = Arc::new(InMemoryRegisterRepository::new());
        let ctx = Arc::new(ClientContext::new("gateway-app", "", "10.0.0.5", None));
        let service = service::Service::new(ctx, repo.clone());

        let result = service.register(&[order_service()]).await;

        assert!(matches!(
            result,
            Err(error::DomainError::Precondition(
                DubboClientError::MissingIdentity {
                    context_path_blank: true,
                    app_name_blank: false,
                    ..
                }
            ))
        ));
        assert!(repo.interfaces().is_empty());
        assert!(repo.uris().is_empty());
    }

    #[tokio::test]
    async fn test_service_without_methods_still_publishes_location() {
        let repo = Arc::new(InMemoryRegisterRepository::new());
        let service = service::Service::new(create_context(), repo.clone());
        let mut bare = user_service();
        bare.methods.clear();

        let summary = service.register(&[bare]).await.unwrap();

        assert_eq!(summary.metadata_records, 0);
        assert_eq!(summary.location_records, 1);
        assert_eq!(repo.uris()[0].app_name, "gateway-app");
    }

    #[tokio::test]
    async fn test_repository_failure_aborts_cycle() {
        let repo = Arc::new(FailingRepository {
            fail_at: 2,
            seen: Mutex::new(0),
            uris: Mutex::new(Vec::new()),
        });
        let service = service::Service::new(create_context(), repo.clone());

        let result = service.register(&[order_service(), user_service()]).await;

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            error::DomainError::Repository {
                record: "metadata",
                ..
            }
        ));
        assert_eq!(
            DubboClientError::from(err),
            DubboClientError::repository("registry unavailable")
        );
        assert!(repo.uris.lock().is_empty());
    }

    #[tokio::test]
    async fn test_empty_cycle_still_checks_identity() {
        let repo = Arc::new(InMemoryRegisterRepository::new());
        let ctx = Arc::new(ClientContext::new("", "/dubbo", "10.0.0.5", None));
        let service = service::Service::new(ctx, repo);

        assert!(service.register(&[]).await.is_err());
    }
}
