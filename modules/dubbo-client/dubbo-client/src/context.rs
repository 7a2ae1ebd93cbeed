//! Registration context backed by [`DubboClientConfig`].

use dubbo_client_sdk::RegisterContext;

use crate::config::DubboClientConfig;
use crate::domain::is_blank;

const LOOPBACK_HOST: &str = "127.0.0.1";

/// Registration identity of this client process.
///
/// The advertised host is resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientContext {
    app_name: String,
    context_path: String,
    host: String,
    port: Option<u16>,
}

impl ClientContext {
    /// Builds the context, detecting the local IP when no host is configured.
    #[must_use]
    pub fn from_config(config: &DubboClientConfig) -> Self {
        let host = if is_blank(&config.host) {
            detect_local_host()
        } else {
            config.host.clone()
        };

        Self {
            app_name: config.app_name.clone(),
            context_path: config.context_path.clone(),
            host,
            port: config.port,
        }
    }

    /// Builds a context with an explicit host, skipping local IP detection.
    #[must_use]
    pub fn new(
        app_name: impl Into<String>,
        context_path: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            context_path: context_path.into(),
            host: host.into(),
            port,
        }
    }
}

impl RegisterContext for ClientContext {
    fn context_path(&self) -> &str {
        &self.context_path
    }

    fn app_name(&self) -> &str {
        &self.app_name
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self, declared: u16) -> u16 {
        self.port.unwrap_or(declared)
    }

    fn resolve_app_name(&self, declared: &str) -> String {
        if is_blank(&self.app_name) {
            declared.to_owned()
        } else {
            self.app_name.clone()
        }
    }
}

fn detect_local_host() -> String {
    match local_ip_address::local_ip() {
        Ok(ip) => {
            tracing::debug!(host = %ip, "No host configured, advertising primary local IP");
            ip.to_string()
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Local IP detection failed, advertising loopback host"
            );
            LOOPBACK_HOST.to_owned()
        }
    }
}
