//! Configuration for the Dubbo registration client.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Environment variable prefix for configuration overrides, e.g. `SHENYU_DUBBO_APP_NAME`.
pub const ENV_PREFIX: &str = "SHENYU_DUBBO_";

/// Configuration loading error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("invalid dubbo client config: {source}")]
    Invalid {
        #[source]
        source: Box<figment::Error>,
    },
}

/// Client identity shared by every record this client registers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DubboClientConfig {
    /// Application name. When blank, each service's declared name is used instead.
    pub app_name: String,

    /// Route prefix for every registered method, used verbatim.
    pub context_path: String,

    /// Advertised host. Blank means "detect the primary local IP".
    pub host: String,

    /// Advertised port. `None` keeps the port each service declares.
    pub port: Option<u16>,
}

impl DubboClientConfig {
    /// Loads configuration in layers: defaults, then the YAML file (if given),
    /// then `SHENYU_DUBBO_*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::FileNotFound` when `path` does not point to a file and
    /// `ConfigError::Invalid` when a layer holds unknown keys or mistyped values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Invalid {
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_blank() {
        let cfg = DubboClientConfig::default();
        assert!(cfg.app_name.is_empty());
        assert!(cfg.context_path.is_empty());
        assert!(cfg.host.is_empty());
        assert_eq!(cfg.port, None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let raw = serde_json::json!({ "app_name": "order-svc", "contextPath": "/order" });
        assert!(serde_json::from_value::<DubboClientConfig>(raw).is_err());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let raw = serde_json::json!({ "context_path": "/order" });
        let cfg: DubboClientConfig = serde_json::from_value(raw).unwrap_or_default();
        assert_eq!(cfg.context_path, "/order");
        assert!(cfg.app_name.is_empty());
    }
}
