//! Public models for the Dubbo gateway registration client.
//!
//! Inputs (`ServiceDescriptor`, `RoutingAnnotation`, `MethodSignature`) describe
//! an exported Dubbo endpoint as discovered locally. Outputs (`MetadataRecord`,
//! `LocationRecord`) are the value objects published to the gateway registry.
//! Output records serialize with the registry's `camelCase` field names.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// RPC family a registration record belongs to.
///
/// The registry dispatches on this tag to apply family-specific routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpcType {
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "dubbo")]
    Dubbo,
    #[serde(rename = "sofa")]
    Sofa,
    #[serde(rename = "tars")]
    Tars,
    #[serde(rename = "springCloud")]
    SpringCloud,
    #[serde(rename = "motan")]
    Motan,
    #[serde(rename = "grpc")]
    Grpc,
    #[serde(rename = "websocket")]
    WebSocket,
    #[serde(rename = "brpc")]
    Brpc,
}

impl RpcType {
    /// Wire name understood by the gateway registry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Dubbo => "dubbo",
            Self::Sofa => "sofa",
            Self::Tars => "tars",
            Self::SpringCloud => "springCloud",
            Self::Motan => "motan",
            Self::Grpc => "grpc",
            Self::WebSocket => "websocket",
            Self::Brpc => "brpc",
        }
    }

    /// Looks up a family by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            Self::Http,
            Self::Dubbo,
            Self::Sofa,
            Self::Tars,
            Self::SpringCloud,
            Self::Motan,
            Self::Grpc,
            Self::WebSocket,
            Self::Brpc,
        ]
        .into_iter()
        .find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for RpcType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exported Dubbo service as seen by the local discovery layer.
///
/// Tuning fields are `None` when the service does not set them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Application name declared by the service (may be empty).
    pub app_name: String,
    /// Fully qualified interface name of the service.
    pub interface: String,
    /// Port the service is exported on.
    pub port: u16,
    pub group: Option<String>,
    pub version: Option<String>,
    pub loadbalance: Option<String>,
    pub retries: Option<i32>,
    /// Invocation timeout in milliseconds.
    pub timeout: Option<i32>,
    /// Whether the provider must acknowledge before the call returns.
    pub sent: Option<bool>,
    pub cluster: Option<String>,
}

impl ServiceDescriptor {
    /// Creates a descriptor with no tuning fields set.
    #[must_use]
    pub fn new(app_name: impl Into<String>, interface: impl Into<String>, port: u16) -> Self {
        Self {
            app_name: app_name.into(),
            interface: interface.into(),
            port,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_loadbalance(mut self, loadbalance: impl Into<String>) -> Self {
        self.loadbalance = Some(loadbalance.into());
        self
    }

    #[must_use]
    pub fn with_retries(mut self, retries: i32) -> Self {
        self.retries = Some(retries);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_sent(mut self, sent: bool) -> Self {
        self.sent = Some(sent);
        self
    }

    #[must_use]
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }
}

/// Routing attributes declared on an exported method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingAnnotation {
    /// Route path relative to the context path. Blank means "use the method name".
    pub path: String,
    /// Human-readable description of the route.
    pub desc: String,
    /// Rule name override. Empty means "use the resolved path".
    pub rule_name: String,
    pub enabled: bool,
}

impl Default for RoutingAnnotation {
    fn default() -> Self {
        Self {
            path: String::new(),
            desc: String::new(),
            rule_name: String::new(),
            enabled: true,
        }
    }
}

impl RoutingAnnotation {
    /// Creates an enabled annotation with the given path and description.
    #[must_use]
    pub fn new(path: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            desc: desc.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rule_name(mut self, rule_name: impl Into<String>) -> Self {
        self.rule_name = rule_name.into();
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Name and parameter types of an exported method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    /// Parameter type names in declaration order.
    pub parameter_types: Vec<String>,
}

impl MethodSignature {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, parameter_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }
}

/// Per-method registration record: how the gateway invokes the method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub app_name: String,
    pub service_name: String,
    pub method_name: String,
    pub context_path: String,
    pub host: String,
    pub port: u16,
    /// Context path followed by the method's local path.
    pub path: String,
    pub rule_name: String,
    pub path_desc: String,
    /// Comma-joined parameter type names.
    pub parameter_types: String,
    pub rpc_type: RpcType,
    /// Encoded `DubboRpcExt`.
    pub rpc_ext: String,
    pub enabled: bool,
}

/// Per-instance registration record: where the service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub context_path: String,
    pub app_name: String,
    pub rpc_type: RpcType,
    pub host: String,
    pub port: u16,
}

/// Dubbo tuning parameters attached to a metadata record.
///
/// Opaque to the generic registry; the Dubbo plugin on the gateway side decodes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DubboRpcExt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loadbalance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Reserved. Always empty when built by this client.
    #[serde(default)]
    pub url: String,
}

impl DubboRpcExt {
    /// Encodes the payload as a JSON object string.
    ///
    /// Unset fields are omitted; `url` is always present.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut object = Map::new();
        put(&mut object, "group", self.group.as_deref().map(Value::from));
        put(&mut object, "version", self.version.as_deref().map(Value::from));
        put(
            &mut object,
            "loadbalance",
            self.loadbalance.as_deref().map(Value::from),
        );
        put(&mut object, "retries", self.retries.map(Value::from));
        put(&mut object, "timeout", self.timeout.map(Value::from));
        put(&mut object, "sent", self.sent.map(Value::from));
        put(&mut object, "cluster", self.cluster.as_deref().map(Value::from));
        object.insert("url".to_owned(), Value::from(self.url.as_str()));
        Value::Object(object).to_string()
    }

    /// Decodes a payload produced by [`DubboRpcExt::encode`].
    ///
    /// # Errors
    /// Returns the `serde_json` error when `raw` is not a valid payload object.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn put(object: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        object.insert(key.to_owned(), value);
    }
}
