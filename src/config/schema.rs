//! Configuration schema definitions.
//!
//! This module defines the complete settings structure for the fleet
//! processes. All types derive Serde traits for deserialization from config
//! files. Settings are bound once at process start and never mutated.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::routing::table::CompiledRoute;

/// Root settings for a fleet process (gateway or service).
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerSettings,

    /// Gateway route declarations and route defaults.
    pub gateway: GatewaySettings,

    /// Schema migration settings for fleet services.
    pub migration: MigrationSettings,

    /// Authentication scheme settings for fleet services.
    pub auth: AuthSettings,

    /// Observability settings.
    pub observability: ObservabilitySettings,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerSettings {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout for the post-bootstrap HTTP surface, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Gateway settings: the declarative route set and process-wide defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewaySettings {
    /// Global fallback scheme for routes that do not carry one. Blank means
    /// no global default is configured.
    pub default_downstream_scheme: String,

    /// Statically-authored base route table. Entries may leave the scheme or
    /// downstream path blank; the compiler's defaulting pass resolves them.
    pub static_routes: Vec<CompiledRoute>,

    /// Logical route declarations expanded by the compiler. Declaration
    /// order defines the order of generated table entries.
    pub routes: Vec<RouteDeclaration>,
}

/// A logical route as authored by an operator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteDeclaration {
    /// Identifying key, unique within the declaration set.
    pub key: String,

    /// Downstream target URI (scheme://host[:port][/path]). Any path
    /// component is ignored; downstream paths come from the templates.
    pub downstream: String,

    /// Public-facing path templates that map to this downstream target.
    /// Ordered and non-empty.
    pub upstream_path_templates: Vec<String>,
}

/// Schema migration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MigrationSettings {
    /// Wait durations between migration attempts, in seconds, consumed
    /// strictly in order. Exhausting the schedule is fatal.
    pub retry_delays_secs: Vec<u64>,

    /// Migration command (program followed by arguments) executed before
    /// the listener starts. The command must be idempotent.
    pub command: Vec<String>,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            retry_delays_secs: vec![10, 20, 30],
            command: Vec::new(),
        }
    }
}

/// Authentication scheme settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Identity provider selector. The exact string "OpenIddict" makes the
    /// OpenIddict handler the default scheme; any other value, including
    /// blank, selects standard bearer.
    pub provider: String,

    /// Token authority URL for the standard bearer handler.
    pub authority: String,

    /// Expected audience (API name) for the standard bearer handler.
    pub audience: String,

    /// Whether the bearer handler requires HTTPS metadata from the
    /// authority.
    pub require_https_metadata: bool,

    /// Parameters for the OpenIddict validation handler.
    pub openiddict: OpenIddictSettings,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            provider: String::new(),
            authority: String::new(),
            audience: String::new(),
            require_https_metadata: true,
            openiddict: OpenIddictSettings::default(),
        }
    }
}

/// OpenIddict validation handler parameters. Carried opaquely for the token
/// validation collaborator; this core never interprets them.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OpenIddictSettings {
    /// Issuer URI that tokens must carry.
    pub issuer_uri: String,

    /// Path to the token decryption certificate.
    pub token_decryption_certificate: PathBuf,

    /// Path to the issuer signing certificate.
    pub issuer_signing_certificate: PathBuf,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilitySettings {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides.
    pub log_level: String,
}

impl Default for ObservabilitySettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_settings_file() {
        let settings: AppSettings = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"
            request_timeout_secs = 10

            [observability]
            log_level = "debug"

            [gateway]
            default_downstream_scheme = "http"

            [[gateway.static_routes]]
            upstream_path_template = "/legacy/{everything}"
            downstream_hosts = [{ host = "legacy-host", port = 9000 }]

            [[gateway.routes]]
            key = "ads"
            downstream = "http://ads-host:8080"
            upstream_path_templates = ["/ads/{id}", "/ads"]

            [migration]
            retry_delays_secs = [1, 2]
            command = ["migrate", "up"]

            [auth]
            provider = "OpenIddict"
            authority = "https://identity:5001"
            audience = "fleet-api"
            require_https_metadata = false

            [auth.openiddict]
            issuer_uri = "https://identity:5001/"
            token_decryption_certificate = "/certs/decrypt.pfx"
            issuer_signing_certificate = "/certs/sign.pfx"
            "#,
        )
        .unwrap();

        assert_eq!(settings.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(settings.gateway.default_downstream_scheme, "http");
        assert_eq!(settings.gateway.static_routes.len(), 1);
        assert_eq!(settings.gateway.routes.len(), 1);
        assert_eq!(settings.gateway.routes[0].key, "ads");
        assert_eq!(
            settings.gateway.routes[0].upstream_path_templates,
            vec!["/ads/{id}", "/ads"]
        );
        assert_eq!(settings.migration.retry_delays_secs, vec![1, 2]);
        assert_eq!(settings.migration.command, vec!["migrate", "up"]);
        assert_eq!(settings.auth.provider, "OpenIddict");
        assert!(!settings.auth.require_https_metadata);
    }

    #[test]
    fn minimal_file_gets_defaults() {
        let settings: AppSettings = toml::from_str("").unwrap();

        assert_eq!(settings.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(settings.listener.request_timeout_secs, 30);
        assert_eq!(settings.observability.log_level, "info");
        assert_eq!(settings.gateway.default_downstream_scheme, "");
        assert!(settings.gateway.routes.is_empty());
        assert_eq!(settings.migration.retry_delays_secs, vec![10, 20, 30]);
        assert!(settings.migration.command.is_empty());
        assert_eq!(settings.auth.provider, "");
        assert!(settings.auth.require_https_metadata);
    }
}
