//! Route table artifact types.
//!
//! These records are what the proxy engine consumes: a static base table
//! deserializes from configuration, and the compiled table serializes to
//! JSON as the equivalent of a static route file.

use serde::{Deserialize, Serialize};

/// A downstream host and port pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HostPort {
    pub host: String,
    pub port: u16,
}

/// One routing rule as consumed by the proxy engine.
///
/// `downstream_scheme` and `downstream_path_template` may arrive blank from
/// static configuration; the compiler's defaulting pass resolves both, and a
/// compiled table never carries a blank value in either field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CompiledRoute {
    /// Public-facing path pattern matched at the gateway.
    pub upstream_path_template: String,

    /// Path template a matched request is forwarded to.
    pub downstream_path_template: String,

    /// Scheme used to reach the downstream target.
    pub downstream_scheme: String,

    /// Downstream targets. Cardinality one for generated routes; the format
    /// admits more for load balancing.
    pub downstream_hosts: Vec<HostPort>,
}

/// The full ordered route table handed to the proxy engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct RouteTable {
    pub routes: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRoute> {
        self.routes.iter()
    }
}

/// True for the blank (unset) state of a defaultable field. Whitespace-only
/// values count as blank.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blankness_includes_whitespace() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("http"));
        assert!(!is_blank(" /ads "));
    }

    #[test]
    fn static_entry_deserializes_with_blank_fields() {
        let route: CompiledRoute = toml::from_str(
            r#"
            upstream_path_template = "/legacy/{everything}"
            downstream_hosts = [{ host = "legacy-host", port = 9000 }]
            "#,
        )
        .unwrap();

        assert_eq!(route.upstream_path_template, "/legacy/{everything}");
        assert_eq!(route.downstream_path_template, "");
        assert_eq!(route.downstream_scheme, "");
        assert_eq!(
            route.downstream_hosts,
            vec![HostPort {
                host: "legacy-host".to_string(),
                port: 9000
            }]
        );
    }

    #[test]
    fn table_serializes_as_route_file() {
        let table = RouteTable {
            routes: vec![CompiledRoute {
                upstream_path_template: "/ads".to_string(),
                downstream_path_template: "/ads".to_string(),
                downstream_scheme: "http".to_string(),
                downstream_hosts: vec![HostPort {
                    host: "ads-host".to_string(),
                    port: 8080,
                }],
            }],
        };

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json["routes"][0]["downstream_hosts"][0]["host"],
            "ads-host"
        );
        assert_eq!(json["routes"][0]["downstream_scheme"], "http");
    }
}
