//! Route table compilation.
//!
//! # Responsibilities
//! - Parse each declaration's downstream URI into (scheme, host, port)
//! - Expand every upstream path template into one compiled route
//! - Merge generated routes after the static base table
//! - Apply default inheritance to every entry of the combined table
//!
//! Runs exactly once, synchronously, before the engine accepts connections.

use std::collections::HashMap;

use thiserror::Error;
use url::Url;

use crate::config::schema::RouteDeclaration;
use crate::routing::table::{is_blank, CompiledRoute, HostPort, RouteTable};

/// Process-wide fallback values applied during the defaulting pass. Read
/// once from configuration, immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct RouteDefaults {
    /// Global fallback downstream scheme. Blank means none is configured.
    pub downstream_scheme: String,
}

impl RouteDefaults {
    pub fn new(downstream_scheme: impl Into<String>) -> Self {
        Self {
            downstream_scheme: downstream_scheme.into(),
        }
    }
}

/// Fatal compilation errors. These are configuration authoring mistakes:
/// startup must abort and no partial table may be installed.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("route {key:?}: invalid downstream URI {uri:?}: {source}")]
    InvalidDownstreamUri {
        key: String,
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("route {key:?}: downstream URI {uri:?} has no host")]
    MissingHost { key: String, uri: String },

    #[error("route {key:?}: downstream URI {uri:?} has no port and no default port for its scheme")]
    MissingPort { key: String, uri: String },

    #[error("route {upstream:?} has a blank downstream scheme and no global default is configured")]
    UnresolvedScheme { upstream: String },

    #[error("table entry {index} has neither a downstream nor an upstream path template")]
    UnresolvedDownstreamPath { index: usize },
}

/// Compile the full route table from the static base table and the logical
/// route declarations, then apply default inheritance to every entry of the
/// combined table.
///
/// Pure and deterministic: identical inputs produce identical tables, in
/// the same order. On error no table is returned and callers must not
/// install partial output.
pub fn compile(
    base: &[CompiledRoute],
    declarations: &[RouteDeclaration],
    defaults: &RouteDefaults,
) -> Result<RouteTable, CompileError> {
    let mut routes: Vec<CompiledRoute> = base.to_vec();

    for declaration in declarations {
        let target = parse_downstream(declaration)?;

        // One compiled route per upstream template, all sharing the same
        // downstream target. The downstream path is the template itself:
        // declaration-based routes never remap paths.
        for template in &declaration.upstream_path_templates {
            routes.push(CompiledRoute {
                upstream_path_template: template.clone(),
                downstream_path_template: template.clone(),
                downstream_scheme: target.scheme.clone(),
                downstream_hosts: vec![HostPort {
                    host: target.host.clone(),
                    port: target.port,
                }],
            });
        }
    }

    apply_defaults(&mut routes, defaults)?;
    warn_on_duplicates(&routes);

    Ok(RouteTable { routes })
}

struct DownstreamTarget {
    scheme: String,
    host: String,
    port: u16,
}

/// Parse a declaration's downstream URI into (scheme, host, port). Any path
/// component is ignored; downstream paths come from the templates.
fn parse_downstream(declaration: &RouteDeclaration) -> Result<DownstreamTarget, CompileError> {
    let url = Url::parse(&declaration.downstream).map_err(|source| {
        CompileError::InvalidDownstreamUri {
            key: declaration.key.clone(),
            uri: declaration.downstream.clone(),
            source,
        }
    })?;

    let host = url.host_str().ok_or_else(|| CompileError::MissingHost {
        key: declaration.key.clone(),
        uri: declaration.downstream.clone(),
    })?;

    let port = url
        .port_or_known_default()
        .ok_or_else(|| CompileError::MissingPort {
            key: declaration.key.clone(),
            uri: declaration.downstream.clone(),
        })?;

    Ok(DownstreamTarget {
        scheme: url.scheme().to_string(),
        host: host.to_string(),
        port,
    })
}

/// Defaulting pass over the combined table, one field at a time. A blank
/// scheme inherits the global default; a blank downstream path inherits the
/// route's own upstream template. Non-blank values are never overwritten.
/// Any field still blank afterwards violates the compiled-route invariant
/// and fails the compilation.
fn apply_defaults(
    routes: &mut [CompiledRoute],
    defaults: &RouteDefaults,
) -> Result<(), CompileError> {
    for (index, route) in routes.iter_mut().enumerate() {
        if is_blank(&route.downstream_scheme) {
            if is_blank(&defaults.downstream_scheme) {
                return Err(CompileError::UnresolvedScheme {
                    upstream: route.upstream_path_template.clone(),
                });
            }
            route.downstream_scheme = defaults.downstream_scheme.clone();
        }

        if is_blank(&route.downstream_path_template) {
            if is_blank(&route.upstream_path_template) {
                return Err(CompileError::UnresolvedDownstreamPath { index });
            }
            route.downstream_path_template = route.upstream_path_template.clone();
        }
    }

    Ok(())
}

/// Overlapping upstream templates are kept as-is; the engine's documented
/// first-match-wins tie-break governs at runtime. Surface them for the
/// operator.
fn warn_on_duplicates(routes: &[CompiledRoute]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for route in routes {
        *counts.entry(route.upstream_path_template.as_str()).or_default() += 1;
    }

    for (template, count) in counts {
        if count > 1 {
            tracing::warn!(
                upstream = %template,
                entries = count,
                "Duplicate upstream template in route table; first match wins at runtime"
            );
        }
    }
}
