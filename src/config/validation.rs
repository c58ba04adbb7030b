//! Configuration validation.
//!
//! Semantic checks on top of what serde already enforces. Validation is a
//! pure function over [`AppSettings`] and reports every violation found,
//! not just the first. Downstream URI well-formedness is deliberately not
//! checked here: the route compiler owns that failure mode and treats it
//! as fatal at compile time.

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppSettings;
use crate::routing::table::is_blank;

/// A single semantic violation in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route declaration at index {index} has a blank key")]
    BlankRouteKey { index: usize },

    #[error("duplicate route key {key:?}")]
    DuplicateRouteKey { key: String },

    #[error("route {key:?} declares no upstream path templates")]
    NoUpstreamTemplates { key: String },

    #[error("route {key:?} has a blank upstream path template at index {index}")]
    BlankUpstreamTemplate { key: String, index: usize },

    #[error("route {key:?} has a blank downstream target")]
    BlankDownstream { key: String },
}

/// Validate settings, collecting all violations.
pub fn validate_settings(settings: &AppSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_keys = HashSet::new();

    for (index, route) in settings.gateway.routes.iter().enumerate() {
        if is_blank(&route.key) {
            errors.push(ValidationError::BlankRouteKey { index });
        } else if !seen_keys.insert(route.key.as_str()) {
            errors.push(ValidationError::DuplicateRouteKey {
                key: route.key.clone(),
            });
        }

        if route.upstream_path_templates.is_empty() {
            errors.push(ValidationError::NoUpstreamTemplates {
                key: route.key.clone(),
            });
        }
        for (tpl_index, template) in route.upstream_path_templates.iter().enumerate() {
            if is_blank(template) {
                errors.push(ValidationError::BlankUpstreamTemplate {
                    key: route.key.clone(),
                    index: tpl_index,
                });
            }
        }

        if is_blank(&route.downstream) {
            errors.push(ValidationError::BlankDownstream {
                key: route.key.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteDeclaration;

    fn declaration(key: &str, downstream: &str, templates: &[&str]) -> RouteDeclaration {
        RouteDeclaration {
            key: key.to_string(),
            downstream: downstream.to_string(),
            upstream_path_templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_well_formed_routes() {
        let mut settings = AppSettings::default();
        settings.gateway.routes.push(declaration(
            "ads",
            "http://ads-host:8080",
            &["/ads/{id}", "/ads"],
        ));
        settings
            .gateway
            .routes
            .push(declaration("users", "http://user-host:8080", &["/users"]));

        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn reports_duplicate_keys() {
        let mut settings = AppSettings::default();
        settings
            .gateway
            .routes
            .push(declaration("ads", "http://a:1", &["/a"]));
        settings
            .gateway
            .routes
            .push(declaration("ads", "http://b:2", &["/b"]));

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateRouteKey {
                key: "ads".to_string()
            }]
        );
    }

    #[test]
    fn collects_all_violations_not_just_first() {
        let mut settings = AppSettings::default();
        settings.gateway.routes.push(declaration("ads", "", &[]));
        settings
            .gateway
            .routes
            .push(declaration("  ", "http://a:1", &["/a", " "]));

        let errors = validate_settings(&settings).unwrap_err();
        assert!(errors.contains(&ValidationError::NoUpstreamTemplates {
            key: "ads".to_string()
        }));
        assert!(errors.contains(&ValidationError::BlankDownstream {
            key: "ads".to_string()
        }));
        assert!(errors.contains(&ValidationError::BlankRouteKey { index: 1 }));
        assert!(errors.contains(&ValidationError::BlankUpstreamTemplate {
            key: "  ".to_string(),
            index: 1
        }));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn uri_shape_is_not_validated_here() {
        // Malformed URIs are the compiler's fatal error, not a settings
        // validation concern.
        let mut settings = AppSettings::default();
        settings
            .gateway
            .routes
            .push(declaration("ads", "not a uri at all", &["/ads"]));

        assert!(validate_settings(&settings).is_ok());
    }
}
