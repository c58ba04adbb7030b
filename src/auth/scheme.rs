//! Default scheme selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider name that selects OpenIddict validation. Matching is exact,
/// including case: `"openiddict"` does not qualify.
pub const OPENIDDICT_PROVIDER: &str = "OpenIddict";

/// The closed set of token validation schemes the fleet understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthScheme {
    /// Standard bearer token validation against a remote authority.
    Bearer,
    /// Validation of tokens issued by the fleet's own OpenIddict server.
    OpenIddict,
}

impl AuthScheme {
    /// Scheme name as registered with the authentication stack.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::Bearer => "Bearer",
            AuthScheme::OpenIddict => "OpenIddict",
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the configured provider name to the scheme applied when a caller
/// names none.
///
/// Total over every possible input: any value other than the exact
/// OpenIddict identifier, the empty string included, falls through to
/// [`AuthScheme::Bearer`]. An unrecognized provider name is not a
/// configuration error.
pub fn select_default_scheme(provider: &str) -> AuthScheme {
    match provider {
        OPENIDDICT_PROVIDER => AuthScheme::OpenIddict,
        _ => AuthScheme::Bearer,
    }
}
