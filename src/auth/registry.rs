//! Scheme registry built once at service startup.

use std::path::PathBuf;

use serde::Serialize;

use crate::auth::scheme::{select_default_scheme, AuthScheme};
use crate::config::schema::AuthSettings;

/// Parameters one validation handler needs to check tokens. The startup
/// core carries these opaquely; the validation collaborator interprets
/// them on the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TokenValidation {
    /// Standard bearer validation against a remote token authority.
    Bearer {
        authority: String,
        audience: String,
        require_https_metadata: bool,
    },
    /// Validation of tokens issued by the fleet's OpenIddict server.
    OpenIddict {
        issuer_uri: String,
        token_decryption_certificate: PathBuf,
        issuer_signing_certificate: PathBuf,
    },
}

impl TokenValidation {
    /// The scheme this handler is registered under.
    pub fn scheme(&self) -> AuthScheme {
        match self {
            TokenValidation::Bearer { .. } => AuthScheme::Bearer,
            TokenValidation::OpenIddict { .. } => AuthScheme::OpenIddict,
        }
    }
}

/// Both validation handlers plus the selected default scheme.
///
/// Selection never unregisters anything: the non-default handler stays
/// addressable by name so endpoints can demand a specific scheme.
#[derive(Debug, Clone)]
pub struct SchemeRegistry {
    bearer: TokenValidation,
    openiddict: TokenValidation,
    default: AuthScheme,
}

impl SchemeRegistry {
    /// Builds both handlers from settings and picks the default from the
    /// configured provider name.
    pub fn from_settings(settings: &AuthSettings) -> Self {
        let bearer = TokenValidation::Bearer {
            authority: settings.authority.clone(),
            audience: settings.audience.clone(),
            require_https_metadata: settings.require_https_metadata,
        };
        let openiddict = TokenValidation::OpenIddict {
            issuer_uri: settings.openiddict.issuer_uri.clone(),
            token_decryption_certificate: settings.openiddict.token_decryption_certificate.clone(),
            issuer_signing_certificate: settings.openiddict.issuer_signing_certificate.clone(),
        };

        Self {
            bearer,
            openiddict,
            default: select_default_scheme(&settings.provider),
        }
    }

    /// The scheme applied when a caller names none.
    pub fn default_scheme(&self) -> AuthScheme {
        self.default
    }

    /// Handler behind the default scheme.
    pub fn default_handler(&self) -> &TokenValidation {
        self.handler(self.default)
    }

    /// Handler for a scheme. Total: both schemes are always registered.
    pub fn handler(&self, scheme: AuthScheme) -> &TokenValidation {
        match scheme {
            AuthScheme::Bearer => &self.bearer,
            AuthScheme::OpenIddict => &self.openiddict,
        }
    }

    /// Looks a handler up by registered scheme name, default or not.
    pub fn handler_by_name(&self, name: &str) -> Option<&TokenValidation> {
        [AuthScheme::Bearer, AuthScheme::OpenIddict]
            .into_iter()
            .find(|scheme| scheme.as_str() == name)
            .map(|scheme| self.handler(scheme))
    }

    /// Names of every registered scheme, independent of the selection.
    pub fn scheme_names(&self) -> [&'static str; 2] {
        [AuthScheme::Bearer.as_str(), AuthScheme::OpenIddict.as_str()]
    }
}
