//! Token validation scheme selection.
//!
//! # Data Flow
//!
//! ```text
//! AuthSettings.provider
//!        |
//!        v
//! select_default_scheme()          (exact match on "OpenIddict")
//!        |
//!        v
//! SchemeRegistry::from_settings()  (both handlers built, one default)
//!        |
//!        v
//! validation collaborator          (consumes TokenValidation params)
//! ```
//!
//! # Design Decisions
//!
//! - **Selection, not validation.** This subsystem decides *which* scheme
//!   answers when a caller names none. Signature checks, key material and
//!   identity-provider round trips live with the collaborator that consumes
//!   [`TokenValidation`].
//! - **Permissive default.** Any provider name other than the exact
//!   OpenIddict identifier selects Bearer. Deployments that never set the
//!   provider get standard bearer validation without ceremony.
//! - **Both handlers, always.** The registry builds Bearer and OpenIddict
//!   parameters from settings unconditionally, so endpoints can demand the
//!   non-default scheme by name.

pub mod registry;
pub mod scheme;

pub use registry::{SchemeRegistry, TokenValidation};
pub use scheme::{select_default_scheme, AuthScheme, OPENIDDICT_PROVIDER};
