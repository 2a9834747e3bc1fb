//! `greennest-session` — authentication session boundary (pure).
//!
//! This crate is intentionally decoupled from HTTP and rendering. It wraps
//! the external identity provider's asynchronous notification stream into a
//! three-state session model and exposes the navigation gating decision as a
//! pure function of current state. The provider's own internals (token
//! refresh, OAuth, persistence) are not modeled here.

pub mod credentials;
pub mod identity;
pub mod provider;
pub mod service;
pub mod state;

pub use credentials::{Credentials, validate_display_name, validate_email, validate_password};
pub use identity::{ProfileUpdate, UserIdentity};
pub use provider::{IdentityProvider, ProviderError};
pub use service::{AuthError, AuthService, SignupRequest};
pub use state::{RouteAccess, SessionGate, SessionState, Transition, drive};
