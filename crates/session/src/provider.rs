//! The external identity provider boundary.

use thiserror::Error;
use tokio::sync::watch;

use crate::identity::{ProfileUpdate, UserIdentity};

/// Failure reported by the provider for an imperative call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already in use")]
    EmailAlreadyInUse,

    #[error("network error: {0}")]
    Network(String),

    /// Provider-side rejection that doesn't fit a more specific variant.
    #[error("provider rejected the request: {0}")]
    Rejected(String),

    /// An operation that needs a signed-in user was called without one.
    #[error("no user is currently signed in")]
    NoCurrentUser,
}

/// External identity provider (sign-in/up/out, password reset, social login).
///
/// Session persistence, token refresh and the OAuth dance are the provider's
/// concern; this boundary forwards calls and observes the resulting state
/// stream. Implementations live at the application edge, tests use a mock.
///
/// The [`watch`] stream carries `Some(identity)` for a signed-in user and
/// `None` for anonymous. The receiver's seed value predates the provider's
/// first auth check and is never applied: every real notification arrives
/// as a change, and the first one is what resolves a fresh session gate.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity, ProviderError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserIdentity, ProviderError>;

    /// Social login via the provider's popup/redirect flow.
    async fn sign_in_with_google(&self) -> Result<UserIdentity, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), ProviderError>;

    /// Update the signed-in user's profile; returns the refreshed identity.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserIdentity, ProviderError>;

    /// Subscribe to authentication state changes.
    fn watch(&self) -> watch::Receiver<Option<UserIdentity>>;
}
