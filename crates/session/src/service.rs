//! Pass-through auth operations over the provider boundary.
//!
//! The service validates locally, delegates to the provider, and maps the
//! result into the crate's error taxonomy. It never touches the session
//! gate: the gate only moves on provider notifications, so a failed sign-in
//! leaves the observed state exactly where it was.

use thiserror::Error;

use greennest_core::DomainError;

use crate::credentials::{Credentials, validate_display_name, validate_email};
use crate::identity::{ProfileUpdate, UserIdentity};
use crate::provider::{IdentityProvider, ProviderError};

/// Why an auth operation did not complete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Rejected locally, before any external call was made.
    #[error(transparent)]
    Validation(DomainError),

    /// Rejected by the provider (bad credentials, network, provider-side).
    #[error("authentication failed: {0}")]
    Provider(ProviderError),
}

impl From<DomainError> for AuthError {
    fn from(err: DomainError) -> Self {
        AuthError::Validation(err)
    }
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        AuthError::Provider(err)
    }
}

/// Signup form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub photo_url: Option<String>,
}

/// Thin orchestration over an [`IdentityProvider`].
#[derive(Debug)]
pub struct AuthService<P> {
    provider: P,
}

impl<P: IdentityProvider> AuthService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        let credentials = Credentials::for_login(email, password)?;
        let identity = self
            .provider
            .sign_in(credentials.email(), credentials.password())
            .await?;
        tracing::info!(uid = %identity.uid, "signed in");
        Ok(identity)
    }

    /// Create the account, then apply the profile (name + photo).
    ///
    /// A failed profile update does not undo the signup: the account exists
    /// at that point, so the bare identity is returned and the failure is
    /// only logged.
    pub async fn sign_up(&self, request: SignupRequest) -> Result<UserIdentity, AuthError> {
        validate_display_name(&request.display_name)?;
        let credentials = Credentials::for_signup(&request.email, &request.password)?;

        let identity = self
            .provider
            .sign_up(credentials.email(), credentials.password())
            .await?;

        let profile = ProfileUpdate {
            display_name: Some(request.display_name.clone()),
            photo_url: request.photo_url.clone(),
        };
        match self.provider.update_profile(profile).await {
            Ok(updated) => {
                tracing::info!(uid = %updated.uid, "account created");
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(%err, uid = %identity.uid, "profile update after signup failed");
                Ok(identity)
            }
        }
    }

    pub async fn sign_in_with_google(&self) -> Result<UserIdentity, AuthError> {
        let identity = self.provider.sign_in_with_google().await?;
        tracing::info!(uid = %identity.uid, "signed in via google");
        Ok(identity)
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await?;
        tracing::info!("signed out");
        Ok(())
    }

    pub async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        validate_email(email)?;
        self.provider.send_password_reset(email).await?;
        Ok(())
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<UserIdentity, AuthError> {
        Ok(self.provider.update_profile(update).await?)
    }
}
