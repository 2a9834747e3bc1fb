//! Client-side credential validation.
//!
//! Malformed input is rejected here, before any provider call is made.

use greennest_core::{DomainError, DomainResult, ValueObject};

/// Validated email/password pair, ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Login only requires both fields to be present.
    pub fn for_login(email: impl Into<String>, password: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        let password = password.into();
        validate_email(&email)?;
        if password.is_empty() {
            return Err(DomainError::validation("password is required"));
        }
        Ok(Self { email, password })
    }

    /// Signup additionally enforces the password policy.
    pub fn for_signup(email: impl Into<String>, password: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        let password = password.into();
        validate_email(&email)?;
        validate_password(&password)?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl ValueObject for Credentials {}

pub fn validate_email(email: &str) -> DomainResult<()> {
    if email.trim().is_empty() {
        return Err(DomainError::validation("email is required"));
    }
    if !email.contains('@') {
        return Err(DomainError::validation("email must contain '@'"));
    }
    Ok(())
}

/// At least 6 characters with both an uppercase and a lowercase letter.
pub fn validate_password(password: &str) -> DomainResult<()> {
    let long_enough = password.chars().count() >= 6;
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    if long_enough && has_upper && has_lower {
        Ok(())
    } else {
        Err(DomainError::validation(
            "password must be at least 6 characters and include both uppercase and lowercase letters",
        ))
    }
}

/// At least 5 characters after trimming.
pub fn validate_display_name(name: &str) -> DomainResult<()> {
    if name.trim().chars().count() >= 5 {
        Ok(())
    } else {
        Err(DomainError::validation(
            "name must be at least 5 characters long",
        ))
    }
}
