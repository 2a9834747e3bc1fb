//! Session tri-state and the navigation gate.

use std::sync::{Arc, RwLock};

use thiserror::Error;
use tokio::sync::watch;

use crate::identity::UserIdentity;

/// Authentication state as observed from the provider.
///
/// `Unknown` holds from construction until the provider's first callback:
/// the auth check is still in flight and nothing may be decided yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    Authenticated(UserIdentity),
    Anonymous,
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Unknown => "unknown",
            SessionState::Authenticated(_) => "authenticated",
            SessionState::Anonymous => "anonymous",
        }
    }
}

/// Whether a route requires a signed-in user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

/// What a provider notification did to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `Unknown` resolved to its first real state.
    Resolved,
    /// `Anonymous` became `Authenticated`.
    SignedIn,
    /// `Authenticated` became `Anonymous` (sign-out or session loss).
    SignedOut,
    /// Same user, refreshed identity (profile update).
    Refreshed,
    /// Notification matched the current state; nothing to do.
    Unchanged,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The notification would construct an edge the state machine does not
    /// have (e.g. switching directly between two different users).
    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Tri-state wrapper around the provider's observed auth status, used to
/// admit or redirect navigation.
///
/// The gate is written only by provider notifications (via [`SessionGate::observe`])
/// and each notification replaces the state atomically and completely.
#[derive(Debug, Default)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    /// A fresh gate: the initial auth check has not completed yet.
    pub fn new() -> Self {
        Self {
            state: SessionState::Unknown,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&UserIdentity> {
        match &self.state {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Whether the initial auth check has completed.
    pub fn is_resolved(&self) -> bool {
        self.state != SessionState::Unknown
    }

    /// The gating decision, as a pure function of current state.
    ///
    /// Returns `false` while `Unknown`: the caller must keep showing a
    /// neutral loading view and must NOT redirect yet; bouncing to login
    /// before the check resolves would kick out a valid session on a slow
    /// network. Once resolved, protected routes admit only `Authenticated`.
    pub fn can_enter(&self, access: RouteAccess) -> bool {
        match access {
            RouteAccess::Public => true,
            RouteAccess::Protected => matches!(self.state, SessionState::Authenticated(_)),
        }
    }

    /// Apply one provider notification (`Some` = signed in, `None` = anonymous).
    ///
    /// Legal edges: `Unknown` resolving either way, `Anonymous -> Authenticated`,
    /// `Authenticated -> Anonymous`, and a same-user identity refresh. A
    /// same-state repeat is a no-op. Anything else (in practice: a direct
    /// switch between two users) is rejected and leaves the state untouched.
    pub fn observe(
        &mut self,
        notification: Option<UserIdentity>,
    ) -> Result<Transition, SessionError> {
        let transition = match (&self.state, &notification) {
            (SessionState::Unknown, _) => Transition::Resolved,
            (SessionState::Anonymous, Some(_)) => Transition::SignedIn,
            (SessionState::Authenticated(_), None) => Transition::SignedOut,
            (SessionState::Authenticated(current), Some(next)) if current.uid == next.uid => {
                if current == next {
                    Transition::Unchanged
                } else {
                    Transition::Refreshed
                }
            }
            (SessionState::Anonymous, None) => Transition::Unchanged,
            (SessionState::Authenticated(_), Some(_)) => {
                return Err(SessionError::InvalidTransition {
                    from: self.state.name(),
                    to: "authenticated",
                });
            }
        };

        let next_state = match notification {
            Some(identity) => SessionState::Authenticated(identity),
            None => SessionState::Anonymous,
        };

        tracing::debug!(
            from = self.state.name(),
            to = next_state.name(),
            ?transition,
            "session state change"
        );
        self.state = next_state;

        Ok(transition)
    }
}

/// Apply provider notifications to a shared gate until the provider's
/// sender side goes away.
///
/// Invalid edges are logged and skipped rather than tearing the loop down:
/// a bad notification must not freeze the whole session.
pub async fn drive(
    gate: Arc<RwLock<SessionGate>>,
    mut changes: watch::Receiver<Option<UserIdentity>>,
) {
    while changes.changed().await.is_ok() {
        let notification = changes.borrow_and_update().clone();
        let outcome = gate
            .write()
            .expect("session gate lock poisoned")
            .observe(notification);
        if let Err(err) = outcome {
            tracing::warn!(%err, "discarding invalid provider notification");
        }
    }
}
