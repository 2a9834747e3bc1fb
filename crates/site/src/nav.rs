//! Navigation gating with explicit redirect values.

use greennest_core::ValueObject;
use greennest_session::{RouteAccess, SessionGate};

use crate::routes::RouteMatch;

/// Where to send an anonymous user, and where to bring them back to.
///
/// Passed as an explicit value rather than tucked into ambient router
/// state; the return path is an opaque string the gate never interprets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub target_path: String,
    pub return_path: Option<String>,
}

impl LoginRedirect {
    pub fn to_login() -> Self {
        Self {
            target_path: "/login".to_string(),
            return_path: None,
        }
    }

    pub fn returning_to(path: impl Into<String>) -> Self {
        Self {
            target_path: "/login".to_string(),
            return_path: Some(path.into()),
        }
    }
}

impl ValueObject for LoginRedirect {}

/// What the router should do with the current navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Proceed to the destination.
    Render,
    /// Auth check still in flight: show a neutral loading view, decide later.
    Loading,
    /// Anonymous user on a protected destination.
    RedirectToLogin(LoginRedirect),
}

/// Decide a navigation from the current session state.
///
/// Protected destinations are never redirected while the gate is still
/// `Unknown`; doing so would bounce a valid session that just hasn't
/// resolved yet on a slow network.
pub fn resolve_navigation(gate: &SessionGate, route: &RouteMatch) -> NavigationOutcome {
    match route.access() {
        RouteAccess::Public => NavigationOutcome::Render,
        RouteAccess::Protected => {
            if !gate.is_resolved() {
                NavigationOutcome::Loading
            } else if gate.can_enter(RouteAccess::Protected) {
                NavigationOutcome::Render
            } else {
                NavigationOutcome::RedirectToLogin(LoginRedirect::returning_to(route.path.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use greennest_session::UserIdentity;

    use super::*;
    use crate::routes::resolve;

    #[test]
    fn public_routes_render_regardless_of_session() {
        let gate = SessionGate::new();
        let route = resolve("/plants").unwrap();
        assert_eq!(resolve_navigation(&gate, &route), NavigationOutcome::Render);
    }

    #[test]
    fn unresolved_gate_means_loading_not_redirect() {
        let gate = SessionGate::new();
        let route = resolve("/profile").unwrap();
        assert_eq!(resolve_navigation(&gate, &route), NavigationOutcome::Loading);
    }

    #[test]
    fn anonymous_user_is_redirected_with_a_return_path() {
        let mut gate = SessionGate::new();
        gate.observe(None).unwrap();

        let route = resolve("/profile").unwrap();
        match resolve_navigation(&gate, &route) {
            NavigationOutcome::RedirectToLogin(redirect) => {
                assert_eq!(redirect.target_path, "/login");
                assert_eq!(redirect.return_path.as_deref(), Some("/profile"));
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }

    #[test]
    fn authenticated_user_renders_protected_routes() {
        let mut gate = SessionGate::new();
        gate.observe(Some(UserIdentity::new("u1"))).unwrap();

        let route = resolve("/profile").unwrap();
        assert_eq!(resolve_navigation(&gate, &route), NavigationOutcome::Render);
    }

    #[test]
    fn sign_out_flips_the_decision_back_to_redirect() {
        let mut gate = SessionGate::new();
        gate.observe(Some(UserIdentity::new("u1"))).unwrap();
        gate.observe(None).unwrap();

        let route = resolve("/profile").unwrap();
        assert!(matches!(
            resolve_navigation(&gate, &route),
            NavigationOutcome::RedirectToLogin(_)
        ));
    }
}
