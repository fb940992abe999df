//! Where the admin panel should send the visitor, given the session and the path.

use store::config::AuthConfig;

use crate::session::SessionState;

/// Outcome of evaluating the routing policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    Stay,
    Redirect(String),
}

/// What a guarded view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Session still resolving: neutral waiting indicator.
    Waiting,
    /// A redirect is pending: render nothing protected.
    Redirecting,
    Content,
}

impl GuardView {
    pub fn shows_protected_content(self) -> bool {
        matches!(self, GuardView::Content)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePolicy {
    login_path: String,
    landing_path: String,
}

/// Strip query, fragment and trailing slash so `/admin/` and `/admin?x=1` compare equal.
fn normalize(path: &str) -> &str {
    let end = path.find(|c| c == '?' || c == '#').unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

impl RoutePolicy {
    pub fn new(login_path: impl Into<String>, landing_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            landing_path: landing_path.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.login_path.clone(), config.landing_path.clone())
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    pub fn is_login(&self, path: &str) -> bool {
        normalize(path) == normalize(&self.login_path)
    }

    /// Every guarded path except the login page is protected.
    pub fn is_protected(&self, path: &str) -> bool {
        !self.is_login(path)
    }

    pub fn evaluate(&self, state: &SessionState, path: &str) -> NavigationIntent {
        match state {
            SessionState::Loading => NavigationIntent::Stay,
            SessionState::Unauthenticated if self.is_protected(path) => {
                NavigationIntent::Redirect(self.login_path.clone())
            }
            SessionState::Authenticated(_) if self.is_login(path) => {
                NavigationIntent::Redirect(self.landing_path.clone())
            }
            _ => NavigationIntent::Stay,
        }
    }

    pub fn view(&self, state: &SessionState, path: &str) -> GuardView {
        if state.is_loading() {
            return GuardView::Waiting;
        }
        match self.evaluate(state, path) {
            NavigationIntent::Redirect(_) => GuardView::Redirecting,
            NavigationIntent::Stay => GuardView::Content,
        }
    }
}

/// Identity of an evaluation: which state, which user, which path.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Evaluated {
    Authenticated { id: String, path: String },
    Unauthenticated { path: String },
}

/// Stateful wrapper around [`RoutePolicy`] that issues each redirect once.
///
/// Re-evaluating with the same state and path returns `None`, so a component
/// can call [`check`](RouteGuard::check) on every render.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    policy: RoutePolicy,
    last: Option<Evaluated>,
}

impl RouteGuard {
    pub fn new(policy: RoutePolicy) -> Self {
        Self { policy, last: None }
    }

    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// The path to navigate to, if this (state, path) has not been handled yet.
    pub fn check(&mut self, state: &SessionState, path: &str) -> Option<String> {
        let key = match state {
            SessionState::Loading => return None,
            SessionState::Authenticated(user) => Evaluated::Authenticated {
                id: user.id.clone(),
                path: normalize(path).to_string(),
            },
            SessionState::Unauthenticated => Evaluated::Unauthenticated {
                path: normalize(path).to_string(),
            },
        };
        if self.last.as_ref() == Some(&key) {
            return None;
        }
        self.last = Some(key);
        match self.policy.evaluate(state, path) {
            NavigationIntent::Redirect(target) => {
                tracing::info!(from = path, to = %target, "auth redirect");
                Some(target)
            }
            NavigationIntent::Stay => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AdminInfo, Role};

    fn policy() -> RoutePolicy {
        RoutePolicy::new("/admin/login", "/admin")
    }

    fn signed_in() -> SessionState {
        SessionState::Authenticated(AdminInfo {
            id: "a1".to_string(),
            email: "director@foundation.org".to_string(),
            name: None,
            role: Some(Role::SuperAdmin),
        })
    }

    const PATHS: [&str; 5] = ["/admin", "/admin/blogs", "/admin/login", "/admin/login/", "/admin/messages?page=2"];

    #[test]
    fn test_loading_never_shows_protected_content() {
        for path in PATHS {
            let view = policy().view(&SessionState::Loading, path);
            assert_eq!(view, GuardView::Waiting);
            assert!(!view.shows_protected_content());
            assert_eq!(policy().evaluate(&SessionState::Loading, path), NavigationIntent::Stay);
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login_once() {
        for path in ["/admin", "/admin/blogs", "/admin/messages?page=2"] {
            let mut guard = RouteGuard::new(policy());
            assert_eq!(
                guard.check(&SessionState::Unauthenticated, path),
                Some("/admin/login".to_string())
            );
            assert_eq!(guard.check(&SessionState::Unauthenticated, path), None);
            assert!(!policy().view(&SessionState::Unauthenticated, path).shows_protected_content());
        }
    }

    #[test]
    fn test_unauthenticated_on_login_stays() {
        let mut guard = RouteGuard::new(policy());
        assert_eq!(guard.check(&SessionState::Unauthenticated, "/admin/login/"), None);
        assert_eq!(
            policy().view(&SessionState::Unauthenticated, "/admin/login"),
            GuardView::Content
        );
    }

    #[test]
    fn test_authenticated_on_login_redirects_to_landing_once() {
        let mut guard = RouteGuard::new(policy());
        assert_eq!(guard.check(&signed_in(), "/admin/login"), Some("/admin".to_string()));
        assert_eq!(guard.check(&signed_in(), "/admin/login"), None);
        // After the router follows the redirect, the landing page is shown.
        assert_eq!(guard.check(&signed_in(), "/admin"), None);
        assert!(policy().view(&signed_in(), "/admin").shows_protected_content());
    }

    #[test]
    fn test_loading_does_not_consume_the_redirect() {
        let mut guard = RouteGuard::new(policy());
        assert_eq!(guard.check(&SessionState::Loading, "/admin/blogs"), None);
        assert_eq!(guard.check(&SessionState::Loading, "/admin/blogs"), None);
        assert_eq!(
            guard.check(&SessionState::Unauthenticated, "/admin/blogs"),
            Some("/admin/login".to_string())
        );
    }

    #[test]
    fn test_logout_triggers_new_redirect() {
        let mut guard = RouteGuard::new(policy());
        assert_eq!(guard.check(&signed_in(), "/admin/blogs"), None);
        assert_eq!(
            guard.check(&SessionState::Unauthenticated, "/admin/blogs"),
            Some("/admin/login".to_string())
        );
    }
}
