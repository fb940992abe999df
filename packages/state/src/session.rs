//! # Session lifecycle
//!
//! [`SessionState`] is a three-way enum, so "loading", "signed in with a role"
//! and "signed out" can never hold at the same time. It only changes through
//! [`SessionState::transition`], and the process-wide [`SessionStore`] only
//! changes through [`SessionStore::dispatch`].
//!
//! | From | Event | To |
//! |------|-------|----|
//! | `Loading` | `CheckResolved(Some(u))` | `Authenticated(u)` |
//! | `Loading` | `CheckResolved(None)` / `CheckFailed` | `Unauthenticated` |
//! | `Unauthenticated` | `LoggedIn(u)` | `Authenticated(u)` |
//! | `Authenticated` | `LoggedOut` / `Expired` | `Unauthenticated` |
//! | `Authenticated(a)` | `CheckResolved(Some(b))`, `a != b` | `Authenticated(b)` |
//! | `Authenticated` | `CheckResolved(None)` / `CheckFailed` | `Unauthenticated` |
//!
//! Any other pair is ignored.

use store::{AdminInfo, Role};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(AdminInfo),
    Unauthenticated,
}

/// Something the auth flows observed.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The credential check returned; `None` means no session.
    CheckResolved(Option<AdminInfo>),
    /// The credential check itself failed (network or backend error).
    CheckFailed(String),
    LoggedIn(AdminInfo),
    LoggedOut,
    Expired,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AdminInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().and_then(|u| u.role)
    }

    /// The state `event` leads to, or `None` when the event does not apply.
    pub fn transition(&self, event: &SessionEvent) -> Option<SessionState> {
        use SessionEvent::*;
        use SessionState::*;

        match (self, event) {
            (Loading, CheckResolved(Some(user))) => Some(Authenticated(user.clone())),
            (Loading, CheckResolved(None)) | (Loading, CheckFailed(_)) => Some(Unauthenticated),
            (Unauthenticated, LoggedIn(user)) => Some(Authenticated(user.clone())),
            (Authenticated(current), CheckResolved(Some(user))) if current != user => {
                Some(Authenticated(user.clone()))
            }
            (Authenticated(_), CheckResolved(None))
            | (Authenticated(_), CheckFailed(_))
            | (Authenticated(_), LoggedOut)
            | (Authenticated(_), Expired) => Some(Unauthenticated),
            _ => None,
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Observable holder of the current [`SessionState`].
///
/// Readers call [`state`](SessionStore::state) or subscribe; the auth flows are
/// the only writers and go through [`dispatch`](SessionStore::dispatch).
#[derive(Default)]
pub struct SessionStore {
    state: SessionState,
    listeners: Vec<(ListenerId, Box<dyn FnMut(&SessionState)>)>,
    next_listener: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply an event. Returns `true` when the state changed; listeners are
    /// notified only then.
    pub fn dispatch(&mut self, event: SessionEvent) -> bool {
        let Some(next) = self.state.transition(&event) else {
            tracing::debug!(?event, state = ?self.state, "session event ignored");
            return false;
        };
        if let SessionEvent::CheckFailed(reason) = &event {
            tracing::warn!("session check failed, treating as signed out: {reason}");
        }
        tracing::info!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionState) + 'static) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn admin(role: Role) -> AdminInfo {
        AdminInfo {
            id: "a1".to_string(),
            email: "director@foundation.org".to_string(),
            name: Some("Director".to_string()),
            role: Some(role),
        }
    }

    #[test]
    fn test_starts_loading() {
        let store = SessionStore::new();
        assert!(store.state().is_loading());
        assert_eq!(store.state().role(), None);
    }

    #[test]
    fn test_check_resolves_to_authenticated() {
        let mut store = SessionStore::new();
        assert!(store.dispatch(SessionEvent::CheckResolved(Some(admin(Role::ContentManager)))));
        assert_eq!(store.state().role(), Some(Role::ContentManager));
    }

    #[test]
    fn test_check_without_session_or_failing_is_unauthenticated() {
        let mut store = SessionStore::new();
        store.dispatch(SessionEvent::CheckResolved(None));
        assert_eq!(store.state(), &SessionState::Unauthenticated);

        let mut store = SessionStore::new();
        store.dispatch(SessionEvent::CheckFailed("connection refused".to_string()));
        assert_eq!(store.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_login_and_logout() {
        let mut store = SessionStore::new();
        store.dispatch(SessionEvent::CheckResolved(None));
        assert!(store.dispatch(SessionEvent::LoggedIn(admin(Role::SuperAdmin))));
        assert!(store.state().is_authenticated());
        assert!(store.dispatch(SessionEvent::LoggedOut));
        assert_eq!(store.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_expiry_and_failed_recheck_sign_out() {
        let mut store = SessionStore::new();
        store.dispatch(SessionEvent::CheckResolved(Some(admin(Role::SuperAdmin))));
        assert!(store.dispatch(SessionEvent::Expired));
        assert_eq!(store.state(), &SessionState::Unauthenticated);

        let mut store = SessionStore::new();
        store.dispatch(SessionEvent::CheckResolved(Some(admin(Role::SuperAdmin))));
        assert!(store.dispatch(SessionEvent::CheckFailed("timeout".to_string())));
        assert_eq!(store.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_recheck_with_same_user_is_no_change() {
        let mut store = SessionStore::new();
        store.dispatch(SessionEvent::CheckResolved(Some(admin(Role::SuperAdmin))));
        assert!(!store.dispatch(SessionEvent::CheckResolved(Some(admin(Role::SuperAdmin)))));
        assert!(store.dispatch(SessionEvent::CheckResolved(Some(admin(Role::MessageManager)))));
        assert_eq!(store.state().role(), Some(Role::MessageManager));
    }

    #[test]
    fn test_inapplicable_events_are_ignored() {
        let mut store = SessionStore::new();
        // Login is not offered while the first check is pending.
        assert!(!store.dispatch(SessionEvent::LoggedIn(admin(Role::SuperAdmin))));
        assert!(!store.dispatch(SessionEvent::LoggedOut));
        assert!(store.state().is_loading());

        store.dispatch(SessionEvent::CheckResolved(None));
        assert!(!store.dispatch(SessionEvent::LoggedOut));
        assert!(!store.dispatch(SessionEvent::Expired));
        assert_eq!(store.state(), &SessionState::Unauthenticated);
    }

    #[test]
    fn test_listeners_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SessionStore::new();
        let sink = seen.clone();
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.clone()));

        store.dispatch(SessionEvent::CheckResolved(None));
        store.dispatch(SessionEvent::LoggedOut);
        store.dispatch(SessionEvent::LoggedIn(admin(Role::SuperAdmin)));
        assert_eq!(seen.borrow().len(), 2);

        assert!(store.unsubscribe(id));
        store.dispatch(SessionEvent::LoggedOut);
        assert_eq!(seen.borrow().len(), 2);
        assert!(!store.unsubscribe(id));
    }
}
