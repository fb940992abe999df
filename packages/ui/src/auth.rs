//! Session context, route guard and logout for the admin panel.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::CredentialService;
use dioxus::prelude::*;
use state::{GuardView, RouteGuard, RoutePolicy, SessionEvent, SessionState, SessionStore};

use crate::backend::{persist_session, use_backend};
use crate::config::use_site_config;
use crate::timer::sleep;

/// How often a signed-in session is re-validated against the backend.
const RECHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to the process-wide session. Reading subscribes the caller;
/// [`dispatch`](SessionHandle::dispatch) is the only way to change it.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    store: Signal<SessionStore>,
}

impl SessionHandle {
    pub fn state(&self) -> SessionState {
        self.store.read().state().clone()
    }

    /// Current state without subscribing, for use inside tasks.
    pub fn peek_state(&self) -> SessionState {
        self.store.peek().state().clone()
    }

    pub fn dispatch(&mut self, event: SessionEvent) -> bool {
        if self.store.peek().state().transition(&event).is_none() {
            tracing::debug!(?event, "session event ignored");
            return false;
        }
        self.store.write().dispatch(event)
    }
}

/// Get the current session.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

async fn check(backend: &api::Backend) -> SessionEvent {
    match backend.check_session().await {
        Ok(user) => SessionEvent::CheckResolved(user),
        Err(e) => SessionEvent::CheckFailed(e.to_string()),
    }
}

/// Provider component that owns the session.
///
/// Starts in `Loading`, resolves with one credential check on mount, then
/// re-validates a signed-in session periodically so an expired one ends.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let backend = use_backend();

    let listener_backend = backend.clone();
    let store = use_signal(move || {
        let mut store = SessionStore::new();
        store.subscribe(move |_| persist_session(&listener_backend));
        store
    });
    let mut session = use_context_provider(|| SessionHandle { store });

    use_future(move || {
        let backend = backend.clone();
        async move {
            session.dispatch(check(&backend).await);
            loop {
                sleep(RECHECK_INTERVAL).await;
                // Only a live session is re-validated; a signed-out one waits for login.
                if !session.peek_state().is_authenticated() {
                    continue;
                }
                session.dispatch(check(&backend).await);
            }
        }
    });

    rsx! {
        {children}
    }
}

#[component]
fn WaitingIndicator() -> Element {
    rsx! {
        div {
            class: "guard-waiting",
            role: "status",
            aria_busy: "true",
            span { class: "spinner" }
        }
    }
}

/// Renders `children` only when the session allows `path`.
///
/// While the session is loading a neutral indicator is shown. When a redirect
/// is due, `on_redirect` is called once with the target path and nothing is
/// rendered.
#[component]
pub fn AuthGuard(path: String, on_redirect: EventHandler<String>, children: Element) -> Element {
    let config = use_site_config();
    let session = use_session();
    let guard = use_hook(|| {
        Rc::new(RefCell::new(RouteGuard::new(RoutePolicy::from_config(
            &config.auth,
        ))))
    });

    let state = session.state();
    let redirect = guard.borrow_mut().check(&state, &path);
    if let Some(target) = redirect {
        on_redirect.call(target);
    }

    let view = guard.borrow().policy().view(&state, &path);
    match view {
        GuardView::Waiting => rsx! { WaitingIndicator {} },
        GuardView::Redirecting => rsx! {},
        GuardView::Content => rsx! { {children} },
    }
}

/// Button to log out the current admin.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let backend = use_backend();
    let mut session = use_session();

    let onclick = move |_| {
        let backend = backend.clone();
        async move {
            if let Err(e) = backend.logout().await {
                tracing::warn!("logout failed, clearing local session anyway: {e}");
            }
            session.dispatch(SessionEvent::LoggedOut);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
