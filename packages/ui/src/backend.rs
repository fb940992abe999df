//! Shared backend constructor for all platforms.
//!
//! - **Web** (WASM): the hosted session token is kept in `localStorage` so a
//!   reload does not sign the admin out.
//! - **Native**: nothing is persisted; every launch starts signed out.

use api::Backend;
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "foundation.session";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Create the platform backend, restoring a persisted session if there is one.
pub(crate) fn make_backend() -> Backend {
    let backend = Backend::from_env();
    #[cfg(target_arch = "wasm32")]
    {
        let token = local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten());
        backend.restore_session(token);
    }
    backend
}

/// Write the backend's current session token through to storage.
pub(crate) fn persist_session(backend: &Backend) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let result = match backend.session_token() {
            Some(token) => storage.set_item(TOKEN_KEY, &token),
            None => storage.remove_item(TOKEN_KEY),
        };
        if result.is_err() {
            tracing::warn!("could not persist session token");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = backend;
}

/// The backend shared by every view.
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

#[component]
pub fn BackendProvider(children: Element) -> Element {
    use_context_provider(make_backend);
    rsx! {
        {children}
    }
}
