//! Email/password sign-in form for the admin panel.

use api::{AuthError, CredentialService};
use dioxus::prelude::*;
use state::SessionEvent;

use crate::auth::use_session;
use crate::backend::use_backend;

#[component]
pub fn LoginForm() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            loading.set(true);
            match backend.login(&e, &p).await {
                Ok(admin) => {
                    password.set(String::new());
                    // The guard around this form redirects to the landing page.
                    session.dispatch(SessionEvent::LoggedIn(admin));
                }
                Err(err @ AuthError::InvalidCredentials) => {
                    error.set(Some(err.to_string()));
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Admin sign in"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                "Foundation staff only"
            }

            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        role: "alert",
                        "{err}"
                    }
                }

                input {
                    class: "w-full px-3 py-2 border border-neutral-300 rounded",
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "username",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "w-full px-3 py-2 border border-neutral-300 rounded",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "w-full px-4 py-2 rounded bg-emerald-700 text-white font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
