use dioxus::prelude::*;
use store::{DataService, Message};
use ui::use_backend;

#[component]
pub fn Contact() -> Element {
    let backend = use_backend();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sending = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let b = body().trim().to_string();
            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if b.is_empty() {
                error.set(Some("Message is required".to_string()));
                return;
            }

            sending.set(true);
            let message = Message {
                name: n,
                email: e,
                subject: subject().trim().to_string(),
                body: b,
                ..Default::default()
            };
            match backend.create(&message).await {
                Ok(_) => sent.set(true),
                Err(err) => {
                    tracing::error!("contact message not sent: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        section {
            class: "max-w-xl mx-auto px-6 py-12",
            h1 { class: "mb-2 text-3xl font-bold text-neutral-800", "Contact us" }
            p { class: "mb-8 text-neutral-600", "Questions, partnerships or volunteering: we read every message." }

            if sent() {
                p { class: "text-emerald-700", "Thank you, your message has been sent." }
            } else {
                form {
                    onsubmit: handle_submit,
                    class: "flex flex-col gap-3",

                    if let Some(err) = error() {
                        div {
                            class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                            role: "alert",
                            "{err}"
                        }
                    }

                    input {
                        class: "px-3 py-2 border border-neutral-300 rounded",
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                    input {
                        class: "px-3 py-2 border border-neutral-300 rounded",
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    input {
                        class: "px-3 py-2 border border-neutral-300 rounded",
                        placeholder: "Subject",
                        value: subject(),
                        oninput: move |evt: FormEvent| subject.set(evt.value()),
                    }
                    textarea {
                        class: "px-3 py-2 border border-neutral-300 rounded",
                        rows: "6",
                        placeholder: "Message",
                        value: body(),
                        oninput: move |evt: FormEvent| body.set(evt.value()),
                    }
                    button {
                        class: "self-start px-4 py-2 rounded bg-emerald-700 text-white font-medium disabled:opacity-50",
                        r#type: "submit",
                        disabled: sending(),
                        if sending() { "Sending..." } else { "Send message" }
                    }
                }
            }
        }
    }
}
