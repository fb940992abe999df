use dioxus::prelude::*;
use state::ViewerKey;

use crate::icons::{FaChevronLeft, FaChevronRight, FaXmark};
use crate::Icon;

/// Full-screen view of `urls[current]`.
///
/// Every command (buttons, ←/→/Escape, backdrop click) is reported through
/// `on_key`; the owner decides what it does.
#[component]
pub fn ImageViewer(urls: Vec<String>, current: usize, on_key: EventHandler<ViewerKey>) -> Element {
    let Some(url) = urls.get(current).cloned() else {
        return rsx! {};
    };
    let position = format!("{} / {}", current + 1, urls.len());

    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/90 outline-none",
            style: "z-index: 2000",
            tabindex: "0",
            role: "dialog",
            aria_modal: "true",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(key) = ViewerKey::from_key_name(&evt.key().to_string()) {
                    evt.prevent_default();
                    on_key.call(key);
                }
            },
            onclick: move |_| on_key.call(ViewerKey::Close),

            img {
                class: "max-w-[90vw] max-h-[85vh] object-contain",
                src: "{url}",
                alt: "",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
            }

            button {
                class: "absolute left-4 p-3 text-white/80 hover:text-white",
                title: "Previous",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_key.call(ViewerKey::Previous);
                },
                Icon { icon: FaChevronLeft, width: 24, height: 24 }
            }
            button {
                class: "absolute right-4 p-3 text-white/80 hover:text-white",
                title: "Next",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_key.call(ViewerKey::Next);
                },
                Icon { icon: FaChevronRight, width: 24, height: 24 }
            }
            button {
                class: "absolute top-4 right-4 p-2 text-white/80 hover:text-white",
                title: "Close",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_key.call(ViewerKey::Close);
                },
                Icon { icon: FaXmark, width: 20, height: 20 }
            }
            span {
                class: "absolute bottom-4 text-sm text-white/70",
                "{position}"
            }
        }
    }
}
