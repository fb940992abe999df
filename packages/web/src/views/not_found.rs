use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-[60vh] gap-3",
            h1 { class: "text-2xl font-semibold text-neutral-800", "Page not found" }
            p { class: "text-sm text-neutral-500", "Nothing lives at /{path}." }
            Link { class: "text-emerald-700 underline", to: Route::Home {}, "Back to the home page" }
        }
    }
}
