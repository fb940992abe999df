use dioxus::prelude::*;

/// Top bar of the public site. `children` are the navigation links.
#[component]
pub fn Navbar(brand: String, children: Element) -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-10 bg-white/90 backdrop-blur border-b border-neutral-200",
            nav {
                class: "flex items-center justify-between max-w-6xl mx-auto px-6 py-3",
                span { class: "text-lg font-bold text-emerald-800", "{brand}" }
                div {
                    class: "flex items-center gap-6 text-sm text-neutral-700",
                    {children}
                }
            }
        }
    }
}
