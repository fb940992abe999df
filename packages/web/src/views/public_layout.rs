use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

pub(crate) const SITE_NAME: &str = "Open Hands Foundation";

#[component]
pub fn PublicLayout() -> Element {
    rsx! {
        Navbar {
            brand: SITE_NAME.to_string(),
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Projects {}, "Projects" }
            Link { to: Route::Galleries {}, "Galleries" }
            Link { to: Route::Blog {}, "Blog" }
            Link { to: Route::Contact {}, "Contact" }
        }

        main {
            class: "min-h-[70vh]",
            Outlet::<Route> {}
        }

        footer {
            class: "mt-16 py-8 border-t border-neutral-200 text-center text-xs text-neutral-500",
            "{SITE_NAME}"
            span { class: "mx-2", "·" }
            Link { to: Route::AdminLogin {}, "Staff" }
        }
    }
}
