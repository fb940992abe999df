use dioxus::prelude::*;
use state::{CapabilityTable, Section};

use crate::auth::{use_session, LogoutButton};
use crate::icons::{FaComments, FaEnvelope, FaFolderOpen, FaGauge, FaNewspaper, FaUserShield};
use crate::Icon;

#[component]
fn SectionIcon(section: Section) -> Element {
    match section {
        Section::Dashboard => rsx! { Icon { icon: FaGauge, width: 14, height: 14 } },
        Section::Admins => rsx! { Icon { icon: FaUserShield, width: 14, height: 14 } },
        Section::Blogs => rsx! { Icon { icon: FaNewspaper, width: 14, height: 14 } },
        Section::Projects => rsx! { Icon { icon: FaFolderOpen, width: 14, height: 14 } },
        Section::Messages => rsx! { Icon { icon: FaEnvelope, width: 14, height: 14 } },
        Section::Comments => rsx! { Icon { icon: FaComments, width: 14, height: 14 } },
    }
}

/// Admin navigation, filtered to the sections the signed-in role may see.
#[component]
pub fn AdminSidebar(active: Option<Section>, on_select: EventHandler<Section>) -> Element {
    let session = use_session();
    let table = use_hook(CapabilityTable::standard);

    let state = session.state();
    let sections = table.visible_sections(state.role());
    let user = state.user().cloned();
    let role_label = state.role().map(|r| r.label()).unwrap_or("No role");

    rsx! {
        aside {
            class: "flex flex-col w-60 min-h-screen border-r border-neutral-200 bg-neutral-50",

            // User header
            div {
                class: "px-4 py-4 border-b border-neutral-200",
                if let Some(ref u) = user {
                    div { class: "text-sm font-semibold text-neutral-800", "{u.display_name()}" }
                    div {
                        class: "text-xs text-neutral-500",
                        "{role_label}"
                    }
                }
            }

            nav {
                class: "flex-1 py-2",
                if sections.is_empty() {
                    p {
                        class: "px-4 py-2 text-sm text-neutral-500",
                        "Your account has no sections assigned."
                    }
                }
                for section in sections {
                    button {
                        key: "{section.label()}",
                        class: if active == Some(section) {
                            "flex items-center gap-2 w-full px-4 py-2 text-left text-sm bg-neutral-200 font-medium"
                        } else {
                            "flex items-center gap-2 w-full px-4 py-2 text-left text-sm hover:bg-neutral-100"
                        },
                        onclick: move |_| on_select.call(section),
                        SectionIcon { section }
                        span { "{section.label()}" }
                    }
                }
            }

            div {
                class: "px-4 py-3 border-t border-neutral-200",
                LogoutButton { class: "text-sm text-neutral-600 hover:text-neutral-900" }
            }
        }
    }
}

/// Renders `children` only if the signed-in role may see `section`.
#[component]
pub fn SectionGate(section: Section, children: Element) -> Element {
    let session = use_session();
    let table = use_hook(CapabilityTable::standard);

    if table.permits(session.state().role(), section) {
        rsx! { {children} }
    } else {
        rsx! {
            div {
                class: "p-8 text-neutral-600",
                "You do not have access to {section.label()}."
            }
        }
    }
}
