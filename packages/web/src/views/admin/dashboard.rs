use dioxus::prelude::*;
use state::{CapabilityTable, Section};
use store::{BlogPost, Comment, Filter, Message, Project};
use ui::use_session;

use super::section_route;
use crate::views::use_records;

/// Row count for a tile, or a dash while loading or unavailable.
fn count<T>(resource: &Resource<Result<Vec<T>, store::StoreError>>) -> String {
    match &*resource.read() {
        Some(Ok(rows)) => rows.len().to_string(),
        _ => "–".to_string(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let table = use_hook(CapabilityTable::standard);

    let unread = use_records::<Message>(Filter::new().eq("read", false));
    let pending = use_records::<Comment>(Filter::new().eq("approved", false));
    let posts = use_records::<BlogPost>(Filter::new());
    let projects = use_records::<Project>(Filter::new());

    let state = session.state();
    let name = state.user().map(|u| u.display_name().to_string()).unwrap_or_default();
    let tiles: Vec<(Section, &'static str, String)> = [
        (Section::Messages, "Unread messages", count(&unread)),
        (Section::Comments, "Comments awaiting approval", count(&pending)),
        (Section::Blogs, "Blog posts", count(&posts)),
        (Section::Projects, "Projects", count(&projects)),
    ]
    .into_iter()
    .filter(|(section, _, _)| table.permits(state.role(), *section))
    .collect();

    rsx! {
        div {
            class: "p-8",
            h1 { class: "text-2xl font-semibold text-neutral-800", "Welcome, {name}" }
            div {
                class: "grid sm:grid-cols-2 lg:grid-cols-4 gap-4 mt-8",
                for (section, label, value) in tiles {
                    Link {
                        key: "{label}",
                        class: "block p-5 rounded border border-neutral-200 hover:bg-neutral-50",
                        to: section_route(section),
                        div {
                            class: "text-3xl font-semibold text-neutral-800",
                            "{value}"
                        }
                        div { class: "mt-1 text-sm text-neutral-500", "{label}" }
                    }
                }
            }
        }
    }
}
