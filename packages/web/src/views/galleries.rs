use dioxus::prelude::*;
use store::{Filter, Project};
use ui::Gallery;

use super::{use_records, LoadError};

/// Every project's gallery on one page. Each gallery activates on its own as
/// it scrolls into view.
#[component]
pub fn Galleries() -> Element {
    let projects = use_records::<Project>(Filter::new().order_asc("title"));

    let content = match &*projects.read() {
        None => rsx! { p { class: "text-sm text-neutral-500", "Loading..." } },
        Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
        Some(Ok(list)) => {
            let with_images: Vec<&Project> = list.iter().filter(|p| !p.images.is_empty()).collect();
            if with_images.is_empty() {
                rsx! { p { class: "text-sm text-neutral-500", "No galleries yet." } }
            } else {
                rsx! {
                    for project in with_images {
                        Gallery {
                            key: "{project.id}",
                            title: project.title.clone(),
                            images: project.images.clone(),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "mb-4 text-3xl font-bold text-neutral-800", "Galleries" }
            {content}
        }
    }
}
