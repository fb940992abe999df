use dioxus::prelude::*;
use store::{DataService, Filter, Project, StoreError};
use ui::{use_backend, Gallery, Markdown};

use super::{use_records, LoadError};
use crate::Route;

#[component]
pub fn Projects() -> Element {
    let projects = use_records::<Project>(Filter::new().order_asc("title"));

    let content = match &*projects.read() {
        None => rsx! { p { class: "text-sm text-neutral-500", "Loading..." } },
        Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-sm text-neutral-500", "No projects yet." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "grid md:grid-cols-2 gap-8",
                for project in list.iter() {
                    article {
                        key: "{project.id}",
                        class: "rounded border border-neutral-200 overflow-hidden",
                        if let Some(ref cover) = project.cover_image {
                            img { class: "w-full h-56 object-cover", src: "{cover}", alt: "" }
                        }
                        div {
                            class: "p-5",
                            Link {
                                class: "text-xl font-semibold text-neutral-800 hover:underline",
                                to: Route::ProjectDetail { id: project.id.clone() },
                                "{project.title}"
                            }
                            p { class: "mt-2 text-sm text-neutral-600", "{project.summary}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "max-w-6xl mx-auto px-6 py-12",
            h1 { class: "mb-8 text-3xl font-bold text-neutral-800", "Our projects" }
            {content}
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    rsx! {
        ProjectPage { key: "{id}", id: id.clone() }
    }
}

#[component]
fn ProjectPage(id: String) -> Element {
    let backend = use_backend();
    let project = use_resource(move || {
        let backend = backend.clone();
        let id = id.clone();
        async move { backend.get::<Project>(&id).await }
    });

    let content = match &*project.read() {
        None => rsx! { p { class: "text-sm text-neutral-500", "Loading..." } },
        Some(Err(StoreError::NotFound { .. })) => rsx! {
            p { class: "py-10 text-neutral-500", "This project does not exist." }
        },
        Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
        Some(Ok(project)) => rsx! {
            h1 { class: "text-3xl font-bold text-neutral-800", "{project.title}" }
            p { class: "mt-2 text-lg text-neutral-600", "{project.summary}" }
            Markdown { class: "mt-6", source: project.body.clone() }
            Gallery { title: "Gallery".to_string(), images: project.images.clone() }
        },
    };

    rsx! {
        article {
            class: "max-w-4xl mx-auto px-6 py-12",
            Link { class: "text-sm text-emerald-700", to: Route::Projects {}, "← All projects" }
            div { class: "mt-4", {content} }
        }
    }
}
