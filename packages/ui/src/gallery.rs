//! Lazily activated image gallery with a full-screen viewer.

use std::time::Duration;

use dioxus::prelude::*;
use serde_json::Value;
use state::{GalleryImage, GalleryLoader, LoadState, PreloadPlan, PreloadRequest, ViewerKey};

use crate::config::use_site_config;
use crate::icons::FaImage;
use crate::timer::sleep;
use crate::viewer::ImageViewer;
use crate::visibility::near_viewport;
use crate::Icon;

/// Start each fetch at its scheduled offset from activation, in list order,
/// releasing its tile at the same moment. Tiles outside the schedule are
/// released once the last preload has started.
async fn preload(mut loader: Signal<GalleryLoader>, requests: Vec<PreloadRequest>) {
    let mut elapsed = Duration::ZERO;
    for request in requests {
        if request.delay > elapsed {
            sleep(request.delay - elapsed).await;
            elapsed = request.delay;
        }
        tracing::debug!(index = request.index, url = %request.url, "preloading image");
        #[cfg(target_arch = "wasm32")]
        match web_sys::HtmlImageElement::new() {
            Ok(img) => img.set_src(&request.url),
            Err(_) => tracing::warn!("could not create preload image"),
        }
        loader.write().request(request.index);
    }
    loader.write().release_remaining();
}

/// A gallery over a raw image column.
///
/// Entries are sanitized and validated once, when the component is created;
/// give the component a `key` if the same slot can show another record.
#[component]
pub fn Gallery(images: Vec<Value>, #[props(default)] title: Option<String>) -> Element {
    let config = use_site_config();
    let mut loader = use_signal(|| {
        GalleryLoader::from_values(&images, PreloadPlan::from_config(&config.gallery))
    });

    let on_mounted = move |evt: MountedEvent| {
        spawn(async move {
            near_viewport(evt.data()).await;
            let requests = loader.write().activate();
            if !requests.is_empty() {
                spawn(preload(loader, requests));
            }
        });
    };

    let gallery = loader.read();
    if gallery.is_empty() {
        return rsx! {
            section {
                class: "py-6",
                if let Some(ref title) = title {
                    h2 { class: "mb-3 text-lg font-semibold text-neutral-800", "{title}" }
                }
                p { class: "text-sm text-neutral-500", "No images available." }
            }
        };
    }

    let loading = gallery.is_loading();
    let tiles: Vec<(GalleryImage, bool)> = gallery
        .images()
        .iter()
        .map(|image| (image.clone(), gallery.is_displayable(image.index)))
        .collect();
    let urls: Vec<String> = tiles.iter().map(|(i, _)| i.url.clone()).collect();
    let viewing = gallery.viewer().current();
    drop(gallery);

    rsx! {
        section {
            class: "py-6",
            onmounted: on_mounted,

            div {
                class: "flex items-center gap-3 mb-3",
                if let Some(ref title) = title {
                    h2 { class: "text-lg font-semibold text-neutral-800", "{title}" }
                }
                if loading {
                    span {
                        class: "text-xs text-neutral-500 animate-pulse",
                        role: "status",
                        "Loading images..."
                    }
                }
            }

            div {
                class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-2",
                for (tile, displayable) in tiles {
                    button {
                        key: "{tile.index}",
                        class: "relative aspect-square overflow-hidden rounded bg-neutral-100",
                        onclick: move |_| {
                            loader.write().open_viewer_at(tile.index);
                        },
                        if tile.state == LoadState::Errored {
                            div {
                                class: "flex flex-col items-center justify-center w-full h-full text-neutral-400",
                                Icon { icon: FaImage, width: 20, height: 20 }
                                span { class: "mt-1 text-xs", "unavailable" }
                            }
                        } else if displayable {
                            img {
                                class: if tile.state == LoadState::Loaded {
                                    "w-full h-full object-cover"
                                } else {
                                    "w-full h-full object-cover opacity-0"
                                },
                                src: "{tile.url}",
                                alt: "",
                                onload: move |_| {
                                    loader.write().mark_loaded(tile.index);
                                },
                                onerror: move |_| {
                                    loader.write().mark_errored(tile.index);
                                },
                            }
                        }
                    }
                }
            }

            if let Some(current) = viewing {
                ImageViewer {
                    urls,
                    current,
                    on_key: move |key: ViewerKey| loader.write().viewer_mut().handle_key(key),
                }
            }
        }
    }
}
