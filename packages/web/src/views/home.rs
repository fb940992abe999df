use dioxus::prelude::*;
use store::{BlogPost, Filter, Project};
use ui::{HeroCarousel, Slide};

use super::public_layout::SITE_NAME;
use super::{short_date, use_records};
use crate::Route;

const LATEST_POSTS: usize = 3;

#[component]
pub fn Home() -> Element {
    let projects = use_records::<Project>(Filter::new().order_asc("title"));
    let posts = use_records::<BlogPost>(
        Filter::new()
            .eq("published", true)
            .order_desc("created_at")
            .limit(LATEST_POSTS),
    );

    let slides: Vec<Slide> = match &*projects.read() {
        Some(Ok(list)) => list
            .iter()
            .filter_map(|p| {
                Some(Slide {
                    image: p.cover_image.clone()?,
                    title: p.title.clone(),
                    caption: p.summary.clone(),
                })
            })
            .collect(),
        _ => Vec::new(),
    };
    let latest: Vec<BlogPost> = match &*posts.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        if slides.is_empty() {
            section {
                class: "py-24 text-center bg-emerald-900 text-white",
                h1 { class: "text-4xl font-bold", "{SITE_NAME}" }
                p { class: "mt-3 text-lg text-emerald-100", "Clean water, schooling and care where it is needed most." }
            }
        } else {
            HeroCarousel { key: "{slides.len()}", slides }
        }

        section {
            class: "max-w-6xl mx-auto px-6 py-12",
            h2 { class: "mb-6 text-2xl font-semibold text-neutral-800", "Latest news" }
            if latest.is_empty() {
                p { class: "text-sm text-neutral-500", "No posts yet." }
            }
            div {
                class: "grid md:grid-cols-3 gap-6",
                for post in latest {
                    article {
                        key: "{post.id}",
                        class: "rounded border border-neutral-200 overflow-hidden",
                        if let Some(ref cover) = post.cover_image {
                            img { class: "w-full h-40 object-cover", src: "{cover}", alt: "" }
                        }
                        div {
                            class: "p-4",
                            p { class: "text-xs text-neutral-500", "{short_date(post.created_at.as_deref())}" }
                            Link {
                                class: "block mt-1 font-semibold text-neutral-800 hover:underline",
                                to: Route::BlogDetail { slug: post.slug.clone() },
                                "{post.title}"
                            }
                            p { class: "mt-2 text-sm text-neutral-600", "{post.excerpt}" }
                        }
                    }
                }
            }
        }
    }
}
