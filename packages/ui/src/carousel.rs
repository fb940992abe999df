use std::time::Duration;

use dioxus::prelude::*;
use state::gallery::sanitize::{is_displayable, sanitize_source};
use state::Slideshow;

use crate::config::use_site_config;
use crate::timer::sleep;

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub caption: String,
}

/// Autoplaying hero banner. Hovering pauses it.
#[component]
pub fn HeroCarousel(slides: Vec<Slide>) -> Element {
    let config = use_site_config();
    let slides: Vec<Slide> = slides
        .into_iter()
        .filter_map(|s| {
            let image = sanitize_source(&s.image).filter(|u| is_displayable(u))?;
            Some(Slide { image, ..s })
        })
        .collect();
    let len = slides.len();
    let mut show = use_signal(|| Slideshow::new(len));

    let interval = config.slideshow.interval_secs;
    use_future(move || async move {
        if interval == 0 {
            return;
        }
        loop {
            sleep(Duration::from_secs(u64::from(interval))).await;
            show.write().tick();
        }
    });

    let index = show.read().index();
    let Some(slide) = slides.get(index).cloned() else {
        return rsx! {};
    };

    rsx! {
        section {
            class: "relative h-[60vh] overflow-hidden bg-neutral-900",
            onmouseenter: move |_| show.write().pause(),
            onmouseleave: move |_| show.write().resume(),

            img {
                key: "{index}",
                class: "absolute inset-0 w-full h-full object-cover opacity-70",
                src: "{slide.image}",
                alt: "",
            }
            div {
                class: "relative flex flex-col justify-end h-full p-10 text-white",
                h1 { class: "text-4xl font-bold", "{slide.title}" }
                p { class: "mt-2 max-w-2xl text-lg", "{slide.caption}" }
            }
            if len > 1 {
                div {
                    class: "absolute bottom-4 right-6 flex gap-2",
                    for i in 0..len {
                        button {
                            key: "{i}",
                            class: if i == index { "w-3 h-3 rounded-full bg-white" } else { "w-3 h-3 rounded-full bg-white/40" },
                            title: format!("Slide {}", i + 1),
                            onclick: move |_| {
                                show.write().go_to(i);
                            },
                        }
                    }
                }
            }
        }
    }
}
