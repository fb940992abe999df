//! One-shot "near the viewport" notification for a mounted element.
//!
//! - **Web** (WASM): an `IntersectionObserver` with a generous root margin.
//!   The observer lives inside the returned future, so dropping the task
//!   (e.g. when the component unmounts) disconnects it.
//! - **Native**: resolves immediately.

use std::rc::Rc;

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const ROOT_MARGIN: &str = "200px 0px";

#[cfg(target_arch = "wasm32")]
pub(crate) async fn near_viewport(mounted: Rc<MountedData>) {
    use futures::channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    let Some(element) = mounted.downcast::<web_sys::Element>().cloned() else {
        return;
    };

    let (tx, rx) = oneshot::channel::<()>();
    let mut tx = Some(tx);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _: IntersectionObserver| {
            let near = entries
                .iter()
                .any(|e| e.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if near {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(ROOT_MARGIN);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(_) => {
                tracing::warn!("IntersectionObserver unavailable, activating immediately");
                return;
            }
        };
    observer.observe(&element);

    let _ = rx.await;
    observer.disconnect();
    drop(callback);
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn near_viewport(_mounted: Rc<MountedData>) {}
