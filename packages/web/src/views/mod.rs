use dioxus::prelude::*;
use store::{DataService, Filter, Record, StoreError};
use ui::use_backend;

mod public_layout;
pub use public_layout::PublicLayout;

mod home;
pub use home::Home;

mod projects;
pub use projects::{ProjectDetail, Projects};

mod blog;
pub use blog::{Blog, BlogDetail};

mod galleries;
pub use galleries::Galleries;

mod contact;
pub use contact::Contact;

mod not_found;
pub use not_found::NotFound;

pub mod admin;

/// Rows of `T` matching `filter`, fetched once when the calling component mounts.
pub(crate) fn use_records<T: Record + 'static>(
    filter: Filter,
) -> Resource<Result<Vec<T>, StoreError>> {
    let backend = use_backend();
    use_resource(move || {
        let backend = backend.clone();
        let filter = filter.clone();
        async move { backend.list::<T>(&filter).await }
    })
}

/// Date part of a timestamp column.
pub(crate) fn short_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|t| t.get(..10))
        .unwrap_or_default()
        .to_string()
}

#[component]
pub(crate) fn LoadError(error: StoreError) -> Element {
    tracing::warn!("page data failed to load: {error}");
    rsx! {
        p {
            class: "py-10 text-center text-neutral-500",
            "This page could not be loaded right now."
        }
    }
}
