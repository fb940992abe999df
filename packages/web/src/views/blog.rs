use dioxus::prelude::*;
use store::{BlogPost, Comment, DataService, Filter};
use ui::{use_backend, Gallery, Markdown};

use super::{short_date, use_records, LoadError};
use crate::Route;

#[component]
pub fn Blog() -> Element {
    let posts = use_records::<BlogPost>(
        Filter::new().eq("published", true).order_desc("created_at"),
    );

    let content = match &*posts.read() {
        None => rsx! { p { class: "text-sm text-neutral-500", "Loading..." } },
        Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "text-sm text-neutral-500", "No posts yet." }
        },
        Some(Ok(list)) => rsx! {
            for post in list.iter() {
                article {
                    key: "{post.id}",
                    class: "py-6 border-b border-neutral-200",
                    p { class: "text-xs text-neutral-500", "{short_date(post.created_at.as_deref())}" }
                    Link {
                        class: "block mt-1 text-xl font-semibold text-neutral-800 hover:underline",
                        to: Route::BlogDetail { slug: post.slug.clone() },
                        "{post.title}"
                    }
                    p { class: "mt-2 text-neutral-600", "{post.excerpt}" }
                }
            }
        },
    };

    rsx! {
        section {
            class: "max-w-3xl mx-auto px-6 py-12",
            h1 { class: "mb-4 text-3xl font-bold text-neutral-800", "Blog" }
            {content}
        }
    }
}

#[component]
pub fn BlogDetail(slug: String) -> Element {
    rsx! {
        PostPage { key: "{slug}", slug: slug.clone() }
    }
}

#[component]
fn PostPage(slug: String) -> Element {
    let post = use_records::<BlogPost>(
        Filter::new()
            .eq("slug", slug.as_str())
            .eq("published", true)
            .limit(1),
    );

    let content = match &*post.read() {
        None => rsx! { p { class: "text-sm text-neutral-500", "Loading..." } },
        Some(Err(e)) => rsx! { LoadError { error: e.clone() } },
        Some(Ok(found)) => match found.first() {
            None => rsx! { p { class: "py-10 text-neutral-500", "This post does not exist." } },
            Some(post) => rsx! {
                p { class: "text-xs text-neutral-500", "{short_date(post.created_at.as_deref())}" }
                h1 { class: "mt-1 text-3xl font-bold text-neutral-800", "{post.title}" }
                if let Some(ref cover) = post.cover_image {
                    img { class: "mt-6 w-full rounded object-cover", src: "{cover}", alt: "" }
                }
                Markdown { class: "mt-6", source: post.body.clone() }
                Gallery { images: post.images.clone() }
                Comments { post_id: post.id.clone() }
            },
        },
    };

    rsx! {
        article {
            class: "max-w-3xl mx-auto px-6 py-12",
            Link { class: "text-sm text-emerald-700", to: Route::Blog {}, "← All posts" }
            div { class: "mt-4", {content} }
        }
    }
}

/// Approved comments of a post, and the form to submit a new one.
#[component]
fn Comments(post_id: String) -> Element {
    let comments = use_records::<Comment>(
        Filter::new()
            .eq("post_id", post_id.as_str())
            .eq("approved", true)
            .order_asc("created_at"),
    );

    let list: Vec<Comment> = match &*comments.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        section {
            class: "mt-12",
            h2 { class: "mb-4 text-lg font-semibold text-neutral-800", "Comments" }
            if list.is_empty() {
                p { class: "text-sm text-neutral-500", "No comments yet." }
            }
            for comment in list {
                div {
                    key: "{comment.id}",
                    class: "py-3 border-b border-neutral-100",
                    p { class: "text-sm font-medium text-neutral-800", "{comment.author}" }
                    p { class: "mt-1 text-sm text-neutral-600", "{comment.body}" }
                }
            }
            CommentForm { post_id }
        }
    }
}

#[component]
fn CommentForm(post_id: String) -> Element {
    let backend = use_backend();
    let mut author = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        let post_id = post_id.clone();
        spawn(async move {
            error.set(None);
            let a = author().trim().to_string();
            let b = body().trim().to_string();
            if a.is_empty() || b.is_empty() {
                error.set(Some("Name and comment are required".to_string()));
                return;
            }
            let comment = Comment {
                post_id,
                author: a,
                body: b,
                approved: false,
                ..Default::default()
            };
            match backend.create(&comment).await {
                Ok(_) => {
                    body.set(String::new());
                    sent.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        if sent() {
            p {
                class: "mt-6 text-sm text-emerald-700",
                "Thank you. Your comment will appear once it has been approved."
            }
        } else {
            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3 mt-6",
                if let Some(err) = error() {
                    div { class: "text-sm text-red-600", role: "alert", "{err}" }
                }
                input {
                    class: "px-3 py-2 border border-neutral-300 rounded",
                    placeholder: "Your name",
                    value: author(),
                    oninput: move |evt: FormEvent| author.set(evt.value()),
                }
                textarea {
                    class: "px-3 py-2 border border-neutral-300 rounded",
                    rows: "4",
                    placeholder: "Your comment",
                    value: body(),
                    oninput: move |evt: FormEvent| body.set(evt.value()),
                }
                button {
                    class: "self-start px-4 py-2 rounded bg-emerald-700 text-white text-sm",
                    r#type: "submit",
                    "Post comment"
                }
            }
        }
    }
}
