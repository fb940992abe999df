use dioxus::prelude::*;
use store::{BlogPost, DataService, Filter};
use ui::{use_backend, AdminRow, AdminTable, RowAction};

use super::loaded;
use crate::views::{short_date, use_records};

#[component]
pub fn AdminBlogs() -> Element {
    let backend = use_backend();
    let mut posts = use_records::<BlogPost>(Filter::new().order_desc("created_at"));
    let mut action_error = use_signal(|| Option::<String>::None);

    let (records, loading, load_error) = loaded(&posts);
    let rows: Vec<AdminRow> = records
        .into_iter()
        .map(|p| AdminRow {
            cells: vec![
                short_date(p.created_at.as_deref()),
                p.title,
                format!("/blog/{}", p.slug),
                if p.published { "published" } else { "draft" }.to_string(),
            ],
            id: p.id,
            actions: vec![RowAction::Delete],
        })
        .collect();

    let on_action = move |(action, id): (RowAction, String)| {
        if action != RowAction::Delete {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            match backend.delete::<BlogPost>(&id).await {
                Ok(()) => {
                    action_error.set(None);
                    posts.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        AdminTable {
            title: "Blog posts".to_string(),
            headers: ["Date", "Title", "Path", "Status"].map(String::from).to_vec(),
            rows,
            error: action_error().or(load_error),
            loading,
            on_action,
        }
    }
}
