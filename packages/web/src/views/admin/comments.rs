use api::Backend;
use dioxus::prelude::*;
use store::{Comment, DataService, Filter, StoreError};
use ui::{use_backend, AdminRow, AdminTable, RowAction};

use super::loaded;
use crate::views::{short_date, use_records};

async fn approve(backend: &Backend, id: &str) -> Result<(), StoreError> {
    let mut comment: Comment = backend.get(id).await?;
    comment.approved = true;
    backend.update(&comment).await.map(|_| ())
}

#[component]
pub fn AdminComments() -> Element {
    let backend = use_backend();
    let mut comments = use_records::<Comment>(Filter::new().order_desc("created_at"));
    let mut action_error = use_signal(|| Option::<String>::None);

    let (records, loading, load_error) = loaded(&comments);
    let rows: Vec<AdminRow> = records
        .into_iter()
        .map(|c| AdminRow {
            actions: if c.approved {
                vec![RowAction::Delete]
            } else {
                vec![RowAction::Approve, RowAction::Delete]
            },
            cells: vec![
                short_date(c.created_at.as_deref()),
                c.author,
                c.body,
                c.post_id,
                if c.approved { "approved" } else { "pending" }.to_string(),
            ],
            id: c.id,
        })
        .collect();

    let on_action = move |(action, id): (RowAction, String)| {
        let backend = backend.clone();
        spawn(async move {
            let result = match action {
                RowAction::Delete => backend.delete::<Comment>(&id).await,
                RowAction::Approve => approve(&backend, &id).await,
                RowAction::MarkRead => return,
            };
            match result {
                Ok(()) => {
                    action_error.set(None);
                    comments.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        AdminTable {
            title: "Comments".to_string(),
            headers: ["Date", "Author", "Comment", "Post", "Status"].map(String::from).to_vec(),
            rows,
            error: action_error().or(load_error),
            loading,
            on_action,
        }
    }
}
