use api::Backend;
use dioxus::prelude::*;
use store::{DataService, Filter, Message, StoreError};
use ui::{use_backend, AdminRow, AdminTable, RowAction};

use super::loaded;
use crate::views::{short_date, use_records};

async fn mark_read(backend: &Backend, id: &str) -> Result<(), StoreError> {
    let mut message: Message = backend.get(id).await?;
    message.read = true;
    backend.update(&message).await.map(|_| ())
}

#[component]
pub fn AdminMessages() -> Element {
    let backend = use_backend();
    let mut messages = use_records::<Message>(Filter::new().order_desc("created_at"));
    let mut action_error = use_signal(|| Option::<String>::None);

    let (records, loading, load_error) = loaded(&messages);
    let rows: Vec<AdminRow> = records
        .into_iter()
        .map(|m| AdminRow {
            actions: if m.read {
                vec![RowAction::Delete]
            } else {
                vec![RowAction::MarkRead, RowAction::Delete]
            },
            cells: vec![
                short_date(m.created_at.as_deref()),
                format!("{} <{}>", m.name, m.email),
                m.subject,
                m.body,
                if m.read { "read" } else { "new" }.to_string(),
            ],
            id: m.id,
        })
        .collect();

    let on_action = move |(action, id): (RowAction, String)| {
        let backend = backend.clone();
        spawn(async move {
            let result = match action {
                RowAction::Delete => backend.delete::<Message>(&id).await,
                RowAction::MarkRead => mark_read(&backend, &id).await,
                RowAction::Approve => return,
            };
            match result {
                Ok(()) => {
                    action_error.set(None);
                    messages.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        AdminTable {
            title: "Messages".to_string(),
            headers: ["Date", "From", "Subject", "Message", "Status"].map(String::from).to_vec(),
            rows,
            error: action_error().or(load_error),
            loading,
            on_action,
        }
    }
}
