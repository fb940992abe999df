use dioxus::prelude::*;
use state::gallery::sanitize::validate_values;
use store::{DataService, Filter, Project};
use ui::{use_backend, AdminRow, AdminTable, RowAction};

use super::loaded;
use crate::views::use_records;

#[component]
pub fn AdminProjects() -> Element {
    let backend = use_backend();
    let mut projects = use_records::<Project>(Filter::new().order_asc("title"));
    let mut action_error = use_signal(|| Option::<String>::None);

    let (records, loading, load_error) = loaded(&projects);
    let rows: Vec<AdminRow> = records
        .into_iter()
        .map(|p| {
            // Entries the public gallery would drop are worth flagging here.
            let usable = validate_values(&p.images).len();
            let images = if usable == p.images.len() {
                usable.to_string()
            } else {
                format!("{usable} of {} usable", p.images.len())
            };
            AdminRow {
                cells: vec![p.title, p.summary, images],
                id: p.id,
                actions: vec![RowAction::Delete],
            }
        })
        .collect();

    let on_action = move |(action, id): (RowAction, String)| {
        if action != RowAction::Delete {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            match backend.delete::<Project>(&id).await {
                Ok(()) => {
                    action_error.set(None);
                    projects.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        AdminTable {
            title: "Projects".to_string(),
            headers: ["Title", "Summary", "Images"].map(String::from).to_vec(),
            rows,
            error: action_error().or(load_error),
            loading,
            on_action,
        }
    }
}
