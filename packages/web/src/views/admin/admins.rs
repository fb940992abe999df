use dioxus::prelude::*;
use store::{Admin, DataService, Filter};
use ui::{use_backend, use_session, AdminRow, AdminTable, RowAction};

use super::loaded;
use crate::views::use_records;

#[component]
pub fn AdminAdmins() -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut admins = use_records::<Admin>(Filter::new().order_asc("email"));
    let mut action_error = use_signal(|| Option::<String>::None);

    let own_id = session.state().user().map(|u| u.id.clone());
    let (records, loading, load_error) = loaded(&admins);
    let rows: Vec<AdminRow> = records
        .into_iter()
        .map(|a| {
            let role = match a.role() {
                Some(role) => role.label().to_string(),
                None => format!("unknown ({})", a.role),
            };
            // Nobody deletes their own account from here.
            let actions = if own_id.as_deref() == Some(a.id.as_str()) {
                Vec::new()
            } else {
                vec![RowAction::Delete]
            };
            AdminRow {
                cells: vec![a.name.unwrap_or_default(), a.email, role],
                id: a.id,
                actions,
            }
        })
        .collect();

    let on_action = move |(action, id): (RowAction, String)| {
        if action != RowAction::Delete {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            match backend.delete::<Admin>(&id).await {
                Ok(()) => {
                    action_error.set(None);
                    admins.restart();
                }
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        AdminTable {
            title: "Admins".to_string(),
            headers: ["Name", "Email", "Role"].map(String::from).to_vec(),
            rows,
            error: action_error().or(load_error),
            loading,
            on_action,
        }
    }
}
