//! Record tables of the admin panel.

use dioxus::prelude::*;

use crate::icons::{FaCheck, FaEnvelopeOpen, FaTrash};
use crate::Icon;

/// Something an admin can do to one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    MarkRead,
    Approve,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Delete => "Delete",
            RowAction::MarkRead => "Mark read",
            RowAction::Approve => "Approve",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminRow {
    pub id: String,
    pub cells: Vec<String>,
    pub actions: Vec<RowAction>,
}

#[component]
fn ActionIcon(action: RowAction) -> Element {
    match action {
        RowAction::Delete => rsx! { Icon { icon: FaTrash, width: 12, height: 12 } },
        RowAction::MarkRead => rsx! { Icon { icon: FaEnvelopeOpen, width: 12, height: 12 } },
        RowAction::Approve => rsx! { Icon { icon: FaCheck, width: 12, height: 12 } },
    }
}

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/30",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-lg shadow-lg max-w-md w-full mx-4 p-6",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Table of records with per-row actions. Deletes are confirmed first.
///
/// `error` is shown verbatim above the table; callers put the `Display` of
/// the failing store call there.
#[component]
pub fn AdminTable(
    title: String,
    headers: Vec<String>,
    rows: Vec<AdminRow>,
    #[props(default)] error: Option<String>,
    #[props(default)] loading: bool,
    on_action: EventHandler<(RowAction, String)>,
) -> Element {
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    rsx! {
        div {
            class: "p-8",
            h1 { class: "mb-6 text-2xl font-semibold text-neutral-800", "{title}" }

            if let Some(err) = error {
                div {
                    class: "mb-4 px-3 py-2 bg-red-50 border border-red-200 rounded text-red-600 text-sm",
                    role: "alert",
                    "{err}"
                }
            }

            if loading {
                p { class: "text-sm text-neutral-500", "Loading..." }
            } else if rows.is_empty() {
                p { class: "text-sm text-neutral-500", "Nothing here yet." }
            } else {
                table {
                    class: "w-full text-sm border-collapse",
                    thead {
                        tr {
                            for header in headers.iter() {
                                th {
                                    key: "{header}",
                                    class: "px-3 py-2 text-left font-medium text-neutral-500 border-b border-neutral-200",
                                    "{header}"
                                }
                            }
                            th { class: "border-b border-neutral-200" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.id}",
                                class: "hover:bg-neutral-50",
                                for (i, cell) in row.cells.iter().enumerate() {
                                    td {
                                        key: "{i}",
                                        class: "px-3 py-2 border-b border-neutral-100",
                                        "{cell}"
                                    }
                                }
                                td {
                                    class: "px-3 py-2 border-b border-neutral-100 text-right whitespace-nowrap",
                                    for action in row.actions.iter().copied() {
                                        button {
                                            key: "{action.label()}",
                                            class: "inline-flex items-center gap-1 ml-2 px-2 py-1 rounded border border-neutral-300 text-xs hover:bg-neutral-100",
                                            onclick: {
                                                let id = row.id.clone();
                                                move |_| {
                                                    if action == RowAction::Delete {
                                                        confirm_delete.set(Some(id.clone()));
                                                    } else {
                                                        on_action.call((action, id.clone()));
                                                    }
                                                }
                                            },
                                            ActionIcon { action }
                                            "{action.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(id) = confirm_delete() {
            ModalOverlay {
                on_close: move |_| confirm_delete.set(None),
                h2 { class: "m-0 mb-4 text-lg font-semibold text-neutral-800", "Delete this record?" }
                p { class: "mb-5 text-sm text-neutral-600", "This cannot be undone." }
                div {
                    class: "flex gap-2",
                    button {
                        class: "px-4 py-2 rounded bg-red-600 text-white text-sm",
                        onclick: move |_| {
                            confirm_delete.set(None);
                            on_action.call((RowAction::Delete, id.clone()));
                        },
                        "Delete"
                    }
                    button {
                        class: "px-4 py-2 rounded border border-neutral-300 text-sm",
                        onclick: move |_| confirm_delete.set(None),
                        "Cancel"
                    }
                }
            }
        }
    }
}
