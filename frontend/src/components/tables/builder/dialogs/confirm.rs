//! Confirmation sheet for destructive builder actions.
//!
//! Deleting a column orphans its values in every row and deleting a row
//! discards its cells, so both gestures stop here before the draft is
//! touched. The dialog only ever mutates state through `Msg::ConfirmDelete`
//! and `Msg::CancelDelete`.

use yew::html::Scope;
use yew::prelude::*;

use crate::top_sheet::TopSheet;

use super::super::messages::Msg;
use super::super::state::{PendingDelete, TableBuilderComponent};

pub fn confirm_dialog(
    component: &TableBuilderComponent,
    link: &Scope<TableBuilderComponent>,
) -> Html {
    let message = match &component.pending_delete {
        Some(PendingDelete::Column(column_id)) => {
            let name = component
                .draft
                .columns
                .iter()
                .find(|column| &column.id == column_id)
                .map(|column| column.name.clone())
                .unwrap_or_else(|| "this column".to_string());
            format!("Delete column '{name}'? Its values in every row will no longer be shown.")
        }
        Some(PendingDelete::Row(_)) => "Delete this row?".to_string(),
        None => String::new(),
    };

    html! {
        <TopSheet node_ref={component.confirm_sheet_ref.clone()}>
            <div class="confirm-overlay">
                <div class="confirm-card">
                    <p>{ message }</p>
                    <div class="confirm-actions">
                        <button
                            class="btn danger"
                            onclick={link.callback(|_| Msg::ConfirmDelete)}
                        >
                            {"Delete"}
                        </button>
                        <button class="btn" onclick={link.callback(|_| Msg::CancelDelete)}>
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        </TopSheet>
    }
}
