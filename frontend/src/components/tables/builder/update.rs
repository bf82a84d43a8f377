//! Update logic for the table builder.
//!
//! Elm-style: receives the current state, the component `Context` and a
//! `Msg`, mutates the state, and returns whether the view should re-render.
//! Every edit goes through the `TableDraft` value object; validation
//! failures surface as toasts and leave the draft untouched. Nothing is
//! persisted until `Msg::Save` submits the whole draft in one request.

use common::model::draft::ColumnPatch;
use common::model::table::TableDefinition;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::top_sheet::{close_sheet, open_sheet};

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::{PendingDelete, TableBuilderComponent};

pub fn update(
    component: &mut TableBuilderComponent,
    ctx: &Context<TableBuilderComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::SetTitle(title) => {
            component.draft.title = title;
            true
        }
        Msg::SetDescription(description) => {
            component.draft.description = description;
            true
        }
        Msg::SetIconUrl(icon_url) => {
            component.draft.icon_url = icon_url;
            true
        }
        Msg::SelectDetailPage(page_id) => {
            component.draft.detail_page_id = page_id;
            true
        }
        Msg::SetNewColumnName(name) => {
            component.new_column_name = name;
            false
        }
        Msg::SetNewColumnType(column_type) => {
            component.new_column_type = column_type;
            false
        }
        Msg::AddColumn => {
            let name = component.new_column_name.clone();
            match component.draft.add_column(&name, component.new_column_type) {
                Ok(()) => component.new_column_name.clear(),
                Err(err) => show_toast(&err.to_string()),
            }
            true
        }
        Msg::RenameColumn(column_id, name) => {
            let patch = ColumnPatch { name: Some(name), ..ColumnPatch::default() };
            if let Err(err) = component.draft.update_column(&column_id, patch) {
                show_toast(&err.to_string());
            }
            true
        }
        Msg::ChangeColumnType(column_id, column_type) => {
            let patch = ColumnPatch { column_type: Some(column_type), ..ColumnPatch::default() };
            if let Err(err) = component.draft.update_column(&column_id, patch) {
                show_toast(&err.to_string());
            }
            true
        }
        Msg::SetColumnWidth(column_id, width) => {
            let patch = ColumnPatch { width: Some(width), ..ColumnPatch::default() };
            if let Err(err) = component.draft.update_column(&column_id, patch) {
                show_toast(&err.to_string());
            }
            true
        }
        Msg::RequestDelete(target) => {
            component.pending_delete = Some(target);
            open_sheet(&component.confirm_sheet_ref);
            true
        }
        Msg::ConfirmDelete => {
            let result = match component.pending_delete.take() {
                Some(PendingDelete::Column(column_id)) => component.draft.delete_column(&column_id),
                Some(PendingDelete::Row(row_id)) => component.draft.delete_row(&row_id),
                None => Ok(()),
            };
            if let Err(err) = result {
                show_toast(&err.to_string());
            }
            close_sheet(&component.confirm_sheet_ref);
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            close_sheet(&component.confirm_sheet_ref);
            true
        }
        Msg::AddRow => {
            if let Err(err) = component.draft.add_row() {
                show_toast(&err.to_string());
            }
            true
        }
        Msg::UpdateCell { row_id, column_id, value } => {
            if let Err(err) = component.draft.update_cell(&row_id, &column_id, value) {
                show_toast(&err.to_string());
            }
            true
        }
        Msg::RowDragStart(index) => {
            component.drag_index = Some(index);
            false
        }
        Msg::RowDragOver(target) => {
            // Reorder live while the row is dragged across its siblings.
            match component.drag_index {
                Some(from) if from != target => {
                    component.draft.move_row(from, target);
                    component.drag_index = Some(target);
                    true
                }
                _ => false,
            }
        }
        Msg::RowDragEnd => {
            component.drag_index = None;
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            match component.draft.to_save_request() {
                Ok(payload) => {
                    component.saving = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let request = match Request::post("/api/tables/save").json(&payload) {
                            Ok(request) => request,
                            Err(err) => {
                                link.send_message(Msg::SaveFailed(err.to_string()));
                                return;
                            }
                        };
                        match request.send().await {
                            Ok(response) if response.status() == 200 => {
                                match response.json::<TableDefinition>().await {
                                    Ok(table) => link.send_message(Msg::SaveSucceeded(table)),
                                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                                }
                            }
                            Ok(response) => {
                                let body = response.text().await.unwrap_or_default();
                                link.send_message(Msg::SaveFailed(body));
                            }
                            Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                        }
                    });
                    true
                }
                Err(err) => {
                    show_toast(&err.to_string());
                    true
                }
            }
        }
        Msg::SaveSucceeded(table) => {
            component.saving = false;
            component.draft = common::model::draft::TableDraft::from_table(&table);
            component.saved = component.draft.clone();
            show_toast("Table saved.");
            true
        }
        Msg::SaveFailed(message) => {
            // The staged draft survives failed saves so the operator can
            // retry without losing edits.
            component.saving = false;
            show_toast(&format!("Saving failed: {message}"));
            true
        }
        Msg::TableLoaded(table) => {
            component.draft = common::model::draft::TableDraft::from_table(&table);
            component.saved = component.draft.clone();
            true
        }
        Msg::DetailPagesLoaded(pages) => {
            component.detail_pages = pages;
            true
        }
    }
}
