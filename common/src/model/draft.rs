//! Client-held editing model for the table builder.
//!
//! All edits are staged on a [`TableDraft`] in memory and submitted wholesale
//! on save; nothing here performs I/O. Rows use the keyed form (cells
//! addressed by column id) so that values survive column reorders and
//! renames; the positional wire form is produced only at the save boundary.

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::model::column::{validate_columns, Column, ColumnType};
use crate::model::error::ValidationError;
use crate::model::row::Row;
use crate::model::table::TableDefinition;
use crate::requests::{RowPayload, SaveTableRequest};

/// Editing-form row: cells keyed by column id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftRow {
    pub id: String,
    pub cells: HashMap<String, Value>,
}

impl DraftRow {
    /// Cell for `column_id`, with nulls folded into "missing".
    pub fn cell(&self, column_id: &str) -> Option<&Value> {
        self.cells.get(column_id).filter(|value| !value.is_null())
    }
}

/// Patch for [`TableDraft::update_column`]. `None` fields stay untouched;
/// `width: Some(None)` clears the width hint.
#[derive(Clone, Debug, Default)]
pub struct ColumnPatch {
    pub name: Option<String>,
    pub column_type: Option<ColumnType>,
    pub width: Option<Option<u32>>,
}

/// The builder's staged table definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableDraft {
    /// `None` until the first successful save assigns a store id.
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub icon_url: String,
    pub detail_page_id: Option<i64>,
    pub columns: Vec<Column>,
    pub rows: Vec<DraftRow>,
}

impl TableDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrates a draft from a stored table, converting positional rows
    /// back into the keyed editing form.
    pub fn from_table(table: &TableDefinition) -> Self {
        let rows = table
            .rows
            .iter()
            .map(|row| DraftRow {
                id: row.id.clone(),
                cells: table
                    .columns
                    .iter()
                    .enumerate()
                    .filter_map(|(index, column)| {
                        row.cell(index).map(|value| (column.id.clone(), value.clone()))
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: Some(table.id),
            title: table.title.clone(),
            description: table.description.clone().unwrap_or_default(),
            icon_url: table.icon_url.clone().unwrap_or_default(),
            detail_page_id: Some(table.detail_page_id),
            columns: table.columns.clone(),
            rows,
        }
    }

    fn name_collides(&self, name: &str, ignore_id: Option<&str>) -> bool {
        let lower = name.to_lowercase();
        self.columns
            .iter()
            .filter(|column| Some(column.id.as_str()) != ignore_id)
            .any(|column| column.name.trim().to_lowercase() == lower)
    }

    /// Appends a new column with a freshly minted id.
    pub fn add_column(&mut self, name: &str, column_type: ColumnType) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyColumnName);
        }
        if self.name_collides(name, None) {
            return Err(ValidationError::DuplicateColumnName(name.to_string()));
        }
        self.columns.push(Column {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            column_type,
            width: None,
        });
        Ok(())
    }

    /// Merges `patch` into the column with the given id.
    pub fn update_column(&mut self, id: &str, patch: ColumnPatch) -> Result<(), ValidationError> {
        if let Some(name) = &patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyColumnName);
            }
            if self.name_collides(name, Some(id)) {
                return Err(ValidationError::DuplicateColumnName(name.to_string()));
            }
        }

        let column = self
            .columns
            .iter_mut()
            .find(|column| column.id == id)
            .ok_or_else(|| ValidationError::UnknownColumn(id.to_string()))?;

        if let Some(name) = patch.name {
            column.name = name.trim().to_string();
        }
        if let Some(column_type) = patch.column_type {
            column.column_type = column_type;
        }
        if let Some(width) = patch.width {
            column.width = width;
        }
        Ok(())
    }

    /// Removes a column from the ordered list.
    ///
    /// Row cells keyed by the dead id are left in place; they become
    /// unreachable and fall away at save time when rows serialize to the
    /// positional form. Re-adding a column never resurrects them because
    /// column ids are never reused.
    pub fn delete_column(&mut self, id: &str) -> Result<(), ValidationError> {
        let before = self.columns.len();
        self.columns.retain(|column| column.id != id);
        if self.columns.len() == before {
            return Err(ValidationError::UnknownColumn(id.to_string()));
        }
        Ok(())
    }

    /// Appends an empty row. Rejected while no columns exist: a row without
    /// columns has no addressable cells.
    pub fn add_row(&mut self) -> Result<(), ValidationError> {
        if self.columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }
        self.rows.push(DraftRow {
            id: Uuid::new_v4().to_string(),
            cells: HashMap::new(),
        });
        Ok(())
    }

    /// Merges one cell value into a row.
    pub fn update_cell(
        &mut self,
        row_id: &str,
        column_id: &str,
        value: Value,
    ) -> Result<(), ValidationError> {
        if !self.columns.iter().any(|column| column.id == column_id) {
            return Err(ValidationError::UnknownColumn(column_id.to_string()));
        }
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == row_id)
            .ok_or_else(|| ValidationError::UnknownRow(row_id.to_string()))?;
        row.cells.insert(column_id.to_string(), value);
        Ok(())
    }

    pub fn delete_row(&mut self, id: &str) -> Result<(), ValidationError> {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        if self.rows.len() == before {
            return Err(ValidationError::UnknownRow(id.to_string()));
        }
        Ok(())
    }

    /// Drag-and-drop reorder: the row at `from` lands at `to`. Out-of-range
    /// indices are ignored; the gesture only ever reorders in memory.
    pub fn move_row(&mut self, from: usize, to: usize) {
        if from == to || from >= self.rows.len() || to >= self.rows.len() {
            return;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
    }

    /// Save-gate validation: a title, a target page and at least one column,
    /// with the column-name invariants of [`validate_columns`].
    pub fn validate_for_save(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.detail_page_id.is_none() {
            return Err(ValidationError::NoDetailPage);
        }
        if self.columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }
        validate_columns(&self.columns)
    }

    /// Keyed rows collapsed to arrays aligned with the current column order.
    /// Orphaned cells (from deleted columns) are dropped here.
    fn wire_rows(&self) -> Vec<Row> {
        self.rows
            .iter()
            .map(|row| Row {
                id: row.id.clone(),
                data: self
                    .columns
                    .iter()
                    .map(|column| row.cells.get(&column.id).cloned().unwrap_or(Value::Null))
                    .collect(),
            })
            .collect()
    }

    /// Validates and serializes the draft into the create-or-update payload.
    pub fn to_save_request(&self) -> Result<SaveTableRequest, ValidationError> {
        self.validate_for_save()?;
        let detail_page_id = self.detail_page_id.ok_or(ValidationError::NoDetailPage)?;
        Ok(SaveTableRequest {
            id: self.id,
            title: self.title.trim().to_string(),
            description: none_if_blank(&self.description),
            icon_url: none_if_blank(&self.icon_url),
            detail_page_id,
            columns: self.columns.clone(),
            rows: self
                .wire_rows()
                .into_iter()
                .map(|row| RowPayload {
                    id: row.id,
                    data: Value::Array(row.data),
                })
                .collect(),
        })
    }

    /// Projects the draft into a [`TableDefinition`] without save validation,
    /// for the live preview tab. Store-assigned fields are placeholders.
    pub fn preview_table(&self) -> TableDefinition {
        TableDefinition {
            id: self.id.unwrap_or(0),
            title: self.title.clone(),
            description: none_if_blank(&self.description),
            icon_url: none_if_blank(&self.icon_url),
            detail_page_id: self.detail_page_id.unwrap_or(0),
            columns: self.columns.clone(),
            rows: self.wire_rows(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft_with_columns() -> TableDraft {
        let mut draft = TableDraft::new();
        draft.title = "Tuition Comparison".into();
        draft.detail_page_id = Some(7);
        draft.add_column("University", ColumnType::Text).unwrap();
        draft.add_column("Fee", ColumnType::Number).unwrap();
        draft
    }

    #[test]
    fn add_column_rejects_case_insensitive_duplicate() {
        let mut draft = TableDraft::new();
        draft.add_column("university", ColumnType::Text).unwrap();
        let err = draft.add_column("University", ColumnType::Text).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateColumnName("University".into()));
        assert_eq!(draft.columns.len(), 1, "column list must stay unchanged");
    }

    #[test]
    fn add_column_rejects_blank_name() {
        let mut draft = TableDraft::new();
        assert_eq!(
            draft.add_column("   ", ColumnType::Text),
            Err(ValidationError::EmptyColumnName)
        );
        assert!(draft.columns.is_empty());
    }

    #[test]
    fn rename_to_existing_name_rejected_but_self_rename_allowed() {
        let mut draft = draft_with_columns();
        let fee_id = draft.columns[1].id.clone();

        let err = draft
            .update_column(&fee_id, ColumnPatch { name: Some("UNIVERSITY".into()), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateColumnName(_)));

        // Renaming a column to (a variant of) its own name is not a collision.
        draft
            .update_column(&fee_id, ColumnPatch { name: Some("FEE".into()), ..Default::default() })
            .unwrap();
        assert_eq!(draft.columns[1].name, "FEE");
    }

    #[test]
    fn add_row_requires_a_column() {
        let mut draft = TableDraft::new();
        assert_eq!(draft.add_row(), Err(ValidationError::NoColumns));
        assert!(draft.rows.is_empty());

        draft.add_column("University", ColumnType::Text).unwrap();
        draft.add_row().unwrap();
        assert_eq!(draft.rows.len(), 1);
    }

    #[test]
    fn deleted_column_orphans_cells_and_save_drops_them() {
        let mut draft = draft_with_columns();
        let university = draft.columns[0].id.clone();
        let fee = draft.columns[1].id.clone();
        draft.add_row().unwrap();
        let row_id = draft.rows[0].id.clone();
        draft.update_cell(&row_id, &university, json!("MIT")).unwrap();
        draft.update_cell(&row_id, &fee, json!(50000)).unwrap();

        draft.delete_column(&fee).unwrap();
        // The orphaned value is still staged in the keyed form...
        assert!(draft.rows[0].cells.contains_key(&fee));

        // ...but the wire payload only carries live columns.
        let request = draft.to_save_request().unwrap();
        assert_eq!(request.rows[0].data, json!(["MIT"]));
    }

    #[test]
    fn move_row_reorders_and_ignores_out_of_range() {
        let mut draft = draft_with_columns();
        for _ in 0..3 {
            draft.add_row().unwrap();
        }
        let ids: Vec<String> = draft.rows.iter().map(|row| row.id.clone()).collect();

        draft.move_row(0, 2);
        let moved: Vec<&str> = draft.rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(moved, vec![ids[1].as_str(), ids[2].as_str(), ids[0].as_str()]);

        draft.move_row(5, 0);
        assert_eq!(draft.rows.len(), 3);
    }

    #[test]
    fn save_gate_reports_the_first_missing_piece() {
        let mut draft = TableDraft::new();
        assert_eq!(draft.validate_for_save(), Err(ValidationError::EmptyTitle));

        draft.title = "Housing costs".into();
        assert_eq!(draft.validate_for_save(), Err(ValidationError::NoDetailPage));

        draft.detail_page_id = Some(3);
        assert_eq!(draft.validate_for_save(), Err(ValidationError::NoColumns));

        draft.add_column("City", ColumnType::Text).unwrap();
        assert_eq!(draft.validate_for_save(), Ok(()));
    }

    #[test]
    fn round_trip_through_table_preserves_cells() {
        let mut draft = draft_with_columns();
        let university = draft.columns[0].id.clone();
        draft.add_row().unwrap();
        let row_id = draft.rows[0].id.clone();
        draft.update_cell(&row_id, &university, json!("MIT")).unwrap();

        let mut table = draft.preview_table();
        table.id = 42;
        let back = TableDraft::from_table(&table);

        assert_eq!(back.id, Some(42));
        assert_eq!(back.columns, draft.columns);
        assert_eq!(back.rows[0].cell(&university), Some(&json!("MIT")));
    }

    #[test]
    fn blank_description_serializes_as_absent() {
        let mut draft = draft_with_columns();
        draft.description = "   ".into();
        let request = draft.to_save_request().unwrap();
        assert_eq!(request.description, None);
    }
}
