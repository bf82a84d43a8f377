use common::model::column::ColumnType;
use common::model::detail_page::DetailPage;
use common::model::table::TableDefinition;
use serde_json::Value;

use super::state::PendingDelete;

#[derive(Clone)]
pub enum Msg {
    SetTab(String),
    SetTitle(String),
    SetDescription(String),
    SetIconUrl(String),
    SelectDetailPage(Option<i64>),
    SetNewColumnName(String),
    SetNewColumnType(ColumnType),
    AddColumn,
    RenameColumn(String, String),
    ChangeColumnType(String, ColumnType),
    SetColumnWidth(String, Option<u32>),
    RequestDelete(PendingDelete),
    ConfirmDelete,
    CancelDelete,
    AddRow,
    UpdateCell { row_id: String, column_id: String, value: Value },
    RowDragStart(usize),
    RowDragOver(usize),
    RowDragEnd,
    Save,
    SaveSucceeded(TableDefinition),
    SaveFailed(String),
    TableLoaded(TableDefinition),
    DetailPagesLoaded(Vec<DetailPage>),
}
