//! Component state for the table builder.
//!
//! The interesting data lives in `common::model::draft::TableDraft`; this
//! struct wraps it with the UI-only bits: tab selection, the add-column form,
//! the in-flight drag gesture, the pending destructive action, and dirty
//! tracking against the last loaded/saved snapshot.

use common::model::column::ColumnType;
use common::model::detail_page::DetailPage;
use common::model::draft::TableDraft;
use yew::NodeRef;

/// Destructive action awaiting operator confirmation in the top sheet.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingDelete {
    Column(String),
    Row(String),
}

/// Main state container for the `TableBuilderComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct TableBuilderComponent {
    /// The staged table definition; every edit lands here first.
    pub draft: TableDraft,

    /// Snapshot taken at load/save time, compared for the dirty dot.
    pub saved: TableDraft,

    /// Catalog pages offered as save targets.
    pub detail_pages: Vec<DetailPage>,

    /// Active tab: `"editor"` or `"preview"`.
    pub active_tab: String,

    /// Name field of the add-column form.
    pub new_column_name: String,

    /// Type picker of the add-column form.
    pub new_column_type: ColumnType,

    /// Row index picked up by an in-flight drag gesture.
    pub drag_index: Option<usize>,

    /// Destructive action awaiting confirmation, if any.
    pub pending_delete: Option<PendingDelete>,

    /// Reference to the confirmation top-sheet node.
    pub confirm_sheet_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// True while a save request is in flight.
    pub saving: bool,
}

impl TableBuilderComponent {
    pub fn new() -> Self {
        Self {
            draft: TableDraft::new(),
            saved: TableDraft::new(),
            detail_pages: Vec::new(),
            active_tab: "editor".to_string(),
            new_column_name: String::new(),
            new_column_type: ColumnType::Text,
            drag_index: None,
            pending_delete: None,
            confirm_sheet_ref: NodeRef::default(),
            loaded: false,
            saving: false,
        }
    }

    /// Unsaved changes exist whenever the draft differs from the snapshot.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }
}
