//! Properties for the table builder component.

use yew::prelude::*;

/// Configuration passed by the parent shell.
#[derive(Properties, PartialEq, Clone)]
pub struct TableBuilderProps {
    /// Existing table to load from the server on first render. If the fetch
    /// fails, or `None` is given, the builder starts with a blank draft.
    #[prop_or_default]
    pub table_id: Option<i64>,
}
