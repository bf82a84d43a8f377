use thiserror::Error;

/// Validation failures shared by the builder draft and the definition store.
///
/// `Display` text is user-facing: the frontend shows it in toasts and the
/// backend ships it in 400 bodies.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Select a detail page before saving")]
    NoDetailPage,
    #[error("Add at least one column first")]
    NoColumns,
    #[error("Column name must not be empty")]
    EmptyColumnName,
    #[error("A column named '{0}' already exists")]
    DuplicateColumnName(String),
    #[error("Slug must not be empty")]
    EmptySlug,
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
    #[error("Unknown row '{0}'")]
    UnknownRow(String),
}
