use serde::{Deserialize, Serialize};

use crate::model::error::ValidationError;

/// The declared data kind of a table column.
///
/// The type drives both the input widget offered by the builder and the
/// render strategy on the public page. `boolean` and `date` are accepted
/// everywhere the other kinds are so that older payloads carrying them keep
/// rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Image,
    Link,
    Richtext,
    Boolean,
    Date,
}

impl ColumnType {
    pub const ALL: [ColumnType; 7] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Image,
        ColumnType::Link,
        ColumnType::Richtext,
        ColumnType::Boolean,
        ColumnType::Date,
    ];

    /// Scalar-ish kinds can key a sort; media kinds cannot.
    pub fn is_sortable(self) -> bool {
        matches!(
            self,
            ColumnType::Text | ColumnType::Number | ColumnType::Boolean | ColumnType::Date
        )
    }

    /// Material icon shown next to the column name in rendered headers.
    pub fn icon_name(self) -> &'static str {
        match self {
            ColumnType::Text => "text_fields",
            ColumnType::Number => "tag",
            ColumnType::Image => "image",
            ColumnType::Link => "link",
            ColumnType::Richtext => "notes",
            ColumnType::Boolean => "check_box",
            ColumnType::Date => "calendar_month",
        }
    }

    /// Human label for pickers.
    pub fn label(self) -> &'static str {
        match self {
            ColumnType::Text => "Text",
            ColumnType::Number => "Number",
            ColumnType::Image => "Image",
            ColumnType::Link => "Link",
            ColumnType::Richtext => "Rich text",
            ColumnType::Boolean => "Yes/No",
            ColumnType::Date => "Date",
        }
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Image => "image",
            ColumnType::Link => "link",
            ColumnType::Richtext => "richtext",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
        }
    }

    pub fn parse(value: &str) -> Option<ColumnType> {
        ColumnType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

/// A user-defined table column.
///
/// `id` is minted once when the column is created and stays stable across
/// renames and reorders; row cells key on it. Ids are never reused, so a
/// deleted column can not be resurrected by re-adding one with the same name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Relative display width hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Checks the column-list invariants shared by the builder and the store:
/// names are non-empty and pairwise distinct case-insensitively.
pub fn validate_columns(columns: &[Column]) -> Result<(), ValidationError> {
    for (index, column) in columns.iter().enumerate() {
        let name = column.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyColumnName);
        }
        let lower = name.to_lowercase();
        if columns[..index]
            .iter()
            .any(|other| other.name.trim().to_lowercase() == lower)
        {
            return Err(ValidationError::DuplicateColumnName(name.to_string()));
        }
    }
    Ok(())
}
