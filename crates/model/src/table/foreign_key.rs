use crate::core::data_type::ForeignKeyAction;
use serde::{Deserialize, Serialize};

/// `FOREIGN KEY(column) REFERENCES target_table(target_column)`.
///
/// Neither side is checked against real columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKey {
    pub column: String,
    pub target_table: String,
    pub target_column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_update: Option<ForeignKeyAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ForeignKeyAction>,
}

impl ForeignKey {
    pub fn new(
        column: impl Into<String>,
        target_table: impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            target_table: target_table.into(),
            target_column: target_column.into(),
            on_update: None,
            on_delete: None,
        }
    }

    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = Some(action);
        self
    }

    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = Some(action);
        self
    }
}
