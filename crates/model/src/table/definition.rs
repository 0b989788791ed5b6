use crate::{
    core::error::ModelError,
    table::{column::Column, foreign_key::ForeignKey, options::TableOptions},
};
use serde::{Deserialize, Serialize};

/// Everything needed to produce one `CREATE TABLE` statement.
///
/// `options: None` and `foreign_keys: None` mean "never declared". They are kept
/// apart from `Some(TableOptions::default())` and `Some(vec![])` so that a
/// definition survives a JSON round trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TableOptions>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_keys: Option<Vec<ForeignKey>>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, options: Option<TableOptions>) -> Self {
        Self {
            name: name.into(),
            options,
            columns: Vec::new(),
            foreign_keys: None,
        }
    }

    pub fn from_json(source: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}
