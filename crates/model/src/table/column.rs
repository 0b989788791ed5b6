use crate::core::data_type::ColumnType;
use crate::table::options::ColumnOptions;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub const CLASSIC_ID_COLUMN_NAME: &str = "id";

lazy_static! {
    /// `id INTEGER PRIMARY KEY AUTOINCREMENT`, the usual surrogate key.
    pub static ref CLASSIC_ID_COLUMN: Column = Column::with_options(
        CLASSIC_ID_COLUMN_NAME,
        ColumnType::Integer,
        ColumnOptions {
            primary_key: true,
            auto_increment: true,
            ..Default::default()
        },
    );
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ColumnOptions>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            options: None,
        }
    }

    pub fn with_options(
        name: impl Into<String>,
        column_type: ColumnType,
        options: ColumnOptions,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            options: Some(options),
        }
    }
}
