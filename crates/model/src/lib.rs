pub mod core;
pub mod table;

pub use crate::core::{
    data_type::{ColumnType, ForeignKeyAction, OnConflict},
    error::ModelError,
    value::DefaultValue,
};
pub use crate::table::{
    column::{CLASSIC_ID_COLUMN, CLASSIC_ID_COLUMN_NAME, Column},
    definition::TableDefinition,
    foreign_key::ForeignKey,
    options::{ColumnOptions, TableOptions},
};
