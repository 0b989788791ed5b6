//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::ColumnType;

pub trait Dialect: Send + Sync {
    /// Writes a table or column name as it should appear in the statement.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Wraps a text literal, escaping whatever the dialect requires.
    fn quote_string_literal(&self, value: &str) -> String;

    fn render_column_type(&self, column_type: &ColumnType) -> String;

    /// Returns the name of the dialect (e.g., "SQLite").
    fn name(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn quote_identifier(&self, ident: &str) -> String {
        // Names are emitted verbatim; callers own their validity.
        ident.to_string()
    }

    fn quote_string_literal(&self, value: &str) -> String {
        format!(r#""{}""#, value.replace('"', r#""""#))
    }

    fn render_column_type(&self, column_type: &ColumnType) -> String {
        column_type.sqlite_name().to_string()
    }

    fn name(&self) -> String {
        "SQLite".into()
    }
}
