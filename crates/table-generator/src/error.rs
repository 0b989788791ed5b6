use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("column '{column}' already exists in table '{table}'")]
    DuplicateColumn { table: String, column: String },
}
