use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown column type: {0}")]
    UnknownColumnType(String),

    #[error("unknown conflict action: {0}")]
    UnknownConflictAction(String),

    #[error("unknown foreign key action: {0}")]
    UnknownForeignKeyAction(String),

    #[error("invalid table definition: {0}")]
    Json(#[from] serde_json::Error),
}
