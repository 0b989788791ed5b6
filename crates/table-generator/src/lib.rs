//! Declarative builder for SQLite `CREATE TABLE` statements.
//!
//! A [`TableGenerator`] holds one [`model::TableDefinition`]; columns and
//! foreign keys are added to it incrementally (or the whole definition is
//! handed over at once) and the statement is rendered in either the compact
//! or the human-readable [`Layout`].

pub mod builder;
pub mod dialect;
pub mod error;
pub mod generator;
pub mod layout;
pub mod renderer;

pub use builder::column::ColumnBuilder;
pub use dialect::{Dialect, Sqlite};
pub use error::GeneratorError;
pub use generator::TableGenerator;
pub use layout::Layout;
