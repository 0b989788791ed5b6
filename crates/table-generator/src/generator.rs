//! Accumulates the definition of one table and renders its `CREATE TABLE`
//! statement.

use crate::{
    builder::column::ColumnBuilder,
    dialect::{Dialect, Sqlite},
    error::GeneratorError,
    layout::Layout,
    renderer::{Render, Renderer},
};
use model::{
    CLASSIC_ID_COLUMN, Column, ColumnOptions, ColumnType, ForeignKey, TableDefinition,
    TableOptions,
};
use std::fmt;
use tracing::{debug, warn};

/// Builds up a [`TableDefinition`] column by column and turns it into SQL.
///
/// Column names are unique within a generator: adding a name that is already
/// present is rejected with [`GeneratorError::DuplicateColumn`] and leaves the
/// state untouched. Foreign keys are appended without any checks.
///
/// Mutation needs `&mut self` and rendering only `&self`. There is no internal
/// locking, so a generator shared between threads must sit behind a `Mutex` or
/// `RwLock`.
///
/// ```
/// use model::{ColumnOptions, ColumnType, ForeignKey, ForeignKeyAction, TableOptions};
/// use table_generator::TableGenerator;
///
/// let mut person = TableGenerator::new("person", None);
/// person.set_table_options(TableOptions::if_not_exists());
/// person.add_classic_id_column().unwrap();
/// person
///     .add_column(
///         "name",
///         ColumnType::Text,
///         Some(ColumnOptions {
///             not_null: true,
///             default: Some("John".into()),
///             ..Default::default()
///         }),
///     )
///     .unwrap();
/// person.add_column("home", ColumnType::Integer, None).unwrap();
/// person.add_foreign_key(ForeignKey::new("home", "home", "id").on_delete(ForeignKeyAction::Cascade));
///
/// assert_eq!(
///     person.render_create_table_statement(false),
///     "CREATE TABLE IF NOT EXISTS person (id INTEGER PRIMARY KEY AUTOINCREMENT,\
///      name TEXT NOT NULL DEFAULT \"John\",home INTEGER,\
///      FOREIGN KEY(home) REFERENCES home(id) ON DELETE CASCADE)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableGenerator {
    definition: TableDefinition,
}

impl TableGenerator {
    /// Starts an empty table. The foreign-key list starts out absent.
    pub fn new(name: impl Into<String>, options: Option<TableOptions>) -> Self {
        Self {
            definition: TableDefinition::new(name, options),
        }
    }

    /// Takes over a complete definition as-is.
    ///
    /// The definition is moved in, so later changes can only go through the
    /// generator. Its columns are not re-checked for duplicate names.
    pub fn from_definition(definition: TableDefinition) -> Self {
        Self { definition }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn options(&self) -> Option<&TableOptions> {
        self.definition.options.as_ref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.definition.columns
    }

    pub fn foreign_keys(&self) -> Option<&[ForeignKey]> {
        self.definition.foreign_keys.as_deref()
    }

    pub fn definition(&self) -> &TableDefinition {
        &self.definition
    }

    pub fn into_definition(self) -> TableDefinition {
        self.definition
    }

    /// Replaces the table options wholesale.
    pub fn set_table_options(&mut self, options: TableOptions) {
        self.definition.options = Some(options);
    }

    /// Adds `id INTEGER PRIMARY KEY AUTOINCREMENT`.
    pub fn add_classic_id_column(&mut self) -> Result<(), GeneratorError> {
        self.push_column(CLASSIC_ID_COLUMN.clone())
    }

    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        column_type: ColumnType,
        options: Option<ColumnOptions>,
    ) -> Result<(), GeneratorError> {
        self.push_column(Column {
            name: name.into(),
            column_type,
            options,
        })
    }

    /// Appends `column` unless a column with the same (case-sensitive) name
    /// already exists.
    pub fn push_column(&mut self, column: Column) -> Result<(), GeneratorError> {
        if self.definition.has_column(&column.name) {
            warn!(
                table = %self.definition.name,
                column = %column.name,
                "column already exists; not added"
            );
            return Err(GeneratorError::DuplicateColumn {
                table: self.definition.name.clone(),
                column: column.name,
            });
        }

        debug!(
            table = %self.definition.name,
            column = %column.name,
            column_type = %column.column_type,
            "column added"
        );
        self.definition.columns.push(column);
        Ok(())
    }

    /// Starts a fluent column definition; see [`ColumnBuilder`].
    pub fn column(&mut self, name: impl Into<String>, column_type: ColumnType) -> ColumnBuilder<'_> {
        ColumnBuilder::new(self, name, column_type)
    }

    pub fn add_foreign_key(&mut self, foreign_key: ForeignKey) {
        debug!(
            table = %self.definition.name,
            column = %foreign_key.column,
            target = %foreign_key.target_table,
            "foreign key added"
        );
        self.definition
            .foreign_keys
            .get_or_insert_with(Vec::new)
            .push(foreign_key);
    }

    /// Renders the statement; `human_readable` picks [`Layout::HumanReadable`].
    pub fn render_create_table_statement(&self, human_readable: bool) -> String {
        self.render(Layout::from(human_readable))
    }

    pub fn render(&self, layout: Layout) -> String {
        self.render_with(&Sqlite, layout)
    }

    pub fn render_with(&self, dialect: &dyn Dialect, layout: Layout) -> String {
        let mut renderer = Renderer::new(dialect, layout);
        self.definition.render(&mut renderer);
        let sql = renderer.finish();

        debug!(
            table = %self.definition.name,
            dialect = %dialect.name(),
            ?layout,
            columns = self.definition.columns.len(),
            foreign_keys = self.foreign_keys().map_or(0, <[ForeignKey]>::len),
            "create table statement rendered"
        );
        sql
    }
}

impl From<TableDefinition> for TableGenerator {
    fn from(definition: TableDefinition) -> Self {
        Self::from_definition(definition)
    }
}

/// Compact layout.
impl fmt::Display for TableGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Layout::Compact))
    }
}
