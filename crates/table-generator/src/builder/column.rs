//! Provides a fluent builder for adding one column to a `TableGenerator`.

use crate::{error::GeneratorError, generator::TableGenerator};
use model::{Column, ColumnOptions, ColumnType, DefaultValue, OnConflict};

/// Collects the constraints of a single column, then hands it to the
/// generator on [`ColumnBuilder::add`].
///
/// A column with no constraint set is added without options at all.
pub struct ColumnBuilder<'a> {
    generator: &'a mut TableGenerator,
    column: Column,
}

impl<'a> ColumnBuilder<'a> {
    pub fn new(
        generator: &'a mut TableGenerator,
        name: impl Into<String>,
        column_type: ColumnType,
    ) -> Self {
        Self {
            generator,
            column: Column::new(name, column_type),
        }
    }

    fn options(&mut self) -> &mut ColumnOptions {
        self.column.options.get_or_insert_with(ColumnOptions::default)
    }

    pub fn primary_key(mut self) -> Self {
        self.options().primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.options().auto_increment = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.options().not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.options().unique = true;
        self
    }

    pub fn on_conflict(mut self, action: OnConflict) -> Self {
        self.options().on_conflict = Some(action);
        self
    }

    pub fn default_value(mut self, value: impl Into<DefaultValue>) -> Self {
        self.options().default = Some(value.into());
        self
    }

    /// Adds the column, subject to the same duplicate-name check as
    /// [`TableGenerator::push_column`].
    pub fn add(self) -> Result<(), GeneratorError> {
        self.generator.push_column(self.column)
    }
}
