//! Prints the CREATE TABLE statements for a small home / family / person schema.
//!
//! Run with `RUST_LOG=table_generator=debug` to see what the generator does.

use model::{
    CLASSIC_ID_COLUMN, Column, ColumnOptions, ColumnType, ForeignKey, ForeignKeyAction,
    TableDefinition, TableOptions,
};
use table_generator::{GeneratorError, Layout, TableGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GeneratorError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let home = TableGenerator::from_definition(TableDefinition {
        name: "home".to_string(),
        options: None,
        columns: vec![
            CLASSIC_ID_COLUMN.clone(),
            Column::new("address", ColumnType::Text),
        ],
        foreign_keys: None,
    });
    println!("{}\n", home.render(Layout::HumanReadable));

    let family = TableGenerator::from_definition(TableDefinition {
        name: "family".to_string(),
        options: Some(TableOptions::if_not_exists()),
        columns: vec![
            CLASSIC_ID_COLUMN.clone(),
            Column::with_options(
                "name",
                ColumnType::Text,
                ColumnOptions {
                    not_null: true,
                    unique: true,
                    ..Default::default()
                },
            ),
            Column::new("home", ColumnType::Integer),
        ],
        foreign_keys: Some(vec![ForeignKey::new("home", "home", "id")]),
    });
    println!("{}\n", family.render(Layout::HumanReadable));

    let mut person = TableGenerator::new("person", None);
    person.set_table_options(TableOptions::if_not_exists());
    person.add_classic_id_column()?;
    person
        .column("name", ColumnType::Text)
        .not_null()
        .default_value("John")
        .add()?;
    person.column("home", ColumnType::Integer).not_null().add()?;
    person.add_column("family", ColumnType::Integer, None)?;
    person.add_foreign_key(
        ForeignKey::new("home", "home", "id").on_delete(ForeignKeyAction::Cascade),
    );
    person.add_foreign_key(ForeignKey::new("family", "family", "id"));
    println!("{}", person.render(Layout::HumanReadable));

    Ok(())
}
