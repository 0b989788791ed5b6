//! Generators built from JSON table definitions.

use model::{
    ColumnOptions, ColumnType, ForeignKey, ForeignKeyAction, ModelError, TableDefinition,
    TableOptions,
};
use serde_json::json;
use table_generator::{Layout, TableGenerator};

const PERSON: &str = r#"{
    "name": "person",
    "options": { "ifNotExists": true, "temporary": true },
    "columns": [
        { "name": "id", "type": "INTEGER", "options": { "primaryKey": true, "autoIncrement": true } },
        { "name": "name", "type": "TEXT", "options": { "notNull": true, "default": "John" } },
        { "name": "age", "type": "INTEGER", "options": { "default": 18, "onConflict": "FAIL" } },
        { "name": "ratio", "type": "REAL", "options": { "default": 0.75 } }
    ],
    "foreignKeys": [
        { "column": "home", "targetTable": "home", "targetColumn": "id", "onUpdate": "CASCADE", "onDelete": "SET NULL" }
    ]
}"#;

#[test]
fn test_render_from_json() {
    let generator = TableGenerator::from(TableDefinition::from_json(PERSON).unwrap());

    assert_eq!(
        generator.render(Layout::Compact),
        "CREATE TEMP TABLE IF NOT EXISTS person (\
         id INTEGER PRIMARY KEY AUTOINCREMENT,\
         name TEXT NOT NULL DEFAULT \"John\",\
         age INTEGER ON CONFLICT FAIL DEFAULT 18,\
         ratio REAL DEFAULT 0.75,\
         FOREIGN KEY(home) REFERENCES home(id) ON UPDATE CASCADE ON DELETE SET NULL)"
    );
}

#[test]
fn test_json_round_trip_keeps_rendering() {
    let generator = TableGenerator::from(TableDefinition::from_json(PERSON).unwrap());
    let json = generator.definition().to_json().unwrap();
    let reparsed = TableGenerator::from(TableDefinition::from_json(&json).unwrap());

    assert_eq!(reparsed, generator);
    assert_eq!(
        reparsed.render(Layout::HumanReadable),
        generator.render(Layout::HumanReadable)
    );
}

#[test]
fn test_unknown_foreign_key_action_is_rejected() {
    let source = r#"{
        "name": "t",
        "columns": [],
        "foreignKeys": [{ "column": "a", "targetTable": "b", "targetColumn": "c", "onDelete": "DELETE" }]
    }"#;

    assert!(matches!(
        TableDefinition::from_json(source),
        Err(ModelError::Json(_))
    ));
}

#[test]
fn test_json_duplicate_columns_are_kept_as_given() {
    let source = r#"{
        "name": "t",
        "columns": [{ "name": "a", "type": "TEXT" }, { "name": "a", "type": "BLOB" }]
    }"#;
    let mut generator = TableGenerator::from(TableDefinition::from_json(source).unwrap());

    assert_eq!(generator.render(Layout::Compact), "CREATE TABLE t (a TEXT,a BLOB)");
    assert!(generator.add_column("a", ColumnType::Real, None).is_err());
}

#[test]
fn test_json_value_matches_incremental_build() {
    let value = json!({
        "name": "pet",
        "options": { "temporary": true },
        "columns": [
            { "name": "id", "type": "INTEGER", "options": { "primaryKey": true, "autoIncrement": true } },
            { "name": "owner", "type": "INTEGER", "options": { "notNull": true } },
            { "name": "weight", "type": "REAL", "options": { "default": 1.5 } }
        ],
        "foreignKeys": [
            { "column": "owner", "targetTable": "person", "targetColumn": "id", "onDelete": "CASCADE" }
        ]
    });
    let from_json = TableGenerator::from(serde_json::from_value::<TableDefinition>(value).unwrap());

    let mut incremental = TableGenerator::new("pet", Some(TableOptions::temporary()));
    incremental.add_classic_id_column().unwrap();
    incremental
        .add_column(
            "owner",
            ColumnType::Integer,
            Some(ColumnOptions {
                not_null: true,
                ..Default::default()
            }),
        )
        .unwrap();
    incremental
        .column("weight", ColumnType::Real)
        .default_value(1.5)
        .add()
        .unwrap();
    incremental.add_foreign_key(
        ForeignKey::new("owner", "person", "id").on_delete(ForeignKeyAction::Cascade),
    );

    assert_eq!(from_json, incremental);
    assert_eq!(
        from_json.render(Layout::Compact),
        "CREATE TEMP TABLE pet (id INTEGER PRIMARY KEY AUTOINCREMENT,\
         owner INTEGER NOT NULL,weight REAL DEFAULT 1.5,\
         FOREIGN KEY(owner) REFERENCES person(id) ON DELETE CASCADE)"
    );
    assert_eq!(
        serde_json::to_value(from_json.definition()).unwrap()["foreignKeys"][0]["onDelete"],
        json!("CASCADE")
    );
}
