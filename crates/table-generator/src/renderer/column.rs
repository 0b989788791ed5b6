use crate::renderer::{Render, Renderer};
use model::{Column, ColumnOptions};

impl Render for Column {
    fn render(&self, r: &mut Renderer) {
        let mut items = vec![
            r.dialect.quote_identifier(&self.name),
            r.dialect.render_column_type(&self.column_type),
        ];
        if let Some(options) = &self.options {
            constraint_items(options, r, &mut items);
        }
        r.sql.push_str(&items.join(" "));
    }
}

// Order is fixed: PRIMARY KEY, AUTOINCREMENT, NOT NULL, UNIQUE, ON CONFLICT, DEFAULT.
fn constraint_items(options: &ColumnOptions, r: &Renderer, items: &mut Vec<String>) {
    if options.primary_key {
        items.push("PRIMARY KEY".into());
    }
    if options.auto_increment {
        items.push("AUTOINCREMENT".into());
    }
    if options.not_null {
        items.push("NOT NULL".into());
    }
    if options.unique {
        items.push("UNIQUE".into());
    }
    if let Some(action) = options.on_conflict {
        items.push(format!("ON CONFLICT {action}"));
    }
    if let Some(default) = &options.default {
        let literal = if default.is_text() {
            r.dialect.quote_string_literal(&default.to_string())
        } else {
            default.to_string()
        };
        items.push(format!("DEFAULT {literal}"));
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dialect::Sqlite,
        layout::Layout,
        renderer::{Render, Renderer},
    };
    use model::{CLASSIC_ID_COLUMN, Column, ColumnOptions, ColumnType, DefaultValue, OnConflict};

    fn render(column: &Column) -> String {
        let mut renderer = Renderer::new(&Sqlite, Layout::Compact);
        column.render(&mut renderer);
        renderer.finish()
    }

    #[test]
    fn test_render_bare_column() {
        assert_eq!(render(&Column::new("address", ColumnType::Text)), "address TEXT");
    }

    #[test]
    fn test_render_column_with_empty_options() {
        let column = Column::with_options("payload", ColumnType::Blob, ColumnOptions::default());
        assert_eq!(render(&column), "payload BLOB");
    }

    #[test]
    fn test_render_classic_id() {
        assert_eq!(
            render(&CLASSIC_ID_COLUMN),
            "id INTEGER PRIMARY KEY AUTOINCREMENT"
        );
    }

    #[test]
    fn test_render_all_constraints_in_fixed_order() {
        let column = Column::with_options(
            "code",
            ColumnType::Text,
            ColumnOptions {
                default: Some("X".into()),
                on_conflict: Some(OnConflict::Replace),
                unique: true,
                not_null: true,
                auto_increment: true,
                primary_key: true,
            },
        );

        assert_eq!(
            render(&column),
            r#"code TEXT PRIMARY KEY AUTOINCREMENT NOT NULL UNIQUE ON CONFLICT REPLACE DEFAULT "X""#
        );
    }

    #[test]
    fn test_render_defaults() {
        let with_default = |default: DefaultValue| {
            Column::with_options(
                "v",
                ColumnType::Real,
                ColumnOptions {
                    default: Some(default),
                    ..Default::default()
                },
            )
        };

        assert_eq!(render(&with_default(42.into())), "v REAL DEFAULT 42");
        assert_eq!(render(&with_default(0.25.into())), "v REAL DEFAULT 0.25");
        assert_eq!(render(&with_default("abc".into())), r#"v REAL DEFAULT "abc""#);
        assert_eq!(render(&with_default("42".into())), r#"v REAL DEFAULT "42""#);
        assert_eq!(render(&with_default(r#"a"b"#.into())), r#"v REAL DEFAULT "a""b""#);
    }

    #[test]
    fn test_render_non_finite_defaults() {
        let column = Column::with_options(
            "v",
            ColumnType::Real,
            ColumnOptions {
                default: Some(f64::NEG_INFINITY.into()),
                ..Default::default()
            },
        );
        assert_eq!(render(&column), "v REAL DEFAULT -Infinity");
    }
}
