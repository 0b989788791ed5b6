use crate::{
    layout::Layout,
    renderer::{Render, Renderer},
};
use model::{TableDefinition, TableOptions};

impl Render for TableDefinition {
    fn render(&self, r: &mut Renderer) {
        let prefix = match &self.options {
            None => format!("CREATE TABLE {}", r.dialect.quote_identifier(&self.name)),
            Some(options) => create_prefix(options, &r.dialect.quote_identifier(&self.name)),
        };
        r.sql.push_str(&prefix);

        let human_readable = r.layout == Layout::HumanReadable;
        r.sql.push_str(if human_readable { " (\n" } else { " (" });

        r.render_list(&self.columns);
        if let Some(foreign_keys) = self.foreign_keys.as_deref().filter(|fks| !fks.is_empty()) {
            if !self.columns.is_empty() {
                r.sql.push_str(r.layout.separator());
            }
            r.render_list(foreign_keys);
        }

        r.sql.push_str(if human_readable { "\n);" } else { ")" });
    }
}

fn create_prefix(options: &TableOptions, table_name: &str) -> String {
    let mut items = vec!["CREATE"];
    if options.temporary {
        items.push("TEMP");
    }
    items.push("TABLE");
    if options.if_not_exists {
        items.push("IF NOT EXISTS");
    }
    items.push(table_name);
    items.join(" ")
}
