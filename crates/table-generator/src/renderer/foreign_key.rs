use crate::renderer::{Render, Renderer};
use model::ForeignKey;

impl Render for ForeignKey {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FOREIGN KEY(");
        r.sql.push_str(&r.dialect.quote_identifier(&self.column));
        r.sql.push_str(") REFERENCES ");
        r.sql.push_str(&r.dialect.quote_identifier(&self.target_table));
        r.sql.push('(');
        r.sql.push_str(&r.dialect.quote_identifier(&self.target_column));
        r.sql.push(')');

        if let Some(action) = self.on_update {
            r.sql.push_str(" ON UPDATE ");
            r.sql.push_str(action.keyword());
        }
        if let Some(action) = self.on_delete {
            r.sql.push_str(" ON DELETE ");
            r.sql.push_str(action.keyword());
        }
    }
}
