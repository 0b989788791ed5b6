//! Defines the core rendering trait and context for converting a table
//! definition to SQL.

use crate::{dialect::Dialect, layout::Layout};

pub mod column;
pub mod create_table;
pub mod foreign_key;

/// A trait for any definition node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and carries the dialect and the layout the
/// statement is written in.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
    pub layout: Layout,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect, layout: Layout) -> Self {
        Self {
            sql: String::new(),
            dialect,
            layout,
        }
    }

    /// Consumes the renderer and returns the final SQL string.
    pub fn finish(self) -> String {
        self.sql
    }

    /// Renders `items` one after another, separated per the layout.
    pub fn render_list<T: Render>(&mut self, items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(self.layout.separator());
            }
            item.render(self);
        }
    }
}
