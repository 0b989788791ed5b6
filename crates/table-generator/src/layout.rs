/// Text layout of a rendered statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// One line, no terminator: `CREATE TABLE t (a TEXT,b INTEGER)`.
    #[default]
    Compact,
    /// One item per line, terminated with `;`.
    HumanReadable,
}

impl Layout {
    pub fn separator(&self) -> &'static str {
        match self {
            Layout::Compact => ",",
            Layout::HumanReadable => ",\n",
        }
    }
}

impl From<bool> for Layout {
    fn from(human_readable: bool) -> Self {
        if human_readable {
            Layout::HumanReadable
        } else {
            Layout::Compact
        }
    }
}
