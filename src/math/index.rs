//! Separate index types for rows and columns, so a matrix or canvas
//! can't be addressed with the axes swapped.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Row(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Column(pub usize);

impl Row {
    pub fn value(self) -> usize {
        self.0
    }

    /// All rows below `count`, in order.
    pub fn range(count: Row) -> impl Iterator<Item = Row> {
        (0..count.0).map(Row)
    }
}

impl Column {
    pub fn value(self) -> usize {
        self.0
    }

    pub fn range(count: Column) -> impl Iterator<Item = Column> {
        (0..count.0).map(Column)
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
