// src/tables/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Table '{0}' not found.")]
    TableNotFound(String),
    #[error("A table named '{0}' already exists.")]
    DuplicateTable(String),
    #[error("A field named '{0}' already exists.")]
    DuplicateColumn(String),
    #[error("Invalid name '{0}': {1}.")]
    InvalidName(String, &'static str),
    #[error("Row index {row} out of bounds ({rows} rows).")]
    RowOutOfBounds { row: usize, rows: usize },
    #[error("Column index {col} out of bounds ({cols} columns).")]
    ColumnOutOfBounds { col: usize, cols: usize },
    #[error("A table needs at least one field.")]
    LastColumn,
}

pub type TableResult<T> = Result<T, TableError>;
