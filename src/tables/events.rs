// src/tables/events.rs
use bevy::prelude::Event;

use crate::cells::ColumnType;

use super::grid::GridChange;

#[derive(Event, Debug, Clone)]
pub struct RequestCreateTable {
    pub name: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteTable {
    pub name: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestAddColumn {
    pub table: String,
    pub name: String,
    pub column_type: ColumnType,
}

#[derive(Event, Debug, Clone)]
pub struct RequestRenameColumn {
    pub table: String,
    pub col: usize,
    pub new_name: String,
}

/// Reconfigures the whole column; see `TableGrid::set_column_type`.
#[derive(Event, Debug, Clone)]
pub struct RequestSetColumnType {
    pub table: String,
    pub col: usize,
    pub column_type: ColumnType,
}

#[derive(Event, Debug, Clone)]
pub struct RequestSetColumnDescription {
    pub table: String,
    pub col: usize,
    pub description: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestRemoveColumn {
    pub table: String,
    pub col: usize,
}

#[derive(Event, Debug, Clone)]
pub struct RequestAddTableRow {
    pub table: String,
}

#[derive(Event, Debug, Clone)]
pub struct RequestDeleteTableRow {
    pub table: String,
    pub row: usize,
}

/// Sent when a cell editor gains focus.
#[derive(Event, Debug, Clone)]
pub struct RequestBeginCellEdit {
    pub table: String,
    pub row: usize,
    pub col: usize,
}

/// Sent when a cell editor loses focus with edited text.
#[derive(Event, Debug, Clone)]
pub struct CommitCellEdit {
    pub table: String,
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// Re-publishes grid change notifications for anything that mirrors table state.
#[derive(Event, Debug, Clone)]
pub struct TableDataModified {
    pub table: String,
    pub change: GridChange,
}

#[derive(Event, Debug, Clone)]
pub struct TableOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
