// src/ui/elements/state.rs
use std::collections::HashMap;

use bevy::prelude::*;

use crate::cells::ColumnType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableViewMode {
    #[default]
    Design,
    Data,
}

/// Key of an in-progress cell edit: table name, row, column.
pub type CellKey = (String, usize, usize);

#[derive(Resource, Debug, Clone, Default)]
pub struct EditorWindowState {
    // Home screen
    pub show_new_project_popup: bool,
    pub new_project_name_input: String,

    // Project screen
    pub selected_table: Option<String>,
    pub view_mode: TableViewMode,
    pub new_table_name_input: String,
    pub show_delete_table_confirm: bool,

    // Design view
    pub new_field_name_input: String,
    pub new_field_type: ColumnType,
    pub field_name_buffers: HashMap<(String, usize), String>,
    pub field_description_buffers: HashMap<(String, usize), String>,

    // Data view: text typed into a cell that has not been settled by the grid yet.
    pub cell_buffers: HashMap<CellKey, String>,
}

impl EditorWindowState {
    /// Drops every per-table buffer, used when the project or table set changes.
    pub fn reset_for_project(&mut self) {
        self.selected_table = None;
        self.view_mode = TableViewMode::Design;
        self.new_table_name_input.clear();
        self.show_delete_table_confirm = false;
        self.new_field_name_input.clear();
        self.new_field_type = ColumnType::default();
        self.field_name_buffers.clear();
        self.field_description_buffers.clear();
        self.cell_buffers.clear();
    }

    pub fn forget_table_buffers(&mut self, table: &str) {
        self.cell_buffers.retain(|(t, _, _), _| t != table);
        self.field_name_buffers.retain(|(t, _), _| t != table);
        self.field_description_buffers.retain(|(t, _), _| t != table);
    }

    pub fn forget_cell_buffer(&mut self, table: &str, row: usize, col: usize) {
        self.cell_buffers.remove(&(table.to_string(), row, col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forgetting_a_table_keeps_other_tables_buffers() {
        let mut state = EditorWindowState::default();
        state.cell_buffers.insert(("Clientes".into(), 0, 1), "12".into());
        state.cell_buffers.insert(("Ventas".into(), 0, 1), "3".into());
        state.field_name_buffers.insert(("Clientes".into(), 1), "Nombre".into());

        state.forget_table_buffers("Clientes");

        assert_eq!(state.cell_buffers.len(), 1);
        assert!(state.cell_buffers.contains_key(&("Ventas".to_string(), 0, 1)));
        assert!(state.field_name_buffers.is_empty());
    }

    #[test]
    fn reset_returns_to_design_view() {
        let mut state = EditorWindowState {
            selected_table: Some("Clientes".into()),
            view_mode: TableViewMode::Data,
            ..Default::default()
        };
        state.cell_buffers.insert(("Clientes".into(), 0, 0), "x".into());
        state.reset_for_project();
        assert_eq!(state.selected_table, None);
        assert_eq!(state.view_mode, TableViewMode::Design);
        assert!(state.cell_buffers.is_empty());
    }
}
