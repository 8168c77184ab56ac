// src/ui/elements/writers.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::projects::events::{
    RequestCloseProject, RequestCreateProject, RequestOpenProject, RequestRefreshProjects,
};
use crate::tables::events::{
    CommitCellEdit, RequestAddColumn, RequestAddTableRow, RequestBeginCellEdit,
    RequestCreateTable, RequestDeleteTable, RequestDeleteTableRow, RequestRemoveColumn,
    RequestRenameColumn, RequestSetColumnDescription, RequestSetColumnType,
};
use crate::ui::theme::RequestToggleTheme;

#[derive(SystemParam)]
pub struct ProjectEventWriters<'w> {
    pub create_project: EventWriter<'w, RequestCreateProject>,
    pub refresh_projects: EventWriter<'w, RequestRefreshProjects>,
    pub open_project: EventWriter<'w, RequestOpenProject>,
    pub close_project: EventWriter<'w, RequestCloseProject>,
    pub toggle_theme: EventWriter<'w, RequestToggleTheme>,
}

#[derive(SystemParam)]
pub struct TableEventWriters<'w> {
    pub create_table: EventWriter<'w, RequestCreateTable>,
    pub delete_table: EventWriter<'w, RequestDeleteTable>,
    pub add_column: EventWriter<'w, RequestAddColumn>,
    pub rename_column: EventWriter<'w, RequestRenameColumn>,
    pub set_column_type: EventWriter<'w, RequestSetColumnType>,
    pub set_column_description: EventWriter<'w, RequestSetColumnDescription>,
    pub remove_column: EventWriter<'w, RequestRemoveColumn>,
    pub add_row: EventWriter<'w, RequestAddTableRow>,
    pub delete_row: EventWriter<'w, RequestDeleteTableRow>,
    pub begin_cell_edit: EventWriter<'w, RequestBeginCellEdit>,
    pub commit_cell: EventWriter<'w, CommitCellEdit>,
}
