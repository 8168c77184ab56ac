// src/tables/systems.rs
use bevy::prelude::*;

use crate::cells::CommitOutcome;
use crate::projects::events::{ProjectClosed, ProjectOpened};

use super::definitions::ColumnDefinition;
use super::error::TableResult;
use super::events::{
    CommitCellEdit, RequestAddColumn, RequestAddTableRow, RequestBeginCellEdit,
    RequestCreateTable, RequestDeleteTable, RequestDeleteTableRow, RequestRemoveColumn,
    RequestRenameColumn, RequestSetColumnDescription, RequestSetColumnType, TableDataModified,
    TableOperationFeedback,
};
use super::grid::GridChange;
use super::resources::TableRegistry;

/// Writes an error feedback event when `result` failed; returns the success value.
fn report<T>(
    result: TableResult<T>,
    context: &str,
    feedback_writer: &mut EventWriter<TableOperationFeedback>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Tables: {} failed: {}", context, e);
            feedback_writer.write(TableOperationFeedback {
                message: e.to_string(),
                is_error: true,
            });
            None
        }
    }
}

pub fn reset_tables_on_project_change(
    mut opened: EventReader<ProjectOpened>,
    mut closed: EventReader<ProjectClosed>,
    mut registry: ResMut<TableRegistry>,
) {
    let opened_any = opened.read().last().is_some();
    let closed_any = closed.read().last().is_some();
    if opened_any || closed_any {
        debug!("Tables: project changed, dropping {} in-memory table(s).", registry.tables().len());
        registry.clear();
    }
}

pub fn handle_table_requests(
    mut create_events: EventReader<RequestCreateTable>,
    mut delete_events: EventReader<RequestDeleteTable>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in create_events.read() {
        let created = registry.create_table(&event.name).map(|t| t.name().to_string());
        if let Some(name) = report(created, "create table", &mut feedback_writer) {
            info!("Tables: created '{}'", name);
            feedback_writer.write(TableOperationFeedback {
                message: format!("Table '{}' created.", name),
                is_error: false,
            });
        }
    }
    for event in delete_events.read() {
        if report(registry.delete_table(&event.name), "delete table", &mut feedback_writer).is_some() {
            info!("Tables: deleted '{}'", event.name);
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_column_requests(
    mut add_events: EventReader<RequestAddColumn>,
    mut rename_events: EventReader<RequestRenameColumn>,
    mut type_events: EventReader<RequestSetColumnType>,
    mut description_events: EventReader<RequestSetColumnDescription>,
    mut remove_events: EventReader<RequestRemoveColumn>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in add_events.read() {
        let result = registry.get_mut(&event.table).and_then(|table| {
            table.add_column(ColumnDefinition::new(event.name.clone(), event.column_type))
        });
        report(result, "add field", &mut feedback_writer);
    }
    for event in rename_events.read() {
        let result = registry
            .get_mut(&event.table)
            .and_then(|table| table.rename_column(event.col, &event.new_name));
        report(result, "rename field", &mut feedback_writer);
    }
    for event in type_events.read() {
        let result = registry
            .rules_and_table_mut(&event.table)
            .and_then(|(rules, table)| table.set_column_type(rules, event.col, event.column_type));
        if let Some(cleared) = report(result, "change field type", &mut feedback_writer) {
            if cleared > 0 {
                feedback_writer.write(TableOperationFeedback {
                    message: format!(
                        "{} value(s) did not fit the new type {} and were cleared.",
                        cleared, event.column_type
                    ),
                    is_error: true,
                });
            }
        }
    }
    for event in description_events.read() {
        let result = registry
            .get_mut(&event.table)
            .and_then(|table| table.set_column_description(event.col, &event.description));
        report(result, "describe field", &mut feedback_writer);
    }
    for event in remove_events.read() {
        let result = registry
            .get_mut(&event.table)
            .and_then(|table| table.remove_column(event.col));
        report(result, "remove field", &mut feedback_writer);
    }
}

pub fn handle_row_requests(
    mut add_events: EventReader<RequestAddTableRow>,
    mut delete_events: EventReader<RequestDeleteTableRow>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in add_events.read() {
        let result = registry.get_mut(&event.table).map(|table| table.add_row());
        report(result, "add row", &mut feedback_writer);
    }
    for event in delete_events.read() {
        let result = registry
            .get_mut(&event.table)
            .and_then(|table| table.remove_row(event.row));
        report(result, "delete row", &mut feedback_writer);
    }
}

pub fn handle_cell_edits(
    mut begin_events: EventReader<RequestBeginCellEdit>,
    mut commit_events: EventReader<CommitCellEdit>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in begin_events.read() {
        let result = registry
            .get_mut(&event.table)
            .and_then(|table| table.begin_edit(event.row, event.col));
        report(result, "begin edit", &mut feedback_writer);
    }
    for event in commit_events.read() {
        let result = registry
            .rules_and_table_mut(&event.table)
            .and_then(|(rules, table)| table.commit_cell(rules, event.row, event.col, &event.text));
        match report(result, "commit cell", &mut feedback_writer) {
            Some(CommitOutcome::Reverted { warning, .. }) => {
                // Soft validation: surface the message, never block further edits.
                feedback_writer.write(TableOperationFeedback {
                    message: warning.message,
                    is_error: true,
                });
            }
            Some(CommitOutcome::Committed { value }) => {
                trace!(
                    "Tables: '{}'[{},{}] = {:?}",
                    event.table, event.row, event.col, value
                );
            }
            Some(CommitOutcome::Unchanged) | None => {}
        }
    }
}

/// Drains pending grid notifications into `TableDataModified` events.
pub fn publish_grid_changes(
    mut registry: ResMut<TableRegistry>,
    mut modified_writer: EventWriter<TableDataModified>,
) {
    for table in registry.tables_mut() {
        let changes: Vec<GridChange> = table.drain_changes();
        for change in changes {
            modified_writer.write(TableDataModified {
                table: table.name().to_string(),
                change,
            });
        }
    }
}
