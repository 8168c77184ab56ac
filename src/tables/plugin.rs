// src/tables/plugin.rs
use bevy::prelude::*;

use crate::projects::plugin::ProjectRequestSet;

use super::events::{
    CommitCellEdit, RequestAddColumn, RequestAddTableRow, RequestBeginCellEdit,
    RequestCreateTable, RequestDeleteTable, RequestDeleteTableRow, RequestRemoveColumn,
    RequestRenameColumn, RequestSetColumnDescription, RequestSetColumnType, TableDataModified,
    TableOperationFeedback,
};
use super::resources::TableRegistry;
use super::systems;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum TableSystemSet {
    ApplyChanges,
    Publish,
}

/// In-memory tables of the open project: design changes, rows and cell edits.
pub struct TablesPlugin;

impl Plugin for TablesPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TableSystemSet::ApplyChanges.after(ProjectRequestSet),
                TableSystemSet::Publish.after(TableSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<TableRegistry>();

        app.add_event::<RequestCreateTable>()
            .add_event::<RequestDeleteTable>()
            .add_event::<RequestAddColumn>()
            .add_event::<RequestRenameColumn>()
            .add_event::<RequestSetColumnType>()
            .add_event::<RequestSetColumnDescription>()
            .add_event::<RequestRemoveColumn>()
            .add_event::<RequestAddTableRow>()
            .add_event::<RequestDeleteTableRow>()
            .add_event::<RequestBeginCellEdit>()
            .add_event::<CommitCellEdit>()
            .add_event::<TableDataModified>()
            .add_event::<TableOperationFeedback>();

        app.add_systems(
            Update,
            (
                systems::reset_tables_on_project_change,
                systems::handle_table_requests,
                systems::handle_column_requests,
                systems::handle_row_requests,
                systems::handle_cell_edits,
            )
                .chain()
                .in_set(TableSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            systems::publish_grid_changes.in_set(TableSystemSet::Publish),
        );

        info!("TablesPlugin initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::ColumnType;
    use crate::projects::events::{ProjectClosed, ProjectOpened};
    use crate::projects::ProjectLayout;
    use crate::tables::GridChange;
    use std::path::PathBuf;

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<ProjectOpened>()
            .add_event::<ProjectClosed>()
            .add_plugins(TablesPlugin);
        app
    }

    fn feedback(app: &App) -> Vec<TableOperationFeedback> {
        let events = app.world().resource::<Events<TableOperationFeedback>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).cloned().collect()
    }

    fn table(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn edits_flow_through_events() {
        let mut app = app();
        app.world_mut().send_event(RequestCreateTable { name: table("Ventas") });
        app.update();

        app.world_mut().send_event(RequestSetColumnType {
            table: table("Ventas"),
            col: 0,
            column_type: ColumnType::Currency,
        });
        app.world_mut().send_event(RequestAddTableRow { table: table("Ventas") });
        app.update();

        app.world_mut().send_event(CommitCellEdit {
            table: table("Ventas"),
            row: 0,
            col: 0,
            text: "1500".into(),
        });
        app.update();
        let registry = app.world().resource::<TableRegistry>();
        assert_eq!(registry.get("Ventas").unwrap().value(0, 0), Some("Lps 1,500.00"));

        app.world_mut().send_event(CommitCellEdit {
            table: table("Ventas"),
            row: 0,
            col: 0,
            text: "mil".into(),
        });
        app.update();

        let registry = app.world().resource::<TableRegistry>();
        let grid = registry.get("Ventas").unwrap();
        assert_eq!(grid.value(0, 0), Some("Lps 1,500.00"));
        assert_eq!(grid.warning_count(), 1);
        assert!(feedback(&app).iter().any(|f| f.is_error && f.message.contains("mil")));

        let modified = app.world().resource::<Events<TableDataModified>>();
        let mut cursor = modified.get_cursor();
        assert!(cursor
            .read(modified)
            .any(|m| matches!(m.change, GridChange::CellReverted { row: 0, col: 0, .. })));
    }

    #[test]
    fn unknown_table_reports_error() {
        let mut app = app();
        app.world_mut().send_event(RequestAddTableRow { table: table("Nada") });
        app.update();
        let messages = feedback(&app);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Table 'Nada' not found.");
    }

    #[test]
    fn opening_a_project_drops_tables() {
        let mut app = app();
        app.world_mut().send_event(RequestCreateTable { name: table("Temporal") });
        app.update();
        assert_eq!(app.world().resource::<TableRegistry>().tables().len(), 1);

        app.world_mut().send_event(ProjectOpened {
            layout: ProjectLayout::from_root(PathBuf::from("proyectos/otro")),
        });
        app.update();
        assert!(app.world().resource::<TableRegistry>().tables().is_empty());
    }
}
