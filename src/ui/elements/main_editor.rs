// src/ui/elements/main_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::projects::events::{ProjectClosed, ProjectOpened, RequestCloseProject};
use crate::projects::ProjectCatalog;
use crate::tables::events::TableDataModified;
use crate::tables::{GridChange, TableRegistry};
use crate::ui::theme::{RequestToggleTheme, ThemeContext};
use crate::ui::UiFeedbackState;

use super::home::show_home_screen;
use super::new_project_popup::show_new_project_popup;
use super::project_view::{show_table_area, show_table_list_panel};
use super::state::EditorWindowState;
use super::writers::{ProjectEventWriters, TableEventWriters};

/// Keeps per-cell and per-field buffers in step with what the grid reports.
fn sync_buffers_with_changes(
    state: &mut EditorWindowState,
    opened: &mut EventReader<ProjectOpened>,
    closed: &mut EventReader<ProjectClosed>,
    modified: &mut EventReader<TableDataModified>,
) {
    let opened_any = opened.read().count() > 0;
    let closed_any = closed.read().count() > 0;
    if opened_any || closed_any {
        debug!("UI: project changed, resetting editor state.");
        state.reset_for_project();
    }
    for event in modified.read() {
        match &event.change {
            GridChange::CellCommitted { row, col, .. } | GridChange::CellReverted { row, col, .. } => {
                state.forget_cell_buffer(&event.table, *row, *col);
            }
            GridChange::RowAdded { .. } | GridChange::ColumnAdded { .. } => {}
            GridChange::RowRemoved { .. }
            | GridChange::ColumnRemoved { .. }
            | GridChange::ColumnRenamed { .. }
            | GridChange::Reconfigured => state.forget_table_buffers(&event.table),
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn miniaccess_editor_ui(
    mut contexts: EguiContexts,
    theme: Res<ThemeContext>,
    catalog: Res<ProjectCatalog>,
    registry: Res<TableRegistry>,
    ui_feedback: Res<UiFeedbackState>,
    mut state: ResMut<EditorWindowState>,
    mut project_writers: ProjectEventWriters,
    mut table_writers: TableEventWriters,
    mut opened: EventReader<ProjectOpened>,
    mut closed: EventReader<ProjectClosed>,
    mut modified: EventReader<TableDataModified>,
) {
    sync_buffers_with_changes(&mut state, &mut opened, &mut closed, &mut modified);
    let ctx = contexts.ctx_mut();

    show_new_project_popup(ctx, &theme, &mut state, &mut project_writers.create_project);

    egui::TopBottomPanel::top("miniaccess_top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong("MiniAccess");
            if let Some(layout) = catalog.active() {
                ui.separator();
                ui.label(layout.name());
                if ui.button("✖ Close project").clicked() {
                    project_writers.close_project.write(RequestCloseProject);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(theme.toggle_label()).clicked() {
                    project_writers.toggle_theme.write(RequestToggleTheme);
                }
            });
        });
    });

    egui::TopBottomPanel::bottom("miniaccess_status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui_feedback.last_message.is_empty() {
                ui.label(egui::RichText::new("Ready").color(theme.palette.muted_text));
            } else if ui_feedback.is_error {
                ui.colored_label(theme.palette.error_text, &ui_feedback.last_message);
            } else {
                ui.colored_label(theme.palette.ok_text, &ui_feedback.last_message);
            }
        });
    });

    match catalog.active() {
        Some(layout) => {
            show_table_list_panel(ctx, &theme, layout, &registry, &mut state, &mut table_writers);
            egui::CentralPanel::default().show(ctx, |ui| {
                show_table_area(ui, &theme, &registry, &mut state, &mut table_writers);
            });
        }
        None => {
            egui::CentralPanel::default().show(ctx, |ui| {
                show_home_screen(ui, &theme, &catalog, &mut state, &mut project_writers);
            });
        }
    }
}
