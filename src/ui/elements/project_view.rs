// src/ui/elements/project_view.rs
use bevy_egui::egui::{self, RichText};

use crate::projects::layout::ProjectLayout;
use crate::tables::definitions::validate_identifier;
use crate::tables::events::{RequestCreateTable, RequestDeleteTable};
use crate::tables::TableRegistry;
use crate::ui::theme::ThemeContext;

use super::data_view::show_data_view;
use super::design_view::show_design_view;
use super::state::{EditorWindowState, TableViewMode};
use super::writers::TableEventWriters;

/// Left panel listing the open project's tables.
pub fn show_table_list_panel(
    ctx: &egui::Context,
    theme: &ThemeContext,
    layout: &ProjectLayout,
    registry: &TableRegistry,
    state: &mut EditorWindowState,
    writers: &mut TableEventWriters,
) {
    egui::SidePanel::left("table_list_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading(layout.name());
            ui.label(RichText::new("Tables").color(theme.palette.muted_text));
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("table_list_scroll")
                .auto_shrink([false, true])
                .max_height((ui.available_height() - 90.0).max(60.0))
                .show(ui, |ui| {
                    if registry.tables().is_empty() {
                        ui.label(RichText::new("No tables").italics().color(theme.palette.muted_text));
                    }
                    for table in registry.tables() {
                        let selected = state.selected_table.as_deref() == Some(table.name());
                        let mut label = table.name().to_string();
                        let warnings = table.warning_count();
                        if warnings > 0 {
                            label.push_str(&format!(" ⚠{}", warnings));
                        }
                        if ui.selectable_label(selected, label).clicked() && !selected {
                            state.selected_table = Some(table.name().to_string());
                            state.show_delete_table_confirm = false;
                        }
                    }
                });

            ui.separator();
            let name_ok = validate_identifier(state.new_table_name_input.trim()).is_ok();
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.new_table_name_input)
                        .hint_text("New table")
                        .desired_width(110.0),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.add_enabled(name_ok, egui::Button::new("➕")).clicked() || enter) && name_ok {
                    let name = state.new_table_name_input.trim().to_string();
                    writers.create_table.write(RequestCreateTable { name: name.clone() });
                    state.selected_table = Some(name);
                    state.view_mode = TableViewMode::Design;
                    state.new_table_name_input.clear();
                }
            });
        });
}

/// Central area for the selected table: Design/Data tabs and the table itself.
pub fn show_table_area(
    ui: &mut egui::Ui,
    theme: &ThemeContext,
    registry: &TableRegistry,
    state: &mut EditorWindowState,
    writers: &mut TableEventWriters,
) {
    let Some(table_name) = state.selected_table.clone() else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Select or create a table").color(theme.palette.muted_text));
        });
        return;
    };
    let Some(table) = registry.get(&table_name) else {
        // Deleted or not created yet; the request may still be in flight.
        ui.label(RichText::new(format!("Table '{}' is not available.", table_name)).color(theme.palette.muted_text));
        return;
    };

    ui.horizontal(|ui| {
        ui.heading(table.name());
        ui.add_space(16.0);
        ui.selectable_value(&mut state.view_mode, TableViewMode::Design, "Design");
        ui.selectable_value(&mut state.view_mode, TableViewMode::Data, "Data");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.show_delete_table_confirm {
                if ui.button("Cancel").clicked() {
                    state.show_delete_table_confirm = false;
                }
                if ui
                    .button(RichText::new("Confirm delete").color(theme.palette.error_text))
                    .clicked()
                {
                    writers.delete_table.write(RequestDeleteTable { name: table_name.clone() });
                    state.forget_table_buffers(&table_name);
                    state.selected_table = None;
                    state.show_delete_table_confirm = false;
                }
            } else if ui.button("🗑 Delete table").clicked() {
                state.show_delete_table_confirm = true;
            }
        });
    });
    ui.separator();

    match state.view_mode {
        TableViewMode::Design => show_design_view(ui, theme, table, state, writers),
        TableViewMode::Data => show_data_view(ui, theme, table, state, writers),
    }
}
