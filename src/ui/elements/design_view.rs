// src/ui/elements/design_view.rs
use bevy_egui::egui::{self, RichText};

use crate::cells::ColumnType;
use crate::tables::definitions::validate_identifier;
use crate::tables::events::{
    RequestAddColumn, RequestRemoveColumn, RequestRenameColumn, RequestSetColumnDescription,
    RequestSetColumnType,
};
use crate::tables::TableGrid;
use crate::ui::theme::ThemeContext;

use super::state::EditorWindowState;
use super::writers::TableEventWriters;

fn column_type_combo(ui: &mut egui::Ui, id: impl std::hash::Hash, selected: &mut ColumnType) -> bool {
    let before = *selected;
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.label())
        .width(110.0)
        .show_ui(ui, |ui| {
            for column_type in ColumnType::ALL {
                ui.selectable_value(selected, column_type, column_type.label())
                    .on_hover_text(column_type.input_hint());
            }
        });
    *selected != before
}

/// Field list of a table: name, data type, description.
pub fn show_design_view(
    ui: &mut egui::Ui,
    theme: &ThemeContext,
    table: &TableGrid,
    state: &mut EditorWindowState,
    writers: &mut TableEventWriters,
) {
    let table_name = table.name().to_string();
    let can_remove = table.column_count() > 1;

    egui::ScrollArea::vertical()
        .id_salt("design_view_scroll")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new(("design_grid", &table_name))
                .num_columns(4)
                .striped(true)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Field Name");
                    ui.strong("Data Type");
                    ui.strong("Description");
                    ui.label("");
                    ui.end_row();

                    for (col, column) in table.columns().iter().enumerate() {
                        let key = (table_name.clone(), col);

                        let mut name = state
                            .field_name_buffers
                            .get(&key)
                            .cloned()
                            .unwrap_or_else(|| column.name.clone());
                        let response = ui.add(egui::TextEdit::singleline(&mut name).desired_width(150.0));
                        if response.changed() {
                            state.field_name_buffers.insert(key.clone(), name.clone());
                        }
                        if response.lost_focus() {
                            state.field_name_buffers.remove(&key);
                            let trimmed = name.trim();
                            if trimmed != column.name {
                                writers.rename_column.write(RequestRenameColumn {
                                    table: table_name.clone(),
                                    col,
                                    new_name: trimmed.to_string(),
                                });
                            }
                        }

                        let mut column_type = column.column_type;
                        if column_type_combo(ui, ("field_type", &table_name, col), &mut column_type) {
                            state.forget_table_buffers(&table_name);
                            writers.set_column_type.write(RequestSetColumnType {
                                table: table_name.clone(),
                                col,
                                column_type,
                            });
                        }

                        let mut description = state
                            .field_description_buffers
                            .get(&key)
                            .cloned()
                            .unwrap_or_else(|| column.description.clone().unwrap_or_default());
                        let response = ui.add(
                            egui::TextEdit::singleline(&mut description)
                                .hint_text("Optional")
                                .desired_width(260.0),
                        );
                        if response.changed() {
                            state.field_description_buffers.insert(key.clone(), description.clone());
                        }
                        if response.lost_focus() {
                            state.field_description_buffers.remove(&key);
                            if description.trim() != column.description.as_deref().unwrap_or_default() {
                                writers.set_column_description.write(RequestSetColumnDescription {
                                    table: table_name.clone(),
                                    col,
                                    description: description.trim().to_string(),
                                });
                            }
                        }

                        if ui
                            .add_enabled(can_remove, egui::Button::new("🗑"))
                            .on_hover_text("Remove field")
                            .clicked()
                        {
                            state.forget_table_buffers(&table_name);
                            writers.remove_column.write(RequestRemoveColumn {
                                table: table_name.clone(),
                                col,
                            });
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.separator();
            let name_check = validate_identifier(state.new_field_name_input.trim()).map(|_| ());
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.new_field_name_input)
                        .hint_text("New field")
                        .desired_width(150.0),
                );
                column_type_combo(ui, ("new_field_type", &table_name), &mut state.new_field_type);
                if ui.add_enabled(name_check.is_ok(), egui::Button::new("Add field")).clicked() {
                    writers.add_column.write(RequestAddColumn {
                        table: table_name.clone(),
                        name: state.new_field_name_input.trim().to_string(),
                        column_type: state.new_field_type,
                    });
                    state.new_field_name_input.clear();
                }
            });
            if let Err(why) = name_check {
                if !state.new_field_name_input.trim().is_empty() {
                    ui.colored_label(theme.palette.error_text, why);
                }
            }
            ui.label(RichText::new(state.new_field_type.input_hint()).small().color(theme.palette.muted_text));
        });
}
