// src/ui/elements/data_view.rs
use bevy_egui::egui::{self, RichText};
use egui_extras::{Column, TableBody, TableBuilder};

use crate::cells::{ColumnType, EditableCell};
use crate::tables::events::{CommitCellEdit, RequestAddTableRow, RequestBeginCellEdit, RequestDeleteTableRow};
use crate::tables::TableGrid;
use crate::ui::theme::ThemeContext;

use super::state::EditorWindowState;
use super::writers::TableEventWriters;

const ROW_NUMBER_WIDTH: f32 = 44.0;

fn is_checked(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "si" | "sí"
    )
}

#[allow(clippy::too_many_arguments)]
fn draw_text_cell(
    ui: &mut egui::Ui,
    theme: &ThemeContext,
    table_name: &str,
    (row, col): (usize, usize),
    column_type: ColumnType,
    cell: &EditableCell,
    state: &mut EditorWindowState,
    writers: &mut TableEventWriters,
) {
    let key = (table_name.to_string(), row, col);
    let mut text = state
        .cell_buffers
        .get(&key)
        .cloned()
        .unwrap_or_else(|| cell.value().to_string());

    let align = if column_type.is_numeric() {
        egui::Align::RIGHT
    } else {
        egui::Align::LEFT
    };
    let mut edit = egui::TextEdit::singleline(&mut text)
        .horizontal_align(align)
        .desired_width(f32::INFINITY)
        .hint_text(RichText::new(column_type.input_hint()).small());

    if cell.warning().is_some() {
        edit = edit.background_color(theme.palette.warning_fill);
    }
    let response = ui.add(edit);

    if response.gained_focus() {
        writers.begin_cell_edit.write(RequestBeginCellEdit {
            table: table_name.to_string(),
            row,
            col,
        });
    }
    if response.changed() {
        state.cell_buffers.insert(key.clone(), text.clone());
    }
    if response.lost_focus() {
        state.cell_buffers.remove(&key);
        let cancelled = ui.input(|i| i.key_pressed(egui::Key::Escape));
        writers.commit_cell.write(CommitCellEdit {
            table: table_name.to_string(),
            row,
            col,
            text: if cancelled { cell.value().to_string() } else { text },
        });
    }
    if let Some(warning) = cell.warning() {
        response.on_hover_text(
            RichText::new(format!("{}\nRejected input: '{}'", warning.message, warning.rejected_input))
                .color(theme.palette.error_text),
        );
    }
}

fn draw_boolean_cell(
    ui: &mut egui::Ui,
    table_name: &str,
    (row, col): (usize, usize),
    cell: &EditableCell,
    writers: &mut TableEventWriters,
) {
    let mut checked = is_checked(cell.value());
    if ui.checkbox(&mut checked, "").changed() {
        writers.begin_cell_edit.write(RequestBeginCellEdit {
            table: table_name.to_string(),
            row,
            col,
        });
        writers.commit_cell.write(CommitCellEdit {
            table: table_name.to_string(),
            row,
            col,
            text: checked.to_string(),
        });
    }
}

fn data_table_body(
    mut body: TableBody,
    row_height: f32,
    theme: &ThemeContext,
    table: &TableGrid,
    state: &mut EditorWindowState,
    writers: &mut TableEventWriters,
) {
    let table_name = table.name();
    for row_idx in 0..table.row_count() {
        body.row(row_height, |mut row| {
            row.col(|ui| {
                ui.label(RichText::new((row_idx + 1).to_string()).color(theme.palette.muted_text))
                    .context_menu(|ui| {
                        if ui.button("Delete row").clicked() {
                            state.forget_table_buffers(table_name);
                            writers.delete_row.write(RequestDeleteTableRow {
                                table: table_name.to_string(),
                                row: row_idx,
                            });
                            ui.close_menu();
                        }
                    });
            });
            for (col_idx, column) in table.columns().iter().enumerate() {
                row.col(|ui| {
                    let Some(cell) = table.cell(row_idx, col_idx) else {
                        return;
                    };
                    match column.column_type {
                        ColumnType::Boolean => draw_boolean_cell(ui, table_name, (row_idx, col_idx), cell, writers),
                        column_type => draw_text_cell(
                            ui,
                            theme,
                            table_name,
                            (row_idx, col_idx),
                            column_type,
                            cell,
                            state,
                            writers,
                        ),
                    }
                });
            }
        });
    }
}

/// Editable grid of a table's rows.
pub fn show_data_view(
    ui: &mut egui::Ui,
    theme: &ThemeContext,
    table: &TableGrid,
    state: &mut EditorWindowState,
    writers: &mut TableEventWriters,
) {
    ui.horizontal(|ui| {
        if ui.button("➕ Add row").clicked() {
            writers.add_row.write(RequestAddTableRow {
                table: table.name().to_string(),
            });
        }
        ui.label(RichText::new(format!("{} row(s)", table.row_count())).color(theme.palette.muted_text));
        let warnings = table.warning_count();
        if warnings > 0 {
            ui.colored_label(theme.palette.error_text, format!("⚠ {} rejected value(s)", warnings));
        }
    });
    ui.separator();

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 10.0;
    egui::ScrollArea::horizontal()
        .id_salt("data_view_scroll")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .id_salt(("data_table", table.name()))
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(ROW_NUMBER_WIDTH))
                .columns(Column::initial(140.0).at_least(60.0).clip(true), table.column_count())
                .header(row_height, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    for column in table.columns() {
                        header.col(|ui| {
                            let response = ui.strong(&column.name);
                            let hover = match &column.description {
                                Some(d) if !d.is_empty() => format!("{}\n{}", column.column_type.label(), d),
                                _ => column.column_type.label().to_string(),
                            };
                            response.on_hover_text(hover);
                        });
                    }
                })
                .body(|body| data_table_body(body, row_height, theme, table, state, writers));
        });
}

#[cfg(test)]
mod tests {
    use super::is_checked;

    #[test]
    fn checkbox_reads_common_truthy_values() {
        assert!(is_checked("true"));
        assert!(is_checked(" Sí "));
        assert!(is_checked("1"));
        assert!(!is_checked(""));
        assert!(!is_checked("false"));
        assert!(!is_checked("quizás"));
    }
}
