// src/ui/elements/home.rs
use bevy::prelude::*;
use bevy_egui::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::projects::events::{RequestOpenProject, RequestRefreshProjects};
use crate::projects::{ProjectCatalog, ProjectInfo};
use crate::ui::theme::ThemeContext;

use super::state::EditorWindowState;
use super::writers::ProjectEventWriters;

const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

fn format_timestamp(info: &ProjectInfo) -> String {
    info.modified
        .or(info.created)
        .map(|t| t.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Project list shown when no project is open.
pub fn show_home_screen(
    ui: &mut egui::Ui,
    theme: &ThemeContext,
    catalog: &ProjectCatalog,
    state: &mut EditorWindowState,
    writers: &mut ProjectEventWriters,
) {
    ui.horizontal(|ui| {
        ui.heading("Projects");
        ui.add_space(12.0);
        if ui.button("➕ New Project").clicked() {
            state.show_new_project_popup = true;
        }
        if ui.button("⟳ Refresh").clicked() {
            writers.refresh_projects.write(RequestRefreshProjects);
        }
    });

    match catalog.repo_root() {
        Some(root) => {
            ui.label(RichText::new(format!("Repository: {}", root.display())).color(theme.palette.muted_text));
        }
        None => {
            ui.colored_label(
                theme.palette.error_text,
                format!(
                    "No repository root found. Place one of {:?} in this folder or a parent.",
                    catalog.markers().as_slice()
                ),
            );
            return;
        }
    }
    ui.separator();

    let projects = catalog.projects();
    if projects.is_empty() {
        ui.label(RichText::new("No projects yet.").italics().color(theme.palette.muted_text));
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 8.0;
    TableBuilder::new(ui)
        .id_salt("home_project_list")
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(160.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(row_height, |mut header| {
            for title in ["Name", "Tables", "Modified", "Status", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for info in projects {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(&info.name).on_hover_text(info.path.display().to_string());
                    });
                    row.col(|ui| {
                        ui.label(info.table_count.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format_timestamp(info));
                    });
                    row.col(|ui| {
                        if info.valid {
                            ui.colored_label(theme.palette.ok_text, "OK");
                        } else {
                            ui.colored_label(theme.palette.error_text, "Invalid")
                                .on_hover_text("Missing folders or project.meta.json");
                        }
                    });
                    row.col(|ui| {
                        if ui.add_enabled(info.valid, egui::Button::new("Open")).clicked() {
                            writers.open_project.write(RequestOpenProject {
                                path: info.path.clone(),
                            });
                        }
                        if ui.button("📁 Show folder").clicked() {
                            if let Err(e) = open::that(&info.path) {
                                error!("Home: failed to open folder {:?}: {}", info.path, e);
                            }
                        }
                    });
                });
            }
        });
}
