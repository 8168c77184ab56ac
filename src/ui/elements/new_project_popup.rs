// src/ui/elements/new_project_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::projects::events::RequestCreateProject;
use crate::projects::layout::validate_project_name;
use crate::ui::theme::ThemeContext;

use super::state::EditorWindowState;

pub fn show_new_project_popup(
    ctx: &egui::Context,
    theme: &ThemeContext,
    state: &mut EditorWindowState,
    create_project_writer: &mut EventWriter<RequestCreateProject>,
) {
    if !state.show_new_project_popup {
        return;
    }

    let mut popup_open = state.show_new_project_popup;
    let mut trigger_create = false;
    let mut cancel_clicked = false;
    let name_check = validate_project_name(state.new_project_name_input.trim()).map(|_| ());

    egui::Window::new("Create New Project")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Project Name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.new_project_name_input)
                        .desired_width(200.0)
                        .lock_focus(true),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    trigger_create = true;
                }
            });
            if let Err(e) = &name_check {
                if !state.new_project_name_input.trim().is_empty() {
                    ui.colored_label(theme.palette.error_text, e.to_string());
                }
            }
            ui.small("Creates proyectos/<name> with tables, indexes and logs folders.");

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(name_check.is_ok(), egui::Button::new("Create")).clicked() {
                    trigger_create = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel_clicked = true;
                }
            });
        });

    if trigger_create && name_check.is_ok() {
        create_project_writer.write(RequestCreateProject {
            name: state.new_project_name_input.trim().to_string(),
        });
        state.show_new_project_popup = false;
        state.new_project_name_input.clear();
        return;
    }

    if cancel_clicked || !popup_open {
        state.show_new_project_popup = false;
        state.new_project_name_input.clear();
    }
}
