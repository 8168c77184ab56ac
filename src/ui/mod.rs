// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;
pub mod theme;

use elements::main_editor::miniaccess_editor_ui;
use elements::state::EditorWindowState;
use systems::{handle_ui_feedback, log_settings_on_startup};
use theme::{apply_theme, handle_toggle_theme, RequestToggleTheme, ThemeContext};

use crate::settings::AppSettings;

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the MiniAccess window: home screen, table design and data views.
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppSettings>()
            .init_resource::<ThemeContext>()
            .init_resource::<UiFeedbackState>()
            .init_resource::<EditorWindowState>()
            .add_event::<RequestToggleTheme>()
            .add_systems(Startup, log_settings_on_startup)
            .add_systems(Update, (handle_ui_feedback, handle_toggle_theme))
            .add_systems(EguiContextPass, (apply_theme, miniaccess_editor_ui).chain());

        info!("EditorUiPlugin initialized.");
    }
}
