// src/ui/theme.rs
//! Explicit theme state handed to every rendering function.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui::Color32;

use crate::settings::{io::save_settings_to_file, AppSettings, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub accent: Color32,
    pub warning_fill: Color32,
    pub error_text: Color32,
    pub ok_text: Color32,
    pub muted_text: Color32,
}

impl ThemePalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                accent: Color32::from_rgb(164, 55, 58),
                warning_fill: Color32::from_rgb(255, 224, 178),
                error_text: Color32::from_rgb(183, 28, 28),
                ok_text: Color32::from_rgb(46, 125, 50),
                muted_text: Color32::from_gray(110),
            },
            ThemeMode::Dark => Self {
                accent: Color32::from_rgb(229, 115, 115),
                warning_fill: Color32::from_rgb(110, 72, 20),
                error_text: Color32::from_rgb(239, 154, 154),
                ok_text: Color32::from_rgb(129, 199, 132),
                muted_text: Color32::from_gray(160),
            },
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub palette: ThemePalette,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeContext {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: ThemePalette::for_mode(mode),
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = match self.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        visuals.selection.bg_fill = self.palette.accent;
        visuals.hyperlink_color = self.palette.accent;
        visuals
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "🌙 Dark",
            ThemeMode::Dark => "☀ Light",
        }
    }
}

#[derive(Event, Debug, Clone)]
pub struct RequestToggleTheme;

pub fn apply_theme(mut contexts: EguiContexts, theme: Res<ThemeContext>) {
    if theme.is_changed() {
        contexts.ctx_mut().set_visuals(theme.visuals());
    }
}

pub fn handle_toggle_theme(
    mut events: EventReader<RequestToggleTheme>,
    mut theme: ResMut<ThemeContext>,
    mut settings: ResMut<AppSettings>,
) {
    // Two clicks in one frame cancel out.
    let toggles = events.read().count();
    if toggles % 2 == 0 {
        return;
    }
    *theme = ThemeContext::new(theme.mode.toggled());
    settings.theme = theme.mode;
    if let Err(e) = save_settings_to_file(&*settings) {
        error!("AppSettings: could not persist theme change: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_by_mode() {
        let light = ThemeContext::new(ThemeMode::Light);
        let dark = ThemeContext::new(ThemeMode::Dark);
        assert_ne!(light.palette, dark.palette);
        assert!(dark.visuals().dark_mode);
        assert!(!light.visuals().dark_mode);
        assert_eq!(light.visuals().selection.bg_fill, light.palette.accent);
    }
}
