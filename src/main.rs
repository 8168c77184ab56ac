// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::time::Duration;

mod cells;
mod cli;
mod projects;
mod settings;
mod tables;
mod ui;

use projects::{ProjectCatalog, ProjectsPlugin};
use settings::{io::load_settings_from_file, AppSettings};
use tables::{TableRegistry, TablesPlugin};
use ui::{theme::ThemeContext, EditorUiPlugin};

fn load_settings() -> AppSettings {
    match load_settings_from_file::<AppSettings>() {
        Ok(settings) => settings,
        Err(e) => {
            error!("AppSettings: falling back to defaults: {}", e);
            AppSettings::default()
        }
    }
}

fn main() {
    let cli::Cli { root, command } = cli::Cli::parse();

    if let Some(command) = command {
        bevy::log::tracing_subscriber::fmt()
            .with_max_level(bevy::log::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
        let settings = load_settings();
        if let Err(e) = cli::run(root, command, &settings) {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let settings = load_settings();
    let mut catalog = ProjectCatalog::new(settings.root_markers.clone());
    if let Some(root) = root {
        catalog = catalog.with_repo_root(root);
    }

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "MiniAccess".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .insert_resource(ThemeContext::new(settings.theme))
        .insert_resource(TableRegistry::new(settings.cell_rules()))
        .insert_resource(catalog)
        .insert_resource(settings)
        .add_plugins(ProjectsPlugin)
        .add_plugins(TablesPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
