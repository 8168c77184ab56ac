// src/ui/elements/mod.rs
pub mod data_view;
pub mod design_view;
pub mod home;
pub mod main_editor;
pub mod new_project_popup;
pub mod project_view;
pub mod state;
pub mod writers;
