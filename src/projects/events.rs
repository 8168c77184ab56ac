// src/projects/events.rs
use bevy::prelude::Event;
use std::path::PathBuf;

use super::layout::ProjectLayout;

/// Sent by the new-project popup.
#[derive(Event, Debug, Clone)]
pub struct RequestCreateProject {
    pub name: String,
}

/// Rescans `proyectos/` for the home screen list.
#[derive(Event, Debug, Clone)]
pub struct RequestRefreshProjects;

#[derive(Event, Debug, Clone)]
pub struct RequestOpenProject {
    pub path: PathBuf,
}

#[derive(Event, Debug, Clone)]
pub struct RequestCloseProject;

/// Emitted after a project became the active one.
#[derive(Event, Debug, Clone)]
pub struct ProjectOpened {
    pub layout: ProjectLayout,
}

#[derive(Event, Debug, Clone)]
pub struct ProjectClosed;

#[derive(Event, Debug, Clone)]
pub struct ProjectOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
