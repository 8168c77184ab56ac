// src/projects/systems.rs
use bevy::prelude::*;

use super::events::{
    ProjectClosed, ProjectOpened, ProjectOperationFeedback, RequestCloseProject,
    RequestCreateProject, RequestOpenProject, RequestRefreshProjects,
};
use super::resources::ProjectCatalog;

pub fn locate_repo_root_on_startup(
    mut catalog: ResMut<ProjectCatalog>,
    mut feedback_writer: EventWriter<ProjectOperationFeedback>,
) {
    match catalog.locate_repo_root() {
        Ok(_) => catalog.refresh(),
        Err(e) => {
            error!("Projects: {}", e);
            feedback_writer.write(ProjectOperationFeedback {
                message: format!("Cannot manage projects: {}", e),
                is_error: true,
            });
        }
    }
}

pub fn handle_create_project_request(
    mut events: EventReader<RequestCreateProject>,
    mut catalog: ResMut<ProjectCatalog>,
    mut feedback_writer: EventWriter<ProjectOperationFeedback>,
    mut opened_writer: EventWriter<ProjectOpened>,
) {
    for event in events.read() {
        let created = catalog
            .create_project(&event.name)
            .and_then(|layout| catalog.open_project(&layout.root));
        match created {
            Ok(layout) => {
                feedback_writer.write(ProjectOperationFeedback {
                    message: format!("Project '{}' ready at {}", layout.name(), layout.root.display()),
                    is_error: false,
                });
                opened_writer.write(ProjectOpened { layout });
            }
            Err(e) => {
                error!("Projects: create '{}' failed: {}", event.name, e);
                feedback_writer.write(ProjectOperationFeedback {
                    message: e.to_string(),
                    is_error: true,
                });
            }
        }
    }
}

pub fn handle_refresh_projects_request(
    mut events: EventReader<RequestRefreshProjects>,
    mut catalog: ResMut<ProjectCatalog>,
) {
    if events.read().last().is_some() {
        catalog.refresh();
    }
}

pub fn handle_open_project_request(
    mut events: EventReader<RequestOpenProject>,
    mut catalog: ResMut<ProjectCatalog>,
    mut feedback_writer: EventWriter<ProjectOperationFeedback>,
    mut opened_writer: EventWriter<ProjectOpened>,
) {
    for event in events.read() {
        match catalog.open_project(&event.path) {
            Ok(layout) => {
                info!("Projects: opened {:?}", layout.root);
                opened_writer.write(ProjectOpened { layout });
            }
            Err(e) => {
                warn!("Projects: open {:?} refused: {}", event.path, e);
                feedback_writer.write(ProjectOperationFeedback {
                    message: e.to_string(),
                    is_error: true,
                });
            }
        }
    }
}

pub fn handle_close_project_request(
    mut events: EventReader<RequestCloseProject>,
    mut catalog: ResMut<ProjectCatalog>,
    mut closed_writer: EventWriter<ProjectClosed>,
) {
    if events.read().last().is_some() {
        if let Some(layout) = catalog.close_project() {
            info!("Projects: closed {:?}", layout.root);
            catalog.refresh();
            closed_writer.write(ProjectClosed);
        }
    }
}
