// src/projects/plugin.rs
use bevy::prelude::*;

use super::events::{
    ProjectClosed, ProjectOpened, ProjectOperationFeedback, RequestCloseProject,
    RequestCreateProject, RequestOpenProject, RequestRefreshProjects,
};
use super::resources::ProjectCatalog;
use super::systems;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRequestSet;

/// Project discovery, creation and opening.
pub struct ProjectsPlugin;

impl Plugin for ProjectsPlugin {
    fn build(&self, app: &mut App) {
        // Keeps a catalog inserted by main (custom root markers) if present.
        app.init_resource::<ProjectCatalog>();

        app.add_event::<RequestCreateProject>()
            .add_event::<RequestRefreshProjects>()
            .add_event::<RequestOpenProject>()
            .add_event::<RequestCloseProject>()
            .add_event::<ProjectOpened>()
            .add_event::<ProjectClosed>()
            .add_event::<ProjectOperationFeedback>();

        app.add_systems(Startup, systems::locate_repo_root_on_startup);
        app.add_systems(
            Update,
            (
                systems::handle_create_project_request,
                systems::handle_open_project_request,
                systems::handle_refresh_projects_request,
                systems::handle_close_project_request,
            )
                .chain()
                .in_set(ProjectRequestSet),
        );

        info!("ProjectsPlugin initialized.");
    }
}
