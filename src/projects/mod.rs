// src/projects/mod.rs

pub mod catalog;
pub mod error;
pub mod events;
pub mod layout;
pub mod metadata;
pub mod plugin;
pub mod resources;
pub mod root_markers;

pub(crate) mod systems;


pub use catalog::{get_project_info, is_valid_project, list_existing_projects, ProjectInfo};
pub use error::{ProjectError, ProjectResult};
pub use layout::{ProjectBootstrapper, ProjectLayout};
pub use plugin::ProjectsPlugin;
pub use resources::ProjectCatalog;
pub use root_markers::RootMarkers;
