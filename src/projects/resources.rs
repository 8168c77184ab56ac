// src/projects/resources.rs
use bevy::prelude::*;
use std::path::{Path, PathBuf};

use super::catalog::{is_valid_project, list_existing_projects, ProjectInfo};
use super::error::{ProjectError, ProjectResult};
use super::layout::{ProjectBootstrapper, ProjectLayout};
use super::root_markers::RootMarkers;

/// Projects known to the home screen plus the one currently open.
#[derive(Resource, Debug, Default)]
pub struct ProjectCatalog {
    bootstrapper: ProjectBootstrapper,
    repo_root: Option<PathBuf>,
    projects: Vec<ProjectInfo>,
    active: Option<ProjectLayout>,
}

impl ProjectCatalog {
    pub fn new(markers: RootMarkers) -> Self {
        Self {
            bootstrapper: ProjectBootstrapper::new(markers),
            ..Default::default()
        }
    }

    /// Uses `repo_root` as is, skipping the marker search.
    pub fn with_repo_root(mut self, repo_root: PathBuf) -> Self {
        self.repo_root = Some(repo_root);
        self
    }

    pub fn repo_root(&self) -> Option<&Path> {
        self.repo_root.as_deref()
    }

    pub fn markers(&self) -> &RootMarkers {
        self.bootstrapper.markers()
    }

    pub fn projects(&self) -> &[ProjectInfo] {
        &self.projects
    }

    pub fn active(&self) -> Option<&ProjectLayout> {
        self.active.as_ref()
    }

    /// Returns the cached root, searching for it on first use.
    pub fn locate_repo_root(&mut self) -> ProjectResult<PathBuf> {
        if let Some(root) = &self.repo_root {
            return Ok(root.clone());
        }
        let root = self.bootstrapper.find_repo_root()?;
        info!("Projects: repository root is {:?}", root);
        self.repo_root = Some(root.clone());
        Ok(root)
    }

    pub fn refresh(&mut self) {
        self.projects = match &self.repo_root {
            Some(root) => list_existing_projects(root),
            None => Vec::new(),
        };
        debug!("Projects: {} project(s) listed.", self.projects.len());
    }

    pub fn create_project(&mut self, name: &str) -> ProjectResult<ProjectLayout> {
        let root = self.locate_repo_root()?;
        let layout = ProjectLayout::create(&root, name)?;
        self.refresh();
        Ok(layout)
    }

    pub fn open_project(&mut self, path: &Path) -> ProjectResult<ProjectLayout> {
        if !path.is_dir() {
            return Err(ProjectError::ProjectNotFound(path.to_path_buf()));
        }
        if !is_valid_project(path) {
            return Err(ProjectError::InvalidProject(path.to_path_buf()));
        }
        let layout = ProjectLayout::from_root(path.to_path_buf());
        self.active = Some(layout.clone());
        Ok(layout)
    }

    pub fn close_project(&mut self) -> Option<ProjectLayout> {
        self.active.take()
    }
}
