// src/projects/layout.rs

use bevy::log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ProjectError, ProjectResult};
use super::metadata::{ProjectMetadata, INDEXES_DIR, LOGS_DIR, METADATA_FILE, TABLES_DIR};
use super::root_markers::RootMarkers;

/// Directory under the repository root that holds one folder per project.
pub const PROJECTS_DIR: &str = "proyectos";

/// On-disk layout of a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub tables_dir: PathBuf,
    pub indexes_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub metadata_path: PathBuf,
}

impl ProjectLayout {
    pub fn from_root(root: PathBuf) -> Self {
        Self {
            tables_dir: root.join(TABLES_DIR),
            indexes_dir: root.join(INDEXES_DIR),
            logs_dir: root.join(LOGS_DIR),
            metadata_path: root.join(METADATA_FILE),
            root,
        }
    }

    pub fn for_project(repo_root: &Path, name: &str) -> Self {
        Self::from_root(projects_dir(repo_root).join(name))
    }

    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn subdirectories(&self) -> [&Path; 3] {
        [&self.tables_dir, &self.indexes_dir, &self.logs_dir]
    }

    /// Creates the layout for `name` under `repo_root`. Safe to call repeatedly:
    /// existing directories are kept and an existing metadata file is left as is.
    pub fn create(repo_root: &Path, name: &str) -> ProjectResult<Self> {
        let name = validate_project_name(name)?;
        let layout = Self::for_project(repo_root, name);

        for dir in layout.subdirectories() {
            fs::create_dir_all(dir).map_err(|e| ProjectError::io(dir, e))?;
        }

        if ProjectMetadata::new(name).write_if_absent(&layout.metadata_path)? {
            info!("Projects: created '{}' at {:?}", name, layout.root);
        } else {
            debug!(
                "Projects: '{}' already had {:?}; left untouched.",
                name, layout.metadata_path
            );
        }
        Ok(layout)
    }
}

pub fn projects_dir(repo_root: &Path) -> PathBuf {
    repo_root.join(PROJECTS_DIR)
}

/// Accepts names usable as a single directory component. Returns the trimmed name.
pub fn validate_project_name(name: &str) -> ProjectResult<&str> {
    let trimmed = name.trim();
    let invalid = |why: &'static str| ProjectError::InvalidName(name.to_string(), why);

    if trimmed.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if trimmed.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if trimmed
        .chars()
        .any(|c| matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control())
    {
        return Err(invalid("name contains characters not allowed in folder names"));
    }
    Ok(trimmed)
}

/// Finds the repository root with a marker list and creates projects beneath it.
#[derive(Debug, Clone, Default)]
pub struct ProjectBootstrapper {
    markers: RootMarkers,
}

impl ProjectBootstrapper {
    pub fn new(markers: RootMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &RootMarkers {
        &self.markers
    }

    pub fn find_repo_root(&self) -> ProjectResult<PathBuf> {
        self.markers.find_root()
    }

    pub fn create(&self, name: &str) -> ProjectResult<ProjectLayout> {
        let repo_root = self.find_repo_root()?;
        ProjectLayout::create(&repo_root, name)
    }
}
