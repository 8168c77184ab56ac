// src/projects/catalog.rs
//! Read path over `<repoRoot>/proyectos/*`. Nothing here fails loudly: broken
//! or half-created projects are reported with `valid == false`.

use bevy::log::{debug, warn};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use super::layout::{projects_dir, ProjectLayout};
use super::metadata::{read_metadata, StoredMetadata};

/// Extension of table files counted when the metadata carries no table count.
pub const TABLE_FILE_EXTENSION: &str = "mad";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInfo {
    pub name: String,
    pub path: PathBuf,
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
    pub table_count: usize,
    pub valid: bool,
}

impl ProjectInfo {
    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::from_root(self.path.clone())
    }
}

/// All project folders under the repository root, sorted by name.
pub fn list_existing_projects(repo_root: &Path) -> Vec<ProjectInfo> {
    let dir = projects_dir(repo_root);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Projects: cannot read {:?} ({}); no projects listed.", dir, e);
            return Vec::new();
        }
    };

    let mut projects: Vec<ProjectInfo> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| get_project_info(&path))
        .collect();
    projects.sort_by_key(|p| p.name.to_lowercase());
    projects
}

/// Summarizes the project at `path`; `None` if it is not a directory.
pub fn get_project_info(path: &Path) -> Option<ProjectInfo> {
    if !path.is_dir() {
        return None;
    }
    let layout = ProjectLayout::from_root(path.to_path_buf());
    let stored = read_metadata(&layout.metadata_path).unwrap_or_default();
    let fs_meta = fs::metadata(path).ok();

    let created = timestamp_field(&stored.created).or_else(|| {
        fs_meta
            .as_ref()
            .and_then(|m| m.created().or_else(|_| m.modified()).ok())
            .map(to_local)
    });
    let modified = timestamp_field(&stored.modified).or_else(|| {
        fs_meta
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(to_local)
    });

    Some(ProjectInfo {
        name: display_name(&stored, &layout),
        path: path.to_path_buf(),
        created,
        modified,
        table_count: stored
            .table_count
            .unwrap_or_else(|| count_table_files(&layout.tables_dir)),
        valid: is_valid_project(path),
    })
}

/// Directory and all three subdirectories exist, and the metadata file parses
/// as JSON with the project magic.
pub fn is_valid_project(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }
    let layout = ProjectLayout::from_root(path.to_path_buf());
    if layout.subdirectories().iter().any(|dir| !dir.is_dir()) {
        return false;
    }
    match read_metadata(&layout.metadata_path) {
        Some(stored) => stored.has_project_magic(),
        None => false,
    }
}

pub fn count_table_files(tables_dir: &Path) -> usize {
    if !tables_dir.is_dir() {
        return 0;
    }
    WalkDir::new(tables_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Projects: skipping unreadable entry under {:?}: {}", tables_dir, e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry.path().extension().and_then(|ext| ext.to_str()) == Some(TABLE_FILE_EXTENSION)
        })
        .count()
}

fn display_name(stored: &StoredMetadata, layout: &ProjectLayout) -> String {
    stored
        .project
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| layout.name())
}

fn timestamp_field(field: &Option<String>) -> Option<DateTime<Local>> {
    field
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Local))
}

fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}
