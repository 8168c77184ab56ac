// src/projects/root_markers.rs
//! Locates the directory that hosts `proyectos/` by walking upward from a few
//! well-known starting points until a root marker is found.

use bevy::log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{ProjectError, ProjectResult};

/// Sentinel file that pins the root explicitly.
pub const SENTINEL_MARKER: &str = ".miniaccess_root";

/// Priority-ordered list of file or directory names that identify the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RootMarkers(Vec<String>);

impl Default for RootMarkers {
    fn default() -> Self {
        Self(vec![
            SENTINEL_MARKER.to_string(),
            "Cargo.toml".to_string(),
            ".git".to_string(),
        ])
    }
}

impl RootMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(markers.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// First marker (in priority order) present directly inside `dir`.
    pub fn marker_in(&self, dir: &Path) -> Option<&str> {
        self.0
            .iter()
            .map(String::as_str)
            .find(|marker| dir.join(marker).exists())
    }

    /// Searches upward from each of `candidates` in turn.
    pub fn find_root_from<I>(&self, candidates: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for candidate in candidates {
            let Ok(start) = candidate.canonicalize() else {
                trace!("RootMarkers: skipping unresolvable candidate {:?}", candidate);
                continue;
            };
            for dir in start.ancestors() {
                if let Some(marker) = self.marker_in(dir) {
                    debug!("RootMarkers: found '{}' in {:?} (from {:?})", marker, dir, candidate);
                    return Some(dir.to_path_buf());
                }
            }
        }
        None
    }

    /// Searches from the process's default candidates; failure is an error, never a guess.
    pub fn find_root(&self) -> ProjectResult<PathBuf> {
        let candidates = candidate_start_dirs();
        self.find_root_from(candidates.clone())
            .ok_or_else(|| ProjectError::RootNotFound {
                markers: self.0.join(", "),
                searched: candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Current directory, executable directory and the executable directory's parent.
pub fn candidate_start_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        if let Some(parent) = exe_dir.parent() {
            let parent = parent.to_path_buf();
            candidates.push(exe_dir);
            candidates.push(parent);
        } else {
            candidates.push(exe_dir);
        }
    }
    candidates.dedup();
    candidates
}
