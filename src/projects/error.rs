// src/projects/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("No project root found: none of [{markers}] exists above {searched}.")]
    RootNotFound { markers: String, searched: String },
    #[error("Invalid project name '{0}': {1}")]
    InvalidName(String, &'static str),
    #[error("Project not found: {0}")]
    ProjectNotFound(PathBuf),
    #[error("Not a valid MiniAccess project: {0}")]
    InvalidProject(PathBuf),
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type ProjectResult<T> = Result<T, ProjectError>;

impl ProjectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjectError::Io {
            path: path.into(),
            source,
        }
    }
}
