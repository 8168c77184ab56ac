// src/cli/mod.rs
// Command line entry points for project maintenance without opening the window.

pub mod check_cell;
pub mod check_project;
pub mod create_project;
pub mod list_projects;
pub mod project_info;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::cells::{CellRejection, ColumnType};
use crate::projects::{ProjectBootstrapper, ProjectError};
use crate::settings::AppSettings;

#[derive(Parser)]
#[command(name = "miniaccess")]
#[command(about = "MiniAccess - local table editor with project maintenance tools", long_about = None)]
pub struct Cli {
    /// Repository root to use instead of searching for a root marker
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create proyectos/<name> with its folders and metadata
    CreateProject {
        name: String,
    },

    /// List projects under the repository root
    ListProjects,

    /// Show metadata of one project
    ProjectInfo {
        name: String,
    },

    /// Check that a folder has the full project layout
    CheckProject {
        path: PathBuf,
    },

    /// Validate a value against a column type and print its display form
    CheckCell {
        #[arg(long = "type", value_enum)]
        column_type: ColumnType,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error("Rejected: {0}")]
    Rejected(#[from] CellRejection),
}

pub type CliResult<T> = Result<T, CliError>;

/// Repository root from `--root` or the configured marker search.
fn resolve_repo_root(root: Option<PathBuf>, settings: &AppSettings) -> CliResult<PathBuf> {
    match root {
        Some(root) => {
            let root = root.canonicalize().map_err(|e| ProjectError::io(&root, e))?;
            Ok(root)
        }
        None => Ok(ProjectBootstrapper::new(settings.root_markers.clone()).find_repo_root()?),
    }
}

pub fn run(root: Option<PathBuf>, command: Commands, settings: &AppSettings) -> CliResult<()> {
    match command {
        Commands::CreateProject { name } => {
            create_project::run(&resolve_repo_root(root, settings)?, &name)
        }
        Commands::ListProjects => list_projects::run(&resolve_repo_root(root, settings)?),
        Commands::ProjectInfo { name } => {
            project_info::run(&resolve_repo_root(root, settings)?, &name)
        }
        Commands::CheckProject { path } => check_project::run(&path),
        Commands::CheckCell { column_type, value } => {
            check_cell::run(&settings.cell_rules(), column_type, &value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_root_and_cell_type() {
        let cli = Cli::try_parse_from([
            "miniaccess",
            "check-cell",
            "--type",
            "currency",
            "1500",
            "--root",
            "/tmp/repo",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/repo")));
        match cli.command {
            Some(Commands::CheckCell { column_type, value }) => {
                assert_eq!(column_type, ColumnType::Currency);
                assert_eq!(value, "1500");
            }
            _ => panic!("expected check-cell"),
        }
    }

    #[test]
    fn no_subcommand_means_window() {
        let cli = Cli::try_parse_from(["miniaccess"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn explicit_root_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = resolve_repo_root(Some(missing), &AppSettings::default()).unwrap_err();
        assert!(matches!(err, CliError::Project(ProjectError::Io { .. })));
    }
}
