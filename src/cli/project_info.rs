// src/cli/project_info.rs
use std::path::Path;

use super::CliResult;
use crate::projects::layout::validate_project_name;
use crate::projects::{get_project_info, ProjectError, ProjectLayout};

pub fn run(repo_root: &Path, name: &str) -> CliResult<()> {
    let name = validate_project_name(name)?;
    let layout = ProjectLayout::for_project(repo_root, name);
    let info = get_project_info(&layout.root).ok_or_else(|| ProjectError::ProjectNotFound(layout.root.clone()))?;

    let timestamp = |t: Option<chrono::DateTime<chrono::Local>>| {
        t.map(|t| t.to_rfc3339()).unwrap_or_else(|| "unknown".to_string())
    };
    println!("Name:     {}", info.name);
    println!("Path:     {}", info.path.display());
    println!("Created:  {}", timestamp(info.created));
    println!("Modified: {}", timestamp(info.modified));
    println!("Tables:   {}", info.table_count);
    println!("Valid:    {}", info.valid);
    Ok(())
}
