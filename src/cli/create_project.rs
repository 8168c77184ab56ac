// src/cli/create_project.rs
use std::path::Path;

use bevy::log::info;

use super::CliResult;
use crate::projects::ProjectLayout;

pub fn run(repo_root: &Path, name: &str) -> CliResult<()> {
    info!("CLI: creating project '{}' under {}", name, repo_root.display());
    let layout = ProjectLayout::create(repo_root, name)?;

    println!("Project '{}' ready at {}", layout.name(), layout.root.display());
    for dir in layout.subdirectories() {
        println!("  {}", dir.display());
    }
    println!("  {}", layout.metadata_path.display());
    Ok(())
}
