// src/cli/check_project.rs
use std::path::Path;

use super::CliResult;
use crate::projects::{is_valid_project, ProjectError, ProjectLayout};

pub fn run(path: &Path) -> CliResult<()> {
    let layout = ProjectLayout::from_root(path.to_path_buf());
    println!("Checking: {}\n", path.display());
    for dir in layout.subdirectories() {
        println!("  [{}] {}", if dir.is_dir() { "x" } else { " " }, dir.display());
    }
    println!(
        "  [{}] {}",
        if layout.metadata_path.is_file() { "x" } else { " " },
        layout.metadata_path.display()
    );

    if is_valid_project(path) {
        println!("\nValid project.");
        Ok(())
    } else {
        Err(ProjectError::InvalidProject(path.to_path_buf()).into())
    }
}
