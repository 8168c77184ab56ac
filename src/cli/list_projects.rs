// src/cli/list_projects.rs
use std::path::Path;

use super::CliResult;
use crate::projects::list_existing_projects;

pub fn run(repo_root: &Path) -> CliResult<()> {
    let projects = list_existing_projects(repo_root);
    println!("Repository: {}\n", repo_root.display());
    if projects.is_empty() {
        println!("No projects.");
        return Ok(());
    }

    println!("{:<24} {:>6} {:<17} {}", "Name", "Tables", "Modified", "Status");
    println!("{}", "-".repeat(60));
    for info in projects {
        let modified = info
            .modified
            .map(|t| t.format("%d-%m-%Y %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<24} {:>6} {:<17} {}",
            info.name,
            info.table_count,
            modified,
            if info.valid { "ok" } else { "INVALID" }
        );
    }
    Ok(())
}
