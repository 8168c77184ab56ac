// src/projects/metadata.rs
//! `project.meta.json`: written once when a project is created, never migrated.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::error::{ProjectError, ProjectResult};

pub const PROJECT_MAGIC: &str = "MINIACCESS_PROJECT";
pub const METADATA_VERSION: u32 = 1;
pub const METADATA_FILE: &str = "project.meta.json";
pub const TABLES_DIR: &str = "tables";
pub const INDEXES_DIR: &str = "indexes";
pub const LOGS_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    pub tables: String,
    pub indexes: String,
    pub logs: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            tables: TABLES_DIR.to_string(),
            indexes: INDEXES_DIR.to_string(),
            logs: LOGS_DIR.to_string(),
        }
    }
}

/// Exact shape of the stub written on project creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub magic: String,
    pub version: u32,
    pub project: String,
    pub paths: ProjectPaths,
}

impl ProjectMetadata {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            magic: PROJECT_MAGIC.to_string(),
            version: METADATA_VERSION,
            project: project.into(),
            paths: ProjectPaths::default(),
        }
    }

    /// Writes the stub to `path` unless a file is already there.
    /// Returns `true` when this call created the file.
    pub fn write_if_absent(&self, path: &Path) -> ProjectResult<bool> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ProjectError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(ProjectError::io(path, e)),
        };
        file.write_all(json.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .map_err(|e| ProjectError::io(path, e))?;
        Ok(true)
    }
}

/// Whatever could be salvaged from a metadata file written by any version.
/// Every field is optional; callers fall back to the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredMetadata {
    pub magic: Option<String>,
    pub version: Option<u64>,
    pub project: Option<String>,
    pub created: Option<String>,
    pub modified: Option<String>,
    pub table_count: Option<usize>,
}

impl StoredMetadata {
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            magic: text("magic"),
            version: value.get("version").and_then(Value::as_u64),
            project: text("project"),
            created: text("created"),
            modified: text("modified"),
            table_count: value
                .get("table_count")
                .and_then(Value::as_u64)
                .and_then(|n| usize::try_from(n).ok()),
        }
    }

    pub fn has_project_magic(&self) -> bool {
        self.magic.as_deref() == Some(PROJECT_MAGIC)
    }
}

/// Reads and parses the metadata file. `None` when missing or not JSON.
pub fn read_metadata(path: &Path) -> Option<StoredMetadata> {
    let contents = fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&contents).ok()?;
    Some(StoredMetadata::from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stub_has_fixed_shape() {
        let value = serde_json::to_value(ProjectMetadata::new("Ventas")).unwrap();
        assert_eq!(
            value,
            json!({
                "magic": "MINIACCESS_PROJECT",
                "version": 1,
                "project": "Ventas",
                "paths": {"tables": "tables", "indexes": "indexes", "logs": "logs"}
            })
        );
    }

    #[test]
    fn stored_metadata_tolerates_odd_shapes() {
        let stored = StoredMetadata::from_value(&json!({
            "magic": "MINIACCESS_PROJECT",
            "version": "one",
            "table_count": 3
        }));
        assert!(stored.has_project_magic());
        assert_eq!(stored.version, None);
        assert_eq!(stored.table_count, Some(3));
        assert_eq!(stored.project, None);

        let not_object = StoredMetadata::from_value(&json!([1, 2, 3]));
        assert!(!not_object.has_project_magic());
    }

    #[test]
    fn write_if_absent_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(METADATA_FILE);

        assert!(ProjectMetadata::new("Uno").write_if_absent(&path).unwrap());
        let first = fs::read_to_string(&path).unwrap();

        assert!(!ProjectMetadata::new("Dos").write_if_absent(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }
}
