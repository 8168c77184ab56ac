// src/tables/definitions.rs
use serde::{Deserialize, Serialize};

use crate::cells::ColumnType;

/// One field of a table as edited in the design view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(default)]
    pub column_type: ColumnType,
    #[serde(default)]
    pub description: Option<String>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            description: None,
        }
    }
}

/// Field every new table starts with.
pub fn default_columns() -> Vec<ColumnDefinition> {
    vec![ColumnDefinition::new("Id", ColumnType::Integer)]
}

/// Table and field names: non-empty, and limited to characters that are safe
/// in a file name once tables are written to disk.
pub fn validate_identifier(name: &str) -> Result<&str, &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("name cannot be empty");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
    {
        return Err("use letters, digits, space, '_' or '-'");
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert_eq!(validate_identifier(" Clientes "), Ok("Clientes"));
        assert_eq!(validate_identifier("Año_2024-b"), Ok("Año_2024-b"));
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("a/b").is_err());
        assert!(validate_identifier("precio$").is_err());
    }

    #[test]
    fn definition_defaults_when_fields_missing() {
        let def: ColumnDefinition = serde_json::from_str(r#"{"name":"Nota"}"#).unwrap();
        assert_eq!(def.column_type, ColumnType::Text);
        assert_eq!(def.description, None);
    }
}
