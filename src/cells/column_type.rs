// src/cells/column_type.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a table column. Drives both validation and display formatting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ColumnType {
    Integer,
    Decimal,
    Currency,
    Date,
    Boolean,
    #[default]
    Text,
}

impl ColumnType {
    pub const ALL: [ColumnType; 6] = [
        ColumnType::Integer,
        ColumnType::Decimal,
        ColumnType::Currency,
        ColumnType::Date,
        ColumnType::Boolean,
        ColumnType::Text,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "Integer",
            ColumnType::Decimal => "Decimal",
            ColumnType::Currency => "Currency",
            ColumnType::Date => "Date",
            ColumnType::Boolean => "Yes/No",
            ColumnType::Text => "Text",
        }
    }

    /// Short hint shown under the type selector in the design view.
    pub fn input_hint(&self) -> &'static str {
        match self {
            ColumnType::Integer => "Whole numbers, e.g. 42 or -7",
            ColumnType::Decimal => "Numbers with ',' or '.' as decimal separator",
            ColumnType::Currency => "Amounts, shown grouped with two decimals",
            ColumnType::Date => "dd-MM-yyyy or dd/MM/yy",
            ColumnType::Boolean => "Checkbox",
            ColumnType::Text => "Any text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnType::Integer | ColumnType::Decimal | ColumnType::Currency
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_text() {
        assert_eq!(ColumnType::default(), ColumnType::Text);
    }

    #[test]
    fn serializes_as_variant_name() {
        let json = serde_json::to_string(&ColumnType::Currency).unwrap();
        assert_eq!(json, "\"Currency\"");
        let back: ColumnType = serde_json::from_str("\"Date\"").unwrap();
        assert_eq!(back, ColumnType::Date);
    }

    #[test]
    fn numeric_types() {
        let numeric: Vec<_> = ColumnType::ALL.iter().filter(|t| t.is_numeric()).collect();
        assert_eq!(numeric.len(), 3);
    }
}
