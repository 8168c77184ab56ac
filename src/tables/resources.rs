// src/tables/resources.rs
use bevy::prelude::*;

use crate::cells::CellRules;

use super::definitions::validate_identifier;
use super::error::{TableError, TableResult};
use super::grid::TableGrid;

/// Tables of the open project. Contents live in memory only and are dropped
/// whenever another project is opened.
#[derive(Resource, Debug, Default)]
pub struct TableRegistry {
    rules: CellRules,
    tables: Vec<TableGrid>,
}

impl TableRegistry {
    pub fn new(rules: CellRules) -> Self {
        Self {
            rules,
            tables: Vec::new(),
        }
    }

    pub fn rules(&self) -> &CellRules {
        &self.rules
    }

    pub fn tables(&self) -> &[TableGrid] {
        &self.tables
    }

    pub fn get(&self, name: &str) -> Option<&TableGrid> {
        self.tables.iter().find(|t| t.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> TableResult<&mut TableGrid> {
        self.tables
            .iter_mut()
            .find(|t| t.name() == name)
            .ok_or_else(|| TableError::TableNotFound(name.to_string()))
    }

    /// Splits the borrow so a grid can be mutated with the registry's rules.
    pub fn rules_and_table_mut(&mut self, name: &str) -> TableResult<(&CellRules, &mut TableGrid)> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.name() == name)
            .ok_or_else(|| TableError::TableNotFound(name.to_string()))?;
        Ok((&self.rules, table))
    }

    pub fn tables_mut(&mut self) -> impl Iterator<Item = &mut TableGrid> {
        self.tables.iter_mut()
    }

    pub fn create_table(&mut self, name: &str) -> TableResult<&mut TableGrid> {
        let name = validate_identifier(name)
            .map_err(|why| TableError::InvalidName(name.to_string(), why))?;
        if self.tables.iter().any(|t| t.name().eq_ignore_ascii_case(name)) {
            return Err(TableError::DuplicateTable(name.to_string()));
        }
        self.tables.push(TableGrid::new(name));
        let index = self.tables.len() - 1;
        Ok(&mut self.tables[index])
    }

    pub fn delete_table(&mut self, name: &str) -> TableResult<TableGrid> {
        let index = self
            .tables
            .iter()
            .position(|t| t.name() == name)
            .ok_or_else(|| TableError::TableNotFound(name.to_string()))?;
        Ok(self.tables.remove(index))
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::ColumnType;

    #[test]
    fn table_names_are_unique_ignoring_case() {
        let mut registry = TableRegistry::default();
        registry.create_table("Clientes").unwrap();
        assert_eq!(
            registry.create_table(" clientes ").unwrap_err(),
            TableError::DuplicateTable("clientes".into())
        );
        assert!(matches!(
            registry.create_table("a/b"),
            Err(TableError::InvalidName(..))
        ));
        assert_eq!(registry.tables().len(), 1);
    }

    #[test]
    fn rules_follow_the_registry() {
        let mut registry = TableRegistry::new(CellRules::with_currency_prefix("USD"));
        registry.create_table("Ventas").unwrap();
        let (rules, table) = registry.rules_and_table_mut("Ventas").unwrap();
        table.set_column_type(rules, 0, ColumnType::Currency).unwrap();
        let row = table.add_row();
        table.commit_cell(rules, row, 0, "10").unwrap();
        assert_eq!(registry.get("Ventas").unwrap().value(0, 0), Some("USD 10.00"));
    }

    #[test]
    fn delete_and_clear() {
        let mut registry = TableRegistry::default();
        registry.create_table("Uno").unwrap();
        registry.create_table("Dos").unwrap();
        assert_eq!(registry.delete_table("Uno").unwrap().name(), "Uno");
        assert!(registry.delete_table("Uno").is_err());
        registry.clear();
        assert!(registry.tables().is_empty());
    }
}
