// src/tables/grid.rs
//! In-memory data grid of one table.
//!
//! Every mutation records a `GridChange` for the systems that refresh the UI.
//! Bulk mutations the grid performs on itself run inside
//! `with_notifications_muted` so they surface as one `Reconfigured` change
//! instead of a storm of per-cell notifications.

use bevy::log::{debug, trace};

use crate::cells::{CellRules, CellWarning, ColumnType, CommitOutcome, EditableCell};

use super::definitions::{default_columns, validate_identifier, ColumnDefinition};
use super::error::{TableError, TableResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridChange {
    CellCommitted { row: usize, col: usize, value: String },
    CellReverted { row: usize, col: usize, warning: CellWarning },
    RowAdded { row: usize },
    RowRemoved { row: usize },
    ColumnAdded { col: usize },
    ColumnRemoved { col: usize },
    ColumnRenamed { col: usize },
    /// A bulk change touched many cells at once.
    Reconfigured,
}

#[derive(Debug, Clone)]
pub struct TableGrid {
    name: String,
    columns: Vec<ColumnDefinition>,
    rows: Vec<Vec<EditableCell>>,
    notifications_muted: bool,
    pending: Vec<GridChange>,
}

impl TableGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_columns(name, default_columns())
    }

    pub fn with_columns(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
            notifications_muted: false,
            pending: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&EditableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).map(EditableCell::value)
    }

    pub fn warning_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.warning().is_some())
            .count()
    }

    pub fn notifications_muted(&self) -> bool {
        self.notifications_muted
    }

    /// Runs `f` with change notifications suppressed, restoring the previous
    /// mute state afterwards so guards can nest.
    pub fn with_notifications_muted<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let was_muted = std::mem::replace(&mut self.notifications_muted, true);
        let result = f(self);
        self.notifications_muted = was_muted;
        result
    }

    /// Takes the changes recorded since the last call.
    pub fn drain_changes(&mut self) -> Vec<GridChange> {
        std::mem::take(&mut self.pending)
    }

    fn notify(&mut self, change: GridChange) {
        if self.notifications_muted {
            trace!("Grid '{}': muted {:?}", self.name, change);
            return;
        }
        self.pending.push(change);
    }

    fn check_row(&self, row: usize) -> TableResult<()> {
        if row < self.rows.len() {
            Ok(())
        } else {
            Err(TableError::RowOutOfBounds {
                row,
                rows: self.rows.len(),
            })
        }
    }

    fn check_col(&self, col: usize) -> TableResult<()> {
        if col < self.columns.len() {
            Ok(())
        } else {
            Err(TableError::ColumnOutOfBounds {
                col,
                cols: self.columns.len(),
            })
        }
    }

    fn check_unique_column_name(&self, name: &str, except: Option<usize>) -> TableResult<()> {
        let clash = self
            .columns
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != except && c.name.eq_ignore_ascii_case(name));
        if clash {
            Err(TableError::DuplicateColumn(name.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn add_row(&mut self) -> usize {
        let row = self.rows.len();
        self.rows
            .push(vec![EditableCell::default(); self.columns.len()]);
        self.notify(GridChange::RowAdded { row });
        row
    }

    pub fn remove_row(&mut self, row: usize) -> TableResult<()> {
        self.check_row(row)?;
        self.rows.remove(row);
        self.notify(GridChange::RowRemoved { row });
        Ok(())
    }

    pub fn add_column(&mut self, column: ColumnDefinition) -> TableResult<usize> {
        let name = validate_identifier(&column.name)
            .map_err(|why| TableError::InvalidName(column.name.clone(), why))?
            .to_string();
        self.check_unique_column_name(&name, None)?;

        let col = self.columns.len();
        self.columns.push(ColumnDefinition { name, ..column });
        for row in &mut self.rows {
            row.push(EditableCell::default());
        }
        self.notify(GridChange::ColumnAdded { col });
        Ok(col)
    }

    pub fn rename_column(&mut self, col: usize, new_name: &str) -> TableResult<()> {
        self.check_col(col)?;
        let name = validate_identifier(new_name)
            .map_err(|why| TableError::InvalidName(new_name.to_string(), why))?;
        self.check_unique_column_name(name, Some(col))?;
        self.columns[col].name = name.to_string();
        self.notify(GridChange::ColumnRenamed { col });
        Ok(())
    }

    pub fn set_column_description(&mut self, col: usize, description: &str) -> TableResult<()> {
        self.check_col(col)?;
        let description = description.trim();
        self.columns[col].description = (!description.is_empty()).then(|| description.to_string());
        Ok(())
    }

    pub fn remove_column(&mut self, col: usize) -> TableResult<()> {
        self.check_col(col)?;
        if self.columns.len() == 1 {
            return Err(TableError::LastColumn);
        }
        self.columns.remove(col);
        for row in &mut self.rows {
            row.remove(col);
        }
        self.notify(GridChange::ColumnRemoved { col });
        Ok(())
    }

    /// Changes a column's type and re-validates every cell in it. Values that
    /// survive are re-formatted; the rest are cleared and flagged.
    pub fn set_column_type(
        &mut self,
        rules: &CellRules,
        col: usize,
        column_type: ColumnType,
    ) -> TableResult<usize> {
        self.check_col(col)?;
        let old_type = self.columns[col].column_type;
        if old_type == column_type {
            return Ok(0);
        }

        let cleared = self.with_notifications_muted(|grid| {
            grid.columns[col].column_type = column_type;
            let mut cleared = 0;
            for row in 0..grid.rows.len() {
                let cell = &mut grid.rows[row][col];
                let raw = rules.raw_value(old_type, cell.value());
                match rules.commit_value(column_type, &raw) {
                    Ok(value) => cell.overwrite(value, None),
                    Err(rejection) => {
                        cell.overwrite(String::new(), Some(CellWarning::from(&rejection)));
                        cleared += 1;
                    }
                }
                let value = cell.value().to_string();
                grid.notify(GridChange::CellCommitted { row, col, value });
            }
            cleared
        });

        debug!(
            "Grid '{}': column {} {} -> {} ({} value(s) cleared)",
            self.name, col, old_type, column_type, cleared
        );
        self.notify(GridChange::Reconfigured);
        Ok(cleared)
    }

    pub fn begin_edit(&mut self, row: usize, col: usize) -> TableResult<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.rows[row][col].begin_edit();
        Ok(())
    }

    /// Commits typed text into a cell following the soft-validation rules.
    pub fn commit_cell(
        &mut self,
        rules: &CellRules,
        row: usize,
        col: usize,
        typed: &str,
    ) -> TableResult<CommitOutcome> {
        self.check_row(row)?;
        self.check_col(col)?;
        let column_type = self.columns[col].column_type;
        let cell = &mut self.rows[row][col];
        let outcome = cell.commit(rules, column_type, typed);
        cell.settle();

        match &outcome {
            CommitOutcome::Unchanged => {}
            CommitOutcome::Committed { value } => self.notify(GridChange::CellCommitted {
                row,
                col,
                value: value.clone(),
            }),
            CommitOutcome::Reverted { warning, .. } => self.notify(GridChange::CellReverted {
                row,
                col,
                warning: warning.clone(),
            }),
        }
        Ok(outcome)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TableGrid {
        let mut grid = TableGrid::with_columns(
            "Pedidos",
            vec![
                ColumnDefinition::new("Cantidad", ColumnType::Integer),
                ColumnDefinition::new("Total", ColumnType::Currency),
                ColumnDefinition::new("Fecha", ColumnType::Date),
            ],
        );
        grid.add_row();
        grid.add_row();
        grid.drain_changes();
        grid
    }

    #[test]
    fn new_table_has_default_field() {
        let grid = TableGrid::new("Clientes");
        assert_eq!(grid.columns().len(), 1);
        assert_eq!(grid.columns()[0].name, "Id");
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn commit_formats_and_notifies() {
        let rules = CellRules::default();
        let mut grid = grid();
        grid.commit_cell(&rules, 0, 1, "1500").unwrap();
        grid.commit_cell(&rules, 0, 2, "15/08/24").unwrap();

        assert_eq!(grid.value(0, 1), Some("Lps 1,500.00"));
        assert_eq!(grid.value(0, 2), Some("15-08-2024"));
        assert_eq!(grid.drain_changes().len(), 2);
        assert!(grid.drain_changes().is_empty());
    }

    #[test]
    fn invalid_commit_reverts_and_flags_cell() {
        let rules = CellRules::default();
        let mut grid = grid();
        grid.commit_cell(&rules, 1, 0, "7").unwrap();
        let outcome = grid.commit_cell(&rules, 1, 0, "siete").unwrap();

        assert!(matches!(outcome, CommitOutcome::Reverted { .. }));
        assert_eq!(grid.value(1, 0), Some("7"));
        assert_eq!(grid.warning_count(), 1);
        let changes = grid.drain_changes();
        assert!(matches!(changes.last(), Some(GridChange::CellReverted { row: 1, col: 0, .. })));

        grid.commit_cell(&rules, 1, 0, "8").unwrap();
        assert_eq!(grid.warning_count(), 0);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let rules = CellRules::default();
        let mut grid = grid();
        assert_eq!(
            grid.commit_cell(&rules, 5, 0, "1"),
            Err(TableError::RowOutOfBounds { row: 5, rows: 2 })
        );
        assert_eq!(
            grid.commit_cell(&rules, 0, 9, "1"),
            Err(TableError::ColumnOutOfBounds { col: 9, cols: 3 })
        );
        assert!(grid.remove_row(2).is_err());
    }

    #[test]
    fn retyping_is_one_muted_bulk_change() {
        let rules = CellRules::default();
        let mut grid = grid();
        grid.commit_cell(&rules, 0, 1, "1500.5").unwrap();
        grid.commit_cell(&rules, 1, 1, "-2").unwrap();
        grid.drain_changes();

        let cleared = grid.set_column_type(&rules, 1, ColumnType::Decimal).unwrap();
        assert_eq!(cleared, 0);
        assert_eq!(grid.value(0, 1), Some("1500.50"));
        assert_eq!(grid.value(1, 1), Some("-2.00"));
        assert_eq!(grid.drain_changes(), vec![GridChange::Reconfigured]);
        assert!(!grid.notifications_muted());
    }

    #[test]
    fn retyping_clears_values_that_no_longer_fit() {
        let rules = CellRules::default();
        let mut grid = grid();
        grid.commit_cell(&rules, 0, 2, "15-08-2024").unwrap();

        let cleared = grid.set_column_type(&rules, 2, ColumnType::Integer).unwrap();
        assert_eq!(cleared, 1);
        assert_eq!(grid.value(0, 2), Some(""));
        let warning = grid.cell(0, 2).unwrap().warning().unwrap();
        assert_eq!(warning.rejected_input, "15-08-2024");
        assert_eq!(grid.set_column_type(&rules, 2, ColumnType::Integer), Ok(0));
    }

    #[test]
    fn mute_guard_nests() {
        let mut grid = grid();
        grid.with_notifications_muted(|g| {
            g.with_notifications_muted(|g| g.add_row());
            assert!(g.notifications_muted());
            g.add_row();
        });
        assert!(!grid.notifications_muted());
        assert!(grid.drain_changes().is_empty());
        grid.add_row();
        assert_eq!(grid.drain_changes(), vec![GridChange::RowAdded { row: 4 }]);
    }

    #[test]
    fn column_management() {
        let mut grid = grid();
        let col = grid
            .add_column(ColumnDefinition::new(" Nota ", ColumnType::Text))
            .unwrap();
        assert_eq!(col, 3);
        assert_eq!(grid.columns()[3].name, "Nota");
        assert_eq!(grid.value(1, 3), Some(""));

        assert_eq!(
            grid.add_column(ColumnDefinition::new("nota", ColumnType::Text)),
            Err(TableError::DuplicateColumn("nota".into()))
        );
        assert!(grid.rename_column(3, "Fecha").is_err());
        grid.rename_column(3, "Comentario").unwrap();
        grid.set_column_description(3, "  libre ").unwrap();
        assert_eq!(grid.columns()[3].description.as_deref(), Some("libre"));

        grid.remove_column(0).unwrap();
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.cell(0, 3), None);
    }

    #[test]
    fn last_column_cannot_be_removed() {
        let mut grid = TableGrid::new("Solo");
        assert_eq!(grid.remove_column(0), Err(TableError::LastColumn));
    }
}
