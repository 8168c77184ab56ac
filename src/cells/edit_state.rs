// src/cells/edit_state.rs
//! Per-cell editing lifecycle: `Clean -> Editing -> {Committed | Reverted}`.
//! A reverted edit restores the last committed value and leaves a warning mark
//! on the cell until the next valid commit.

use super::column_type::ColumnType;
use super::validator::{CellRejection, CellRules};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellEditState {
    #[default]
    Clean,
    Editing {
        previous: String,
    },
    Committed,
    Reverted,
}

/// Soft warning shown as a tint plus tooltip on the offending cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellWarning {
    pub message: String,
    pub rejected_input: String,
}

impl From<&CellRejection> for CellWarning {
    fn from(rejection: &CellRejection) -> Self {
        let rejected_input = match rejection {
            CellRejection::NotAnInteger(v)
            | CellRejection::NotADecimal(v)
            | CellRejection::NotACurrency(v) => v.clone(),
            CellRejection::InvalidDate { value, .. } => value.clone(),
        };
        Self {
            message: rejection.to_string(),
            rejected_input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The formatted value equals what was already committed.
    Unchanged,
    Committed { value: String },
    Reverted { restored: String, warning: CellWarning },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableCell {
    committed: String,
    state: CellEditState,
    warning: Option<CellWarning>,
}

impl EditableCell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            committed: value.into(),
            ..Default::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.committed
    }

    pub fn state(&self) -> &CellEditState {
        &self.state
    }

    pub fn warning(&self) -> Option<&CellWarning> {
        self.warning.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, CellEditState::Editing { .. })
    }

    /// Enters `Editing`, remembering the value to fall back to.
    pub fn begin_edit(&mut self) {
        if !self.is_editing() {
            self.state = CellEditState::Editing {
                previous: self.committed.clone(),
            };
        }
    }

    /// Ends the current edit with `typed`. Valid text is formatted and stored;
    /// invalid text is discarded and the previous value kept.
    pub fn commit(&mut self, rules: &CellRules, column_type: ColumnType, typed: &str) -> CommitOutcome {
        self.begin_edit();
        let previous = match std::mem::take(&mut self.state) {
            CellEditState::Editing { previous } => previous,
            _ => self.committed.clone(),
        };

        match rules.commit_value(column_type, typed) {
            Ok(value) => {
                self.warning = None;
                self.state = CellEditState::Committed;
                if value == previous {
                    self.committed = previous;
                    CommitOutcome::Unchanged
                } else {
                    self.committed = value.clone();
                    CommitOutcome::Committed { value }
                }
            }
            Err(rejection) => {
                let warning = CellWarning::from(&rejection);
                self.committed = previous.clone();
                self.warning = Some(warning.clone());
                self.state = CellEditState::Reverted;
                CommitOutcome::Reverted {
                    restored: previous,
                    warning,
                }
            }
        }
    }

    /// Returns a finished edit to `Clean`. The warning mark, if any, stays.
    pub fn settle(&mut self) {
        if matches!(self.state, CellEditState::Committed | CellEditState::Reverted) {
            self.state = CellEditState::Clean;
        }
    }

    /// Replaces the value without going through the edit lifecycle. Used by bulk
    /// reconfiguration, which decides validity itself.
    pub(crate) fn overwrite(&mut self, value: String, warning: Option<CellWarning>) {
        self.committed = value;
        self.warning = warning;
        self.state = CellEditState::Clean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_commit_formats_and_clears_warning() {
        let rules = CellRules::default();
        let mut cell = EditableCell::new("");
        cell.begin_edit();
        assert_eq!(
            cell.state(),
            &CellEditState::Editing {
                previous: String::new()
            }
        );

        let outcome = cell.commit(&rules, ColumnType::Currency, "1500");
        assert_eq!(
            outcome,
            CommitOutcome::Committed {
                value: "Lps 1,500.00".into()
            }
        );
        assert_eq!(cell.value(), "Lps 1,500.00");
        assert_eq!(cell.state(), &CellEditState::Committed);
        assert!(cell.warning().is_none());
    }

    #[test]
    fn invalid_commit_reverts_and_marks() {
        let rules = CellRules::default();
        let mut cell = EditableCell::new("12");
        cell.begin_edit();
        let outcome = cell.commit(&rules, ColumnType::Integer, "doce");

        match outcome {
            CommitOutcome::Reverted { restored, warning } => {
                assert_eq!(restored, "12");
                assert_eq!(warning.rejected_input, "doce");
            }
            other => panic!("expected revert, got {other:?}"),
        }
        assert_eq!(cell.value(), "12");
        assert_eq!(cell.state(), &CellEditState::Reverted);
        assert!(cell.warning().is_some());

        cell.settle();
        assert_eq!(cell.state(), &CellEditState::Clean);
        assert!(cell.warning().is_some(), "warning survives until the next valid commit");

        cell.commit(&rules, ColumnType::Integer, "13");
        assert!(cell.warning().is_none());
        assert_eq!(cell.value(), "13");
    }

    #[test]
    fn committing_same_value_is_unchanged() {
        let rules = CellRules::default();
        let mut cell = EditableCell::new("15-08-2024");
        assert_eq!(
            cell.commit(&rules, ColumnType::Date, "15/08/24"),
            CommitOutcome::Unchanged
        );
    }

    #[test]
    fn commit_without_begin_uses_current_value_as_fallback() {
        let rules = CellRules::default();
        let mut cell = EditableCell::new("3.5");
        let outcome = cell.commit(&rules, ColumnType::Decimal, "x");
        assert!(matches!(outcome, CommitOutcome::Reverted { ref restored, .. } if restored == "3.5"));
    }
}
