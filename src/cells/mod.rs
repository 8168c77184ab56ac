// src/cells/mod.rs

// Cell-level rules shared by the data grid, the CLI and the UI.
pub mod column_type;
pub mod edit_state;
pub mod formatter;
pub mod validator;

pub use column_type::ColumnType;
pub use edit_state::{CellEditState, CellWarning, CommitOutcome, EditableCell};
pub use validator::{CellRejection, CellRules};
