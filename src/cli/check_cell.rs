// src/cli/check_cell.rs
use super::CliResult;
use crate::cells::{CellRules, ColumnType};

pub fn run(rules: &CellRules, column_type: ColumnType, value: &str) -> CliResult<()> {
    let display = rules.commit_value(column_type, value)?;
    println!("{}", display);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliError;

    #[test]
    fn rejected_value_is_an_error() {
        let err = run(&CellRules::default(), ColumnType::Integer, "12a").unwrap_err();
        assert!(matches!(err, CliError::Rejected(_)));
        assert!(run(&CellRules::default(), ColumnType::Date, "15/08/24").is_ok());
    }
}
